//! `/`-delimited key/value records and the published snapshot of the bundle table.

use {
	crate::Error,
	arc_swap::ArcSwap,
	core::fmt,
	indexmap::IndexMap,
	std::sync::Arc,
};

/// Raw string table as the host hands it over, in the host's key order.
pub type RecordTable = IndexMap<String, String>;

pub const FIELD_SEPARATOR: &str = "/";
pub const NAME_FIELD: usize = 0;
pub const VALUE_FIELD: usize = 2;
pub const MIN_FIELDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
	pub fields: Vec<String>,
}

impl Record {
	pub fn parse(raw: &str) -> Self {
		Self { fields: raw.split(FIELD_SEPARATOR).map(str::to_owned).collect() }
	}

	pub fn join(&self) -> String {
		self.fields.join(FIELD_SEPARATOR)
	}
}

impl fmt::Display for Record {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.join())
	}
}

/// Replacement name and value fields for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
	pub name: String,
	pub value: String,
}

#[derive(Debug, Default)]
pub struct RewriteOutcome {
	pub table: RecordTable,
	pub rewritten: Vec<String>,
	pub malformed: Vec<Error>,
}

/// Builds a new table in which every record whose key passes `keySelector` has its name and
/// value fields replaced by `fieldUpdate(key)`, or cleared when that yields `None`.
///
/// Records too short to hold a value field are copied unchanged and reported. `table` itself
/// is never touched, so readers of it never observe a half-rewritten state.
pub fn rewrite(
	table: &RecordTable,
	keySelector: impl Fn(&str) -> bool,
	mut fieldUpdate: impl FnMut(&str) -> Option<FieldUpdate>,
) -> RewriteOutcome {
	let mut outcome = RewriteOutcome { table: RecordTable::with_capacity(table.len()), ..Default::default() };
	for (key, raw) in table {
		if !keySelector(key) {
			outcome.table.insert(key.clone(), raw.clone());
			continue;
		}
		let mut record = Record::parse(raw);
		if record.fields.len() < MIN_FIELDS {
			let err = Error::MalformedRecord { key: key.clone(), found: record.fields.len(), expected: MIN_FIELDS };
			log::warn!("{err}, leaving it unchanged");
			outcome.malformed.push(err);
			outcome.table.insert(key.clone(), raw.clone());
			continue;
		}
		let FieldUpdate { name, value } =
			fieldUpdate(key).unwrap_or(FieldUpdate { name: String::new(), value: String::new() });
		record.fields[NAME_FIELD] = name;
		record.fields[VALUE_FIELD] = value;
		outcome.table.insert(key.clone(), record.join());
		outcome.rewritten.push(key.clone());
	}
	outcome
}

/// The bundle table other parts of the host read, replaced whole on every publish.
#[derive(Debug)]
pub struct BundleData {
	snapshot: ArcSwap<RecordTable>,
}

impl BundleData {
	pub fn new(table: RecordTable) -> Self {
		Self { snapshot: ArcSwap::from_pointee(table) }
	}

	/// The current table. It stays valid and unchanged however often a new one is published.
	pub fn snapshot(&self) -> Arc<RecordTable> {
		self.snapshot.load_full()
	}

	pub fn publish(&self, table: RecordTable) -> Arc<RecordTable> {
		let table = Arc::new(table);
		self.snapshot.store(Arc::clone(&table));
		table
	}

	/// [`rewrite`] followed by a publish of the rewritten table. Readers see either the old
	/// snapshot or the complete new one.
	pub fn rewriteAndPublish(
		&self,
		table: &RecordTable,
		keySelector: impl Fn(&str) -> bool,
		fieldUpdate: impl FnMut(&str) -> Option<FieldUpdate>,
	) -> RewriteOutcome {
		let outcome = rewrite(table, keySelector, fieldUpdate);
		self.publish(outcome.table.clone());
		outcome
	}
}

impl Default for BundleData {
	fn default() -> Self {
		Self::new(RecordTable::new())
	}
}
