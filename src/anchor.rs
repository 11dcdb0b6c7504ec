//! Right-aligned baselines for the numbers printed on a form.

use {
	crate::{Error, Locale, Result},
	glam::IVec2,
	indexmap::IndexMap,
	std::collections::HashMap,
	unic_langid::LanguageIdentifier,
};

/// Where a field's ones digit is drawn, per locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAnchor {
	pub default: IVec2,
	pub locales: HashMap<LanguageIdentifier, IVec2>,
	/// Distance from the anchor back to the left edge of the field's blank run. The form's
	/// left and right columns are not laid out symmetrically, so this differs per field.
	pub eraseOffset: i32,
}

/// An anchor with its locale already chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedAnchor {
	pub position: IVec2,
	pub eraseOffset: i32,
}

impl FieldAnchor {
	pub fn new(default: IVec2, eraseOffset: i32) -> Self {
		Self { default, locales: HashMap::new(), eraseOffset }
	}

	pub fn withLocale(mut self, locale: &Locale, position: IVec2) -> Self {
		self.locales.insert(locale.id().clone(), position);
		self
	}

	pub fn resolve(&self, locale: &Locale) -> ResolvedAnchor {
		ResolvedAnchor {
			position: self.locales.get(locale.id()).copied().unwrap_or(self.default),
			eraseOffset: self.eraseOffset,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorTable {
	fields: IndexMap<String, FieldAnchor>,
}

impl AnchorTable {
	pub fn fieldNames(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	pub fn resolve(&self, field: &str, locale: &Locale) -> Result<ResolvedAnchor> {
		self.fields
			.get(field)
			.map(|anchor| anchor.resolve(locale))
			.ok_or_else(|| Error::UnknownField(field.to_owned()))
	}
}

impl<S: Into<String>> FromIterator<(S, FieldAnchor)> for AnchorTable {
	fn from_iter<I: IntoIterator<Item = (S, FieldAnchor)>>(iter: I) -> Self {
		Self { fields: iter.into_iter().map(|(field, anchor)| (field.into(), anchor)).collect() }
	}
}
