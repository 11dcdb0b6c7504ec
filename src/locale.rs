use {
	core::{fmt, str::FromStr},
	unic_langid::LanguageIdentifier,
};

/// A parsed locale tag. Parsing canonicalises case, so `"DE-de"` and `"de-DE"` compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Locale(LanguageIdentifier);

impl Locale {
	/// Never fails: empty or unparseable tags become the invariant locale.
	pub fn parse(tag: &str) -> Self {
		let tag = tag.trim().replace('_', "-");
		if tag.is_empty() {
			return Self::invariant();
		}
		LanguageIdentifier::from_str(&tag).map(Self).unwrap_or_else(|err| {
			log::warn!("unrecognised locale {tag:?} ({err}), using the invariant locale");
			Self::invariant()
		})
	}

	pub fn invariant() -> Self {
		Self(LanguageIdentifier::default())
	}

	#[inline(always)]
	pub fn id(&self) -> &LanguageIdentifier {
		&self.0
	}

	/// Thousands separator the host's number formatting uses for this language.
	pub fn groupSeparator(&self) -> &'static str {
		match self.0.language.as_str() {
			"de" | "es" | "it" | "pt" | "tr" => ".",
			"fr" | "hu" | "ru" => "\u{A0}",
			_ => ",",
		}
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.0, f)
	}
}

/// Formats like the `#,###` custom pattern: digits grouped by three, a leading `-` when
/// negative, and nothing at all for zero.
pub fn formatGrouped(value: i32, locale: &Locale) -> String {
	if value == 0 {
		return String::new();
	}
	let (digits, separator) = (value.unsigned_abs().to_string(), locale.groupSeparator());
	let mut grouped = String::with_capacity(1 + digits.len() + digits.len() / 3 * separator.len());
	if value < 0 {
		grouped.push('-');
	}
	for (i, digit) in digits.chars().enumerate() {
		if i != 0 && (digits.len() - i) % 3 == 0 {
			grouped.push_str(separator);
		}
		grouped.push(digit);
	}
	grouped
}
