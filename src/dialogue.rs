//! Plain-text price substitution in dialogue lines.

use {
	crate::{formatGrouped, Locale, RecordTable},
	memchr::memmem,
	std::borrow::Cow,
};

pub const MOVIE_THEATER_KEY: &str = "Morris_BuyMovieTheater";
pub const DEFAULT_MOVIE_THEATER_COST: i32 = 500_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountRewrite<'a> {
	pub text: Cow<'a, str>,
	pub substitutions: usize,
}

/// Replaces every grouped rendering of `default` in `text` with the grouped rendering of
/// `current`. Borrows `text` untouched when the amounts are equal or nothing matches.
pub fn rewriteAmount<'a>(text: &'a str, default: i32, current: i32, locale: &Locale) -> AmountRewrite<'a> {
	let unchanged = AmountRewrite { text: Cow::Borrowed(text), substitutions: 0 };
	if current == default {
		return unchanged;
	}
	let (original, replacement) = (formatGrouped(default, locale), formatGrouped(current, locale));
	if original.is_empty() {
		return unchanged;
	}
	let (mut rewritten, mut substitutions, mut copiedUpTo) = (String::new(), 0, 0);
	for start in memmem::find_iter(text.as_bytes(), original.as_bytes()) {
		rewritten.push_str(&text[copiedUpTo..start]);
		rewritten.push_str(&replacement);
		copiedUpTo = start + original.len();
		substitutions += 1;
	}
	if substitutions == 0 {
		return unchanged;
	}
	rewritten.push_str(&text[copiedUpTo..]);
	AmountRewrite { text: Cow::Owned(rewritten), substitutions }
}

/// Applies [`rewriteAmount`] to the line stored under `key`. Returns how many prices were replaced.
pub fn rewriteTable(table: &mut RecordTable, key: &str, default: i32, current: i32, locale: &Locale) -> usize {
	let line = match table.get_mut(key) {
		Some(line) => line,
		None => {
			log::warn!("dialogue {key:?} not found, nothing to rewrite");
			return 0;
		}
	};
	let (text, substitutions) = match rewriteAmount(line.as_str(), default, current, locale) {
		AmountRewrite { text: Cow::Owned(text), substitutions } => (Some(text), substitutions),
		AmountRewrite { text: Cow::Borrowed(_), substitutions } => (None, substitutions),
	};
	if let Some(text) = text {
		log::info!(
			"{key}: {:?} -> {:?} ({substitutions}x)",
			formatGrouped(default, locale),
			formatGrouped(current, locale)
		);
		*line = text;
	}
	substitutions
}
