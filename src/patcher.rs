//! Redraws the numbers printed on a form image, one atlas glyph per character.

use {
	crate::{AnchorTable, Blit, Error, GlyphAtlas, Image, Locale, Result, Symbol},
	glam::IVec2,
};

/// Digit slots each printed number was laid out for. Shorter numbers get the slot blanked
/// first; longer ones keep growing to the left.
pub const DISPLAY_WIDTH: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericField {
	pub name: String,
	pub value: i32,
}

impl NumericField {
	pub fn new(name: impl Into<String>, value: i32) -> Self {
		Self { name: name.into(), value }
	}
}

/// A field drawn past its nominal slot or partly outside the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundsWarning {
	pub field: String,
	pub numDigits: usize,
	pub clipped: bool,
}

#[derive(Debug, Default)]
pub struct PatchReport {
	pub patched: Vec<String>,
	pub unknownFields: Vec<Error>,
	pub boundsWarnings: Vec<BoundsWarning>,
}

/// Overwrites each field's previously printed number on `image` with its current value,
/// right-aligned on the field's anchor for `locale`.
///
/// Fields without an anchor are logged, reported and skipped. Only a pixel format mismatch
/// between atlas and image aborts the whole patch, before anything is drawn.
pub fn patch(
	image: &mut Image,
	atlas: &GlyphAtlas,
	anchors: &AnchorTable,
	fields: &[NumericField],
	locale: &Locale,
) -> Result<PatchReport> {
	if atlas.image().colorType() != image.colorType() {
		return Err(Error::PixelFormat { expected: image.colorType(), found: atlas.image().colorType() });
	}
	let (mut report, cellWidth) = (PatchReport::default(), atlas.layout().cellWidth);
	for field in fields {
		let anchor = match anchors.resolve(&field.name, locale) {
			Ok(anchor) => anchor,
			Err(err) => {
				log::warn!("{err}, leaving it as printed");
				report.unknownFields.push(err);
				continue;
			}
		};
		let (text, mut clipped) = (field.value.to_string(), false);
		let numDigits = text.len();
		if numDigits < DISPLAY_WIDTH {
			let at = IVec2::new(anchor.position.x - anchor.eraseOffset, anchor.position.y);
			clipped |= atlas.stampBlank(image, at)? == Blit::Clipped;
		}
		for (k, char) in text.char_indices().rev() {
			let symbol = match Symbol::fromChar(char) {
				Some(symbol) => symbol,
				None => continue,
			};
			let currentPos = (numDigits - (k + 1)) as i32;
			let at = IVec2::new(anchor.position.x - cellWidth * currentPos, anchor.position.y);
			clipped |= atlas.stamp(image, symbol, at)? == Blit::Clipped;
		}
		if clipped || numDigits > DISPLAY_WIDTH {
			log::debug!(
				"{} = {} takes {numDigits} slots (budget {DISPLAY_WIDTH}){}",
				field.name,
				field.value,
				if clipped { ", clipped at the image edge" } else { "" },
			);
			report.boundsWarnings.push(BoundsWarning { field: field.name.clone(), numDigits, clipped });
		}
		report.patched.push(field.name.clone());
	}
	Ok(report)
}
