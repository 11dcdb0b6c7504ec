#![allow(dead_code, non_snake_case)]

use {
	bundle_costs::{AtlasLayout, GlyphAtlas, Image, RecordTable},
	png::ColorType,
};

pub const FORM_DIMENSIONS: [usize; 2] = [400, 200];

/// Grayscale atlas in the stock layout where every cell is filled with its index plus one, so a
/// pixel on the target tells which cell was copied there.
pub fn numberedAtlas() -> GlyphAtlas {
	let layout = AtlasLayout::default();
	let (cellWidth, cellHeight) = (layout.cellWidth as usize, layout.cellHeight as usize);
	let mut image = Image::fromWidthHeight(cellWidth * 16, cellHeight, ColorType::Grayscale);
	for cell in 0..16 {
		image.fillRectangle([cell * cellWidth, 0], [cellWidth, cellHeight], &[cell as u8 + 1]).unwrap();
	}
	GlyphAtlas::new(image, layout).unwrap()
}

/// A form painted in one color the atlas never uses.
pub fn blankForm() -> Image {
	let mut form = Image::fromWidthHeight(FORM_DIMENSIONS[0], FORM_DIMENSIONS[1], ColorType::Grayscale);
	form.fillRectangle([0, 0], FORM_DIMENSIONS, &[200]).unwrap();
	form
}

/// Atlas cell index drawn at `(x, y)`, `None` where the form is untouched.
pub fn cellAt(form: &Image, x: i32, y: i32) -> Option<u8> {
	match form.pixel([x as usize, y as usize])?[0] {
		200 => None,
		value => Some(value - 1),
	}
}

pub fn table(entries: &[(&str, &str)]) -> RecordTable {
	entries.iter().map(|&(key, raw)| (key.to_owned(), raw.to_owned())).collect()
}
