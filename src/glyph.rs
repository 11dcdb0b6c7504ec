//! Numeric glyph atlas: one fixed-size cell per symbol, laid out left to right on a single row.

use {
	crate::{Blit, Error, Image, Result},
	glam::IVec2,
	serde::{Deserialize, Serialize},
};

/// The ordered symbol set the atlas can draw.
pub const SYMBOLS: &str = "0123456789-.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
	Digit(u8),
	Minus,
	/// The "dots" a blank form slot is printed with.
	Blank,
}

impl Symbol {
	pub fn fromChar(char: char) -> Option<Self> {
		match char {
			'0'..='9' => Some(Self::Digit(char as u8 - b'0')),
			'-' => Some(Self::Minus),
			'.' => Some(Self::Blank),
			_ => None,
		}
	}

	pub fn toChar(self) -> char {
		match self {
			Self::Digit(digit) => char::from(b'0' + digit),
			Self::Minus => '-',
			Self::Blank => '.',
		}
	}
}

/// Where each symbol sits in the atlas. The defaults describe the stock `cdFont.png`:
/// 7x11 cells, digits in cells 0-9, a five-cell run of dots from cell 10, minus in cell 15.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasLayout {
	pub cellWidth: i32,
	pub cellHeight: i32,
	pub minusCell: i32,
	pub blankCell: i32,
	pub blankCells: i32,
}

impl Default for AtlasLayout {
	fn default() -> Self {
		Self { cellWidth: 7, cellHeight: 11, minusCell: 15, blankCell: 10, blankCells: 5 }
	}
}

impl AtlasLayout {
	pub fn cell(&self, symbol: Symbol) -> i32 {
		match symbol {
			Symbol::Digit(digit) => digit as _,
			Symbol::Minus => self.minusCell,
			Symbol::Blank => self.blankCell,
		}
	}

	/// Inverse of [`AtlasLayout::cell`]. Cells inside the blank run other than its first map to nothing.
	pub fn symbolAt(&self, cell: i32) -> Option<Symbol> {
		match cell {
			0..=9 => Some(Symbol::Digit(cell as _)),
			_ if cell == self.minusCell => Some(Symbol::Minus),
			_ if cell == self.blankCell => Some(Symbol::Blank),
			_ => None,
		}
	}

	#[inline(always)]
	pub fn cellDimensions(&self) -> IVec2 {
		IVec2::new(self.cellWidth, self.cellHeight)
	}

	pub fn cellOrigin(&self, cell: i32) -> IVec2 {
		IVec2::new(self.cellWidth * cell, 0)
	}

	/// Smallest atlas, in pixels, that holds every cell this layout refers to.
	pub fn requiredDimensions(&self) -> IVec2 {
		let lastCell = 9.max(self.minusCell).max(self.blankCell + self.blankCells - 1);
		IVec2::new(self.cellWidth * (lastCell + 1), self.cellHeight)
	}
}

/// Maps a formatted number onto atlas cell indices, `None` if it holds anything undrawable.
pub fn glyphCells(layout: &AtlasLayout, text: &str) -> Option<Vec<i32>> {
	text.chars().map(|char| Symbol::fromChar(char).map(|symbol| layout.cell(symbol))).collect()
}

/// Maps cell indices back onto the text they draw.
pub fn textFromCells(layout: &AtlasLayout, cells: &[i32]) -> Option<String> {
	cells.iter().map(|&cell| layout.symbolAt(cell).map(Symbol::toChar)).collect()
}

#[derive(Debug, Clone)]
pub struct GlyphAtlas {
	image: Image,
	layout: AtlasLayout,
}

impl GlyphAtlas {
	pub fn new(image: Image, layout: AtlasLayout) -> Result<Self> {
		let required = layout.requiredDimensions();
		if image.dimensions().cmplt(required).any() {
			return Err(Error::AtlasTooSmall {
				width: image.width(),
				height: image.height(),
				neededWidth: required.x as _,
				neededHeight: required.y as _,
			});
		}
		Ok(Self { image, layout })
	}

	#[inline(always)]
	pub fn image(&self) -> &Image {
		&self.image
	}

	#[inline(always)]
	pub fn layout(&self) -> &AtlasLayout {
		&self.layout
	}

	/// Overwrites one cell-sized rectangle of `target` at `at` with `symbol`'s cell.
	pub fn stamp(&self, target: &mut Image, symbol: Symbol, at: IVec2) -> Result<Blit> {
		let layout = &self.layout;
		target.blitPixelsRectangle(at, layout.cellDimensions(), &self.image, layout.cellOrigin(layout.cell(symbol)))
	}

	/// Overwrites a whole display slot of `target` with the blank run.
	pub fn stampBlank(&self, target: &mut Image, at: IVec2) -> Result<Blit> {
		let layout = &self.layout;
		target.blitPixelsRectangle(
			at,
			IVec2::new(layout.cellWidth * layout.blankCells, layout.cellHeight),
			&self.image,
			layout.cellOrigin(layout.blankCell),
		)
	}
}
