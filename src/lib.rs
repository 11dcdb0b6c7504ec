#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

pub mod anchor;
pub mod assets;
pub mod config;
pub mod dialogue;
pub mod error;
pub mod glyph;
pub mod locale;
pub mod logger;
pub mod overrides;
pub mod patcher;
pub mod record;

pub use {
	anchor::{AnchorTable, FieldAnchor, ResolvedAnchor},
	assets::{AssetData, AssetEditor, EditReport},
	config::ModConfig,
	error::{Error, Result},
	glyph::{AtlasLayout, GlyphAtlas, Symbol},
	locale::{formatGrouped, Locale},
	patcher::{patch, NumericField, PatchReport, DISPLAY_WIDTH},
	record::{BundleData, Record, RecordTable},
};

use {
	glam::IVec2,
	png::{BitDepth, ColorType, Transformations},
	std::{
		fs::File,
		io::{self, Read, Write},
		os,
	},
};

pub const X: usize = 0;
pub const Y: usize = 1;

/// 8-bit raster surface. Pixels are stored row-major, `colorType.samples()` bytes each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
	width: usize,
	height: usize,
	colorType: ColorType,
	data: Vec<u8>,
}

/// What a rectangle copy actually touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blit {
	Whole,
	Clipped,
}

impl Image {
	pub fn fromWidthHeight(width: usize, height: usize, colorType: ColorType) -> Self {
		Self { width, height, colorType, data: vec![0; width * height * colorType.samples()] }
	}

	/// Wraps an already decoded buffer, which must hold exactly `width * height` pixels.
	pub fn fromRaw(width: usize, height: usize, colorType: ColorType, data: Vec<u8>) -> Result<Self> {
		let expected = width * height * colorType.samples();
		if data.len() != expected {
			return Err(Error::BufferSize { expected, found: data.len() });
		}
		Ok(Self { width, height, colorType, data })
	}

	/// Decodes a PNG, expanding palettes and low bit depths so every pixel is 8 bits per sample.
	pub fn fromPNG(reader: impl Read) -> Result<Self> {
		let mut decoder = png::Decoder::new(reader);
		decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
		let png = &mut decoder.read_info()?;
		let mut data = vec![0; png.output_buffer_size()];
		let frame = png.next_frame(&mut data)?;
		data.truncate(frame.buffer_size());
		Ok(Self { width: frame.width as _, height: frame.height as _, colorType: frame.color_type, data })
	}

	pub fn writePNG(&self, writer: impl Write) -> Result<()> {
		let mut png = png::Encoder::new(writer, self.width as _, self.height as _);
		png.set_color(self.colorType);
		png.set_depth(BitDepth::Eight);
		png.write_header()?.write_image_data(&self.data)?;
		Ok(())
	}

	#[inline(always)]
	pub fn width(&self) -> usize {
		self.width
	}

	#[inline(always)]
	pub fn height(&self) -> usize {
		self.height
	}

	#[inline(always)]
	pub fn colorType(&self) -> ColorType {
		self.colorType
	}

	#[inline(always)]
	pub fn data(&self) -> &[u8] {
		&self.data
	}

	#[inline(always)]
	pub fn bytesPerPixel(&self) -> usize {
		self.colorType.samples()
	}

	#[inline(always)]
	pub fn dimensions(&self) -> IVec2 {
		IVec2::new(self.width as _, self.height as _)
	}

	pub fn pixel(&self, point: [usize; 2]) -> Option<&[u8]> {
		if point[X] >= self.width || point[Y] >= self.height {
			return None;
		}
		let bytesPerPixel = self.bytesPerPixel();
		Some(&self.data[(point[Y] * self.width + point[X]) * bytesPerPixel..][..bytesPerPixel])
	}

	pub fn fillRectangle(&mut self, point: [usize; 2], dimensions: [usize; 2], color: &[u8]) -> Result<()> {
		let bytesPerPixel = self.bytesPerPixel();
		if color.len() != bytesPerPixel {
			return Err(Error::BufferSize { expected: bytesPerPixel, found: color.len() });
		}
		for y in point[Y]..(point[Y] + dimensions[Y]).min(self.height) {
			for x in point[X]..(point[X] + dimensions[X]).min(self.width) {
				self.data[(y * self.width + x) * bytesPerPixel..][..bytesPerPixel].copy_from_slice(color);
			}
		}
		Ok(())
	}

	/// Copies `dimensions` pixels from `src` at `srcPoint` onto `self` at `destPoint`, replacing
	/// whatever was there. Both rectangles are clipped to their images; nothing outside either is read or written.
	pub fn blitPixelsRectangle(
		&mut self,
		destPoint: IVec2,
		dimensions: IVec2,
		src: &Image,
		srcPoint: IVec2,
	) -> Result<Blit> {
		if src.colorType != self.colorType {
			return Err(Error::PixelFormat { expected: self.colorType, found: src.colorType });
		}
		let underflow = (-destPoint).max(-srcPoint).max(IVec2::ZERO);
		let (destPoint, srcPoint) = (destPoint + underflow, srcPoint + underflow);
		let clippedDimensions =
			(dimensions - underflow).min(self.dimensions() - destPoint).min(src.dimensions() - srcPoint);
		let blit = if clippedDimensions == dimensions { Blit::Whole } else { Blit::Clipped };
		if clippedDimensions.x <= 0 || clippedDimensions.y <= 0 {
			return Ok(blit);
		}
		let (bytesPerPixel, [srcX, srcY, destX, destY]) =
			(self.bytesPerPixel(), [srcPoint.x, srcPoint.y, destPoint.x, destPoint.y].map(|coord| coord as usize));
		let rowLen = clippedDimensions.x as usize * bytesPerPixel;
		for row in 0..clippedDimensions.y as usize {
			let i = ((srcY + row) * src.width + srcX) * bytesPerPixel;
			let j = ((destY + row) * self.width + destX) * bytesPerPixel;
			self.data[j..][..rowLen].copy_from_slice(&src.data[i..][..rowLen]);
		}
		Ok(blit)
	}
}

pub fn io_readToString(mut reader: impl Read) -> io::Result<String> {
	let mut string = String::new();
	reader.read_to_string(&mut string)?;
	Ok(string)
}

#[cfg(unix)]
pub fn stdoutRaw() -> File {
	use os::unix::io::FromRawFd;
	unsafe { File::from_raw_fd(1) }
}

#[cfg(windows)]
pub fn stdoutRaw() -> File {
	use os::windows::io::{AsRawHandle, FromRawHandle};
	unsafe { File::from_raw_handle(io::stdout().as_raw_handle()) }
}
