use {png::ColorType, std::io, thiserror::Error};

#[derive(Debug, Error)]
pub enum Error {
	#[error("no anchor configured for field {0:?}")]
	UnknownField(String),

	#[error("record {key:?} has {found} fields, expected at least {expected}")]
	MalformedRecord { key: String, found: usize, expected: usize },

	#[error("atlas is {width}x{height}, its layout needs at least {neededWidth}x{neededHeight}")]
	AtlasTooSmall { width: usize, height: usize, neededWidth: usize, neededHeight: usize },

	#[error("pixel buffer holds {found} bytes, expected {expected}")]
	BufferSize { expected: usize, found: usize },

	#[error("pixel format mismatch: target is {expected:?}, source is {found:?}")]
	PixelFormat { expected: ColorType, found: ColorType },

	#[error("asset {0:?} was handed over with the wrong kind of data")]
	AssetKind(String),

	#[error(transparent)]
	PngDecoding(#[from] png::DecodingError),

	#[error(transparent)]
	PngEncoding(#[from] png::EncodingError),

	#[error(transparent)]
	Io(#[from] io::Error),

	#[error(transparent)]
	Config(#[from] toml::de::Error),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
