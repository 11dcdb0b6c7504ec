//! Mod settings. Every section falls back to the stock game's prices and the stock form layout,
//! so a config file only needs the values it changes.

use {
	crate::{
		dialogue::DEFAULT_MOVIE_THEATER_COST, io_readToString, AnchorTable, AtlasLayout, FieldAnchor, Locale,
		NumericField, Result,
	},
	glam::IVec2,
	indexmap::IndexMap,
	serde::{Deserialize, Serialize},
	std::{fs::File, path::Path},
};

pub const FALLBACK_BUTTON_PRICE: i32 = 10_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModConfig {
	pub joja: JojaConfig,
	pub vault: VaultConfig,
	pub layout: LayoutConfig,
}

/// Community development form prices, in form button order, plus the movie theater.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JojaConfig {
	pub busCost: i32,
	pub minecartsCost: i32,
	pub bridgeCost: i32,
	pub greenhouseCost: i32,
	pub panningCost: i32,
	pub movieTheaterCost: i32,
}

impl Default for JojaConfig {
	fn default() -> Self {
		Self {
			busCost: 40_000,
			minecartsCost: 15_000,
			bridgeCost: 25_000,
			greenhouseCost: 35_000,
			panningCost: 20_000,
			movieTheaterCost: DEFAULT_MOVIE_THEATER_COST,
		}
	}
}

impl JojaConfig {
	pub const FIELD_NAMES: [&'static str; 5] = ["bus", "minecarts", "bridge", "greenhouse", "panning"];

	/// Price of form button `button`, `None` past the last one.
	pub fn buttonPrice(&self, button: i32) -> Option<i32> {
		Some(match button {
			0 => self.busCost,
			1 => self.minecartsCost,
			2 => self.bridgeCost,
			3 => self.greenhouseCost,
			4 => self.panningCost,
			_ => return None,
		})
	}

	/// The numbers printed on the form, in button order.
	pub fn fields(&self) -> Vec<NumericField> {
		Self::FIELD_NAMES
			.iter()
			.zip(0..)
			.filter_map(|(&name, button)| self.buttonPrice(button).map(|value| NumericField::new(name, value)))
			.collect()
	}
}

/// Gold cost of the four vault bundles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
	pub bundle1: i32,
	pub bundle2: i32,
	pub bundle3: i32,
	pub bundle4: i32,
}

impl Default for VaultConfig {
	fn default() -> Self {
		Self { bundle1: 2_500, bundle2: 5_000, bundle3: 10_000, bundle4: 25_000 }
	}
}

impl VaultConfig {
	pub fn bundles(&self) -> [i32; 4] {
		[self.bundle1, self.bundle2, self.bundle3, self.bundle4]
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
	pub at: [i32; 2],
	pub eraseOffset: i32,
	pub locales: IndexMap<String, [i32; 2]>,
}

impl Default for AnchorConfig {
	fn default() -> Self {
		Self { at: [0, 0], eraseOffset: 33, locales: IndexMap::new() }
	}
}

impl AnchorConfig {
	fn at(at: [i32; 2], eraseOffset: i32) -> Self {
		Self { at, eraseOffset, ..Default::default() }
	}

	pub fn toFieldAnchor(&self) -> FieldAnchor {
		self.locales.iter().fold(FieldAnchor::new(IVec2::from(self.at), self.eraseOffset), |anchor, (tag, &at)| {
			anchor.withLocale(&Locale::parse(tag), IVec2::from(at))
		})
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
	pub atlas: AtlasLayout,
	pub anchors: IndexMap<String, AnchorConfig>,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		let mut panning = AnchorConfig::at([129, 119], 33);
		panning.locales.insert("de-DE".into(), [130, 127]);
		Self {
			atlas: AtlasLayout::default(),
			anchors: [
				("bus", AnchorConfig::at([130, 59], 33)),
				("minecarts", AnchorConfig::at([301, 59], 34)),
				("bridge", AnchorConfig::at([131, 89], 33)),
				("greenhouse", AnchorConfig::at([300, 89], 34)),
				("panning", panning),
			]
			.into_iter()
			.map(|(field, anchor)| (field.to_owned(), anchor))
			.collect(),
		}
	}
}

impl LayoutConfig {
	pub fn anchorTable(&self) -> AnchorTable {
		self.anchors.iter().map(|(field, anchor)| (field.as_str(), anchor.toFieldAnchor())).collect()
	}
}

impl ModConfig {
	pub fn fromToml(toml: &str) -> Result<Self> {
		Ok(toml::from_str(toml)?)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let config = Self::fromToml(&io_readToString(File::open(path.as_ref())?)?)?;
		log::info!("loaded config from {:?}", path.as_ref());
		Ok(config)
	}
}
