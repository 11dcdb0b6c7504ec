//! The three game assets the mod edits, and the editor a host drives them through.

use {
	crate::{
		config::{ModConfig, VaultConfig},
		dialogue::{self, DEFAULT_MOVIE_THEATER_COST, MOVIE_THEATER_KEY},
		formatGrouped, patch,
		record::{self, FieldUpdate},
		BundleData, Error, GlyphAtlas, Image, Locale, NumericField, PatchReport, RecordTable, Result,
	},
	const_format::concatcp,
	std::sync::Arc,
};

const LOOSE_SPRITES: &str = "LooseSprites";
const DATA: &str = "Data";

pub const JOJA_CD_FORM: &str = concatcp!(LOOSE_SPRITES, "/JojaCDForm");
pub const BUNDLES: &str = concatcp!(DATA, "/Bundles");
pub const EXTRA_DIALOGUE: &str = concatcp!(DATA, "/ExtraDialogue");
pub const EDITED_ASSETS: [&str; 3] = [JOJA_CD_FORM, BUNDLES, EXTRA_DIALOGUE];

pub const VAULT_PREFIX: &str = "Vault";
/// Vault bundle keys, in config order.
pub const VAULT_KEYS: [&str; 4] = ["Vault/23", "Vault/24", "Vault/25", "Vault/26"];

/// Asset names compare case-insensitively, with either path separator.
pub fn assetNameEquals(name: &str, expected: &str) -> bool {
	name.len() == expected.len()
		&& name.chars().zip(expected.chars()).all(|(a, b)| {
			let normalise = |char: char| if char == '\\' { '/' } else { char.to_ascii_lowercase() };
			normalise(a) == normalise(b)
		})
}

/// Replacement name and value fields for the vault bundle records. Other `Vault` keys get `None`,
/// which clears them.
pub fn vaultUpdates<'a>(vault: &VaultConfig, locale: &'a Locale) -> impl Fn(&str) -> Option<FieldUpdate> + 'a {
	let bundles = vault.bundles();
	move |key| {
		let amount = bundles[VAULT_KEYS.iter().position(|&vaultKey| vaultKey == key)?];
		Some(FieldUpdate { name: formatGrouped(amount, locale), value: format!("-1 {amount} {amount}") })
	}
}

/// An asset's data as the host hands it over for editing.
pub enum AssetData<'a> {
	Image(&'a mut Image),
	Table(&'a mut RecordTable),
}

#[derive(Debug)]
pub enum EditReport {
	Form(PatchReport),
	Bundles(record::RewriteOutcome),
	Dialogue { substitutions: usize },
	/// Not an asset this editor handles, or its inputs are not loaded yet.
	Skipped,
}

pub struct AssetEditor {
	config: ModConfig,
	locale: Locale,
	atlas: Option<GlyphAtlas>,
	bundleData: BundleData,
}

impl AssetEditor {
	pub fn new(config: ModConfig, locale: Locale) -> Self {
		Self { config, locale, atlas: None, bundleData: BundleData::default() }
	}

	/// Supplies the glyph atlas and the stock bundle table. The table is published right away so
	/// readers have bundle data before the first edit.
	pub fn loadAssets(&mut self, atlas: GlyphAtlas, bundles: RecordTable) {
		self.atlas = Some(atlas);
		self.bundleData.publish(bundles);
		log::info!("loaded assets");
	}

	pub fn config(&self) -> &ModConfig {
		&self.config
	}

	/// The form fields drawn with the current config, in form order.
	pub fn jojaFields(&self) -> Vec<NumericField> {
		self.config.joja.fields()
	}

	/// Switches the display locale. Returns the assets the host has to reload.
	pub fn setLocale(&mut self, locale: Locale) -> [&'static str; 3] {
		self.locale = locale;
		EDITED_ASSETS
	}

	/// Installs a new config. Returns the assets the host has to reload.
	pub fn invalidate(&mut self, config: ModConfig) -> [&'static str; 3] {
		self.config = config;
		EDITED_ASSETS
	}

	/// The bundle table as last published.
	pub fn bundleSnapshot(&self) -> Arc<RecordTable> {
		self.bundleData.snapshot()
	}

	pub fn canEdit(name: &str) -> bool {
		EDITED_ASSETS.iter().any(|asset| assetNameEquals(name, asset))
	}

	pub fn edit(&self, name: &str, asset: AssetData<'_>) -> Result<EditReport> {
		match asset {
			AssetData::Image(image) if assetNameEquals(name, JOJA_CD_FORM) => self.updateForm(image),
			AssetData::Table(table) if assetNameEquals(name, BUNDLES) => Ok(self.updateBundles(table)),
			AssetData::Table(table) if assetNameEquals(name, EXTRA_DIALOGUE) => Ok(self.updateExtraDialogue(table)),
			_ if Self::canEdit(name) => Err(Error::AssetKind(name.to_owned())),
			_ => Ok(EditReport::Skipped),
		}
	}

	fn updateForm(&self, form: &mut Image) -> Result<EditReport> {
		let atlas = match &self.atlas {
			Some(atlas) => atlas,
			None => {
				log::warn!("{JOJA_CD_FORM} requested before the glyph atlas was loaded");
				return Ok(EditReport::Skipped);
			}
		};
		let anchors = self.config.layout.anchorTable();
		Ok(EditReport::Form(patch(form, atlas, &anchors, &self.jojaFields(), &self.locale)?))
	}

	fn updateBundles(&self, table: &mut RecordTable) -> EditReport {
		let outcome = self.bundleData.rewriteAndPublish(
			table,
			|key| key.starts_with(VAULT_PREFIX),
			vaultUpdates(&self.config.vault, &self.locale),
		);
		table.clone_from(&outcome.table);
		log::info!("rewrote {} vault bundles", outcome.rewritten.len());
		EditReport::Bundles(outcome)
	}

	fn updateExtraDialogue(&self, table: &mut RecordTable) -> EditReport {
		EditReport::Dialogue {
			substitutions: dialogue::rewriteTable(
				table,
				MOVIE_THEATER_KEY,
				DEFAULT_MOVIE_THEATER_COST,
				self.config.joja.movieTheaterCost,
				&self.locale,
			),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn asset_names_ignore_case_and_separator() {
		assert!(AssetEditor::canEdit("data\\bundles"));
		assert!(AssetEditor::canEdit("LooseSprites/JojaCDForm"));
		assert!(!AssetEditor::canEdit("Data/Bundles2"));
		assert!(!AssetEditor::canEdit("Data/Fish"));
	}

	#[test]
	fn vault_updates_map_keys_to_bundles() {
		let (vault, locale) = (VaultConfig::default(), Locale::parse("en-US"));
		let update = vaultUpdates(&vault, &locale);
		assert_eq!(
			update("Vault/26"),
			Some(FieldUpdate { name: "25,000".into(), value: "-1 25000 25000".into() })
		);
		assert_eq!(update("Vault/22"), None);
	}

	#[test]
	fn wrong_data_kind_is_an_error() {
		let editor = AssetEditor::new(ModConfig::default(), Locale::invariant());
		let mut table = RecordTable::new();
		assert!(matches!(
			editor.edit(JOJA_CD_FORM, AssetData::Table(&mut table)),
			Err(Error::AssetKind(name)) if name == JOJA_CD_FORM
		));
		assert!(matches!(editor.edit("Data/Fish", AssetData::Table(&mut table)), Ok(EditReport::Skipped)));
	}
}
