#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	bundle_costs::{
		assets::{BUNDLES, EXTRA_DIALOGUE, JOJA_CD_FORM},
		logger,
		overrides::{Event, OverrideTable},
		stdoutRaw, AssetData, AssetEditor, EditReport, GlyphAtlas, Image, Locale, ModConfig, RecordTable,
		DISPLAY_WIDTH,
	},
	clap::{Parser, Subcommand},
	eyre::{Result, WrapErr},
	std::{
		fs::File,
		io::{self, BufReader, BufWriter, Read, Write},
		path::{Path, PathBuf},
	},
};

fn main() -> Result<()> {
	#[derive(Parser)]
	#[clap(version, about = "Rewrites the assets behind configurable bundle costs")]
	struct Args {
		/// TOML config; stock prices when omitted
		#[clap(long)]
		config: Option<PathBuf>,

		#[clap(long, default_value = "en-US")]
		locale: String,

		#[clap(short, long, parse(from_occurrences))]
		verbose: u64,

		#[clap(subcommand)]
		command: Command,
	}
	#[derive(Subcommand)]
	enum Command {
		/// Redraw the prices on the form PNG
		Form {
			#[clap(long)]
			atlas: PathBuf,
			input: Option<PathBuf>,
		},
		/// Rewrite the vault records of a bundle table (JSON object)
		Bundles { input: Option<PathBuf> },
		/// Rewrite the movie theater price in a dialogue table (JSON object)
		Dialogue { input: Option<PathBuf> },
		/// Print the price the form charges for a button
		Price { button: i32 },
	}
	let Args { config, locale, verbose, command } = Args::parse();
	logger::init(logger::levelForVerbosity(verbose))?;
	let config = match config {
		Some(path) => ModConfig::load(&path).wrap_err_with(|| format!("{path:?}"))?,
		None => ModConfig::default(),
	};
	let mut editor = AssetEditor::new(config, Locale::parse(&locale));
	let stdout = &mut BufWriter::new(stdoutRaw());
	match command {
		Command::Form { atlas, input } => {
			let atlasImage = Image::fromPNG(BufReader::new(
				File::open(&atlas).wrap_err_with(|| format!("{atlas:?}"))?,
			))?;
			let atlas = GlyphAtlas::new(atlasImage, editor.config().layout.atlas)?;
			editor.loadAssets(atlas, RecordTable::new());
			let form = &mut Image::fromPNG(openInput(input.as_deref())?)?;
			if let EditReport::Form(report) = editor.edit(JOJA_CD_FORM, AssetData::Image(&mut *form))? {
				for warning in &report.boundsWarnings {
					eprintln!(
						"{}: {} digits drawn outside the {DISPLAY_WIDTH}-digit slot{}",
						warning.field,
						warning.numDigits,
						if warning.clipped { ", clipped at the image edge" } else { "" },
					);
				}
			}
			form.writePNG(&mut *stdout)?;
		}
		Command::Bundles { input } => {
			let table = &mut readTable(input.as_deref())?;
			if let EditReport::Bundles(outcome) = editor.edit(BUNDLES, AssetData::Table(&mut *table))? {
				for err in &outcome.malformed {
					eprintln!("{err}");
				}
			}
			writeTable(&mut *stdout, &editor.bundleSnapshot())?;
		}
		Command::Dialogue { input } => {
			let table = &mut readTable(input.as_deref())?;
			editor.edit(EXTRA_DIALOGUE, AssetData::Table(&mut *table))?;
			writeTable(&mut *stdout, table)?;
		}
		Command::Price { button } => {
			let outcome =
				OverrideTable::withModOverrides().dispatch(Event::PriceFromButtonNumber, &editor.config().joja, &[button]);
			writeln!(stdout, "{outcome:?}")?;
		}
	}
	stdout.flush()?;
	Ok(())
}

fn openInput(path: Option<&Path>) -> Result<Box<dyn Read>> {
	Ok(match path {
		Some(path) => Box::new(BufReader::new(File::open(path).wrap_err_with(|| format!("{path:?}"))?)),
		None => Box::new(io::stdin().lock()),
	})
}

fn readTable(path: Option<&Path>) -> Result<RecordTable> {
	serde_json::from_reader(openInput(path)?).wrap_err("expected a JSON object of strings")
}

fn writeTable(writer: impl Write, table: &RecordTable) -> Result<()> {
	serde_json::to_writer_pretty(writer, table)?;
	Ok(())
}
