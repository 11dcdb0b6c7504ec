#![allow(non_snake_case)]

mod common;

use {
	bundle_costs::{
		dialogue::rewriteAmount,
		glyph::{glyphCells, textFromCells},
		patch,
		record::{self, FieldUpdate},
		AnchorTable, AtlasLayout, BundleData, FieldAnchor, Locale, NumericField,
	},
	common::{blankForm, cellAt, numberedAtlas, table},
	glam::IVec2,
	rand::{rngs::StdRng, Rng, SeedableRng},
	std::borrow::Cow,
};

const ANCHOR: IVec2 = IVec2::new(130, 59);

fn anchors() -> AnchorTable {
	[(
		"bus",
		FieldAnchor::new(ANCHOR, 33).withLocale(&Locale::parse("de-DE"), IVec2::new(140, 70)),
	)]
	.into_iter()
	.collect()
}

#[test]
fn patching_twice_gives_identical_pixels() {
	let (atlas, anchors, rng) = (numberedAtlas(), anchors(), &mut StdRng::seed_from_u64(7));
	for _ in 0..64 {
		let fields = [NumericField::new("bus", rng.gen())];
		let [first, second] = [(); 2].map(|()| {
			let mut form = blankForm();
			patch(&mut form, &atlas, &anchors, &fields, &Locale::invariant()).unwrap();
			form
		});
		assert_eq!(first, second, "{:?}", fields[0]);
	}
}

#[test]
fn digits_survive_glyph_round_trip() {
	let (layout, rng) = (AtlasLayout::default(), &mut StdRng::seed_from_u64(11));
	for value in [0, 9, 10, 2_500, i32::MAX].into_iter().chain((0..256).map(|_| rng.gen_range(0..=i32::MAX))) {
		let cells = glyphCells(&layout, &value.to_string()).unwrap();
		let text = textFromCells(&layout, &cells).unwrap();
		assert_eq!(text.parse::<i32>().unwrap(), value);
	}
}

#[test]
fn numbers_stay_right_aligned() {
	let (atlas, anchors) = (numberedAtlas(), anchors());
	let [short, long] = [123, 45_678].map(|value| {
		let mut form = blankForm();
		patch(&mut form, &atlas, &anchors, &[NumericField::new("bus", value)], &Locale::invariant()).unwrap();
		form
	});
	let y = ANCHOR.y;
	assert_eq!(cellAt(&short, ANCHOR.x, y), Some(3));
	assert_eq!(cellAt(&long, ANCHOR.x, y), Some(8));
	assert_eq!(cellAt(&short, ANCHOR.x + 6, y), Some(3));
	assert_eq!(cellAt(&long, ANCHOR.x + 7, y), None);
	assert_eq!(cellAt(&short, ANCHOR.x - 14, y), Some(1));
	assert_eq!(cellAt(&long, ANCHOR.x - 28, y), Some(4));
	assert_eq!(cellAt(&long, ANCHOR.x - 29, y), None);
}

#[test]
fn minus_takes_the_leftmost_slot() {
	let (atlas, layout) = (numberedAtlas(), AtlasLayout::default());
	let mut form = blankForm();
	patch(&mut form, &atlas, &anchors(), &[NumericField::new("bus", -42)], &Locale::invariant()).unwrap();
	assert_eq!(glyphCells(&layout, &(-42).to_string()).unwrap().len(), 3);
	let cells = [ANCHOR.x - 14, ANCHOR.x - 7, ANCHOR.x].map(|x| cellAt(&form, x, ANCHOR.y));
	assert_eq!(cells, [Some(layout.minusCell as u8), Some(4), Some(2)]);
}

#[test]
fn locale_only_moves_the_anchor() {
	let (atlas, anchors) = (numberedAtlas(), anchors());
	let mut form = blankForm();
	patch(&mut form, &atlas, &anchors, &[NumericField::new("bus", 7)], &Locale::parse("DE-de")).unwrap();
	assert_eq!(cellAt(&form, 140, 70), Some(7));
	assert_eq!(cellAt(&form, ANCHOR.x, ANCHOR.y), None);
}

#[test]
fn unconfigured_locale_uses_default_anchor() {
	for tag in ["ja-JP", "xx-YY", "", "???"] {
		let anchor = anchors().resolve("bus", &Locale::parse(tag)).unwrap();
		assert_eq!(anchor.position, ANCHOR, "{tag:?}");
	}
}

#[test]
fn rewrite_leaves_unselected_keys_alone() {
	let source = table(&[("Vault/23", "a/1/b"), ("Vault/24", "c/2/d"), ("Other/1", "e/3/f")]);
	let outcome = record::rewrite(&source, |key| key.starts_with("Vault"), |_| None);
	assert_eq!(outcome.table["Other/1"], "e/3/f");
	assert_eq!(outcome.table["Vault/24"], "/2/");
	assert_eq!(outcome.rewritten, ["Vault/23", "Vault/24"]);
}

#[test]
fn published_snapshot_holds_the_rewrite() {
	let source = table(&[("Vault/23", "old/1/old")]);
	let bundleData = BundleData::new(source.clone());
	let outcome = bundleData.rewriteAndPublish(
		&source,
		|key| key.starts_with("Vault"),
		|key| {
			(key == "Vault/23").then(|| FieldUpdate { name: "2,500".into(), value: "-1 2500 2500".into() })
		},
	);
	assert_eq!(outcome.rewritten, ["Vault/23"]);
	assert_eq!(*bundleData.snapshot(), table(&[("Vault/23", "2,500/1/-1 2500 2500")]));
}

#[test]
fn equal_amounts_leave_dialogue_untouched() {
	let line = "That'll be 500,000g.";
	let rewrite = rewriteAmount(line, 500_000, 500_000, &Locale::parse("en-US"));
	assert_eq!(rewrite.substitutions, 0);
	assert!(matches!(rewrite.text, Cow::Borrowed(text) if std::ptr::eq(text, line)));
}
