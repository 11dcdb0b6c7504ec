#![allow(non_snake_case)]

use {
	bundle_costs::RecordTable,
	std::{fs, process::Command},
};

fn bundleCosts() -> Command {
	Command::new(env!("CARGO_BIN_EXE_bundle_costs"))
}

#[test]
fn price_prints_configured_button_price() {
	let output = bundleCosts().args(["price", "2"]).output().unwrap();
	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
	assert!(String::from_utf8_lossy(&output.stdout).contains("Price(25000)"));
}

#[test]
fn bundles_reads_a_file_and_prints_the_rewrite() {
	let dir = tempfile::tempdir().unwrap();
	let (input, config) = (dir.path().join("bundles.json"), dir.path().join("config.toml"));
	fs::write(&input, r#"{"Pantry/0": "Spring Crops/O 465 20/24 1 0/0", "Vault/23": "2,500/O 220 3/-1 2500 2500/4/4"}"#)
		.unwrap();
	fs::write(&config, "[vault]\nbundle1 = 3000\n").unwrap();
	let output = bundleCosts()
		.args(["--locale", "de-DE", "--config"])
		.arg(&config)
		.arg("bundles")
		.arg(&input)
		.output()
		.unwrap();
	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
	let table: RecordTable = serde_json::from_slice(&output.stdout).unwrap();
	assert_eq!(table["Vault/23"], "3.000/O 220 3/-1 3000 3000/4/4");
	assert_eq!(table["Pantry/0"], "Spring Crops/O 465 20/24 1 0/0");
}

#[test]
fn missing_input_fails_with_its_path() {
	let output = bundleCosts().args(["bundles", "no/such/table.json"]).output().unwrap();
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("no/such/table.json"));
}
