//! CLI integration tests for the `sheetize` binary.
//!
//! Each test runs the binary through `cargo run` inside a scratch directory
//! and checks exit codes, JSON output, and the files left behind.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sheetize-tests --test cli_commands
//! ```

use pretty_assertions::assert_eq;
use sheetize_spec::{Bounds, Manifest};
use sheetize_tests::fixtures::{seven_tiles, walk_clip};
use sheetize_tests::TestHarness;

#[test]
fn test_export_json_output_and_files() {
    let harness = TestHarness::new();
    let request = harness.write_request("hero.json", &walk_clip());

    let result = harness.run_cli(&[
        "export",
        "--request",
        request.to_str().unwrap(),
        "--output",
        "hero.png",
        "--json",
    ]);
    result.assert_success();

    let json = result.json();
    assert_eq!(json["success"], true);
    assert_eq!(json["result"]["mode"], "spritesheet");
    assert_eq!(json["result"]["shape"]["columns"], 4);
    assert_eq!(json["result"]["sheet"]["width"], 142);
    assert_eq!(json["result"]["source_kind"], "json");

    let manifest = harness.read_manifest(&harness.path().join("hero.anim"));
    match manifest {
        Manifest::Spritesheet(m) => assert_eq!(m.states[0].bounds, Bounds::new(4, 4, 134, 32)),
        other => panic!("expected spritesheet manifest, got {:?}", other),
    }
    assert!(harness.path().join("hero.plan.json").exists());
}

#[test]
fn test_export_overrides_apply() {
    let harness = TestHarness::new();
    let request = harness.write_request("tiles.json", &seven_tiles());

    let result = harness.run_cli(&[
        "export",
        "--request",
        request.to_str().unwrap(),
        "--output",
        "tiles.png",
        "--offset",
        "4",
        "--spacing",
        "2",
        "--json",
    ]);
    result.assert_success();

    match harness.read_manifest(&harness.path().join("tiles.clip")) {
        Manifest::Tileset(m) => {
            assert_eq!(m.offset, 4);
            // 3 * 32 + 2 * 2 = 100
            assert_eq!(m.bounds, Bounds::new(4, 4, 100, 100));
        }
        other => panic!("expected tileset manifest, got {:?}", other),
    }
}

#[test]
fn test_export_empty_request_fails_without_files() {
    let harness = TestHarness::new();
    let request = harness.write_file(
        "empty.yaml",
        "mode: spritesheet\nframe: { width: 8, height: 8 }\nclips: []\n",
    );

    let result = harness.run_cli(&[
        "export",
        "--request",
        request.to_str().unwrap(),
        "--output",
        "empty.png",
        "--json",
    ]);
    result.assert_failure();
    assert_eq!(result.exit_code, 1);

    let json = result.json();
    assert_eq!(json["success"], false);
    assert_eq!(json["errors"][0]["code"], "E001");
    assert!(!harness.path().join("empty.anim").exists());
    assert!(!harness.path().join("empty.plan.json").exists());
}

#[test]
fn test_export_bad_scale_override_is_argument_error() {
    let harness = TestHarness::new();
    let request = harness.write_request("hero.json", &walk_clip());

    let result = harness.run_cli(&[
        "export",
        "--request",
        request.to_str().unwrap(),
        "--output",
        "hero.png",
        "--scale",
        "0.5",
        "--json",
    ]);
    result.assert_failure();
    assert_eq!(result.json()["errors"][0]["code"], "CLI_010");
    assert!(!harness.path().join("hero.anim").exists());
}

#[test]
fn test_export_human_error_is_reported() {
    let harness = TestHarness::new();
    let result = harness.run_cli(&["export", "--request", "missing.json", "--output", "x.png"]);
    result.assert_failure();
    assert!(result.stderr.contains("error"));
    assert!(result.stderr.contains("missing.json"));
}

#[test]
fn test_grid_command() {
    let harness = TestHarness::new();
    let result = harness.run_cli(&["grid", "7", "--json"]);
    result.assert_success();
    let json = result.json();
    assert_eq!(json["result"]["cols"], 3);
    assert_eq!(json["result"]["rows"], 3);
    assert_eq!(json["result"]["empty_cells"], 2);

    let zero = harness.run_cli(&["grid", "0", "--json"]);
    zero.assert_failure();
    assert_eq!(zero.json()["errors"][0]["code"], "E001");
}

#[test]
fn test_pack_command() {
    let harness = TestHarness::new();
    let result = harness.run_cli(&[
        "pack", "-c", "a=4", "-c", "b=3", "-c", "c=3", "-c", "d=2", "-c", "e=1", "--json",
    ]);
    result.assert_success();
    let json = result.json();
    assert_eq!(json["result"]["capacity"], 4);
    let rows: Vec<Vec<String>> = json["result"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| {
            row["clips"]
                .as_array()
                .unwrap()
                .iter()
                .map(|c| c["name"].as_str().unwrap().to_string())
                .collect()
        })
        .collect();
    assert_eq!(rows, vec![vec!["a"], vec!["b", "e"], vec!["c"], vec!["d"]]);
}

#[test]
fn test_slice_command() {
    let harness = TestHarness::new();
    let result = harness.run_cli(&[
        "slice", "--sheet", "37x19", "--frame", "16x16", "--spacing", "1", "--json",
    ]);
    result.assert_success();
    let tiles = result.json()["result"].as_array().unwrap().clone();
    assert_eq!(tiles.len(), 2);
    assert_eq!(tiles[1]["bounds"]["left"], 17);
}

#[test]
fn test_preview_command() {
    let harness = TestHarness::new();
    let result = harness.run_cli(&[
        "preview",
        "--mode",
        "floor",
        "--frame",
        "8x8",
        "--with-secondary",
        "--zoom",
        "2",
        "--json",
    ]);
    result.assert_success();
    let json = result.json();
    assert_eq!(json["result"]["canvas"]["width"], 48);
    assert_eq!(json["result"]["cells"][1]["source"], "primary");
    assert_eq!(json["result"]["cells"][0]["source"], "secondary");
}
