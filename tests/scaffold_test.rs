// Integration tests for the draft board scaffold.

use std::path::Path;

/// Verify that config/board.toml is valid TOML.
#[test]
fn board_toml_is_valid() {
    let content =
        std::fs::read_to_string("config/board.toml").expect("config/board.toml should exist");
    let parsed: Result<toml::Value, _> = toml::from_str(&content);
    assert!(parsed.is_ok(), "config/board.toml is not valid TOML: {:?}", parsed.err());
}

/// Verify that the shipped config deserializes into the typed Config and
/// matches the built-in defaults.
#[test]
fn board_toml_matches_defaults() {
    let content = std::fs::read_to_string("config/board.toml").unwrap();
    let config: draft_board::config::Config = toml::from_str(&content).unwrap();

    assert_eq!(config.league.num_teams, 12);
    assert_eq!(config.board.rows, 15);
    assert_eq!(config.board.cols, 12);
    assert_eq!(config.storage.db_path, "draftboard.db");
    assert_eq!(config.roster.slots, vec!["QB", "RB", "WR", "TE", "FLEX"]);
    assert!(config.feeds.espn.is_none(), "shipped config should leave feeds unset");
}

/// Verify that all expected directories exist.
#[test]
fn directory_structure_exists() {
    let expected_dirs = [
        "src",
        "src/draft",
        "src/sources",
        "src/tui",
        "src/tui/widgets",
        "config",
        "tests",
        "tests/fixtures",
    ];
    for dir in expected_dirs {
        assert!(Path::new(dir).is_dir(), "Expected directory '{}' to exist", dir);
    }
}

/// Verify that all expected source files exist.
#[test]
fn source_files_exist() {
    let expected_files = [
        "src/main.rs",
        "src/lib.rs",
        "src/app.rs",
        "src/board.rs",
        "src/config.rs",
        "src/db.rs",
        "src/draft/mod.rs",
        "src/draft/player.rs",
        "src/draft/roster.rs",
        "src/draft/state.rs",
        "src/sources/mod.rs",
        "src/sources/mock.rs",
        "src/tui/mod.rs",
        "src/tui/layout.rs",
        "src/tui/input.rs",
        "src/tui/widgets/mod.rs",
        "src/tui/widgets/board.rs",
        "src/tui/widgets/roster.rs",
        "src/tui/widgets/status_bar.rs",
    ];
    for file in expected_files {
        assert!(Path::new(file).is_file(), "Expected source file '{}' to exist", file);
    }
}

/// Verify that fixture CSV files have the expected headers.
#[test]
fn fixture_csv_files_have_headers() {
    let espn = std::fs::read_to_string("tests/fixtures/espn.csv").expect("espn.csv should exist");
    assert!(espn.starts_with("Name,Team,Bye,Position"), "espn.csv should have correct headers");

    let fp = std::fs::read_to_string("tests/fixtures/fantasypros.csv")
        .expect("fantasypros.csv should exist");
    assert!(fp.starts_with("Rank,Player,Team"), "fantasypros.csv should have correct headers");

    let rotoviz =
        std::fs::read_to_string("tests/fixtures/rotoviz.csv").expect("rotoviz.csv should exist");
    assert!(rotoviz.starts_with("Idx,Rank,Player,Pos"), "rotoviz.csv should have correct headers");
}
