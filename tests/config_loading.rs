//! Loading match configurations from the data/ directory

use std::path::{Path, PathBuf};

use cricket_sim::commentary::{Commentary, Commentator, NullSink};
use cricket_sim::core::{CricketError, MatchConfig};
use cricket_sim::simulation::simulate;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data/matches/india_vs_australia.toml")
}

#[test]
fn test_sample_file_matches_builtin_fixture() {
    let loaded = MatchConfig::load_from_file(&fixture()).expect("sample config should load");
    assert_eq!(loaded, MatchConfig::default());
}

#[test]
fn test_sample_file_plays_a_match() {
    let config = MatchConfig::load_from_file(&fixture()).unwrap().with_seed(11);
    let mut sink = NullSink;
    let mut commentary = Commentary::new(&Commentator, &mut sink);
    let output = simulate(&config, 11, &mut commentary).unwrap();

    let teams: Vec<&str> = output.innings.iter().map(|i| i.batting_team.as_str()).collect();
    assert!(teams.contains(&"India"));
    assert!(teams.contains(&"Australia"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = MatchConfig::load_from_file(Path::new("data/matches/does_not_exist.toml")).unwrap_err();
    assert!(matches!(err, CricketError::IoError(_)));
}

#[test]
fn test_skill_out_of_range_rejected_on_load() {
    let content = std::fs::read_to_string(fixture())
        .unwrap()
        .replacen("batting_skill = 0.7", "batting_skill = 7.0", 1);
    let err = MatchConfig::parse_toml(&content).unwrap_err();
    assert!(matches!(err, CricketError::Config(_)));
}
