//! End-to-end command flows against files in a scratch directory.

mod common;

use peoria_cli::storage::{load_document, load_results, save_document};
use peoria_core::test_helpers::{make_aged_player, make_player, uniform_scores};
use peoria_core::{CompetitionConfig, CompetitionDocument};

use common::{TestDir, path_str, run_cli};

fn write_doc(dir: &TestDir, players: Vec<peoria_core::Player>) -> std::path::PathBuf {
    let path = dir.file("competition.json");
    let doc = CompetitionDocument {
        config: CompetitionConfig::default(),
        players,
    };
    save_document(&path, &doc).unwrap();
    path
}

#[test]
fn init_writes_default_document() {
    let dir = TestDir::new();
    let path = dir.file("new.json");
    let out = run_cli(&dir.config(), &["init", "--out", path_str(&path)]).unwrap();
    assert!(out.starts_with("Created"));
    assert_eq!(load_document(&path).unwrap(), CompetitionDocument::default());
}

#[test]
fn rank_prints_table_and_saves_session() {
    let dir = TestDir::new();
    let doc = write_doc(
        &dir,
        vec![
            make_player("Baba", uniform_scores(5)),
            make_player("Aoki", uniform_scores(4)),
            make_player("Chiba", vec![4, 4, 4]),
        ],
    );
    let config = dir.config();

    let out = run_cli(&config, &["rank", path_str(&doc)]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[1].contains("Aoki"));
    assert!(lines[2].contains("Baba"));
    assert_eq!(lines.last().copied(), Some("2 of 3 players complete"));

    let saved = load_results(&config.session.results_path).unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].player_id, "Aoki");
}

#[test]
fn second_rank_carries_previous_ranks() {
    let dir = TestDir::new();
    let doc = write_doc(
        &dir,
        vec![
            make_player("Aoki", uniform_scores(4)),
            make_player("Baba", uniform_scores(5)),
        ],
    );
    let config = dir.config();
    run_cli(&config, &["rank", path_str(&doc)]).unwrap();

    // Baba improves past Aoki.
    let mut loaded = load_document(&doc).unwrap();
    loaded.players[1].scores = uniform_scores(3);
    save_document(&doc, &loaded).unwrap();

    let out = run_cli(&config, &["rank", path_str(&doc), "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["results"][0]["playerId"], "Baba");
    assert_eq!(value["results"][0]["previousRank"], 2);
    assert_eq!(value["results"][1]["previousRank"], 1);
}

#[test]
fn no_session_leaves_session_file_alone() {
    let dir = TestDir::new();
    let doc = write_doc(&dir, vec![make_player("Aoki", uniform_scores(4))]);
    let config = dir.config();
    run_cli(&config, &["rank", path_str(&doc), "--no-session"]).unwrap();
    assert!(!config.session.results_path.exists());
}

#[test]
fn explicit_previous_batch_is_used() {
    let dir = TestDir::new();
    let doc = write_doc(
        &dir,
        vec![
            make_aged_player("Old", uniform_scores(5), 70),
            make_player("Par", uniform_scores(4)),
        ],
    );
    let config = dir.config();
    run_cli(&config, &["rank", path_str(&doc)]).unwrap();
    let previous = dir.file("previous.json");
    std::fs::rename(&config.session.results_path, &previous).unwrap();

    let out = run_cli(
        &config,
        &[
            "rank",
            path_str(&doc),
            "--no-session",
            "--previous",
            path_str(&previous),
            "--format",
            "json",
        ],
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["results"][0]["previousRank"], 1);
    assert_eq!(value["standings"]["boobyRank"], 1);
}

#[test]
fn rank_fails_on_bad_config() {
    let dir = TestDir::new();
    let path = dir.file("bad.json");
    let mut doc = CompetitionDocument::default();
    doc.config.par[3] = 0;
    save_document(&path, &doc).unwrap();

    let err = run_cli(&dir.config(), &["rank", path_str(&path)]).unwrap_err();
    assert!(format!("{err:#}").contains("hole 4 has a par of 0"));
}

#[test]
fn validate_reports_counts_and_schema_errors() {
    let dir = TestDir::new();
    let doc = write_doc(
        &dir,
        vec![
            make_player("Aoki", uniform_scores(4)),
            make_player("Baba", vec![]),
        ],
    );
    let out = run_cli(&dir.config(), &["validate", path_str(&doc)]).unwrap();
    assert_eq!(out.trim(), "OK: 2 players, 1 complete");

    let broken = dir.file("broken.json");
    std::fs::write(&broken, r#"{"config": {"par": [4, 4]}, "players": []}"#).unwrap();
    let err = run_cli(&dir.config(), &["validate", path_str(&broken)]).unwrap_err();
    assert!(format!("{err:#}").contains("config.par must have 18 entries"));
}

#[test]
fn validate_verbose_prints_course_and_progress() {
    let dir = TestDir::new();
    let mut partial = vec![0; 18];
    partial[0] = 6;
    partial[10] = 3;
    let doc = write_doc(
        &dir,
        vec![
            make_player("Aoki", uniform_scores(4)),
            make_player("Chiba", partial),
        ],
    );
    let out = run_cli(&dir.config(), &["validate", "--verbose", path_str(&doc)]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "OK: 2 players, 1 complete");
    assert!(lines[1].starts_with("Hole"));
    assert!(out.contains("Par OUT 36 IN 36 total 72"));
    assert!(out.contains("HDCP limit: unlimited"));
    let aoki = lines.iter().find(|l| l.starts_with("Aoki")).unwrap();
    assert!(aoki.contains("18/18 holes  OUT  36  IN  36"));
    let chiba = lines.iter().find(|l| l.starts_with("Chiba")).unwrap();
    assert!(chiba.contains(" 2/18 holes  OUT   6  IN   3"));
}

#[test]
fn hidden_holes_standard_layout() {
    let dir = TestDir::new();
    let out = run_cli(&dir.config(), &["hidden-holes", "--standard"]).unwrap();
    assert_eq!(
        out.trim(),
        "Hidden holes: 1, 3, 5, 7, 9, 10, 11, 12, 14, 16, 17, 18"
    );
    assert!(run_cli(&dir.config(), &["hidden-holes", "--standard", "--seed", "3"]).is_err());
}

#[test]
fn hidden_holes_apply_updates_document() {
    let dir = TestDir::new();
    let doc = write_doc(&dir, vec![]);
    let out = run_cli(
        &dir.config(),
        &["hidden-holes", "--seed", "11", "--apply", path_str(&doc)],
    )
    .unwrap();
    assert!(out.starts_with("Hidden holes: "));

    let holes = load_document(&doc).unwrap().config.hidden_holes;
    assert_eq!(holes, peoria_core::generate_hidden_holes_seeded(11));
    assert_eq!(holes.iter().filter(|&&h| h < 9).count(), 6);
}

#[test]
fn add_player_appends_partial_card() {
    let dir = TestDir::new();
    let doc = write_doc(&dir, vec![]);
    let out = run_cli(
        &dir.config(),
        &[
            "add-player",
            path_str(&doc),
            "--name",
            "Doi",
            "--age",
            "58",
            "--scores",
            "5,4,6",
        ],
    )
    .unwrap();
    assert!(out.starts_with("Added Doi (player-"));

    let loaded = load_document(&doc).unwrap();
    let player = &loaded.players[0];
    assert_eq!(player.age, Some(58));
    assert_eq!(&player.scores[..4], &[5, 4, 6, 0]);
    assert_eq!(player.scores.len(), 18);
    assert!(!player.is_complete());
}

#[test]
fn add_player_rejects_too_many_scores() {
    let dir = TestDir::new();
    let doc = write_doc(&dir, vec![]);
    let scores = vec!["4"; 19].join(",");
    let result = run_cli(
        &dir.config(),
        &["add-player", path_str(&doc), "--name", "X", "--scores", &scores],
    );
    assert!(result.is_err());
    assert!(load_document(&doc).unwrap().players.is_empty());
}
