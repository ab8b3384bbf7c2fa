//! High score persistence through the real file store

use std::collections::HashMap;
use std::fs;

use bblock::core::{GameController, HighScore, HighScoreStore, NullAudio};
use bblock::host::{FileHighScoreStore, GameConfig};
use bblock::types::{InputSnapshot, KeyInput, Phase, Point, PointerButton, FIELD_HEIGHT, LANE_WIDTH};

fn config_for(dir: &std::path::Path) -> GameConfig {
    let vars: HashMap<&str, String> = [
        ("BBLOCK_PREF_DIR", dir.display().to_string()),
        ("BBLOCK_DIFFICULTY", "2".to_string()),
        ("BBLOCK_SEED", "99".to_string()),
    ]
    .into_iter()
    .collect();
    GameConfig::from_lookup(|key: &str| vars.get(key).cloned()).unwrap()
}

/// One round scoring `target` points, driven like the terminal loop.
fn play(c: &mut GameController, store: &mut FileHighScoreStore, target: u32) {
    let mut start = InputSnapshot::default();
    start.push_key(KeyInput::Other);
    c.step(&start, &mut NullAudio, store);

    while c.phase() == Phase::Playing {
        let mut input = InputSnapshot::default();
        if let Some(session) = c.session() {
            let next = session
                .blocks()
                .iter()
                .find(|b| b.bottom() < FIELD_HEIGHT - 10.0);
            if let (true, Some(b)) = (session.score() < target, next) {
                let x = b.horizontal_position() + LANE_WIDTH / 2.0;
                let y = FIELD_HEIGHT - (b.bottom() + 5.0);
                input.push_pointer(PointerButton::Primary, Point::new(x, y));
            }
        }
        c.step(&input, &mut NullAudio, store);
    }
}

#[test]
fn first_run_creates_file_with_new_record() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&dir.path().join("nested"));
    let mut store = FileHighScoreStore::new(config.high_score_path());

    let initial = store.load().unwrap();
    assert_eq!(initial, 0);

    let mut c = GameController::new(config.profile(), HighScore::new(initial), config.seed_source());
    play(&mut c, &mut store, 4);

    assert_eq!(c.high_score(), 4);
    let on_disk = fs::read_to_string(config.high_score_path()).unwrap();
    assert_eq!(on_disk.trim(), "4");
}

#[test]
fn record_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    {
        let mut store = FileHighScoreStore::new(config.high_score_path());
        let mut c = GameController::new(config.profile(), HighScore::new(0), config.seed_source());
        play(&mut c, &mut store, 6);
    }

    let mut store = FileHighScoreStore::new(config.high_score_path());
    let loaded = store.load().unwrap();
    assert_eq!(loaded, 6);

    // A weaker round after restart leaves the file alone.
    let mut c = GameController::new(config.profile(), HighScore::new(loaded), config.seed_source());
    play(&mut c, &mut store, 2);
    assert_eq!(c.high_score(), 6);
    assert_eq!(fs::read_to_string(config.high_score_path()).unwrap().trim(), "6");
}
