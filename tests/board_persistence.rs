use std::fs;
use std::time::{Duration, Instant};

use dayboard::board::store::load_state;
use dayboard::board::{ALL_CATEGORIES, Board, BoardState, Category, EditOutcome, TimerState};
use dayboard::store::JsonFileStorage;
use dayboard::store::json_store::SNAPSHOT_FILE;
use tempfile::TempDir;

fn make_test_storage() -> (TempDir, JsonFileStorage) {
    let dir = TempDir::new().unwrap();
    let storage = JsonFileStorage::with_base_dir(dir.path().to_path_buf()).unwrap();
    (dir, storage)
}

fn reopen(dir: &TempDir) -> Board {
    let storage = JsonFileStorage::with_base_dir(dir.path().to_path_buf()).unwrap();
    Board::open(Box::new(storage))
}

#[test]
fn fresh_directory_starts_from_defaults() {
    let (_dir, storage) = make_test_storage();
    assert_eq!(load_state(&storage), BoardState::default());
}

#[test]
fn save_then_load_round_trips_reachable_state() {
    let (dir, storage) = make_test_storage();
    let mut board = Board::open(Box::new(storage));
    let t0 = Instant::now();

    board.edit_choices(Category::Create, "Paint\nSing\nBake");
    board.select(Category::Create, 2);
    board.set_done(Category::Create, true);
    board.select(Category::Move, 0);
    board.start_timer(Category::Move, t0);
    board.tick(t0 + Duration::from_secs(125));
    board.start_timer(Category::Learn, t0);
    board.tick(t0 + Duration::from_secs(126));

    let storage = JsonFileStorage::with_base_dir(dir.path().to_path_buf()).unwrap();
    let loaded = load_state(&storage);
    assert_eq!(&loaded, board.state());
    assert!(loaded.timers.r#move.running);
}

#[test]
fn reopening_pauses_timers_but_keeps_seconds() {
    let (dir, storage) = make_test_storage();
    let mut board = Board::open(Box::new(storage));
    let t0 = Instant::now();
    board.start_timer(Category::Learn, t0);
    board.tick(t0 + Duration::from_secs(42));
    drop(board);

    let board = reopen(&dir);
    assert_eq!(
        board.timer(Category::Learn),
        TimerState {
            seconds: 42,
            running: false
        }
    );
    assert!(!board.timer_active(Category::Learn));
}

#[test]
fn older_snapshot_is_backfilled() {
    let (dir, _storage) = make_test_storage();
    let old = r#"{
        "choices": {"learn": ["Piano", "Chess"]},
        "selected": {"learn": 1},
        "done": {"learn": true},
        "timers": {"learn": {"seconds": 30, "running": false},
                   "create": {"seconds": 5, "running": false}}
    }"#;
    fs::write(dir.path().join(SNAPSHOT_FILE), old).unwrap();

    let board = reopen(&dir);
    let defaults = BoardState::default();
    assert_eq!(board.choices(Category::Learn), ["Piano", "Chess"]);
    assert_eq!(board.selected_choice(Category::Learn), Some("Chess"));
    assert!(board.is_done(Category::Learn));
    assert_eq!(board.timer(Category::Create).seconds, 5);
    assert_eq!(board.timer(Category::Move), defaults.timers.r#move);
    assert_eq!(board.choices(Category::Move), defaults.choices.r#move.as_slice());
}

#[test]
fn corrupt_snapshot_falls_back_and_is_replaced_on_next_save() {
    let (dir, _storage) = make_test_storage();
    let path = dir.path().join(SNAPSHOT_FILE);
    fs::write(&path, "{ \"choices\": [").unwrap();

    let mut board = reopen(&dir);
    assert_eq!(board.state(), &BoardState::default());

    board.select(Category::Learn, 0);
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(&BoardState::from_json(&written).unwrap(), board.state());
}

#[test]
fn snapshot_uses_plain_category_keys() {
    let (dir, storage) = make_test_storage();
    let mut board = Board::open(Box::new(storage));
    board.select(Category::Move, 1);

    let raw = fs::read_to_string(dir.path().join(SNAPSHOT_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    for key in ["choices", "selected", "done", "timers"] {
        for category in ALL_CATEGORIES {
            assert!(
                value[key].get(category.as_str()).is_some(),
                "{key}.{} missing",
                category.as_str()
            );
        }
    }
    assert_eq!(value["selected"]["move"], 1);
    assert!(value["selected"]["learn"].is_null());
    assert_eq!(value["timers"]["learn"]["seconds"], 0);
}

#[test]
fn day_with_all_operations_survives_restart() {
    let (dir, storage) = make_test_storage();
    let mut board = Board::open(Box::new(storage));
    let t0 = Instant::now();

    board.select(Category::Learn, 1);
    board.set_done(Category::Learn, true);
    assert_eq!(
        board.edit_choices(Category::Create, "\n\n"),
        EditOutcome::Unchanged
    );
    board.start_timer(Category::Create, t0);
    board.tick(t0 + Duration::from_secs(9));
    board.reset_day();

    let reopened = reopen(&dir);
    for category in ALL_CATEGORIES {
        assert_eq!(reopened.selected(category), None);
        assert!(!reopened.is_done(category));
        assert_eq!(reopened.timer(category), TimerState::default());
    }
    assert_eq!(reopened.state().choices, BoardState::default().choices);
}
