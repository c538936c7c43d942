//! Journal: JSONL records written by the background writer

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tui_arcade::core::{Position, SequenceRng, SnakeGame};
use tui_arcade::journal::{Journal, JournalEvent, JournalRecord};
use tui_arcade::types::{Direction, GameKind, SnakeEvent};

fn temp_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    std::env::temp_dir().join(format!(
        "tui-arcade-{}-{}-{}.jsonl",
        tag,
        std::process::id(),
        nanos
    ))
}

fn read_records(path: &Path) -> Vec<JournalRecord> {
    let text = std::fs::read_to_string(path).expect("journal file");
    text.lines()
        .map(|line| serde_json::from_str(line).expect("valid JSON line"))
        .collect()
}

#[tokio::test]
async fn test_async_journal_writes_ordered_lines() {
    let path = temp_path("async");
    let mut journal = Journal::spawn(&path).await.expect("open journal");
    assert!(journal.is_enabled());
    assert_eq!(journal.path(), Some(path.as_path()));

    journal.record(JournalEvent::session_start(GameKind::Snake, Some(42)));
    journal.record(JournalEvent::intent("turnUp"));
    journal.record(SnakeEvent::AteFood {
        score: 10,
        length: 2,
        tick_ms: 145,
    });
    journal.record(JournalEvent::SessionEnd {
        score: 10,
        high_score: 10,
    });
    assert_eq!(journal.len(), 4);
    journal.finish().await;

    let records = read_records(&path);
    assert_eq!(records.len(), 4);
    let seqs: Vec<u64> = records.iter().map(|r| r.seq).collect();
    assert_eq!(seqs, vec![1, 2, 3, 4]);
    assert!(records.windows(2).all(|w| w[0].ts_ms <= w[1].ts_ms));
    assert_eq!(
        records[0].event,
        JournalEvent::SessionStart {
            game: "snake".to_string(),
            seed: Some(42)
        }
    );
    assert_eq!(
        records[2].event,
        JournalEvent::FoodEaten {
            score: 10,
            length: 2,
            tick_ms: 145
        }
    );

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_record_shape_is_flat_and_tagged() {
    let path = temp_path("shape");
    let mut journal = Journal::spawn(&path).await.expect("open journal");
    journal.record(JournalEvent::PieceLocked {
        piece: "t".to_string(),
        lines: 2,
        points: 100,
        level: 1,
    });
    journal.finish().await;

    let text = std::fs::read_to_string(&path).expect("journal file");
    let value: serde_json::Value = serde_json::from_str(text.trim()).expect("json");
    assert_eq!(value["type"], "piece_locked");
    assert_eq!(value["seq"], 1);
    assert_eq!(value["piece"], "t");
    assert_eq!(value["lines"], 2);
    assert_eq!(value["points"], 100);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_blocking_journal_appends_across_sessions() {
    let path = temp_path("sync");

    let mut first = Journal::open(&path).expect("open journal");
    first.record(JournalEvent::session_start(GameKind::Tetris, None));
    first.close();

    let mut second = Journal::open(&path).expect("reopen journal");
    second.record(JournalEvent::Reset { high_score: 300 });
    second.close();

    let records = read_records(&path);
    assert_eq!(records.len(), 2);
    // Sequence numbers restart per journal handle.
    assert_eq!(records[0].seq, 1);
    assert_eq!(records[1].seq, 1);
    assert_eq!(records[1].event, JournalEvent::Reset { high_score: 300 });

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_game_events_flow_into_journal() {
    let path = temp_path("game");
    let mut journal = Journal::open(&path).expect("open journal");
    let mut game = SnakeGame::from_layout(
        [Position::new(18, 0)],
        Direction::Right,
        Some(Position::new(19, 0)),
        SequenceRng::new(vec![0]),
    );

    for _ in 0..3 {
        game.tick();
        if let Some(ev) = game.take_last_event() {
            journal.record(ev);
        }
    }
    journal.close();

    let events: Vec<JournalEvent> = read_records(&path).into_iter().map(|r| r.event).collect();
    assert_eq!(
        events,
        vec![
            JournalEvent::FoodEaten {
                score: 10,
                length: 2,
                tick_ms: 145
            },
            JournalEvent::Collision {
                score: 10,
                length: 2
            },
        ]
    );

    let _ = std::fs::remove_file(&path);
}
