//! Gameplay journal - structured JSONL event log.
//!
//! The game loop is synchronous; the journal must never block it. Records are
//! pushed onto an unbounded channel and written by a background tokio task,
//! one `serde_json` object per line:
//!
//! ```text
//! {"seq":1,"ts_ms":0,"type":"session_start","game":"snake","seed":42}
//! {"seq":2,"ts_ms":1510,"type":"food_eaten","score":10,"length":2,"tick_ms":145}
//! ```
//!
//! Write failures are reported once on stderr and stop the writer; gameplay
//! continues regardless.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use tui_arcade_types::{GameKind, SnakeEvent, TetrisLockEvent};

/// A single journal entry's payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalEvent {
    SessionStart {
        game: String,
        seed: Option<u32>,
    },
    Intent {
        name: String,
    },
    FoodEaten {
        score: u32,
        length: u32,
        tick_ms: u32,
    },
    Collision {
        score: u32,
        length: u32,
    },
    PieceLocked {
        piece: String,
        lines: u32,
        points: u32,
        level: u32,
    },
    GameOver {
        score: u32,
        high_score: u32,
    },
    Reset {
        high_score: u32,
    },
    SessionEnd {
        score: u32,
        high_score: u32,
    },
}

impl JournalEvent {
    pub fn session_start(game: GameKind, seed: Option<u32>) -> Self {
        JournalEvent::SessionStart {
            game: game.as_str().to_string(),
            seed,
        }
    }

    pub fn intent(name: &str) -> Self {
        JournalEvent::Intent {
            name: name.to_string(),
        }
    }
}

impl From<SnakeEvent> for JournalEvent {
    fn from(ev: SnakeEvent) -> Self {
        match ev {
            SnakeEvent::AteFood {
                score,
                length,
                tick_ms,
            } => JournalEvent::FoodEaten {
                score,
                length,
                tick_ms,
            },
            SnakeEvent::Collided { score, length } => JournalEvent::Collision { score, length },
        }
    }
}

impl From<TetrisLockEvent> for JournalEvent {
    fn from(ev: TetrisLockEvent) -> Self {
        JournalEvent::PieceLocked {
            piece: ev.kind.as_str().to_string(),
            lines: ev.lines_cleared,
            points: ev.points,
            level: ev.level,
        }
    }
}

/// One line of the journal file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRecord {
    /// 1-based, strictly increasing within a journal.
    pub seq: u64,
    /// Milliseconds since the journal was opened.
    pub ts_ms: u64,
    #[serde(flatten)]
    pub event: JournalEvent,
}

/// Handle to the background journal writer.
///
/// A disabled journal accepts and discards records, so callers never branch
/// on whether logging is configured.
pub struct Journal {
    tx: Option<mpsc::UnboundedSender<JournalRecord>>,
    writer: Option<JoinHandle<()>>,
    /// Private runtime when opened from synchronous code.
    rt: Option<Runtime>,
    path: Option<PathBuf>,
    seq: u64,
    opened: Instant,
}

impl Journal {
    pub fn disabled() -> Self {
        Self {
            tx: None,
            writer: None,
            rt: None,
            path: None,
            seq: 0,
            opened: Instant::now(),
        }
    }

    /// Open (append) `path` and start the writer on a private tokio runtime.
    ///
    /// For synchronous callers such as the terminal game loop.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("arcade-journal")
            .enable_all()
            .build()
            .context("failed to create journal runtime")?;

        let file = rt.block_on(open_append(&path))?;
        let (tx, rx) = mpsc::unbounded_channel();
        let writer = rt.spawn(write_records(file, rx));

        Ok(Self {
            tx: Some(tx),
            writer: Some(writer),
            rt: Some(rt),
            path: Some(path),
            seq: 0,
            opened: Instant::now(),
        })
    }

    /// Open (append) `path` and start the writer on the current tokio runtime.
    pub async fn spawn(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = open_append(&path).await?;
        let (tx, rx) = mpsc::unbounded_channel();
        let writer = tokio::spawn(write_records(file, rx));

        Ok(Self {
            tx: Some(tx),
            writer: Some(writer),
            rt: None,
            path: Some(path),
            seq: 0,
            opened: Instant::now(),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of records accepted so far
    pub fn len(&self) -> u64 {
        self.seq
    }

    pub fn is_empty(&self) -> bool {
        self.seq == 0
    }

    /// Queue an event. Never blocks; a no-op when disabled.
    pub fn record(&mut self, event: impl Into<JournalEvent>) {
        let Some(tx) = self.tx.as_ref() else {
            return;
        };
        self.seq += 1;
        let record = JournalRecord {
            seq: self.seq,
            ts_ms: self.opened.elapsed().as_millis() as u64,
            event: event.into(),
        };
        if tx.send(record).is_err() {
            // Writer already stopped; stop queueing.
            self.tx = None;
        }
    }

    /// Flush everything queued and stop the writer (synchronous callers).
    ///
    /// Must not be called from inside an async context; use [`Journal::finish`] there.
    pub fn close(mut self) {
        self.tx = None;
        // A writer spawned on a caller-owned runtime drains on its own.
        if let (Some(rt), Some(writer)) = (self.rt.take(), self.writer.take()) {
            let _ = rt.block_on(writer);
        }
    }

    /// Flush everything queued and stop the writer (async callers).
    pub async fn finish(mut self) {
        self.tx = None;
        if let Some(writer) = self.writer.take() {
            let _ = writer.await;
        }
    }
}

async fn open_append(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .with_context(|| format!("failed to open journal {}", path.display()))
}

async fn write_records(mut file: File, mut rx: mpsc::UnboundedReceiver<JournalRecord>) {
    let mut buf: Vec<u8> = Vec::with_capacity(4096);

    while let Some(rec) = rx.recv().await {
        buf.clear();
        if serde_json::to_writer(&mut buf, &rec).is_err() {
            continue;
        }
        buf.push(b'\n');
        if let Err(e) = file.write_all(&buf).await {
            eprintln!("[Journal] write failed, journal stopped: {}", e);
            return;
        }
    }

    if let Err(e) = file.flush().await {
        eprintln!("[Journal] flush failed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_arcade_types::PieceKind;

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        std::env::temp_dir().join(format!(
            "arcade-journal-{}-{}-{}.jsonl",
            tag,
            std::process::id(),
            nanos
        ))
    }

    fn read_records(path: &Path) -> Vec<JournalRecord> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn event_serializes_with_type_tag() {
        let rec = JournalRecord {
            seq: 3,
            ts_ms: 12,
            event: JournalEvent::FoodEaten {
                score: 10,
                length: 2,
                tick_ms: 145,
            },
        };
        let v = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["type"], "food_eaten");
        assert_eq!(v["seq"], 3);
        assert_eq!(v["tick_ms"], 145);
    }

    #[test]
    fn lock_event_maps_to_piece_locked() {
        let ev = JournalEvent::from(TetrisLockEvent {
            kind: PieceKind::T,
            lines_cleared: 2,
            points: 300,
            level: 3,
            topped_out: false,
        });
        assert_eq!(
            ev,
            JournalEvent::PieceLocked {
                piece: "t".to_string(),
                lines: 2,
                points: 300,
                level: 3
            }
        );
    }

    #[test]
    fn disabled_journal_discards() {
        let mut j = Journal::disabled();
        j.record(JournalEvent::intent("reset"));
        assert!(!j.is_enabled());
        assert!(j.is_empty());
        j.close();
    }

    #[test]
    fn blocking_open_and_close_flushes() {
        let path = temp_path("blocking");
        let mut j = Journal::open(&path).unwrap();
        j.record(JournalEvent::session_start(GameKind::Tetris, Some(7)));
        j.record(JournalEvent::SessionEnd {
            score: 0,
            high_score: 0,
        });
        j.close();

        let records = read_records(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].event,
            JournalEvent::SessionStart {
                game: "tetris".to_string(),
                seed: Some(7)
            }
        );
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn writer_task_preserves_order() {
        let path = temp_path("async");
        let mut j = Journal::spawn(&path).await.unwrap();
        for i in 0..50 {
            j.record(JournalEvent::FoodEaten {
                score: i * 10,
                length: i + 1,
                tick_ms: 150,
            });
        }
        assert_eq!(j.len(), 50);
        j.finish().await;

        let records = read_records(&path);
        assert_eq!(records.len(), 50);
        for (i, rec) in records.iter().enumerate() {
            assert_eq!(rec.seq, i as u64 + 1);
        }
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn open_error_is_reported() {
        let dir = std::env::temp_dir().join("arcade-journal-missing-dir-xyz").join("nested");
        let err = Journal::spawn(dir.join("j.jsonl")).await.err().unwrap();
        assert!(err.to_string().contains("failed to open journal"));
    }
}
