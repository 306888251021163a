//! Bounded question/answer history persisted as a JSON array on disk.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// Most-recent interactions retained; the oldest is evicted beyond this.
pub const MAX_INTERACTIONS: usize = 15;

/// One recorded question/answer exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub asked_at: DateTime<Utc>,
}

impl Interaction {
    pub fn new(question: String, answer: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            question,
            answer,
            asked_at: Utc::now(),
        }
    }
}

/// A pending history write: serialized while the chat lock is held,
/// executed after it is released. Write failures are logged, never
/// surfaced.
#[derive(Debug)]
pub struct PersistJob {
    path: PathBuf,
    payload: String,
}

impl PersistJob {
    /// Performs the write on the blocking pool, keeping async workers off
    /// the disk.
    pub async fn run(self) {
        if let Err(e) = tokio::task::spawn_blocking(move || self.run_blocking()).await {
            warn!("History persistence task failed: {e}");
        }
    }

    /// Synchronous write, for callers outside a runtime.
    pub fn run_blocking(self) {
        if let Err(e) = fs::write(&self.path, self.payload) {
            warn!("Failed to persist history to {}: {e}", self.path.display());
        }
    }
}

/// Append-only interaction list, stored oldest-first and capped at
/// [`MAX_INTERACTIONS`]. Every append yields a [`PersistJob`] carrying the
/// serialized list, so the disk write never runs under the caller's lock.
#[derive(Debug)]
pub struct InteractionHistory {
    path: PathBuf,
    entries: Vec<Interaction>,
}

impl InteractionHistory {
    /// Loads history from `path`. A missing or malformed file yields an
    /// empty history rather than an error.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<Interaction>>(&raw) {
                Ok(mut entries) => {
                    if entries.len() > MAX_INTERACTIONS {
                        entries.drain(..entries.len() - MAX_INTERACTIONS);
                    }
                    entries
                }
                Err(e) => {
                    warn!("Discarding malformed history file {}: {e}", path.display());
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        Self { path, entries }
    }

    /// Appends an interaction, evicting the oldest beyond the cap, and
    /// returns the write job for the updated list.
    pub fn push(&mut self, interaction: Interaction) -> Option<PersistJob> {
        self.entries.push(interaction);
        if self.entries.len() > MAX_INTERACTIONS {
            let excess = self.entries.len() - MAX_INTERACTIONS;
            self.entries.drain(..excess);
        }
        self.persist_job()
    }

    /// Most-recent-first view for display.
    pub fn recent(&self) -> Vec<Interaction> {
        self.entries.iter().rev().cloned().collect()
    }

    pub fn find(&self, id: Uuid) -> Option<&Interaction> {
        self.entries.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn oldest(&self) -> Option<&Interaction> {
        self.entries.first()
    }

    fn persist_job(&self) -> Option<PersistJob> {
        match serde_json::to_string_pretty(&self.entries) {
            Ok(payload) => Some(PersistJob {
                path: self.path.clone(),
                payload,
            }),
            Err(e) => {
                warn!("Failed to serialize history: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn interaction(n: usize) -> Interaction {
        Interaction::new(format!("question {n}"), format!("answer {n}"))
    }

    fn push_flushed(history: &mut InteractionHistory, interaction: Interaction) {
        if let Some(job) = history.push(interaction) {
            job.run_blocking();
        }
    }

    #[test]
    fn test_missing_file_yields_empty_history() {
        let dir = tempdir().unwrap();
        let history = InteractionHistory::load(dir.path().join("none.json"));
        assert!(history.is_empty());
    }

    #[test]
    fn test_malformed_file_yields_empty_history() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{not json").unwrap();
        let history = InteractionHistory::load(&path);
        assert!(history.is_empty());
    }

    #[test]
    fn test_cap_evicts_oldest_first() {
        let dir = tempdir().unwrap();
        let mut history = InteractionHistory::load(dir.path().join("history.json"));
        for n in 0..MAX_INTERACTIONS + 1 {
            push_flushed(&mut history, interaction(n));
        }
        assert_eq!(history.len(), MAX_INTERACTIONS);
        assert_eq!(history.oldest().unwrap().question, "question 1");
    }

    #[test]
    fn test_push_serializes_but_leaves_the_write_to_the_job() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut history = InteractionHistory::load(&path);

        let job = history.push(interaction(0));
        assert!(!path.exists());

        job.unwrap().run_blocking();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_persist_job_runs_on_the_blocking_pool() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut history = InteractionHistory::load(&path);

        history.push(interaction(0)).unwrap().run().await;
        assert!(path.exists());
    }

    #[test]
    fn test_round_trip_preserves_bounded_list_and_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut history = InteractionHistory::load(&path);
        for n in 0..3 {
            push_flushed(&mut history, interaction(n));
        }

        let reloaded = InteractionHistory::load(&path);
        assert_eq!(reloaded.len(), 3);
        // Stored oldest-first.
        assert_eq!(reloaded.oldest().unwrap().question, "question 0");
        // Served most-recent-first.
        let recent = reloaded.recent();
        assert_eq!(recent[0].question, "question 2");
        assert_eq!(recent[2].question, "question 0");
    }

    #[test]
    fn test_stored_records_use_the_original_field_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut history = InteractionHistory::load(&path);
        push_flushed(&mut history, interaction(0));

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let record = &value.as_array().unwrap()[0];
        assert!(record.get("askedAt").is_some());
        assert!(record.get("id").is_some());
        assert!(record.get("question").is_some());
        assert!(record.get("answer").is_some());
    }

    #[test]
    fn test_oversized_stored_file_is_trimmed_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        let entries: Vec<Interaction> = (0..MAX_INTERACTIONS + 5).map(interaction).collect();
        fs::write(&path, serde_json::to_string(&entries).unwrap()).unwrap();

        let history = InteractionHistory::load(&path);
        assert_eq!(history.len(), MAX_INTERACTIONS);
        assert_eq!(history.oldest().unwrap().question, "question 5");
    }

    #[test]
    fn test_find_by_id() {
        let dir = tempdir().unwrap();
        let mut history = InteractionHistory::load(dir.path().join("history.json"));
        let entry = interaction(0);
        let id = entry.id;
        push_flushed(&mut history, entry);
        assert!(history.find(id).is_some());
        assert!(history.find(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_unwritable_path_does_not_panic() {
        let mut history = InteractionHistory::load("/nonexistent-dir/history.json");
        push_flushed(&mut history, interaction(0));
        assert_eq!(history.len(), 1);
    }
}
