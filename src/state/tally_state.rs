use std::sync::mpsc::{channel, Receiver, Sender};
use tracing::{debug, info, warn};

use super::history::{Action, HistorySlot};
use super::reset_gate::ResetGate;
use crate::core::{Category, CountTable};
use crate::errors::StorageError;
use crate::storage::SnapshotStore;

/// Notification broadcast to subscribers after each state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TallyEvent {
    Incremented(Category),
    Undone(Action),
    Redone(Action),
    Reset,
    /// The mutation was applied in memory but could not be persisted
    SaveFailed(String),
}

/// The tally session: counts, highlighting, one-deep history and persistence.
///
/// Every mutating method applies its change, writes the full snapshot, and
/// notifies subscribers. A method that had nothing to do returns `None` and
/// neither saves nor notifies.
pub struct TallyState {
    counts: CountTable,
    active: Option<Category>,
    history: HistorySlot,
    reset_gate: ResetGate,
    store: SnapshotStore,
    last_save_error: Option<String>,
    subscribers: Vec<Sender<TallyEvent>>,
}

impl TallyState {
    /// Start a session from whatever the store holds.
    ///
    /// A missing, unreadable or malformed snapshot is never fatal: the session
    /// starts from an all-zero table instead.
    pub fn load(store: SnapshotStore) -> Self {
        let counts = match store.load() {
            Ok(counts) => {
                info!(
                    "Restored counts from {:?} ({} total)",
                    store.path(),
                    counts.total()
                );
                counts
            }
            Err(StorageError::NotFound { path }) => {
                info!("No snapshot at {:?}. Starting from zero.", path);
                CountTable::new()
            }
            Err(e) => {
                warn!("{}. Starting from zero.", e);
                CountTable::new()
            }
        };

        Self {
            counts,
            active: None,
            history: HistorySlot::new(),
            reset_gate: ResetGate::default(),
            store,
            last_save_error: None,
            subscribers: Vec::new(),
        }
    }

    pub fn counts(&self) -> &CountTable {
        &self.counts
    }

    pub fn count(&self, category: Category) -> u64 {
        self.counts.get(category)
    }

    /// Category of the most recent increment, for highlighting
    pub fn active_category(&self) -> Option<Category> {
        self.active
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &HistorySlot {
        &self.history
    }

    pub fn is_reset_pending(&self) -> bool {
        self.reset_gate.is_pending()
    }

    pub fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Message from the most recent failed save, cleared by the next successful one
    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    /// Receive a [`TallyEvent`] after every applied mutation
    pub fn subscribe(&mut self) -> Receiver<TallyEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn increment(&mut self, category: Category) -> Option<TallyEvent> {
        let action = Action::increment(category);
        self.counts.increment_by(category, action.delta);
        self.active = Some(category);
        self.history.record(action);
        debug!("{} -> {}", category, self.counts.get(category));

        Some(self.commit(TallyEvent::Incremented(category)))
    }

    pub fn undo(&mut self) -> Option<TallyEvent> {
        let Some(action) = self.history.undo() else {
            debug!("Nothing to undo");
            return None;
        };

        self.counts
            .decrement_saturating(action.category, action.delta);
        info!(
            "Undid +{} on {} (now {})",
            action.delta,
            action.category,
            self.counts.get(action.category)
        );

        Some(self.commit(TallyEvent::Undone(action)))
    }

    pub fn redo(&mut self) -> Option<TallyEvent> {
        let Some(action) = self.history.redo() else {
            debug!("Nothing to redo");
            return None;
        };

        self.counts.increment_by(action.category, action.delta);
        self.active = Some(action.category);
        info!(
            "Redid +{} on {} (now {})",
            action.delta,
            action.category,
            self.counts.get(action.category)
        );

        Some(self.commit(TallyEvent::Redone(action)))
    }

    /// First step of a reset; changes no counts
    pub fn request_reset(&mut self) {
        info!("Reset requested, waiting for confirmation");
        self.reset_gate.request();
    }

    /// Second step of a reset. Does nothing unless a reset was requested.
    pub fn confirm_reset(&mut self) -> Option<TallyEvent> {
        if !self.reset_gate.confirm() {
            warn!("Reset confirmation without a pending request ignored");
            return None;
        }
        self.reset()
    }

    pub fn cancel_reset(&mut self) {
        if self.reset_gate.is_pending() {
            info!("Reset cancelled");
        }
        self.reset_gate.cancel();
    }

    // History is left as is, so a redo after reset can bring back the last
    // undone increment.
    fn reset(&mut self) -> Option<TallyEvent> {
        info!("Resetting all counts (was {} total)", self.counts.total());
        self.counts.clear();
        self.active = None;

        Some(self.commit(TallyEvent::Reset))
    }

    /// Persist the current table. Failures are logged and broadcast, and the
    /// in-memory counts stay as they are.
    pub fn save(&mut self) -> Result<(), StorageError> {
        match self.store.save(&self.counts) {
            Ok(()) => {
                self.last_save_error = None;
                Ok(())
            }
            Err(e) => {
                warn!("Counts kept in memory only: {}", e);
                self.last_save_error = Some(e.to_string());
                self.notify(TallyEvent::SaveFailed(e.to_string()));
                Err(e)
            }
        }
    }

    fn commit(&mut self, event: TallyEvent) -> TallyEvent {
        // Already logged and broadcast by save()
        let _ = self.save();
        self.notify(event.clone());
        event
    }

    fn notify(&mut self, event: TallyEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fresh_state(dir: &TempDir) -> TallyState {
        TallyState::load(SnapshotStore::new(dir.path().join("tally_counts.json")))
    }

    #[test]
    fn test_load_without_snapshot_is_all_zero() {
        let dir = TempDir::new().unwrap();
        let state = fresh_state(&dir);

        for category in Category::ALL {
            assert_eq!(state.count(category), 0);
        }
        assert!(state.active_category().is_none());
        assert!(!state.can_undo());
        assert!(!state.can_redo());
    }

    #[test]
    fn test_increment_undo_redo_scenario() {
        let dir = TempDir::new().unwrap();
        let mut state = fresh_state(&dir);

        state.increment(Category::OntopicGeneral);
        state.increment(Category::OntopicGeneral);
        assert_eq!(state.count(Category::OntopicGeneral), 2);
        assert_eq!(state.active_category(), Some(Category::OntopicGeneral));

        state.undo();
        assert_eq!(state.count(Category::OntopicGeneral), 1);
        assert!(state.can_redo());

        state.redo();
        assert_eq!(state.count(Category::OntopicGeneral), 2);
    }

    #[test]
    fn test_undo_only_reverts_most_recent() {
        let dir = TempDir::new().unwrap();
        let mut state = fresh_state(&dir);

        state.increment(Category::OffTopicProfane);
        state.increment(Category::OntopicHateSpeech);

        let event = state.undo();

        assert_eq!(
            event,
            Some(TallyEvent::Undone(Action::increment(
                Category::OntopicHateSpeech
            )))
        );
        assert_eq!(state.count(Category::OntopicHateSpeech), 0);
        assert_eq!(state.count(Category::OffTopicProfane), 1);
        // Single slot: nothing further to undo
        assert!(state.undo().is_none());
        assert_eq!(state.count(Category::OffTopicProfane), 1);
    }

    #[test]
    fn test_undo_without_action_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut state = fresh_state(&dir);

        assert!(state.undo().is_none());
        assert!(state.counts().is_empty());
        // No-ops do not touch the disk
        assert!(!state.store().path().exists());
    }

    #[test]
    fn test_increment_clears_pending_redo() {
        let dir = TempDir::new().unwrap();
        let mut state = fresh_state(&dir);

        state.increment(Category::OntopicCultural);
        state.undo();
        assert!(state.can_redo());

        state.increment(Category::OffTopicGeneral);

        assert!(!state.can_redo());
        assert!(state.redo().is_none());
        assert_eq!(state.count(Category::OntopicCultural), 0);
        assert_eq!(state.count(Category::OffTopicGeneral), 1);
    }

    #[test]
    fn test_counts_match_number_of_increments() {
        let dir = TempDir::new().unwrap();
        let mut state = fresh_state(&dir);

        let presses = [
            Category::OntopicProfane,
            Category::OffTopicCultural,
            Category::OntopicProfane,
            Category::OntopicProfane,
            Category::OffTopicOmcaFeedback,
        ];
        for category in presses {
            state.increment(category);
        }

        for category in Category::ALL {
            let expected = presses.iter().filter(|c| **c == category).count() as u64;
            assert_eq!(state.count(category), expected);
        }
    }

    #[test]
    fn test_request_reset_alone_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut state = fresh_state(&dir);
        state.increment(Category::OntopicGeneral);

        state.request_reset();

        assert!(state.is_reset_pending());
        assert_eq!(state.count(Category::OntopicGeneral), 1);
    }

    #[test]
    fn test_cancelled_reset_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut state = fresh_state(&dir);
        state.increment(Category::OntopicGeneral);

        state.request_reset();
        state.cancel_reset();

        assert!(!state.is_reset_pending());
        assert!(state.confirm_reset().is_none());
        assert_eq!(state.count(Category::OntopicGeneral), 1);
    }

    #[test]
    fn test_confirmed_reset_persists_all_zero_snapshot() {
        let dir = TempDir::new().unwrap();
        let mut state = fresh_state(&dir);
        state.increment(Category::OntopicGeneral);
        state.increment(Category::OffTopicHateSpeech);

        state.request_reset();
        assert_eq!(state.confirm_reset(), Some(TallyEvent::Reset));

        assert!(state.counts().is_empty());
        assert!(state.active_category().is_none());

        let reloaded = fresh_state(&dir);
        assert_eq!(reloaded.counts(), &CountTable::new());
    }

    #[test]
    fn test_reset_keeps_history() {
        let dir = TempDir::new().unwrap();
        let mut state = fresh_state(&dir);
        state.increment(Category::OffTopicCultural);
        state.increment(Category::OffTopicCultural);
        state.undo();

        state.request_reset();
        state.confirm_reset();

        // The undone increment can still be redone after the reset
        assert!(state.can_redo());
        state.redo();
        assert_eq!(state.count(Category::OffTopicCultural), 1);

        // Undo after a reset clamps instead of going negative
        state.request_reset();
        state.confirm_reset();
        state.undo();
        assert_eq!(state.count(Category::OffTopicCultural), 0);
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let dir = TempDir::new().unwrap();
        let mut state = fresh_state(&dir);

        state.increment(Category::OntopicOmcaFeedback);
        assert_eq!(fresh_state(&dir).count(Category::OntopicOmcaFeedback), 1);

        state.undo();
        assert_eq!(fresh_state(&dir).count(Category::OntopicOmcaFeedback), 0);

        state.redo();
        assert_eq!(fresh_state(&dir).count(Category::OntopicOmcaFeedback), 1);
    }

    #[test]
    fn test_reload_does_not_restore_history_or_highlight() {
        let dir = TempDir::new().unwrap();
        let mut state = fresh_state(&dir);
        state.increment(Category::OntopicGeneral);

        let reloaded = fresh_state(&dir);

        assert_eq!(reloaded.count(Category::OntopicGeneral), 1);
        assert!(reloaded.active_category().is_none());
        assert!(!reloaded.can_undo());
    }

    #[test]
    fn test_partial_snapshot_loads_all_categories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tally_counts.json");
        fs::write(
            &path,
            r#"{
                "Ontopic General": 5,
                "Ontopic Cultural": 1,
                "Ontopic Profane": 2,
                "Ontopic Hate Speech": 0,
                "Off Topic General": 3,
                "Off Topic Cultural": 0,
                "Off Topic Profane": 4
            }"#,
        )
        .unwrap();

        let state = TallyState::load(SnapshotStore::new(&path));

        assert_eq!(state.counts().iter().count(), Category::COUNT);
        assert_eq!(state.count(Category::OntopicGeneral), 5);
        assert_eq!(state.count(Category::OffTopicProfane), 4);
        assert_eq!(state.count(Category::OntopicOmcaFeedback), 0);
        assert_eq!(state.count(Category::OffTopicHateSpeech), 0);
        assert_eq!(state.count(Category::OffTopicOmcaFeedback), 0);
    }

    #[test]
    fn test_malformed_snapshot_falls_back_to_zero() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tally_counts.json");
        fs::write(&path, "not json at all").unwrap();

        let state = TallyState::load(SnapshotStore::new(&path));

        assert!(state.counts().is_empty());
    }

    #[test]
    fn test_save_failure_keeps_memory_state() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let mut state = TallyState::load(SnapshotStore::new(blocker.join("tally_counts.json")));
        let events = state.subscribe();

        state.increment(Category::OntopicProfane);

        assert_eq!(state.count(Category::OntopicProfane), 1);
        assert!(state.last_save_error().is_some());
        assert!(matches!(events.try_recv(), Ok(TallyEvent::SaveFailed(_))));
        assert_eq!(
            events.try_recv(),
            Ok(TallyEvent::Incremented(Category::OntopicProfane))
        );
    }

    #[test]
    fn test_subscribers_receive_events_in_order() {
        let dir = TempDir::new().unwrap();
        let mut state = fresh_state(&dir);
        let events = state.subscribe();

        state.increment(Category::OffTopicGeneral);
        state.undo();
        state.undo();
        state.redo();
        state.request_reset();
        state.confirm_reset();

        let received: Vec<TallyEvent> = events.try_iter().collect();
        let action = Action::increment(Category::OffTopicGeneral);
        assert_eq!(
            received,
            vec![
                TallyEvent::Incremented(Category::OffTopicGeneral),
                TallyEvent::Undone(action),
                TallyEvent::Redone(action),
                TallyEvent::Reset,
            ]
        );
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let dir = TempDir::new().unwrap();
        let mut state = fresh_state(&dir);
        drop(state.subscribe());

        state.increment(Category::OntopicGeneral);

        assert!(state.subscribers.is_empty());
    }
}
