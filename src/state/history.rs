use crate::core::Category;

/// A single increment that can be undone or redone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub category: Category,
    pub delta: u64,
}

impl Action {
    /// The action recorded for one button press
    pub fn increment(category: Category) -> Self {
        Self { category, delta: 1 }
    }
}

/// One-deep undo/redo history.
///
/// Holds at most one undoable and one redoable action. Recording a new action
/// overwrites the undo slot and empties the redo slot.
#[derive(Debug, Clone, Default)]
pub struct HistorySlot {
    last_action: Option<Action>,
    redo_action: Option<Action>,
}

impl HistorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly performed action and clear the redo slot
    pub fn record(&mut self, action: Action) {
        self.last_action = Some(action);
        self.redo_action = None;
    }

    /// Take the undoable action, moving it into the redo slot
    pub fn undo(&mut self) -> Option<Action> {
        let action = self.last_action.take()?;
        self.redo_action = Some(action);
        Some(action)
    }

    /// Take the redoable action, moving it back into the undo slot
    pub fn redo(&mut self) -> Option<Action> {
        let action = self.redo_action.take()?;
        self.last_action = Some(action);
        Some(action)
    }

    pub fn can_undo(&self) -> bool {
        self.last_action.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.redo_action.is_some()
    }

    pub fn last_action(&self) -> Option<Action> {
        self.last_action
    }

    pub fn redo_action(&self) -> Option<Action> {
        self.redo_action
    }
}
