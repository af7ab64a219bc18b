//! Bounded, single-direction undo history over engine state snapshots.
//!
//! Each mutating operation records the snapshot taken immediately before
//! it ran. Undo restores the most recent snapshot and steps the cursor
//! back; executing a new operation after an undo discards everything
//! beyond the cursor, so no redo tail ever survives.

use crate::engine::EngineState;

/// Default number of undo steps retained.
pub const UNDO_CAPACITY: usize = 50;

/// One recorded undo unit: the state before a mutating operation.
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    before: EngineState,
}

impl Command {
    /// The snapshot taken before the operation ran.
    pub fn before(&self) -> &EngineState {
        &self.before
    }
}

/// Bounded stack of pre-operation snapshots.
///
/// # Example
///
/// ```rust
/// use tally::engine::EngineState;
/// use tally::undo::UndoStack;
///
/// let mut stack = UndoStack::default();
/// let initial = EngineState::default();
///
/// // Snapshot taken before some mutating operation ran.
/// stack.push(initial.clone());
/// assert_eq!(stack.undo(), Some(initial));
/// assert_eq!(stack.undo(), None);
/// ```
#[derive(Clone, Debug)]
pub struct UndoStack {
    commands: Vec<Command>,
    cursor: usize,
    capacity: usize,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new(UNDO_CAPACITY)
    }
}

impl UndoStack {
    /// Create a stack retaining at most `capacity` snapshots.
    pub fn new(capacity: usize) -> Self {
        Self {
            commands: Vec::new(),
            cursor: 0,
            capacity,
        }
    }

    /// Record the snapshot taken before a completed operation.
    ///
    /// Discards any commands beyond the cursor (the redo tail left by
    /// earlier undos), then trims the oldest entries past capacity.
    pub fn push(&mut self, before: EngineState) {
        self.commands.truncate(self.cursor);
        self.commands.push(Command { before });
        if self.commands.len() > self.capacity {
            let excess = self.commands.len() - self.capacity;
            self.commands.drain(..excess);
        }
        self.cursor = self.commands.len();
    }

    /// Step back one operation, returning the snapshot to restore.
    ///
    /// Returns `None` when there is nothing to undo; a reported
    /// condition, not an error.
    pub fn undo(&mut self) -> Option<EngineState> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.commands[self.cursor].before.clone())
    }

    /// Number of operations currently undoable.
    pub fn depth(&self) -> usize {
        self.cursor
    }

    /// True when nothing can be undone.
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// The retention limit this stack was created with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
