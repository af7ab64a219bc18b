//! Calculator context: the imperative shell around the pure engine core.
//!
//! One [`Calculator`] is constructed at startup and owns every piece of
//! mutable state: the engine snapshot, the undo stack, the memory
//! register, the calculation journal, the storage backend, and the
//! subscribed observers. There are no globals; single-instance-per-process
//! semantics come from constructing it once and passing it around.
//!
//! Every state-mutating operation follows the same shape: run the pure
//! transition against the current snapshot, and only on success record the
//! pre-operation snapshot for undo, commit, persist, and notify. A failed
//! transition leaves everything exactly as it was.

use crate::engine::{advance, EngineError, EngineState, InputEvent, Outcome};
use crate::journal::{CalculationJournal, JournalEntry};
use crate::memory::MemoryRegistry;
use crate::observe::CalculatorObserver;
use crate::storage::{keys, StorageBackend};
use crate::undo::UndoStack;
use serde_json::json;
use tracing::{debug, warn};

/// The per-process calculator context.
///
/// # Example
///
/// ```rust
/// use tally::arithmetic::Operator;
/// use tally::calculator::Calculator;
/// use tally::engine::InputEvent;
/// use tally::storage::MemoryStore;
///
/// let mut calc = Calculator::new(MemoryStore::new());
/// calc.handle(InputEvent::Digit(5)).unwrap();
/// calc.handle(InputEvent::Operator(Operator::Add)).unwrap();
/// calc.handle(InputEvent::Digit(3)).unwrap();
/// calc.handle(InputEvent::Equals).unwrap();
///
/// assert_eq!(calc.display(), "8");
/// assert_eq!(calc.journal_entries()[0].expression, "5 + 3");
/// ```
pub struct Calculator<S: StorageBackend> {
    state: EngineState,
    undo: UndoStack,
    memory: MemoryRegistry,
    journal: CalculationJournal,
    storage: S,
    observers: Vec<Box<dyn CalculatorObserver>>,
}

impl<S: StorageBackend> Calculator<S> {
    /// Construct the calculator, restoring memory and journal from storage.
    ///
    /// Absent or corrupt persisted data falls back to empty defaults;
    /// engine operand/operator state always starts fresh.
    pub fn new(storage: S) -> Self {
        let memory = restore_memory(&storage);
        let journal = restore_journal(&storage);
        Self {
            state: EngineState::default(),
            undo: UndoStack::default(),
            memory,
            journal,
            storage,
            observers: Vec::new(),
        }
    }

    /// Subscribe a view observer.
    pub fn subscribe(&mut self, observer: Box<dyn CalculatorObserver>) {
        self.observers.push(observer);
    }

    /// The current engine state.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// The operand currently shown on the display.
    pub fn display(&self) -> &str {
        &self.state.current_operand
    }

    /// Journal entries, newest first.
    pub fn journal_entries(&self) -> &[JournalEntry] {
        self.journal.entries()
    }

    /// The raw memory register value.
    pub fn memory_value(&self) -> f64 {
        self.memory.value()
    }

    /// Number of operations currently undoable.
    pub fn undo_depth(&self) -> usize {
        self.undo.depth()
    }

    /// Borrow the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Tear down the context, handing back the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Handle one normalized input event.
    ///
    /// On success the pre-operation snapshot becomes undoable and any
    /// journal record is appended, persisted, and announced. On failure
    /// the error is announced via `on_error` and returned; no state
    /// changes are visible.
    pub fn handle(&mut self, event: InputEvent) -> Result<(), EngineError> {
        match advance(&self.state, &event) {
            Ok(Outcome { next, journal }) => {
                if next != self.state {
                    self.undo.push(self.state.clone());
                    self.state = next;
                    self.notify_state();
                }
                if let Some(record) = journal {
                    self.journal.append(record.expression, record.result);
                    self.persist_journal();
                    self.notify_history();
                }
                Ok(())
            }
            Err(err) => {
                let message = err.to_string();
                for observer in &mut self.observers {
                    observer.on_error(&message);
                }
                Err(err)
            }
        }
    }

    /// Undo the most recent engine mutation.
    ///
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.undo.undo() {
            Some(before) => {
                self.state = before;
                self.notify_state();
                true
            }
            None => false,
        }
    }

    /// Set the memory register.
    pub fn memory_store(&mut self, value: f64) {
        self.memory.store(value);
        self.persist_memory();
        self.notify_memory();
    }

    /// Add to the memory register.
    pub fn memory_add(&mut self, delta: f64) {
        self.memory.add(delta);
        self.persist_memory();
        self.notify_memory();
    }

    /// Subtract from the memory register.
    pub fn memory_subtract(&mut self, delta: f64) {
        self.memory.subtract(delta);
        self.persist_memory();
        self.notify_memory();
    }

    /// Reset the memory register to zero.
    pub fn memory_clear(&mut self) {
        self.memory.clear();
        self.persist_memory();
        self.notify_memory();
    }

    /// The memory register as a formatted display string.
    pub fn memory_recall(&self) -> String {
        self.memory.recall()
    }

    /// Empty the calculation journal.
    pub fn clear_journal(&mut self) {
        self.journal.clear();
        self.persist_journal();
        self.notify_history();
    }

    fn persist_memory(&mut self) {
        let value = json!(self.memory.value());
        if let Err(err) = self.storage.save(keys::MEMORY, &value) {
            warn!(key = keys::MEMORY, error = %err, "save failed; value kept for this session only");
        }
    }

    fn persist_journal(&mut self) {
        match serde_json::to_value(self.journal.entries()) {
            Ok(value) => {
                if let Err(err) = self.storage.save(keys::JOURNAL, &value) {
                    warn!(key = keys::JOURNAL, error = %err, "save failed; entries kept for this session only");
                }
            }
            Err(err) => {
                warn!(key = keys::JOURNAL, error = %err, "journal did not serialize");
            }
        }
    }

    fn notify_state(&mut self) {
        let state = self.state.clone();
        for observer in &mut self.observers {
            observer.on_state_changed(&state);
        }
    }

    fn notify_memory(&mut self) {
        let value = self.memory.value();
        for observer in &mut self.observers {
            observer.on_memory_changed(value);
        }
    }

    fn notify_history(&mut self) {
        let entries = self.journal.entries().to_vec();
        for observer in &mut self.observers {
            observer.on_history_changed(&entries);
        }
    }
}

fn restore_memory<S: StorageBackend>(storage: &S) -> MemoryRegistry {
    match storage.load(keys::MEMORY) {
        Ok(Some(value)) => match value.as_f64() {
            Some(stored) => {
                debug!(value = stored, "memory register restored");
                MemoryRegistry::restore(stored)
            }
            None => {
                warn!(key = keys::MEMORY, "persisted memory is not numeric; starting at zero");
                MemoryRegistry::new()
            }
        },
        Ok(None) => MemoryRegistry::new(),
        Err(err) => {
            warn!(key = keys::MEMORY, error = %err, "load failed; starting at zero");
            MemoryRegistry::new()
        }
    }
}

fn restore_journal<S: StorageBackend>(storage: &S) -> CalculationJournal {
    match storage.load(keys::JOURNAL) {
        Ok(Some(value)) => match serde_json::from_value::<Vec<JournalEntry>>(value) {
            Ok(entries) => {
                debug!(entries = entries.len(), "calculation journal restored");
                CalculationJournal::restore(entries)
            }
            Err(err) => {
                warn!(key = keys::JOURNAL, error = %err, "persisted journal is corrupt; starting empty");
                CalculationJournal::new()
            }
        },
        Ok(None) => CalculationJournal::new(),
        Err(err) => {
            warn!(key = keys::JOURNAL, error = %err, "load failed; starting empty");
            CalculationJournal::new()
        }
    }
}
