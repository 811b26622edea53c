//! Table sources: lazily loaded references to localization tables.
//!
//! The configured table list is a sequence of [`TableSource`]s. Each
//! resolution pass asks every source for its table again, so a source that
//! was pending or failed last time is retried on the next pass.

use std::sync::{Arc, Condvar, Mutex, MutexGuard};

use crate::error::TableLoadError;
use crate::types::LocalizationTable;

/// Result of asking a [`TableSource`] for its table.
#[derive(Debug, Clone)]
pub enum TableLoad {
    /// The table is loaded and can join the pool.
    Ready(Arc<LocalizationTable>),
    /// No load has been started, or it was abandoned. Skipped for this pass.
    Pending,
    /// Loading failed. Skipped for this pass.
    Failed(TableLoadError),
}

/// A configured reference to a localization table.
pub trait TableSource: Send + Sync {
    /// Resolve this reference to a loaded table.
    ///
    /// This is allowed to block the calling thread until an in-flight load
    /// finishes. There is no timeout: a stalled load stalls the resolution
    /// pass that asked for it.
    fn load(&self) -> TableLoad;

    /// Short description used in log output.
    fn label(&self) -> Option<&str> {
        None
    }
}

impl TableSource for Arc<LocalizationTable> {
    fn load(&self) -> TableLoad {
        TableLoad::Ready(Arc::clone(self))
    }

    fn label(&self) -> Option<&str> {
        Some(self.display_name())
    }
}

#[derive(Debug)]
enum SlotState {
    Unloaded,
    Loading,
    Ready(Arc<LocalizationTable>),
    Failed(TableLoadError),
}

#[derive(Debug)]
struct SlotInner {
    label: Option<String>,
    state: Mutex<SlotState>,
    changed: Condvar,
}

/// A table source filled in by an asset loader, possibly on another thread.
///
/// Clones share the same slot. While a load is in flight (after
/// [`begin_loading`](Self::begin_loading) and before
/// [`complete`](Self::complete), [`fail`](Self::fail) or
/// [`unload`](Self::unload)), [`TableSource::load`] blocks until the loader
/// reports back.
///
/// # Example
///
/// ```
/// use loctab::{LocalizationTable, TableLoad, TableSlot, TableSource};
/// use std::thread;
///
/// let slot = TableSlot::named("menus.fr");
/// slot.begin_loading();
///
/// let loader = slot.clone();
/// let handle = thread::spawn(move || loader.complete(LocalizationTable::new("fr")));
///
/// // Blocks until the loader thread completes the slot.
/// assert!(matches!(slot.load(), TableLoad::Ready(_)));
/// handle.join().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct TableSlot {
    inner: Arc<SlotInner>,
}

impl Default for TableSlot {
    fn default() -> Self {
        TableSlot::with_state(None, SlotState::Unloaded)
    }
}

impl TableSlot {
    /// Create an unloaded slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unloaded slot with a label for log output.
    pub fn named(label: impl Into<String>) -> Self {
        TableSlot::with_state(Some(label.into()), SlotState::Unloaded)
    }

    /// Create a slot that already holds a table.
    pub fn ready(table: impl Into<Arc<LocalizationTable>>) -> Self {
        let table = table.into();
        let label = table.name().map(str::to_string);
        TableSlot::with_state(label, SlotState::Ready(table))
    }

    /// Create a slot whose load has already failed.
    pub fn failed(error: TableLoadError) -> Self {
        TableSlot::with_state(None, SlotState::Failed(error))
    }

    fn with_state(label: Option<String>, state: SlotState) -> Self {
        TableSlot {
            inner: Arc::new(SlotInner {
                label,
                state: Mutex::new(state),
                changed: Condvar::new(),
            }),
        }
    }

    /// Mark a load as in flight. Readers block from now until the load
    /// completes, fails, or is abandoned.
    pub fn begin_loading(&self) {
        self.set(SlotState::Loading);
    }

    /// Store the loaded table and wake blocked readers.
    pub fn complete(&self, table: impl Into<Arc<LocalizationTable>>) {
        self.set(SlotState::Ready(table.into()));
    }

    /// Record a failed load and wake blocked readers.
    pub fn fail(&self, error: TableLoadError) {
        self.set(SlotState::Failed(error));
    }

    /// Drop any loaded table or abandon an in-flight load.
    pub fn unload(&self) {
        self.set(SlotState::Unloaded);
    }

    /// Whether a load is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(*self.lock(), SlotState::Loading)
    }

    fn set(&self, state: SlotState) {
        *self.lock() = state;
        self.inner.changed.notify_all();
    }

    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.inner.state.lock().expect("table slot lock poisoned")
    }
}

impl TableSource for TableSlot {
    fn load(&self) -> TableLoad {
        let guard = self
            .inner
            .changed
            .wait_while(self.lock(), |state| matches!(state, SlotState::Loading))
            .expect("table slot lock poisoned");

        match &*guard {
            SlotState::Ready(table) => TableLoad::Ready(Arc::clone(table)),
            SlotState::Failed(error) => TableLoad::Failed(error.clone()),
            SlotState::Unloaded | SlotState::Loading => TableLoad::Pending,
        }
    }

    fn label(&self) -> Option<&str> {
        self.inner.label.as_deref()
    }
}
