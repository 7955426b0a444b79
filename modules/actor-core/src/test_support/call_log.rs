use std::sync::Arc;

use spin::Mutex;

/// Shared, append-only log used to assert call ordering across
/// collaborator doubles.
#[derive(Clone, Default)]
pub struct CallLog {
  entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
  /// Creates an empty log.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends one entry.
  pub fn record(&self, entry: impl Into<String>) {
    self.entries.lock().push(entry.into());
  }

  /// Snapshot of all entries in append order.
  #[must_use]
  pub fn entries(&self) -> Vec<String> {
    self.entries.lock().clone()
  }
}
