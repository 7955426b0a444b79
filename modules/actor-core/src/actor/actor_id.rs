use core::fmt;

use portable_atomic::{AtomicU64, Ordering};

static NEXT_ACTOR_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identity assigned to an actor at construction time.
///
/// Allocation order is a capability of the actor subsystem; this core only
/// relies on the id existing before the pre-launch hook runs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ActorId(u64);

impl ActorId {
  pub(crate) fn allocate() -> Self {
    Self(NEXT_ACTOR_ID.fetch_add(1, Ordering::Relaxed))
  }

  /// Raw numeric value of the id.
  #[must_use]
  pub const fn value(self) -> u64 {
    self.0
  }
}

impl fmt::Display for ActorId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}
