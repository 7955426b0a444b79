use core::time::Duration;

use portable_atomic::{AtomicBool, Ordering};
use spin::{Mutex, RwLock};

use super::actor_id::ActorId;
use crate::behavior::Behavior;
use crate::messaging::Message;

/// Execution model an actor type declares at compile time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExecutionModel {
  /// Cooperatively scheduled; reactive logic comes from `make_behavior`.
  EventBased,
  /// Runs its own receive loop (`act`) on a dedicated execution context.
  Blocking,
}

impl ExecutionModel {
  /// Returns `true` for the blocking model.
  #[must_use]
  pub const fn is_blocking(self) -> bool {
    matches!(self, Self::Blocking)
  }
}

/// An actor implementation admitted into execution by the spawn launcher.
///
/// Event-based actors override [`Actor::make_behavior`]; blocking actors set
/// [`Actor::EXECUTION_MODEL`] to [`ExecutionModel::Blocking`] and override
/// [`Actor::act`] instead.
pub trait Actor: Send + 'static {
  /// Execution model of this actor type, consulted by spawn validation.
  const EXECUTION_MODEL: ExecutionModel = ExecutionModel::EventBased;

  /// Produces the initial behavior of an event-based actor.
  ///
  /// The default returns an empty behavior, leaving the actor idle.
  fn make_behavior(&mut self) -> Behavior {
    Behavior::default()
  }

  /// Entry point of a blocking actor's receive loop. Default: no-op.
  fn act(&mut self) {}
}

/// Runtime cell owning an actor instance and its lifecycle state.
///
/// The execution host guarantees serialized delivery per actor; the cell
/// therefore never locks the handler list itself. The current behavior is
/// swapped whole under a read-write lock, so an in-flight dispatch keeps the
/// implementation it started with.
pub struct ActorCell<A>
where
  A: Actor, {
  id: ActorId,
  priority_aware: AtomicBool,
  detached: AtomicBool,
  running: AtomicBool,
  state: Mutex<A>,
  behavior: RwLock<Behavior>,
}

impl<A> ActorCell<A>
where
  A: Actor,
{
  pub(crate) fn new(actor: A) -> Self {
    Self {
      id: ActorId::allocate(),
      priority_aware: AtomicBool::new(false),
      detached: AtomicBool::new(false),
      running: AtomicBool::new(false),
      state: Mutex::new(actor),
      behavior: RwLock::new(Behavior::default()),
    }
  }

  /// Identity assigned at construction.
  #[must_use]
  pub fn id(&self) -> ActorId {
    self.id
  }

  /// Whether the actor's mailbox honors message priorities.
  #[must_use]
  pub fn is_priority_aware(&self) -> bool {
    self.priority_aware.load(Ordering::Acquire)
  }

  pub(crate) fn set_priority_aware(&self, value: bool) {
    self.priority_aware.store(value, Ordering::Release);
  }

  /// Whether the actor requires a dedicated execution context.
  #[must_use]
  pub fn is_detached(&self) -> bool {
    self.detached.load(Ordering::Acquire)
  }

  pub(crate) fn set_detached(&self, value: bool) {
    self.detached.store(value, Ordering::Release);
  }

  /// Whether the actor has begun processing.
  #[must_use]
  pub fn is_running(&self) -> bool {
    self.running.load(Ordering::Acquire)
  }

  /// Begins processing: installs the initial behavior of an event-based
  /// actor and marks the cell running. Idempotent; used by the host to wake
  /// a lazily initialized actor.
  pub fn resume(&self) {
    if self.running.swap(true, Ordering::AcqRel) {
      return;
    }
    if !A::EXECUTION_MODEL.is_blocking() {
      let initial = self.state.lock().make_behavior();
      *self.behavior.write() = initial;
    }
  }

  /// Feeds a message into the current behavior.
  ///
  /// Returns the first non-empty handler result, or `None` on a miss. The
  /// host must not deliver before the actor runs; such a delivery is dropped
  /// with a warning.
  #[must_use]
  pub fn process(&self, message: &Message) -> Option<Message> {
    if !self.is_running() {
      tracing::warn!(id = %self.id, "message delivered to an actor that has not been resumed");
      return None;
    }
    // clone the handle (cheap reference bump) so a concurrent reassignment
    // cannot pull the implementation out from under this dispatch
    let behavior = self.behavior.read().clone();
    behavior.invoke(message)
  }

  /// Replaces the actor's current behavior (a whole-reference swap).
  pub fn install_behavior(&self, behavior: Behavior) {
    self.behavior.write().assign(behavior);
  }

  /// Timeout duration of the current behavior, if configured.
  #[must_use]
  pub fn timeout(&self) -> Option<Duration> {
    self.behavior.read().timeout()
  }

  /// Fires the current behavior's timeout callback.
  ///
  /// # Panics
  /// Panics when the current behavior has no timeout configured.
  pub fn handle_timeout(&self) {
    let behavior = self.behavior.read().clone();
    behavior.handle_timeout();
  }

  /// Drives a blocking actor's receive loop once.
  pub fn run_blocking(&self) {
    self.state.lock().act();
  }

  /// Runs a closure against the actor state, serialized with dispatch.
  pub fn with_state<R>(&self, f: impl FnOnce(&mut A) -> R) -> R {
    f(&mut self.state.lock())
  }
}
