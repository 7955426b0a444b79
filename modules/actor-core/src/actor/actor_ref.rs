use core::fmt;
use core::time::Duration;
use std::sync::Arc;

use super::actor_cell::{Actor, ActorCell};
use super::actor_id::ActorId;
use crate::behavior::Behavior;
use crate::execution_host::ExecutionHost;
use crate::messaging::Message;

/// Object-safe view of an [`ActorCell`] used by erased handles and the
/// execution host.
pub(crate) trait AnyActorCell: Send + Sync {
  fn id(&self) -> ActorId;
  fn is_priority_aware(&self) -> bool;
  fn is_detached(&self) -> bool;
  fn is_running(&self) -> bool;
  fn resume(&self);
  fn process(&self, message: &Message) -> Option<Message>;
  fn install_behavior(&self, behavior: Behavior);
  fn timeout(&self) -> Option<Duration>;
  fn handle_timeout(&self);
}

impl<A> AnyActorCell for ActorCell<A>
where
  A: Actor,
{
  fn id(&self) -> ActorId {
    ActorCell::id(self)
  }

  fn is_priority_aware(&self) -> bool {
    ActorCell::is_priority_aware(self)
  }

  fn is_detached(&self) -> bool {
    ActorCell::is_detached(self)
  }

  fn is_running(&self) -> bool {
    ActorCell::is_running(self)
  }

  fn resume(&self) {
    ActorCell::resume(self);
  }

  fn process(&self, message: &Message) -> Option<Message> {
    ActorCell::process(self, message)
  }

  fn install_behavior(&self, behavior: Behavior) {
    ActorCell::install_behavior(self, behavior);
  }

  fn timeout(&self) -> Option<Duration> {
    ActorCell::timeout(self)
  }

  fn handle_timeout(&self) {
    ActorCell::handle_timeout(self);
  }
}

/// Type-erased, reference-counted actor handle.
///
/// This is what functor-based spawns return and what collaborator seams
/// ([`ExecutionHost`], groups) consume. Cheap to clone and safe to share
/// across threads.
#[derive(Clone)]
pub struct ActorRef {
  cell: Arc<dyn AnyActorCell>,
}

impl ActorRef {
  pub(crate) fn from_cell(cell: Arc<dyn AnyActorCell>) -> Self {
    Self { cell }
  }

  /// Identity of the underlying actor.
  #[must_use]
  pub fn id(&self) -> ActorId {
    self.cell.id()
  }

  /// Whether the actor's mailbox honors message priorities.
  #[must_use]
  pub fn is_priority_aware(&self) -> bool {
    self.cell.is_priority_aware()
  }

  /// Whether the actor requires a dedicated execution context.
  #[must_use]
  pub fn is_detached(&self) -> bool {
    self.cell.is_detached()
  }

  /// Whether the actor has begun processing.
  #[must_use]
  pub fn is_running(&self) -> bool {
    self.cell.is_running()
  }

  /// Wakes a lazily initialized actor. Idempotent.
  pub fn resume(&self) {
    self.cell.resume();
  }

  /// Feeds a message into the actor's current behavior.
  #[must_use]
  pub fn process(&self, message: &Message) -> Option<Message> {
    self.cell.process(message)
  }

  /// Replaces the actor's current behavior.
  pub fn install_behavior(&self, behavior: Behavior) {
    self.cell.install_behavior(behavior);
  }

  /// Timeout duration of the actor's current behavior, if configured.
  #[must_use]
  pub fn timeout(&self) -> Option<Duration> {
    self.cell.timeout()
  }

  /// Fires the current behavior's timeout callback.
  ///
  /// # Panics
  /// Panics when the current behavior has no timeout configured.
  pub fn handle_timeout(&self) {
    self.cell.handle_timeout();
  }
}

impl fmt::Debug for ActorRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ActorRef").field("id", &self.id()).finish()
  }
}

impl PartialEq for ActorRef {
  fn eq(&self, other: &Self) -> bool {
    self.id() == other.id()
  }
}

impl Eq for ActorRef {}

/// Strongly typed, reference-counted handle returned by class-based spawns.
pub struct ActorHandle<A>
where
  A: Actor, {
  cell: Arc<ActorCell<A>>,
}

impl<A> ActorHandle<A>
where
  A: Actor,
{
  pub(crate) fn new(cell: ActorCell<A>) -> Self {
    Self { cell: Arc::new(cell) }
  }

  /// Identity of the underlying actor.
  #[must_use]
  pub fn id(&self) -> ActorId {
    self.cell.id()
  }

  /// Erases the handle into an [`ActorRef`].
  #[must_use]
  pub fn untyped(&self) -> ActorRef {
    ActorRef::from_cell(self.cell.clone())
  }

  /// Whether the actor's mailbox honors message priorities.
  #[must_use]
  pub fn is_priority_aware(&self) -> bool {
    self.cell.is_priority_aware()
  }

  pub(crate) fn set_priority_aware(&self, value: bool) {
    self.cell.set_priority_aware(value);
  }

  /// Whether the actor requires a dedicated execution context.
  #[must_use]
  pub fn is_detached(&self) -> bool {
    self.cell.is_detached()
  }

  pub(crate) fn set_detached(&self, value: bool) {
    self.cell.set_detached(value);
  }

  /// Whether the actor has begun processing.
  #[must_use]
  pub fn is_running(&self) -> bool {
    self.cell.is_running()
  }

  /// Wakes a lazily initialized actor. Idempotent.
  pub fn resume(&self) {
    self.cell.resume();
  }

  /// Feeds a message into the actor's current behavior.
  #[must_use]
  pub fn process(&self, message: &Message) -> Option<Message> {
    self.cell.process(message)
  }

  /// Replaces the actor's current behavior.
  pub fn install_behavior(&self, behavior: Behavior) {
    self.cell.install_behavior(behavior);
  }

  /// Timeout duration of the actor's current behavior, if configured.
  #[must_use]
  pub fn timeout(&self) -> Option<Duration> {
    self.cell.timeout()
  }

  /// Fires the current behavior's timeout callback.
  ///
  /// # Panics
  /// Panics when the current behavior has no timeout configured.
  pub fn handle_timeout(&self) {
    self.cell.handle_timeout();
  }

  /// Drives a blocking actor's receive loop once.
  pub fn run_blocking(&self) {
    self.cell.run_blocking();
  }

  /// Runs a closure against the actor state, serialized with dispatch.
  pub fn with_state<R>(&self, f: impl FnOnce(&mut A) -> R) -> R {
    self.cell.with_state(f)
  }

  pub(crate) fn launch<H>(&self, host: &H, lazy_init: bool, hide: bool)
  where
    H: ExecutionHost + ?Sized, {
    if !lazy_init {
      self.cell.resume();
    }
    host.launch(self.untyped(), lazy_init, hide);
  }
}

impl<A> Clone for ActorHandle<A>
where
  A: Actor,
{
  fn clone(&self) -> Self {
    Self { cell: self.cell.clone() }
  }
}

impl<A> fmt::Debug for ActorHandle<A>
where
  A: Actor,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ActorHandle").field("id", &self.id()).finish()
  }
}
