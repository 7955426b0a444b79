use core::fmt;
use core::marker::PhantomData;
use core::time::Duration;

use super::accepts::Accepts;
use super::typed_behavior::TypedBehavior;
use crate::actor::{ActorId, ActorRef};
use crate::messaging::Message;

/// Actor handle that only admits messages of protocol `P`.
///
/// Wraps an [`ActorRef`]; the protocol exists purely at the type level and
/// adds no runtime cost.
pub struct TypedActorRef<P> {
  inner: ActorRef,
  _protocol: PhantomData<fn() -> P>,
}

impl<P> TypedActorRef<P>
where
  P: 'static,
{
  pub(crate) fn from_untyped(inner: ActorRef) -> Self {
    Self {
      inner,
      _protocol: PhantomData,
    }
  }

  /// Identity of the underlying actor.
  #[must_use]
  pub fn id(&self) -> ActorId {
    self.inner.id()
  }

  /// Whether the actor has begun processing.
  #[must_use]
  pub fn is_running(&self) -> bool {
    self.inner.is_running()
  }

  /// Wakes a lazily initialized actor. Idempotent.
  pub fn resume(&self) {
    self.inner.resume();
  }

  /// Feeds a protocol-admitted message into the actor's current behavior.
  #[must_use]
  pub fn process<T>(&self, message: T) -> Option<Message>
  where
    P: Accepts<T>,
    T: Send + 'static, {
    self.inner.process(&Message::new(message))
  }

  /// Replaces the actor's current behavior with a protocol-checked one.
  pub fn install_behavior(&self, behavior: TypedBehavior<P>) {
    self.inner.install_behavior(behavior.into_untyped());
  }

  /// Timeout duration of the actor's current behavior, if configured.
  #[must_use]
  pub fn timeout(&self) -> Option<Duration> {
    self.inner.timeout()
  }

  /// Fires the current behavior's timeout callback.
  ///
  /// # Panics
  /// Panics when the current behavior has no timeout configured.
  pub fn handle_timeout(&self) {
    self.inner.handle_timeout();
  }

  /// Erases the protocol, yielding the underlying [`ActorRef`].
  #[must_use]
  pub fn untyped(&self) -> ActorRef {
    self.inner.clone()
  }
}

impl<P> Clone for TypedActorRef<P> {
  fn clone(&self) -> Self {
    Self {
      inner: self.inner.clone(),
      _protocol: PhantomData,
    }
  }
}

impl<P> fmt::Debug for TypedActorRef<P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TypedActorRef").field("id", &self.inner.id()).finish()
  }
}

impl<P> PartialEq for TypedActorRef<P> {
  fn eq(&self, other: &Self) -> bool {
    self.inner == other.inner
  }
}

impl<P> Eq for TypedActorRef<P> {}
