use core::fmt;
use core::marker::PhantomData;
use core::time::Duration;

use super::accepts::Accepts;
use crate::behavior::{on, Behavior, BehaviorBuilder, Behaviors, Reply, TimeoutDefinition};

/// A [`Behavior`] whose handler set is statically bound to protocol `P`.
///
/// Every handler added through [`TypedBehaviors`] carries a
/// `P: Accepts<T>` obligation, so the compiled behavior can only contain
/// handlers for message types the protocol admits.
pub struct TypedBehavior<P> {
  inner: Behavior,
  _protocol: PhantomData<fn() -> P>,
}

impl<P> TypedBehavior<P> {
  pub(crate) fn from_untyped(inner: Behavior) -> Self {
    Self {
      inner,
      _protocol: PhantomData,
    }
  }

  /// Erases the protocol, yielding the underlying [`Behavior`].
  #[must_use]
  pub fn into_untyped(self) -> Behavior {
    self.inner
  }

  /// Timeout duration of this behavior, if configured.
  #[must_use]
  pub fn timeout(&self) -> Option<Duration> {
    self.inner.timeout()
  }

  /// `true` when this behavior has no handlers and no timeout.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }
}

impl<P> Default for TypedBehavior<P> {
  fn default() -> Self {
    Self::from_untyped(Behavior::default())
  }
}

impl<P> Clone for TypedBehavior<P> {
  fn clone(&self) -> Self {
    Self::from_untyped(self.inner.clone())
  }
}

impl<P> fmt::Debug for TypedBehavior<P> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TypedBehavior").field("inner", &self.inner).finish()
  }
}

/// Entry point of the protocol-bound behavior DSL.
///
/// ```
/// use spindle_actor_core::{Accepts, Message, TypedBehaviors};
///
/// struct CounterProtocol;
/// impl Accepts<u32> for CounterProtocol {}
///
/// let behavior = TypedBehaviors::<CounterProtocol>::with(|n: u32| Message::new(n + 1)).build();
/// assert!(!behavior.is_empty());
/// ```
pub struct TypedBehaviors<P> {
  _protocol: PhantomData<fn() -> P>,
}

impl<P> TypedBehaviors<P>
where
  P: 'static,
{
  /// Starts a builder from the highest-priority handler.
  #[must_use]
  pub fn with<T, R, F>(handler: F) -> TypedBehaviorBuilder<P>
  where
    P: Accepts<T>,
    T: Clone + Send + 'static,
    R: Reply,
    F: Fn(T) -> R + Send + Sync + 'static, {
    TypedBehaviorBuilder {
      builder: Behaviors::with(on(handler)),
      _protocol: PhantomData,
    }
  }
}

/// Accumulates protocol-checked handlers; handlers added first match first.
#[must_use]
pub struct TypedBehaviorBuilder<P> {
  builder: BehaviorBuilder,
  _protocol: PhantomData<fn() -> P>,
}

impl<P> TypedBehaviorBuilder<P>
where
  P: 'static,
{
  /// Appends a handler for a message type the protocol admits.
  pub fn on<T, R, F>(self, handler: F) -> Self
  where
    P: Accepts<T>,
    T: Clone + Send + 'static,
    R: Reply,
    F: Fn(T) -> R + Send + Sync + 'static, {
    Self {
      builder: self.builder.with(on(handler)),
      _protocol: PhantomData,
    }
  }

  /// Finishes the behavior with a timeout. Terminal.
  pub fn timeout(self, definition: TimeoutDefinition) -> TypedBehavior<P> {
    TypedBehavior::from_untyped(self.builder.timeout(definition))
  }

  /// Finishes the behavior without a timeout.
  pub fn build(self) -> TypedBehavior<P> {
    TypedBehavior::from_untyped(self.builder.build())
  }
}
