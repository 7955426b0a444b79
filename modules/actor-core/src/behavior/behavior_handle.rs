use core::fmt;
use core::time::Duration;
use std::sync::Arc;

use super::behavior_impl::BehaviorImpl;
use super::message_case::HandlerCase;
use crate::messaging::Message;

/// Value-semantic handle over an immutable, shared handler set.
///
/// Default-constructed behaviors are empty: they match nothing and carry no
/// timeout. Actors reassign the handle (via [`Behavior::assign`]) whenever
/// they change reactive state; the previous implementation stays alive for
/// any in-flight dispatch that still references it.
#[derive(Clone, Default)]
pub struct Behavior {
  inner: Option<Arc<BehaviorImpl>>,
}

impl Behavior {
  pub(crate) fn from_impl(behavior_impl: BehaviorImpl) -> Self {
    Self {
      inner: Some(Arc::new(behavior_impl)),
    }
  }

  /// Runs the handlers against `message` and returns the first non-empty
  /// result, or `None` when no handler matches (or the behavior is empty).
  ///
  /// A miss is not an error; the execution host applies its own miss-policy.
  #[must_use]
  pub fn invoke(&self, message: &Message) -> Option<Message> {
    self.inner.as_ref().and_then(|behavior_impl| behavior_impl.invoke(message))
  }

  /// Invokes the configured timeout callback.
  ///
  /// # Panics
  /// Panics when no timeout is configured: firing a timer this behavior
  /// never asked for masks scheduler bugs, so the violation fails loudly.
  pub fn handle_timeout(&self) {
    match &self.inner {
      Some(behavior_impl) => behavior_impl.handle_timeout(),
      None => empty_behavior_timeout(),
    }
  }

  /// Duration after which receive operations using this behavior should
  /// time out, if a timeout is configured.
  #[must_use]
  pub fn timeout(&self) -> Option<Duration> {
    self.inner.as_ref().and_then(|behavior_impl| behavior_impl.timeout())
  }

  /// Returns `true` when no implementation is attached.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.inner.is_none()
  }

  /// Replaces the shared implementation reference.
  ///
  /// This is a plain reference swap; the previous implementation is never
  /// mutated in place.
  pub fn assign(&mut self, other: Behavior) {
    self.inner = other.inner;
  }

  pub(crate) fn cases(&self) -> &[HandlerCase] {
    self.inner.as_ref().map_or(&[], |behavior_impl| behavior_impl.cases())
  }
}

impl fmt::Debug for Behavior {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Behavior")
      .field("cases", &self.cases().len())
      .field("timeout", &self.timeout())
      .finish()
  }
}

#[allow(clippy::panic)]
fn empty_behavior_timeout() -> ! {
  panic!("handle_timeout() called on an empty behavior");
}
