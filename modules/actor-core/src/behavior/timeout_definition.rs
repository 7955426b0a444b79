use core::fmt;
use core::time::Duration;
use std::sync::Arc;

/// Pairs a duration with a zero-argument callback.
///
/// Consumed only by behavior construction: the execution host is expected to
/// fire the callback through [`crate::behavior::Behavior::handle_timeout`]
/// once the duration elapses without a matching message.
#[derive(Clone)]
pub struct TimeoutDefinition {
  duration: Duration,
  callback: Arc<dyn Fn() + Send + Sync>,
}

impl TimeoutDefinition {
  /// Creates a timeout definition from a duration and callback.
  pub fn new<F>(duration: Duration, callback: F) -> Self
  where
    F: Fn() + Send + Sync + 'static, {
    Self {
      duration,
      callback: Arc::new(callback),
    }
  }

  /// Duration after which the callback should fire.
  #[must_use]
  pub const fn duration(&self) -> Duration {
    self.duration
  }

  pub(crate) fn fire(&self) {
    (self.callback)();
  }
}

impl fmt::Debug for TimeoutDefinition {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TimeoutDefinition").field("duration", &self.duration).finish()
  }
}

/// Shorthand constructor for a [`TimeoutDefinition`].
///
/// # Arguments
/// * `duration` - Time to wait for a matching message
/// * `callback` - Invoked when the duration elapses
pub fn after<F>(duration: Duration, callback: F) -> TimeoutDefinition
where
  F: Fn() + Send + Sync + 'static, {
  TimeoutDefinition::new(duration, callback)
}
