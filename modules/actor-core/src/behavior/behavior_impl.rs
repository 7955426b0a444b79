use core::time::Duration;

use super::message_case::HandlerCase;
use super::timeout_definition::TimeoutDefinition;

/// Immutable, merged handler set shared by [`super::Behavior`] handles.
///
/// Built once and never mutated afterwards, so it is safe to read from many
/// actors and threads concurrently. Replacement, not mutation, is how an
/// actor changes its reactive state.
pub(crate) struct BehaviorImpl {
  cases: Vec<HandlerCase>,
  timeout: Option<TimeoutDefinition>,
}

impl BehaviorImpl {
  pub(crate) fn new(cases: Vec<HandlerCase>, timeout: Option<TimeoutDefinition>) -> Self {
    Self { cases, timeout }
  }

  /// Tries the handlers in order and returns the first non-empty result.
  pub(crate) fn invoke(&self, message: &crate::messaging::Message) -> Option<crate::messaging::Message> {
    self.cases.iter().find_map(|case| case(message))
  }

  /// Fires the configured timeout callback.
  ///
  /// Precondition: a timeout is configured. A missing timeout means the
  /// caller (the execution host) armed a timer this behavior never asked
  /// for, which is a scheduler bug worth surfacing immediately.
  pub(crate) fn handle_timeout(&self) {
    match &self.timeout {
      Some(timeout) => timeout.fire(),
      None => unreachable_timeout(),
    }
  }

  pub(crate) fn timeout(&self) -> Option<Duration> {
    self.timeout.as_ref().map(TimeoutDefinition::duration)
  }

  pub(crate) fn cases(&self) -> &[HandlerCase] {
    &self.cases
  }
}

#[allow(clippy::panic)]
fn unreachable_timeout() -> ! {
  panic!("handle_timeout() called on a behavior without a timeout definition");
}
