use super::behavior_handle::Behavior;
use super::behavior_impl::BehaviorImpl;
use super::message_case::{HandlerCase, MessageCase};
use super::timeout_definition::TimeoutDefinition;

/// Behavior DSL entry points.
///
/// Every entry point requires at least one input, so a zero-input merge is
/// unrepresentable. A timeout can only be attached through the terminal
/// [`BehaviorBuilder::timeout`], which makes "at most one timeout, last
/// input" a property of the types rather than a runtime check.
pub struct Behaviors;

impl Behaviors {
  /// Starts a builder from a single message case.
  #[must_use]
  pub fn with(case: MessageCase) -> BehaviorBuilder {
    BehaviorBuilder {
      cases: vec![case.into_handler()],
    }
  }

  /// Starts a builder from an existing behavior's handler sequence.
  ///
  /// The input contributes its already-merged cases (flattening, not
  /// nesting). Its own timeout, if any, does not propagate.
  #[must_use]
  pub fn from_behavior(behavior: &Behavior) -> BehaviorBuilder {
    BehaviorBuilder {
      cases: behavior.cases().to_vec(),
    }
  }

  /// Builds a behavior holding only a timeout definition.
  #[must_use]
  pub fn timeout(timeout: TimeoutDefinition) -> Behavior {
    Behavior::from_impl(BehaviorImpl::new(Vec::new(), Some(timeout)))
  }
}

/// Accumulates handler cases in declaration order; earlier cases take
/// precedence on overlapping matches.
#[must_use]
pub struct BehaviorBuilder {
  cases: Vec<HandlerCase>,
}

impl BehaviorBuilder {
  /// Appends a message case.
  pub fn with(mut self, case: MessageCase) -> Self {
    self.cases.push(case.into_handler());
    self
  }

  /// Appends the handler sequence of an existing behavior (flattening).
  ///
  /// The merged behavior's own timeout does not propagate.
  pub fn merge(mut self, behavior: &Behavior) -> Self {
    self.cases.extend(behavior.cases().iter().cloned());
    self
  }

  /// Attaches the timeout definition and finishes the behavior.
  ///
  /// Terminal by design: the timeout is necessarily the last input, and at
  /// most one can be attached.
  pub fn timeout(self, timeout: TimeoutDefinition) -> Behavior {
    Behavior::from_impl(BehaviorImpl::new(self.cases, Some(timeout)))
  }

  /// Finishes the behavior without a timeout.
  pub fn build(self) -> Behavior {
    Behavior::from_impl(BehaviorImpl::new(self.cases, None))
  }
}
