use core::fmt;

use crate::actor::ExecutionModel;

/// Rejection reasons produced by spawn option validation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SpawnError {
  /// The blocking-API flag disagrees with the actor type's execution model.
  BlockingApiMismatch {
    /// Execution model declared by the actor type.
    model: ExecutionModel,
    /// Whether the caller requested the blocking API.
    requested: bool,
  },
  /// A monitor or link flag was passed to a top-level spawn, which has no
  /// observer to bind the relation to.
  BoundAtTopLevel {
    /// Whether the monitor flag was set.
    monitored: bool,
    /// Whether the link flag was set.
    linked: bool,
  },
}

impl fmt::Display for SpawnError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::BlockingApiMismatch { model, requested } => {
        if *requested {
          write!(f, "blocking API requested for an actor with execution model {model:?}")
        } else {
          write!(f, "actor with execution model {model:?} spawned without the blocking API flag")
        }
      }
      Self::BoundAtTopLevel { monitored, linked } => {
        write!(
          f,
          "monitor/link flags require a parent context (monitored: {monitored}, linked: {linked})"
        )
      }
    }
  }
}

impl std::error::Error for SpawnError {}
