use spin::Mutex;

use super::call_log::CallLog;
use crate::actor::{ActorId, ActorRef};
use crate::execution_host::ExecutionHost;

/// One `launch` call observed by a [`RecordingHost`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LaunchRecord {
  /// Identity of the launched actor.
  pub id: ActorId,
  /// Lazy-init flag passed alongside the actor.
  pub lazy_init: bool,
  /// Hide flag passed alongside the actor.
  pub hide: bool,
}

/// Execution host double that records every launch instead of scheduling.
#[derive(Default)]
pub struct RecordingHost {
  log: CallLog,
  launches: Mutex<Vec<LaunchRecord>>,
}

impl RecordingHost {
  /// Creates a host with its own private log.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a host appending to a shared log.
  #[must_use]
  pub fn with_log(log: CallLog) -> Self {
    Self {
      log,
      launches: Mutex::new(Vec::new()),
    }
  }

  /// Snapshot of all recorded launches in call order.
  #[must_use]
  pub fn launches(&self) -> Vec<LaunchRecord> {
    self.launches.lock().clone()
  }
}

impl ExecutionHost for RecordingHost {
  fn launch(&self, actor: ActorRef, lazy_init: bool, hide: bool) {
    let id = actor.id();
    self.log.record(format!("launch:{id}"));
    self.launches.lock().push(LaunchRecord { id, lazy_init, hide });
  }
}
