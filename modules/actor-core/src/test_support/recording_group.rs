use spin::Mutex;

use super::call_log::CallLog;
use crate::actor::ActorRef;
use crate::spawn::Group;

/// Group double that records subscriptions instead of multicasting.
#[derive(Default)]
pub struct RecordingGroup {
  log: CallLog,
  members: Mutex<Vec<ActorRef>>,
}

impl RecordingGroup {
  /// Creates a group with its own private log.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a group appending to a shared log.
  #[must_use]
  pub fn with_log(log: CallLog) -> Self {
    Self {
      log,
      members: Mutex::new(Vec::new()),
    }
  }

  /// Snapshot of all subscribed members in call order.
  #[must_use]
  pub fn members(&self) -> Vec<ActorRef> {
    self.members.lock().clone()
  }
}

impl Group for RecordingGroup {
  fn subscribe(&self, member: &ActorRef) {
    self.log.record(format!("subscribe:{}", member.id()));
    self.members.lock().push(member.clone());
  }
}
