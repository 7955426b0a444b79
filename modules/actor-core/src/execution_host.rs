use crate::actor::ActorRef;

/// Scheduling seam the spawn launcher hands finished actors to.
///
/// The launcher performs construction, flag application, and pre-launch
/// hooks; everything after that (registration, run queues, visibility in
/// monitoring tools) belongs to the host. `hide` asks the host to keep the
/// actor out of its public registry.
pub trait ExecutionHost {
  /// Takes ownership of a constructed actor.
  ///
  /// When `lazy_init` is set the actor has not been resumed yet and must
  /// not be scheduled until something wakes it.
  fn launch(&self, actor: ActorRef, lazy_init: bool, hide: bool);
}
