use super::error::SpawnError;
use super::functor_spawn::FunctorSpawn;
use crate::actor::{Actor, ActorCell, ActorHandle, ActorRef, ExecutionModel, FunctorBase};
use crate::execution_host::ExecutionHost;
use crate::spawn_options::SpawnOptions;

/// Multicast membership collaborator used by the group spawn variants.
pub trait Group {
  /// Adds `member` to this group.
  fn subscribe(&self, member: &ActorRef);
}

/// Validates a flag set against the execution model of the actor type about
/// to be spawned. Runs before any actor state is constructed; every
/// rejection is logged as a warning.
///
/// # Errors
/// Returns [`SpawnError::BlockingApiMismatch`] when the blocking-API flag
/// disagrees with `model`, and [`SpawnError::BoundAtTopLevel`] when a
/// monitor or link flag is present.
pub fn check_spawn_options(options: SpawnOptions, model: ExecutionModel) -> Result<(), SpawnError> {
  if options.has_blocking_api_flag() != model.is_blocking() {
    let requested = options.has_blocking_api_flag();
    tracing::warn!(?model, requested, "blocking API flag does not match the actor's execution model");
    return Err(SpawnError::BlockingApiMismatch { model, requested });
  }
  if !options.is_unbound() {
    let monitored = options.has_monitor_flag();
    let linked = options.has_link_flag();
    tracing::warn!(monitored, linked, "monitor/link flags are not allowed for a top-level spawn");
    return Err(SpawnError::BoundAtTopLevel { monitored, linked });
  }
  Ok(())
}

/// Central spawn routine every public entry point funnels into.
///
/// Order is fixed: validate the flag set, construct the instance via `ctor`
/// and wrap it in a cell, apply priority and detach flags, run the
/// pre-launch hook, then hand the actor to the host (resuming it first
/// unless lazily initialized). `ctor` runs only after validation passes.
///
/// # Errors
/// Propagates the rejection of [`check_spawn_options`].
pub fn spawn_impl<A, H, F, C>(
  host: &H,
  options: SpawnOptions,
  before_launch: F,
  ctor: C,
) -> Result<ActorHandle<A>, SpawnError>
where
  A: Actor,
  H: ExecutionHost + ?Sized,
  F: FnOnce(&ActorHandle<A>),
  C: FnOnce() -> A, {
  check_spawn_options(options, A::EXECUTION_MODEL)?;
  let handle = ActorHandle::new(ActorCell::new(ctor()));
  tracing::trace!(id = %handle.id(), options = ?options, "spawn");
  if options.has_priority_aware_flag() {
    handle.set_priority_aware(true);
  }
  if options.has_detached_flag() || A::EXECUTION_MODEL.is_blocking() {
    handle.set_detached(true);
  }
  before_launch(&handle);
  handle.launch(host, options.has_lazy_init_flag(), options.has_hide_flag());
  tracing::debug!(id = %handle.id(), "spawned actor");
  Ok(handle)
}

/// Spawns a pre-constructed actor on `host`.
///
/// # Errors
/// Propagates the rejection of [`check_spawn_options`].
pub fn spawn<A, H>(host: &H, options: SpawnOptions, actor: A) -> Result<ActorHandle<A>, SpawnError>
where
  A: Actor,
  H: ExecutionHost + ?Sized, {
  spawn_impl(host, options, |_| (), move || actor)
}

/// Spawns a pre-constructed actor and subscribes it to `group` before the
/// actor is handed to the host.
///
/// # Errors
/// Propagates the rejection of [`check_spawn_options`].
pub fn spawn_in_group<A, H, G>(
  host: &H,
  group: &G,
  options: SpawnOptions,
  actor: A,
) -> Result<ActorHandle<A>, SpawnError>
where
  A: Actor,
  H: ExecutionHost + ?Sized,
  G: Group + ?Sized, {
  spawn_impl(host, options, |handle| group.subscribe(&handle.untyped()), move || actor)
}

/// Spawns an actor defined by a functor in one of the accepted shapes.
///
/// The functor base is only constructed once the flag set passes
/// validation.
///
/// # Errors
/// Propagates the rejection of [`check_spawn_options`].
pub fn spawn_functor<H, F, M>(host: &H, options: SpawnOptions, f: F) -> Result<ActorRef, SpawnError>
where
  H: ExecutionHost + ?Sized,
  F: FunctorSpawn<M>, {
  let handle = spawn_impl(host, options, |_| (), move || {
    <F::Base as FunctorBase>::from_reactive(f.into_reactive())
  })?;
  Ok(handle.untyped())
}

/// Spawns a functor-defined actor and subscribes it to `group` before the
/// actor is handed to the host.
///
/// # Errors
/// Propagates the rejection of [`check_spawn_options`].
pub fn spawn_functor_in_group<H, G, F, M>(
  host: &H,
  group: &G,
  options: SpawnOptions,
  f: F,
) -> Result<ActorRef, SpawnError>
where
  H: ExecutionHost + ?Sized,
  G: Group + ?Sized,
  F: FunctorSpawn<M>, {
  let handle = spawn_impl(host, options, |handle| group.subscribe(&handle.untyped()), move || {
    <F::Base as FunctorBase>::from_reactive(f.into_reactive())
  })?;
  Ok(handle.untyped())
}
