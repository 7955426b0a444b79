use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;
use crate::actor::{Actor, BlockingFunctor, EventBasedFunctor, ExecutionModel};
use crate::behavior::{on, Behavior, Behaviors};
use crate::messaging::Message;
use crate::spawn_options::SpawnOptions;
use crate::test_support::{CallLog, RecordingGroup, RecordingHost};

struct LevelCounter {
  warns: Arc<AtomicUsize>,
  debugs: Arc<AtomicUsize>,
}

impl tracing::Subscriber for LevelCounter {
  fn enabled(&self, _metadata: &tracing::Metadata<'_>) -> bool {
    true
  }

  fn new_span(&self, _attributes: &tracing::span::Attributes<'_>) -> tracing::span::Id {
    tracing::span::Id::from_u64(1)
  }

  fn record(&self, _span: &tracing::span::Id, _values: &tracing::span::Record<'_>) {}

  fn record_follows_from(&self, _span: &tracing::span::Id, _follows: &tracing::span::Id) {}

  fn event(&self, event: &tracing::Event<'_>) {
    let level = *event.metadata().level();
    if level == tracing::Level::WARN {
      self.warns.fetch_add(1, Ordering::SeqCst);
    } else if level == tracing::Level::DEBUG {
      self.debugs.fetch_add(1, Ordering::SeqCst);
    }
  }

  fn enter(&self, _span: &tracing::span::Id) {}

  fn exit(&self, _span: &tracing::span::Id) {}
}

struct Echo;

impl Actor for Echo {
  fn make_behavior(&mut self) -> Behavior {
    Behaviors::with(on(|n: u32| Message::new(n))).build()
  }
}

struct Worker;

impl Actor for Worker {
  const EXECUTION_MODEL: ExecutionModel = ExecutionModel::Blocking;
}

#[test]
fn spawn_with_default_options_launches_running_actor() {
  let host = RecordingHost::new();
  let handle = spawn(&host, SpawnOptions::NONE, Echo).unwrap();

  assert!(handle.is_running());
  assert!(!handle.is_priority_aware());
  assert!(!handle.is_detached());

  let launches = host.launches();
  assert_eq!(launches.len(), 1);
  assert_eq!(launches[0].id, handle.id());
  assert!(!launches[0].lazy_init);
  assert!(!launches[0].hide);
}

#[test]
fn spawn_applies_priority_and_detach_flags() {
  let host = RecordingHost::new();
  let handle = spawn(&host, SpawnOptions::PRIORITY_AWARE | SpawnOptions::DETACHED, Echo).unwrap();

  assert!(handle.is_priority_aware());
  assert!(handle.is_detached());
}

#[test]
fn lazy_spawn_defers_resume_to_the_host() {
  let host = RecordingHost::new();
  let handle = spawn(&host, SpawnOptions::LAZY_INIT, Echo).unwrap();

  assert!(!handle.is_running());
  assert!(host.launches()[0].lazy_init);

  handle.resume();
  assert!(handle.is_running());
  let reply = handle.process(&Message::new(3_u32));
  assert_eq!(reply.and_then(|m| m.downcast_ref::<u32>().copied()), Some(3));
}

#[test]
fn hidden_flag_is_forwarded_to_the_host() {
  let host = RecordingHost::new();
  let _handle = spawn(&host, SpawnOptions::HIDDEN, Echo).unwrap();
  assert!(host.launches()[0].hide);
}

#[test]
fn blocking_actor_requires_the_blocking_api_flag() {
  let host = RecordingHost::new();
  let err = spawn(&host, SpawnOptions::NONE, Worker).unwrap_err();
  assert_eq!(
    err,
    SpawnError::BlockingApiMismatch {
      model: ExecutionModel::Blocking,
      requested: false,
    }
  );
  assert!(host.launches().is_empty());
}

#[test]
fn event_based_actor_rejects_the_blocking_api_flag() {
  let host = RecordingHost::new();
  let err = spawn(&host, SpawnOptions::BLOCKING_API, Echo).unwrap_err();
  assert_eq!(
    err,
    SpawnError::BlockingApiMismatch {
      model: ExecutionModel::EventBased,
      requested: true,
    }
  );
}

#[test]
fn blocking_actor_with_matching_flag_is_detached() {
  let host = RecordingHost::new();
  let handle = spawn(&host, SpawnOptions::BLOCKING_API, Worker).unwrap();
  assert!(handle.is_detached());
}

#[test]
fn monitor_and_link_flags_are_rejected_at_top_level() {
  let host = RecordingHost::new();
  let err = spawn(&host, SpawnOptions::MONITORED, Echo).unwrap_err();
  assert_eq!(
    err,
    SpawnError::BoundAtTopLevel {
      monitored: true,
      linked: false,
    }
  );

  let err = spawn(&host, SpawnOptions::LINKED | SpawnOptions::LAZY_INIT, Echo).unwrap_err();
  assert_eq!(
    err,
    SpawnError::BoundAtTopLevel {
      monitored: false,
      linked: true,
    }
  );
  assert!(host.launches().is_empty());
}

#[test]
fn rejected_spawn_never_runs_the_constructor() {
  let host = RecordingHost::new();
  let constructed = Arc::new(AtomicUsize::new(0));

  let counter = constructed.clone();
  let result = spawn_impl(&host, SpawnOptions::MONITORED, |_| (), move || {
    counter.fetch_add(1, Ordering::SeqCst);
    Echo
  });
  assert!(result.is_err());
  assert_eq!(constructed.load(Ordering::SeqCst), 0);

  let counter = constructed.clone();
  let result = spawn_impl(&host, SpawnOptions::NONE, |_| (), move || {
    counter.fetch_add(1, Ordering::SeqCst);
    Echo
  });
  assert!(result.is_ok());
  assert_eq!(constructed.load(Ordering::SeqCst), 1);
}

#[test]
fn successful_spawn_logs_a_debug_event() {
  let debugs = Arc::new(AtomicUsize::new(0));
  let subscriber = LevelCounter {
    warns: Arc::new(AtomicUsize::new(0)),
    debugs: debugs.clone(),
  };

  tracing::subscriber::with_default(subscriber, || {
    let host = RecordingHost::new();
    let handle = spawn(&host, SpawnOptions::NONE, Echo).unwrap();
    assert!(handle.is_running());
  });
  assert_eq!(debugs.load(Ordering::SeqCst), 1);
}

#[test]
fn rejected_spawn_logs_a_warning() {
  let warns = Arc::new(AtomicUsize::new(0));
  let debugs = Arc::new(AtomicUsize::new(0));
  let subscriber = LevelCounter {
    warns: warns.clone(),
    debugs: debugs.clone(),
  };

  tracing::subscriber::with_default(subscriber, || {
    let host = RecordingHost::new();
    assert!(spawn(&host, SpawnOptions::BLOCKING_API, Echo).is_err());
    assert!(spawn(&host, SpawnOptions::LINKED, Echo).is_err());
  });
  assert_eq!(warns.load(Ordering::SeqCst), 2);
  assert_eq!(debugs.load(Ordering::SeqCst), 0);
}

#[test]
fn group_subscription_happens_before_launch() {
  let log = CallLog::new();
  let host = RecordingHost::with_log(log.clone());
  let group = RecordingGroup::with_log(log.clone());

  let handle = spawn_in_group(&host, &group, SpawnOptions::NONE, Echo).unwrap();

  let id = handle.id();
  assert_eq!(log.entries(), vec![format!("subscribe:{id}"), format!("launch:{id}")]);
  assert_eq!(group.members(), vec![handle.untyped()]);
}

#[test]
fn functor_without_context_produces_the_initial_behavior() {
  let host = RecordingHost::new();
  let actor = spawn_functor(&host, SpawnOptions::NONE, || {
    Behaviors::with(on(|s: &'static str| Message::new(s.len()))).build()
  })
  .unwrap();

  assert!(actor.is_running());
  let reply = actor.process(&Message::new("hello"));
  assert_eq!(reply.and_then(|m| m.downcast_ref::<usize>().copied()), Some(5));
}

#[test]
fn functor_taking_context_yields_an_idle_actor() {
  let host = RecordingHost::new();
  let actor = spawn_functor(&host, SpawnOptions::NONE, |_ctx: &mut EventBasedFunctor| {}).unwrap();

  assert!(actor.is_running());
  assert!(actor.process(&Message::new(1_u32)).is_none());
}

#[test]
fn functor_taking_context_and_returning_behavior_is_used_as_is() {
  let host = RecordingHost::new();
  let actor = spawn_functor(&host, SpawnOptions::NONE, |_ctx: &mut EventBasedFunctor| {
    Behaviors::with(on(|n: u32| Message::new(n + 1))).build()
  })
  .unwrap();

  let reply = actor.process(&Message::new(1_u32));
  assert_eq!(reply.and_then(|m| m.downcast_ref::<u32>().copied()), Some(2));
}

#[test]
fn blocking_functor_shape_spawns_with_the_blocking_flag() {
  let host = RecordingHost::new();
  let actor = spawn_functor(&host, SpawnOptions::BLOCKING_API, |_ctx: &mut BlockingFunctor| {}).unwrap();

  assert!(actor.is_detached());
  assert!(actor.is_running());
}

#[test]
fn functor_spawn_in_group_subscribes_before_launch() {
  let log = CallLog::new();
  let host = RecordingHost::with_log(log.clone());
  let group = RecordingGroup::with_log(log.clone());

  let actor = spawn_functor_in_group(&host, &group, SpawnOptions::NONE, || Behavior::default()).unwrap();

  let id = actor.id();
  assert_eq!(log.entries(), vec![format!("subscribe:{id}"), format!("launch:{id}")]);
}
