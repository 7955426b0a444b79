use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;
use crate::behavior::{on, Behavior, Behaviors};
use crate::messaging::Message;

struct Counter {
  count: u32,
}

impl Actor for Counter {
  fn make_behavior(&mut self) -> Behavior {
    Behaviors::with(on(|n: u32| Message::new(n))).build()
  }
}

#[test]
fn cell_starts_idle_until_resumed() {
  let cell = ActorCell::new(Counter { count: 0 });
  assert!(!cell.is_running());
  assert!(cell.process(&Message::new(1_u32)).is_none());

  cell.resume();
  assert!(cell.is_running());
  let reply = cell.process(&Message::new(7_u32));
  assert_eq!(reply.and_then(|m| m.downcast_ref::<u32>().copied()), Some(7));
}

#[test]
fn resume_is_idempotent() {
  struct Once {
    calls: Arc<AtomicUsize>,
  }
  impl Actor for Once {
    fn make_behavior(&mut self) -> Behavior {
      self.calls.fetch_add(1, Ordering::SeqCst);
      Behavior::default()
    }
  }

  let calls = Arc::new(AtomicUsize::new(0));
  let cell = ActorCell::new(Once { calls: calls.clone() });
  cell.resume();
  cell.resume();
  assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn install_behavior_replaces_dispatch_target() {
  let cell = ActorCell::new(Counter { count: 0 });
  cell.resume();

  cell.install_behavior(Behaviors::with(on(|n: u32| Message::new(n * 2))).build());
  let reply = cell.process(&Message::new(3_u32));
  assert_eq!(reply.and_then(|m| m.downcast_ref::<u32>().copied()), Some(6));
}

#[test]
fn with_state_observes_handler_side_effects() {
  let cell = ActorCell::new(Counter { count: 5 });
  cell.resume();
  cell.with_state(|actor| actor.count += 1);
  assert_eq!(cell.with_state(|actor| actor.count), 6);
}

#[test]
fn actor_ids_are_unique() {
  let a = ActorCell::new(Counter { count: 0 });
  let b = ActorCell::new(Counter { count: 0 });
  assert_ne!(a.id(), b.id());
  assert!(b.id().value() > a.id().value());
}

#[test]
fn event_based_functor_produces_behavior_from_closure() {
  let mut actor = EventBasedFunctor::from_reactive(Box::new(|_ctx| {
    Behaviors::with(on(|s: &'static str| Message::new(s.len()))).build()
  }));
  let behavior = actor.make_behavior();
  let reply = behavior.invoke(&Message::new("four"));
  assert_eq!(reply.and_then(|m| m.downcast_ref::<usize>().copied()), Some(4));
}

#[test]
fn event_based_functor_closure_survives_repeated_calls() {
  let mut actor = EventBasedFunctor::from_reactive(Box::new(|_ctx| {
    Behaviors::with(on(|n: u32| Message::new(n))).build()
  }));
  assert!(!actor.make_behavior().is_empty());
  assert!(!actor.make_behavior().is_empty());
}

#[test]
fn blocking_functor_runs_closure_in_act() {
  let calls = Arc::new(AtomicUsize::new(0));
  let seen = calls.clone();
  let mut actor = BlockingFunctor::from_reactive(Box::new(move |_ctx| {
    seen.fetch_add(1, Ordering::SeqCst);
    Behavior::default()
  }));
  actor.act();
  assert_eq!(calls.load(Ordering::SeqCst), 1);
  assert!(BlockingFunctor::EXECUTION_MODEL.is_blocking());
}

#[test]
fn default_actor_is_inert() {
  struct Quiet;
  impl Actor for Quiet {}

  let cell = ActorCell::new(Quiet);
  cell.resume();
  assert!(cell.process(&Message::new(1_u32)).is_none());
  assert!(cell.timeout().is_none());
}

#[test]
fn erased_ref_shares_identity_with_handle() {
  let handle = ActorHandle::new(ActorCell::new(Counter { count: 0 }));
  let erased = handle.untyped();
  assert_eq!(erased.id(), handle.id());
  assert_eq!(erased, handle.untyped());

  handle.resume();
  assert!(erased.is_running());
  let reply = erased.process(&Message::new(9_u32));
  assert_eq!(reply.and_then(|m| m.downcast_ref::<u32>().copied()), Some(9));
}
