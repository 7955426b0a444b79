use core::time::Duration;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;
use crate::actor::Actor;
use crate::behavior::{after, Behavior};
use crate::messaging::Message;
use crate::spawn_options::SpawnOptions;
use crate::test_support::RecordingHost;

struct CounterProtocol;

impl Accepts<u32> for CounterProtocol {}
impl Accepts<&'static str> for CounterProtocol {}

struct Counter {
  step: u32,
}

impl Actor for Counter {
  fn make_behavior(&mut self) -> Behavior {
    self.make_typed_behavior().into_untyped()
  }
}

impl TypedActor for Counter {
  type Protocol = CounterProtocol;

  fn make_typed_behavior(&mut self) -> TypedBehavior<CounterProtocol> {
    let step = self.step;
    TypedBehaviors::<CounterProtocol>::with(move |n: u32| Message::new(n + step))
      .on(|s: &'static str| Message::new(s.len()))
      .build()
  }
}

#[test]
fn typed_builder_preserves_handler_order() {
  let behavior = TypedBehaviors::<CounterProtocol>::with(|_n: u32| Message::new("first"))
    .on(|_n: u32| Message::new("second"))
    .build()
    .into_untyped();

  let reply = behavior.invoke(&Message::new(0_u32));
  assert_eq!(reply.and_then(|m| m.downcast_ref::<&str>().copied()), Some("first"));
}

#[test]
fn typed_builder_timeout_is_terminal() {
  let behavior = TypedBehaviors::<CounterProtocol>::with(|n: u32| Message::new(n))
    .timeout(after(Duration::from_millis(10), || {}));
  assert_eq!(behavior.timeout(), Some(Duration::from_millis(10)));
}

#[test]
fn typed_behavior_default_is_empty() {
  let behavior = TypedBehavior::<CounterProtocol>::default();
  assert!(behavior.is_empty());
  assert!(behavior.timeout().is_none());
}

#[test]
fn spawn_typed_returns_protocol_bound_handle() {
  let host = RecordingHost::new();
  let counter = spawn_typed(&host, SpawnOptions::NONE, Counter { step: 2 }).unwrap();

  assert!(counter.is_running());
  let reply = counter.process(5_u32);
  assert_eq!(reply.and_then(|m| m.downcast_ref::<u32>().copied()), Some(7));
  let reply = counter.process("four");
  assert_eq!(reply.and_then(|m| m.downcast_ref::<usize>().copied()), Some(4));
}

#[test]
fn typed_handle_installs_protocol_checked_behavior() {
  let host = RecordingHost::new();
  let counter = spawn_typed(&host, SpawnOptions::NONE, Counter { step: 1 }).unwrap();

  counter.install_behavior(TypedBehaviors::<CounterProtocol>::with(|n: u32| Message::new(n * 10)).build());
  let reply = counter.process(3_u32);
  assert_eq!(reply.and_then(|m| m.downcast_ref::<u32>().copied()), Some(30));
}

#[test]
fn typed_handle_fires_timeout_callback() {
  let host = RecordingHost::new();
  let counter = spawn_typed(&host, SpawnOptions::NONE, Counter { step: 1 }).unwrap();

  let fired = Arc::new(AtomicUsize::new(0));
  let seen = fired.clone();
  counter.install_behavior(
    TypedBehaviors::<CounterProtocol>::with(|n: u32| Message::new(n)).timeout(after(Duration::from_millis(1), move || {
      seen.fetch_add(1, Ordering::SeqCst);
    })),
  );
  assert_eq!(counter.timeout(), Some(Duration::from_millis(1)));
  counter.handle_timeout();
  assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[test]
fn typed_functor_without_context_produces_the_behavior() {
  let host = RecordingHost::new();
  let counter = spawn_typed_functor(&host, SpawnOptions::NONE, || {
    TypedBehaviors::<CounterProtocol>::with(|n: u32| Message::new(n + 1)).build()
  })
  .unwrap();

  let reply = counter.process(1_u32);
  assert_eq!(reply.and_then(|m| m.downcast_ref::<u32>().copied()), Some(2));
}

#[test]
fn typed_functor_taking_context_yields_an_idle_actor() {
  let host = RecordingHost::new();
  let counter = spawn_typed_functor(&host, SpawnOptions::NONE, |_ctx: &mut TypedFunctorActor<CounterProtocol>| {}).unwrap();

  assert!(counter.is_running());
  assert!(counter.process(1_u32).is_none());
}

#[test]
fn typed_functor_taking_context_and_returning_behavior_is_used_as_is() {
  let host = RecordingHost::new();
  let counter = spawn_typed_functor(&host, SpawnOptions::NONE, |_ctx: &mut TypedFunctorActor<CounterProtocol>| {
    TypedBehaviors::<CounterProtocol>::with(|s: &'static str| Message::new(s.len())).build()
  })
  .unwrap();

  let reply = counter.process("seven!!");
  assert_eq!(reply.and_then(|m| m.downcast_ref::<usize>().copied()), Some(7));
}

#[test]
fn typed_functor_spawn_rejects_mismatched_flags() {
  let host = RecordingHost::new();
  let result = spawn_typed_functor(&host, SpawnOptions::BLOCKING_API, || {
    TypedBehavior::<CounterProtocol>::default()
  });
  assert!(result.is_err());
  assert!(host.launches().is_empty());
}

#[test]
fn typed_ref_erases_to_the_same_actor() {
  let host = RecordingHost::new();
  let counter = spawn_typed(&host, SpawnOptions::NONE, Counter { step: 1 }).unwrap();

  let erased = counter.untyped();
  assert_eq!(erased.id(), counter.id());
  let reply = erased.process(&Message::new(1_u32));
  assert_eq!(reply.and_then(|m| m.downcast_ref::<u32>().copied()), Some(2));
}
