use super::actor_cell::{Actor, ExecutionModel};
use crate::behavior::Behavior;

/// Canonical reactive entry point every accepted functor shape is
/// normalized into before an actor is constructed.
pub(crate) type ReactiveFn<A> = Box<dyn FnMut(&mut A) -> Behavior + Send>;

/// Marker types identifying the accepted functor shapes.
///
/// Each marker corresponds to exactly one signature; a callable with any
/// other shape has no spawn impl and is rejected at compile time.
pub mod markers {
  use core::marker::PhantomData;

  /// `Fn() -> Behavior`: the context argument is ignored.
  pub struct NoContext;
  /// `Fn(&mut A)`: wrapped to return an empty behavior after the call.
  pub struct ContextOnly<A>(PhantomData<fn() -> A>);
  /// `Fn(&mut A) -> Behavior`: used as-is.
  pub struct ContextToBehavior<A = super::EventBasedFunctor>(PhantomData<fn() -> A>);
}

/// Actor base an adapted functor can be wrapped into.
pub trait FunctorBase: Actor + Sized {
  /// Wraps a normalized reactive closure into this base.
  fn from_reactive(reactive: ReactiveFn<Self>) -> Self;
}

/// Cooperative functor base: the canonical closure produces the actor's
/// initial behavior.
pub struct EventBasedFunctor {
  reactive: Option<ReactiveFn<Self>>,
}

impl Actor for EventBasedFunctor {
  fn make_behavior(&mut self) -> Behavior {
    if let Some(mut reactive) = self.reactive.take() {
      let behavior = reactive(self);
      self.reactive = Some(reactive);
      behavior
    } else {
      Behavior::default()
    }
  }
}

impl FunctorBase for EventBasedFunctor {
  fn from_reactive(reactive: ReactiveFn<Self>) -> Self {
    Self { reactive: Some(reactive) }
  }
}

/// Blocking functor base: the canonical closure is the actor's receive
/// loop, run on a dedicated execution context. A returned behavior is
/// discarded; blocking actors receive explicitly instead of reacting.
pub struct BlockingFunctor {
  reactive: Option<ReactiveFn<Self>>,
}

impl Actor for BlockingFunctor {
  const EXECUTION_MODEL: ExecutionModel = ExecutionModel::Blocking;

  fn act(&mut self) {
    if let Some(mut reactive) = self.reactive.take() {
      let _ = reactive(self);
      self.reactive = Some(reactive);
    }
  }
}

impl FunctorBase for BlockingFunctor {
  fn from_reactive(reactive: ReactiveFn<Self>) -> Self {
    Self { reactive: Some(reactive) }
  }
}
