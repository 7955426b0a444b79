use crate::actor::{markers, EventBasedFunctor, FunctorBase, ReactiveFn};
use crate::behavior::Behavior;

/// Normalizes one of the accepted spawn functor shapes into the canonical
/// reactive closure of a [`FunctorBase`].
///
/// Three shapes are accepted, each tagged by a marker type so the impls
/// cannot overlap:
/// - `FnMut() -> Behavior` ([`markers::NoContext`]): the context is ignored
/// - `FnMut(&mut A)` ([`markers::ContextOnly`]): runs for its side effects
///   and yields an empty behavior
/// - `FnMut(&mut EventBasedFunctor) -> Behavior`
///   ([`markers::ContextToBehavior`]): used as-is
///
/// Any other callable shape has no impl and fails to compile at the spawn
/// call site.
pub trait FunctorSpawn<Marker>: Send + 'static {
  /// Actor base the normalized closure is wrapped into.
  type Base: FunctorBase;

  /// Converts this functor into the canonical reactive closure.
  fn into_reactive(self) -> ReactiveFn<Self::Base>;
}

impl<F> FunctorSpawn<markers::NoContext> for F
where
  F: FnMut() -> Behavior + Send + 'static,
{
  type Base = EventBasedFunctor;

  fn into_reactive(mut self) -> ReactiveFn<Self::Base> {
    Box::new(move |_ctx| self())
  }
}

impl<F, A> FunctorSpawn<markers::ContextOnly<A>> for F
where
  F: FnMut(&mut A) + Send + 'static,
  A: FunctorBase,
{
  type Base = A;

  fn into_reactive(mut self) -> ReactiveFn<Self::Base> {
    Box::new(move |ctx| {
      self(ctx);
      Behavior::default()
    })
  }
}

impl<F> FunctorSpawn<markers::ContextToBehavior> for F
where
  F: FnMut(&mut EventBasedFunctor) -> Behavior + Send + 'static,
{
  type Base = EventBasedFunctor;

  fn into_reactive(self) -> ReactiveFn<Self::Base> {
    Box::new(self)
  }
}
