use core::marker::PhantomData;

use super::typed_actor::TypedActor;
use super::typed_behavior::TypedBehavior;
use super::typed_ref::TypedActorRef;
use crate::actor::{markers, Actor};
use crate::behavior::Behavior;
use crate::execution_host::ExecutionHost;
use crate::spawn::{spawn_impl, SpawnError};
use crate::spawn_options::SpawnOptions;

type TypedReactiveFn<P> = Box<dyn FnMut(&mut TypedFunctorActor<P>) -> TypedBehavior<P> + Send>;

/// Event-based actor base wrapping a functor that produces a
/// protocol-checked behavior.
pub struct TypedFunctorActor<P> {
  reactive: Option<TypedReactiveFn<P>>,
  _protocol: PhantomData<fn() -> P>,
}

impl<P> TypedFunctorActor<P> {
  fn from_reactive(reactive: TypedReactiveFn<P>) -> Self {
    Self {
      reactive: Some(reactive),
      _protocol: PhantomData,
    }
  }
}

impl<P> Actor for TypedFunctorActor<P>
where
  P: 'static,
{
  fn make_behavior(&mut self) -> Behavior {
    self.make_typed_behavior().into_untyped()
  }
}

impl<P> TypedActor for TypedFunctorActor<P>
where
  P: 'static,
{
  type Protocol = P;

  fn make_typed_behavior(&mut self) -> TypedBehavior<P> {
    if let Some(mut reactive) = self.reactive.take() {
      let behavior = reactive(self);
      self.reactive = Some(reactive);
      behavior
    } else {
      TypedBehavior::default()
    }
  }
}

/// Normalizes one of the accepted typed functor shapes into the canonical
/// reactive closure of a [`TypedFunctorActor`].
///
/// Mirrors [`crate::spawn::FunctorSpawn`] with protocol-checked results:
/// - `FnMut() -> TypedBehavior<P>` ([`markers::NoContext`])
/// - `FnMut(&mut TypedFunctorActor<P>)` ([`markers::ContextOnly`])
/// - `FnMut(&mut TypedFunctorActor<P>) -> TypedBehavior<P>`
///   ([`markers::ContextToBehavior`])
///
/// The protocol is inferred from the behavior the functor returns, or from
/// its context argument for the side-effect-only shape.
pub trait TypedFunctorSpawn<Marker>: Send + 'static {
  /// Protocol of the behavior this functor produces.
  type Protocol: 'static;

  /// Converts this functor into the canonical reactive closure.
  fn into_reactive(self) -> TypedReactiveFn<Self::Protocol>;
}

impl<F, P> TypedFunctorSpawn<markers::NoContext> for F
where
  F: FnMut() -> TypedBehavior<P> + Send + 'static,
  P: 'static,
{
  type Protocol = P;

  fn into_reactive(mut self) -> TypedReactiveFn<P> {
    Box::new(move |_ctx| self())
  }
}

impl<F, P> TypedFunctorSpawn<markers::ContextOnly<TypedFunctorActor<P>>> for F
where
  F: FnMut(&mut TypedFunctorActor<P>) + Send + 'static,
  P: 'static,
{
  type Protocol = P;

  fn into_reactive(mut self) -> TypedReactiveFn<P> {
    Box::new(move |ctx| {
      self(ctx);
      TypedBehavior::default()
    })
  }
}

impl<F, P> TypedFunctorSpawn<markers::ContextToBehavior<TypedFunctorActor<P>>> for F
where
  F: FnMut(&mut TypedFunctorActor<P>) -> TypedBehavior<P> + Send + 'static,
  P: 'static,
{
  type Protocol = P;

  fn into_reactive(self) -> TypedReactiveFn<P> {
    Box::new(self)
  }
}

/// Spawns a typed actor defined by a functor in one of the accepted shapes.
///
/// The functor base is only constructed once the flag set passes
/// validation.
///
/// # Errors
/// Propagates the rejection of [`crate::spawn::check_spawn_options`].
pub fn spawn_typed_functor<H, F, M>(
  host: &H,
  options: SpawnOptions,
  f: F,
) -> Result<TypedActorRef<F::Protocol>, SpawnError>
where
  H: ExecutionHost + ?Sized,
  F: TypedFunctorSpawn<M>, {
  let handle = spawn_impl(host, options, |_| (), move || {
    TypedFunctorActor::from_reactive(f.into_reactive())
  })?;
  Ok(TypedActorRef::from_untyped(handle.untyped()))
}
