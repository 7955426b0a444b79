use super::typed_behavior::TypedBehavior;
use super::typed_ref::TypedActorRef;
use crate::actor::Actor;
use crate::execution_host::ExecutionHost;
use crate::spawn::{spawn, SpawnError};
use crate::spawn_options::SpawnOptions;

/// An actor whose message interface is fixed to a protocol.
///
/// Implementors produce their reactive logic through
/// [`TypedActor::make_typed_behavior`] and route the plain
/// [`Actor::make_behavior`] through it:
///
/// ```
/// use spindle_actor_core::{Accepts, Actor, Behavior, Message, TypedActor, TypedBehavior, TypedBehaviors};
///
/// struct CounterProtocol;
/// impl Accepts<u32> for CounterProtocol {}
///
/// struct Counter;
///
/// impl Actor for Counter {
///   fn make_behavior(&mut self) -> Behavior {
///     self.make_typed_behavior().into_untyped()
///   }
/// }
///
/// impl TypedActor for Counter {
///   type Protocol = CounterProtocol;
///
///   fn make_typed_behavior(&mut self) -> TypedBehavior<CounterProtocol> {
///     TypedBehaviors::<CounterProtocol>::with(|n: u32| Message::new(n + 1)).build()
///   }
/// }
/// ```
pub trait TypedActor: Actor {
  /// Protocol marker naming the admitted message types.
  type Protocol: 'static;

  /// Produces the initial, protocol-checked behavior.
  fn make_typed_behavior(&mut self) -> TypedBehavior<Self::Protocol>;
}

/// Spawns a typed actor, returning a handle bound to its protocol.
///
/// # Errors
/// Propagates the rejection of [`crate::spawn::check_spawn_options`].
pub fn spawn_typed<A, H>(host: &H, options: SpawnOptions, actor: A) -> Result<TypedActorRef<A::Protocol>, SpawnError>
where
  A: TypedActor,
  H: ExecutionHost + ?Sized, {
  let handle = spawn(host, options, actor)?;
  Ok(TypedActorRef::from_untyped(handle.untyped()))
}
