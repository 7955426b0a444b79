mod accepts;
#[cfg(test)]
mod tests;
mod typed_actor;
mod typed_behavior;
mod typed_functor;
mod typed_ref;

pub use accepts::Accepts;
pub use typed_actor::{spawn_typed, TypedActor};
pub use typed_behavior::{TypedBehavior, TypedBehaviorBuilder, TypedBehaviors};
pub use typed_functor::{spawn_typed_functor, TypedFunctorActor, TypedFunctorSpawn};
pub use typed_ref::TypedActorRef;
