mod actor_cell;
mod actor_id;
mod actor_ref;
mod functor;
#[cfg(test)]
mod tests;

pub use actor_cell::{Actor, ActorCell, ExecutionModel};
pub use actor_id::ActorId;
pub(crate) use actor_ref::AnyActorCell;
pub use actor_ref::{ActorHandle, ActorRef};
pub(crate) use functor::ReactiveFn;
pub use functor::{markers, BlockingFunctor, EventBasedFunctor, FunctorBase};
