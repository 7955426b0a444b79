//! spindle-actor-core
//!
//! Behavior composition and actor spawning core of the spindle actor runtime.
//! Defines how an actor's reactive logic is assembled from prioritized
//! message handlers plus an optional timeout, and how a new actor is
//! constructed, configured and handed to an execution host.
//!
//! # Key Features
//! - Value-semantic [`Behavior`] handles over immutable, shared handler sets
//! - First-match-wins dispatch with an optional per-behavior timeout
//! - [`SpawnOptions`] flag set validated before any actor is constructed
//! - Class-based, functor-based and strongly typed spawn entry points
//!
//! # Example Usage
//! ```
//! use spindle_actor_core::{after, on, Behaviors, Message};
//! use core::time::Duration;
//!
//! let behavior = Behaviors::with(on(|n: u32| Message::new(n + 1)))
//!   .timeout(after(Duration::from_millis(5), || {}));
//! assert_eq!(behavior.timeout(), Some(Duration::from_millis(5)));
//! ```

#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::missing_safety_doc)]
#![deny(clippy::redundant_clone)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_ok_or)]
#![deny(clippy::manual_map)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::from_over_into)]
#![deny(dropping_copy_types)]

/// Actor instance protocol: identity, cells, handles and functor bases.
pub mod actor;
/// Behavior composition: handlers, timeouts and the `Behaviors` DSL.
pub mod behavior;
/// Execution host collaborator seam.
pub mod execution_host;
/// Dynamic message carrier consumed by behavior dispatch.
pub mod messaging;
/// Spawn launcher and its validation.
pub mod spawn;
/// Spawn-time configuration flags.
pub mod spawn_options;
/// Recording collaborator doubles for tests.
pub mod test_support;
/// Strongly typed behaviors, handles and spawn entry points.
pub mod typed;

pub use actor::{Actor, ActorCell, ActorHandle, ActorId, ActorRef, BlockingFunctor, EventBasedFunctor, ExecutionModel};
pub use behavior::{after, on, Behavior, BehaviorBuilder, Behaviors, MessageCase, Reply, TimeoutDefinition};
pub use execution_host::ExecutionHost;
pub use messaging::Message;
pub use spawn::{
  check_spawn_options, spawn, spawn_functor, spawn_functor_in_group, spawn_impl, spawn_in_group, FunctorSpawn, Group,
  SpawnError,
};
pub use spawn_options::SpawnOptions;
pub use typed::{
  spawn_typed, spawn_typed_functor, Accepts, TypedActor, TypedActorRef, TypedBehavior, TypedBehaviorBuilder,
  TypedBehaviors, TypedFunctorActor, TypedFunctorSpawn,
};
