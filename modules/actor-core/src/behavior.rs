mod behavior_handle;
mod behavior_impl;
mod builder;
mod message_case;
mod timeout_definition;

pub use behavior_handle::Behavior;
pub(crate) use behavior_impl::BehaviorImpl;
pub use builder::{BehaviorBuilder, Behaviors};
pub(crate) use message_case::HandlerCase;
pub use message_case::{on, MessageCase, Reply};
pub use timeout_definition::{after, TimeoutDefinition};
