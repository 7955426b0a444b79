mod error;
mod functor_spawn;
mod launcher;
#[cfg(test)]
mod tests;

pub use error::SpawnError;
pub use functor_spawn::FunctorSpawn;
pub use launcher::{check_spawn_options, spawn, spawn_functor, spawn_functor_in_group, spawn_impl, spawn_in_group, Group};
