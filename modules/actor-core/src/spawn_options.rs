mod options;

pub use options::SpawnOptions;
