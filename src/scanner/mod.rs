mod pattern;
mod walk;

pub use pattern::{compile_patterns, TargetPattern};
pub use walk::gather_targets;
