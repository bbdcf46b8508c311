// Domain layer: core models and ports (interfaces). No external dependencies
// beyond serde/chrono for the value types.

pub mod model;
pub mod ports;
