// Domain layer: core models and ports (interfaces) shared by the pattern examples.

pub mod model;
pub mod ports;
