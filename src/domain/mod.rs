// Domain layer: match models and ports (interfaces). No runtime dependencies beyond serde.

pub mod model;
pub mod ports;
