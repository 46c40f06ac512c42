// Domain layer: result models and the source port. No HTTP here.

pub mod model;
pub mod ports;
