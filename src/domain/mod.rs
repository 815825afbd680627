// Domain layer: the roster model and the output port.

pub mod model;
pub mod ports;
