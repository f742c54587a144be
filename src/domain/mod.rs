// Domain layer: drill models and the port every drill implements.

pub mod model;
pub mod ports;
