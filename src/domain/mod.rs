// Domain layer: run parameters, derived results and the renderer port.

pub mod model;
pub mod ports;
