// Domain layer: project layout, build artifacts and the ports the core drives.

pub mod model;
pub mod ports;
