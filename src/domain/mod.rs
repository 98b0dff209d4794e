// Domain layer: concert model and the ports the catalog talks through.

pub mod model;
pub mod ports;
