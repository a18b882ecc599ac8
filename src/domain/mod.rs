// Domain layer: registry record types and the ports the lookup flow depends on.

pub mod model;
pub mod ports;
