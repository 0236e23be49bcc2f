// Domain layer: the records, their field metadata, and the ports the generator talks through.

pub mod model;
pub mod ports;
pub mod schema;
