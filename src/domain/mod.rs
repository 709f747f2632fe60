// Domain layer: value types, CEP/temperature rules and the ports the services depend on.

pub mod cep;
pub mod model;
pub mod ports;
pub mod temperature;
