pub mod bank;
pub mod payment;
pub mod ports;
pub mod validation;
