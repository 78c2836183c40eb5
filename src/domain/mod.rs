pub mod cart;
pub mod errors;
pub mod location;
pub mod ports;
pub mod shipping;
pub mod tariff;
