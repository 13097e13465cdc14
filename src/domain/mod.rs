pub mod discount;
pub mod member;
pub mod order;
pub mod ports;
