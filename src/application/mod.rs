//! Application layer containing the use-case services.
//!
//! Each service is constructed with boxed port implementations chosen by the
//! caller; nothing in this layer instantiates a concrete adapter or policy.

pub mod member_service;
pub mod order_service;
