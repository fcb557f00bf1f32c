//! HTTP surface of the shop: server wiring, routing, and request DTOs.

pub mod app;
pub mod config;
