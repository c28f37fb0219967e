//! HTTP API: server configuration, routing, and request/response mapping.

pub mod app;
pub mod config;
pub mod middleware;
