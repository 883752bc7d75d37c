//! Minihttpd - Multiplexed Static File Server
//!
//! Core library for the event loop, connection table, and request handling.

pub mod config;
pub mod content;
pub mod http;
pub mod server;
