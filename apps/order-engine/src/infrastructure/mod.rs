//! Infrastructure Layer
//!
//! Adapters that connect the application core to the outside world:
//! persistence, the courier HTTP integrations, token auth, the async fraud
//! dispatcher and the HTTP controller.

pub mod auth;
pub mod courier;
pub mod http;
pub mod persistence;
pub mod tasks;
