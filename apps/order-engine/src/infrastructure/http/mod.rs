//! HTTP/REST API adapter.
//!
//! Inbound adapter implementing REST endpoints that delegate to application use cases.

mod controller;
mod response;

pub use controller::{AppState, create_router};
pub use response::*;
