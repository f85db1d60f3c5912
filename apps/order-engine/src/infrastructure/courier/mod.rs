//! Courier service adapters.
//!
//! Two external integrations feed the fraud engine: a delivery-history
//! aggregator (per-phone parcel statistics across couriers) and the
//! Steadfast risk flag. Both are consulted best-effort.

pub mod api_types;
pub mod bd_courier;
pub mod config;
pub mod steadfast;

pub use bd_courier::BdCourierAdapter;
pub use config::{BdCourierConfig, SteadfastConfig};
pub use steadfast::SteadfastAdapter;
