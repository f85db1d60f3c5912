//! Application Ports (Driver and Driven)
//!
//! Ports define interfaces for interacting with external systems.
//! - **Driver Ports** (Primary/Inbound): How the world uses our application
//! - **Driven Ports** (Secondary/Outbound): How our application uses external systems

mod courier_port;
mod fraud_dispatch_port;
mod identity_port;

pub use courier_port::{CourierError, DeliveryHistoryPort, RiskFlagPort};
pub use fraud_dispatch_port::{FraudDispatchPort, NoOpFraudDispatcher};
pub use identity_port::{AuthError, Identity, IdentityPort, Role};
