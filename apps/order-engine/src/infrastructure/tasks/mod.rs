//! Background task adapters.

pub mod fraud_dispatcher;

pub use fraud_dispatcher::TokioFraudDispatcher;
