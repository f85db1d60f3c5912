//! Domain layer - Core business logic with no external dependencies.

/// Products and variants referenced by order lines.
pub mod catalog;

/// Customer profiles keyed by phone number.
pub mod customers;

/// Fraud signal gathering and deterministic risk scoring.
pub mod fraud;

/// Order aggregate, tracking codes and order persistence contract.
pub mod ordering;

/// Coupon validation and atomic redemption.
pub mod pricing;

/// Value objects and errors shared across bounded contexts.
pub mod shared;
