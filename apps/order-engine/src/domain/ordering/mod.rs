//! Ordering context: the Order aggregate and its persistence contract.

pub mod errors;
pub mod order;
pub mod repository;
pub mod value_objects;

pub use errors::OrderError;
pub use order::{Order, OrderItem, PlaceOrderCommand};
pub use repository::{OrderHistoryEntry, OrderPatch, OrderRepository, OrderStoreError};
pub use value_objects::{DeliveryStatus, OrderStatus, PaymentMethod, TrackingCode};
