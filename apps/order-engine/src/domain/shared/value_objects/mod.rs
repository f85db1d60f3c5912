//! Shared value objects.

pub mod identifiers;
pub mod money;
pub mod phone;
pub mod timestamp;

pub use identifiers::{OrderId, ProductId, VariantId};
pub use money::Money;
pub use phone::Phone;
pub use timestamp::Timestamp;
