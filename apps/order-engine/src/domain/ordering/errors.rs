//! Ordering errors.

use std::fmt;

use super::value_objects::OrderStatus;

/// Errors raised by the order aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// An order must carry at least one line.
    EmptyItems,

    /// A line total does not equal unit price times quantity.
    LineTotalMismatch {
        /// Title of the offending line.
        title_bn: String,
    },

    /// Status change attempted on an order in a terminal state.
    TerminalStatus {
        /// The terminal status the order is in.
        status: OrderStatus,
    },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyItems => write!(f, "Order must contain at least one item"),
            Self::LineTotalMismatch { title_bn } => {
                write!(f, "Line total mismatch for item '{title_bn}'")
            }
            Self::TerminalStatus { status } => {
                write!(f, "Order is already {status} and cannot change status")
            }
        }
    }
}

impl std::error::Error for OrderError {}
