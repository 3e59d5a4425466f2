//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`QuoteId`]: UUID-based quote identifier
//! - [`Timestamp`]: UTC creation time of persisted quotes
//! - [`ArithmeticError`], [`CheckedArithmetic`]: overflow-safe money arithmetic

pub mod arithmetic;
pub mod ids;
pub mod timestamp;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic};
pub use ids::QuoteId;
pub use timestamp::Timestamp;
