//! Body mass index classification.
//!
//! # Data Flow
//! ```text
//! raw query value ("25.5")
//!     → types.rs (BmiReading: parsed, finite, > 0)
//!     → table.rs (classify: half-open ranges → Category)
//!     → Classification (wire representation)
//! ```

pub mod table;
pub mod types;

pub use table::classify;
pub use types::{BmiReading, Category, Classification, ReadingError};
