//! # EdgeNode Core
//!
//! Core types, errors, and traits shared by the EdgeNode hot-path primitives.
//!
//! - **Types**: [`RangeEntry`] for rule matching, [`RawCapacity`] and
//!   [`ProbeResult`] for volume capacity
//! - **Errors**: [`EdgeError`] and the crate [`Result`] alias
//! - **Traits**: [`Clock`] and [`CapacityProbe`], the environment seams
//! - **Clocks**: [`SystemClock`] and [`ManualClock`]
//!
//! ## Example
//!
//! ```rust
//! use edgenode_core::{ManualClock, RangeEntry};
//!
//! let clock = ManualClock::new(1_700_000_000);
//! let entry = RangeEntry::new(1, 10, 20, 1_700_000_060);
//! assert!(entry.contains_with(15, &clock));
//!
//! clock.advance(61);
//! assert!(!entry.contains_with(15, &clock));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod clock;
pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use clock::{ManualClock, SystemClock};
pub use constants::*;
pub use error::{EdgeError, Result};
pub use traits::*;
pub use types::*;
