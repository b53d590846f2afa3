//! Domain types for EdgeNode primitives.
//!
//! - [`RangeEntry`]: Time-bounded IPv4 range from a block/allow rule
//! - [`RawCapacity`]: Block figures returned by a capacity probe
//! - [`ProbeResult`]: Timestamped capacity reading in bytes

mod capacity;
mod ip_range;

pub use capacity::*;
pub use ip_range::*;
