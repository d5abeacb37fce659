//! Shot-derived analytics: possession metrics, rink geometry, expected
//! goals, and shot-flow series.
//!
//! Everything in this module is a pure, synchronous function over already
//! fetched data. Nothing here performs I/O or holds state between calls, so
//! callers may invoke these from any number of tasks without coordination.

pub mod flow;
pub mod format;
pub mod possession;
pub mod rink;
pub mod types;
pub mod xg;

pub use flow::build_flow;
pub use rink::RinkGeometry;
pub use types::{FlowPoint, ShotEvent, ShotKind, Side};
pub use xg::estimate_xg;
