//! Host-side adapter implementations of the port traits.
//!
//! Real converter drivers live outside this crate; these adapters let
//! tests and demos exercise the pipeline end to end without hardware.

pub mod delay;
pub mod sim;

pub use delay::StdDelay;
pub use sim::SimAdc;
