//! Blocking delay over `std::thread::sleep`.

use std::thread;
use std::time::Duration;

use crate::ports::DelayNs;

/// Host-side delay source: puts the calling thread to sleep.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}
