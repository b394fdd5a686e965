//! System-on-Chip (SoC) Components.
//!
//! This module organizes the shared parts of the simulated system that sit
//! between the private caches, currently the snooping bus.

/// Snooping bus interconnect.
pub mod interconnect;

pub use interconnect::Bus;
