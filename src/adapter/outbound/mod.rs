//! Outbound adapters (driven side).

pub mod fpl;
