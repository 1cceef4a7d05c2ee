//! Application services built on the domain and outbound ports.

pub mod cache;
pub mod dashboard;
