//! Outbound ports (driven side).

pub mod transport;

pub use transport::Transport;
