//! Port definitions separating the league core from its adapters.

pub mod outbound;
