//! CLI module graph.

pub mod command;
pub mod config;
pub mod gameweek;
pub mod league;
pub mod output;
pub mod picks;
