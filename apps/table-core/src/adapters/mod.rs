//! Adapters for external dependencies.

pub mod players_sea;
