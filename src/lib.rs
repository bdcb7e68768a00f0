//! Harvester Meter - work timer with voice-assisted bill capture
//!
//! This crate tracks harvester working time across pauses and captures
//! bill details (farmer name, address) by speech, saving finished bills.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Work timer, listen-session register, bills, config, errors
//! - **Application**: Use cases (voice coordinator, bill book) and port traits
//! - **Infrastructure**: Adapters (TOML config, JSON preferences, terminal speech)
//! - **CLI**: Argument parsing, interactive session, signals and logging

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
