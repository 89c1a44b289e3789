// Copyright (c) 2025 yaml-reorder contributors
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # yaml-reorder - Command-Line Driver
//!
//! This crate wires the SQL and schema layers into the `yaml-reorder`
//! command.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │     yaml-reorder <FILES>... [-d D]       │
//! └──────────────┬───────────────────────────┘
//!                ↓
//! ┌──────────────────────────────────────────┐
//! │  Driver: pair → SQL → columns → schema   │
//! └──────┬─────────────────────┬─────────────┘
//!        ↓                     ↓
//! ┌──────────────┐     ┌──────────────────┐
//! │ yaml-reorder │     │   yaml-reorder   │
//! │     -sql     │     │     -schema      │
//! └──────────────┘     └──────────────────┘
//! ```
//!
//! ## Contract
//!
//! [`Driver::run`] returns a [`RunReport`]; [`RunOutcome::exit_code`] maps
//! it to `0` (nothing changed) or `1` (files modified). The binary adds
//! `130` for interrupts and `2` for fatal setup errors.

pub mod config;
pub mod driver;
pub mod error;
pub mod outcome;
pub mod pairing;

// Re-export commonly used types
pub use config::{Cli, ReorderConfig};
pub use driver::Driver;
pub use error::{DriverError, DriverResult};
pub use outcome::{
    EXIT_FATAL, EXIT_INTERRUPTED, EXIT_MODIFIED, EXIT_UNCHANGED, FileOutcome, RunOutcome,
    RunReport, SkipReason,
};
pub use pairing::ModelPair;
