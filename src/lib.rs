//! devhelper library
//!
//! Scaffolds starter projects from a closed set of templates, either by
//! writing fixed files or by delegating to external toolchains.

pub mod commands;
pub mod config;
pub mod error;
pub mod report;
pub mod templates;
pub mod ui;
pub mod utils;

pub use commands::init::{ProjectRequest, run_init};
pub use commands::initialize::{Outcome, TemplateRegistry};
pub use error::{DevhelperError, ExitInfo, Result};
pub use templates::TemplateId;
