//! Command implementations for devhelper

pub mod init;
pub mod initialize;

pub use init::InitCommand;
