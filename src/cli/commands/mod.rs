//! Command implementations

pub mod detect;
pub mod init;
pub mod run;
