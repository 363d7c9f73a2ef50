//! Command implementations for the gitwc CLI.
//!
//! Each command takes the repository location plus output options and drives
//! the core history walker; presentation lives in `core::output`.

pub mod count;
pub mod log;

pub use count::execute_count;
pub use log::{execute_log, RevisionRow};
