//! External process execution and platform checks.

pub mod command;
pub mod platform;

pub use command::{execute, CommandOptions, ExecResult};
pub use platform::is_ci;
