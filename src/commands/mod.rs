//! CLI commands for densepath

pub mod demo;
pub mod dispatch;
pub mod report;
pub mod solve;
