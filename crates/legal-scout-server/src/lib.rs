//! CLI and webhook server for [`legal_scout`].

pub mod cli;
pub mod server;
pub mod telemetry;
