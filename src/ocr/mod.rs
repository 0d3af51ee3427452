pub mod commands;
mod controller;
mod job;
mod log_stream;
mod state;
mod worker;

pub use controller::OcrController;
pub use log_stream::LogStream;
pub use state::{PhaseError, RunPhase};
