pub mod report_core;

pub mod config;
pub mod engine;
pub mod faceit;
pub mod roster;
pub mod scheduler;
pub mod sink;

pub use config::Config;
pub use engine::ReportEngine;
