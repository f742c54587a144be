pub mod config;
pub mod core;
pub mod domain;
pub mod ops;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use config::WorkloadConfig;
pub use crate::core::{report, runner::PerfRunner};
pub use domain::model::{Measurement, Report, TaskKind};
pub use utils::error::{DrillError, Result};
