pub mod drills;
pub mod report;
pub mod runner;

pub use crate::domain::model::{Measurement, Report, Sample, TaskKind};
pub use crate::domain::ports::Drill;
pub use crate::utils::error::Result;
