use crate::domain::model::{Sample, TaskKind};
use crate::utils::error::Result;

/// A single timed operation.
///
/// Inputs are prepared when the drill is constructed; `run` performs only
/// the operation under measurement.
pub trait Drill {
    fn kind(&self) -> TaskKind;
    fn run(&mut self) -> Result<Sample>;
}
