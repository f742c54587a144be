use std::time::Instant;

use crate::config::WorkloadConfig;
use crate::core::drills::build_drill;
use crate::domain::model::{Measurement, Report, TaskKind};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Runs drills one after another and times each `Drill::run` call.
pub struct PerfRunner {
    workload: WorkloadConfig,
    tasks: Vec<TaskKind>,
    monitor: SystemMonitor,
}

impl PerfRunner {
    pub fn new(workload: WorkloadConfig) -> Self {
        Self::new_with_monitoring(workload, false)
    }

    pub fn new_with_monitoring(workload: WorkloadConfig, monitor_enabled: bool) -> Self {
        Self {
            workload,
            tasks: TaskKind::ALL.to_vec(),
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Restricts the run to `tasks`. Report order stays canonical.
    pub fn with_tasks(mut self, tasks: &[TaskKind]) -> Self {
        let mut tasks = tasks.to_vec();
        tasks.sort();
        tasks.dedup();
        self.tasks = tasks;
        self
    }

    pub fn run(&self) -> Result<Report> {
        tracing::info!("🚀 Running {} drills", self.tasks.len());
        self.monitor.log_stats("Start");

        let mut measurements = Vec::with_capacity(self.tasks.len());
        for &kind in &self.tasks {
            let mut drill = build_drill(kind, &self.workload);
            tracing::debug!("Prepared inputs for {}", kind);

            let started = Instant::now();
            let sample = drill.run()?;
            let elapsed = started.elapsed();

            tracing::debug!(
                task = %kind,
                items = sample.items,
                bytes = sample.bytes,
                "Finished in {:?}",
                elapsed
            );
            self.monitor.log_stats(kind.title());
            measurements.push(Measurement::new(kind, elapsed, sample));
        }

        let report = Report::new(measurements);
        tracing::info!("✅ Drills completed in {:?}", report.total_elapsed());
        self.monitor.log_final_stats();
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DrillError;

    #[test]
    fn test_runs_all_drills_in_order() {
        let report = PerfRunner::new(WorkloadConfig::default()).run().unwrap();
        let kinds: Vec<TaskKind> = report.measurements.iter().map(|m| m.task).collect();
        assert_eq!(kinds, TaskKind::ALL.to_vec());
        assert!(report.measurements.iter().all(|m| m.bytes > 0));
    }

    #[test]
    fn test_selection_keeps_canonical_order() {
        let report = PerfRunner::new(WorkloadConfig::default())
            .with_tasks(&[TaskKind::WordFrequencies, TaskKind::Squares])
            .run()
            .unwrap();
        let kinds: Vec<TaskKind> = report.measurements.iter().map(|m| m.task).collect();
        assert_eq!(kinds, vec![TaskKind::Squares, TaskKind::WordFrequencies]);
    }

    #[test]
    fn test_invalid_reverse_range_surfaces_error() {
        let mut workload = WorkloadConfig::default();
        workload.reverse.end = workload.reverse.len;
        let result = PerfRunner::new(workload)
            .with_tasks(&[TaskKind::ReverseSublist])
            .run();
        assert!(matches!(result, Err(DrillError::InvalidRange { .. })));
    }
}
