use crate::core::state::Cycle;

/// Display label for a job. Assigned 1-based by the CLI; the engine treats
/// it as an opaque label except for the SJF burst tie-break.
pub type JobId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub arrival: Cycle,
    pub burst: Cycle,
}

/// Outcome of one simulation run: dispatch order plus the mean number of
/// cycles jobs spent admitted but not yet running.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleResult {
    pub order: Vec<JobId>,
    pub wait_average: f64,
}
