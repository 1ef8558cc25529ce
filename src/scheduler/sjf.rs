use super::Discipline;
use crate::core::ReadyQueue;

// Shortest-job-first: among ready jobs, dispatch the smallest burst.
// Equal bursts go to the lower job id.
pub struct Sjf;

impl Discipline for Sjf {
    const NAME: &'static str = "sjf";

    fn init() -> Self {
        Self
    }

    fn ready_queue(&self) -> ReadyQueue {
        ReadyQueue::new_min_burst()
    }
}
