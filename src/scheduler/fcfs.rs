use super::Discipline;
use crate::core::ReadyQueue;

// First-come-first-served: dispatch the head of a plain FIFO. Ties on
// arrival are already settled by admission order (lower input index first).
pub struct Fcfs;

impl Discipline for Fcfs {
    const NAME: &'static str = "fcfs";

    fn init() -> Self {
        Self
    }

    fn ready_queue(&self) -> ReadyQueue {
        ReadyQueue::new_fifo()
    }
}
