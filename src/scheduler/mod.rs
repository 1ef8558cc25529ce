pub mod fcfs;
pub mod sjf;

use crate::core::ReadyQueue;
pub use fcfs::Fcfs;
pub use sjf::Sjf;

// A discipline owns exactly one decision: which ready-queue variant
// orders dispatch. Both policies are non-preemptive; the engine never
// interrupts a running job.
pub trait Discipline {
    const NAME: &'static str;

    fn init() -> Self;

    fn ready_queue(&self) -> ReadyQueue;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisciplineKind {
    Fcfs,
    Sjf,
}

impl DisciplineKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Fcfs => Fcfs::NAME,
            Self::Sjf => Sjf::NAME,
        }
    }
}
