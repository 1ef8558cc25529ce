use crate::core::{Cycle, SlotIdx};
use crate::sim::JobId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    JobAdmitted {
        slot: SlotIdx,
        id: JobId,
    },
    JobDispatched {
        slot: SlotIdx,
        id: JobId,
        burst: Cycle,
    },
    JobCompleted {
        slot: SlotIdx,
        id: JobId,
    },
    // CPU spent the cycle idle (nothing ready to dispatch)
    CpuIdle,
}
