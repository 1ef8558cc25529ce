pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use driver::SchedEngine;
pub use event::SimEvent;
pub use state::{BurstOrder, CpuState, Cycle, JobSlot, ReadyQueue, SimCtx, SlotIdx, SlotState};
