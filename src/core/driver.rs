use super::{
    event::SimEvent,
    observer::Observer,
    state::{JobSlot, SimCtx, SlotIdx},
};
use crate::scheduler::Discipline;

pub struct SchedEngine<D: Discipline> {
    pub ctx: SimCtx,
    pub discipline: D,
    observer: Observer,
}

impl<D: Discipline> SchedEngine<D> {
    pub fn new(slots: Vec<JobSlot>) -> Self {
        let discipline = D::init();
        let ctx = SimCtx::new(slots, discipline.ready_queue());
        let observer = Observer::new();
        Self {
            ctx,
            discipline,
            observer,
        }
    }

    pub fn admit(&mut self, idx: SlotIdx) -> SimEvent {
        self.ctx.admit(idx);
        SimEvent::JobAdmitted {
            slot: idx,
            id: self.ctx.slot(idx).id,
        }
    }

    // One simulated cycle: dispatch if idle, charge waits, run the
    // current job. Admission for this cycle must already have happened.
    pub fn tick(&mut self) -> Vec<SimEvent> {
        let mut events = Vec::new();

        if self.ctx.cpu_is_idle() {
            if let Some(idx) = self.ctx.queue.pop() {
                self.ctx.set_running(idx);
                let slot = self.ctx.slot(idx);
                events.push(SimEvent::JobDispatched {
                    slot: idx,
                    id: slot.id,
                    burst: slot.burst,
                });
            }
        }

        // Wait is charged after dispatch: the job picked this cycle no
        // longer counts as waiting.
        self.ctx.charge_waiting();

        match self.ctx.cpu.current {
            Some(idx) => {
                // In its own block to avoid a double mutable borrow
                let finished = {
                    let slot = self.ctx.slot_mut(idx);
                    slot.consumed = slot.consumed.saturating_add(1);
                    // A zero-burst job still occupies this one cycle as running
                    slot.remaining() == 0
                };
                if finished {
                    self.ctx.mark_completed(idx);
                    events.push(SimEvent::JobCompleted {
                        slot: idx,
                        id: self.ctx.slot(idx).id,
                    });
                }
            }
            None => events.push(SimEvent::CpuIdle),
        }

        self.observer.observe(&self.ctx);
        self.ctx.advance_cycle();
        events
    }
}
