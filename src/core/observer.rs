use super::state::{SimCtx, SlotState};

#[derive(Debug)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn observe(&mut self, ctx: &SimCtx) {
        self.step += 1;

        if let Some(idx) = ctx.cpu.current {
            let slot = ctx.slot(idx);
            debug_assert_eq!(
                slot.state,
                SlotState::Running,
                "cpu.current slot {idx} must be Running"
            );
            debug_assert!(
                !ctx.queue.contains(idx),
                "Running slot {idx} must not appear in the ready queue"
            );
        }

        let queued = ctx
            .slots
            .iter()
            .filter(|slot| slot.state == SlotState::Queued)
            .count();
        debug_assert_eq!(
            ctx.queue.len(),
            queued,
            "Ready queue length disagrees with Queued slot count"
        );

        for slot in &ctx.slots {
            match slot.state {
                SlotState::Queued => debug_assert!(
                    ctx.queue.contains(slot.index),
                    "Queued slot {} missing from the ready queue",
                    slot.index
                ),
                SlotState::Completed => debug_assert!(
                    slot.completion_time.is_some(),
                    "Completed slot {} has no completion time",
                    slot.index
                ),
                _ => {}
            }
        }

        let dispatched = ctx
            .slots
            .iter()
            .filter(|slot| matches!(slot.state, SlotState::Running | SlotState::Completed))
            .count();
        debug_assert_eq!(
            ctx.order.len(),
            dispatched,
            "Dispatch order length disagrees with dispatched slot count"
        );
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self::new()
    }
}
