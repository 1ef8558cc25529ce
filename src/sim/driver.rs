use super::job::{Job, ScheduleResult};
use crate::{
    core::{
        driver::SchedEngine,
        event::SimEvent,
        state::{Cycle, JobSlot, SlotIdx, SlotState},
    },
    scheduler::{Discipline, DisciplineKind, Fcfs, Sjf},
};

pub struct Sim<D: Discipline> {
    pub engine: SchedEngine<D>,
    // Slot indices in admission order: ascending arrival, input order on ties
    admit_order: Vec<SlotIdx>,
    admit_cursor: usize,
}

impl<D: Discipline> Sim<D> {
    pub fn new(jobs: &[Job]) -> Self {
        let slots: Vec<JobSlot> = jobs
            .iter()
            .enumerate()
            .map(|(index, job)| JobSlot {
                id: job.id,
                index,
                arrival: job.arrival,
                burst: job.burst,
                state: SlotState::Pending,
                consumed: 0,
                waited: 0,
                dispatch_time: None,
                completion_time: None,
            })
            .collect();

        let mut admit_order: Vec<SlotIdx> = (0..slots.len()).collect();
        // Stable sort, so equal arrivals keep input order
        admit_order.sort_by_key(|&idx| slots[idx].arrival);

        Self {
            engine: SchedEngine::new(slots),
            admit_order,
            admit_cursor: 0,
        }
    }

    pub fn now(&self) -> Cycle {
        self.engine.ctx.now
    }

    pub fn step(&mut self) -> Vec<SimEvent> {
        let mut events = self.handle_arrivals();
        events.extend(self.engine.tick());
        events
    }

    fn handle_arrivals(&mut self) -> Vec<SimEvent> {
        let now = self.engine.ctx.now;
        let mut events = Vec::new();
        // Admission order is sorted by arrival, so arrived jobs are a prefix
        while let Some(&idx) = self.admit_order.get(self.admit_cursor) {
            if self.engine.ctx.slot(idx).arrival > now {
                break;
            }
            events.push(self.engine.admit(idx));
            self.admit_cursor += 1;
        }
        events
    }

    pub fn done(&self) -> bool {
        self.engine.ctx.all_completed()
    }

    pub fn run(&mut self) -> ScheduleResult {
        while !self.done() {
            self.step();
        }
        self.result()
    }

    pub fn result(&self) -> ScheduleResult {
        let slots = &self.engine.ctx.slots;
        let n = slots.len();
        let wait_average = if n == 0 {
            // Defined as zero for the empty instance
            0.0
        } else {
            let total: Cycle = slots.iter().map(|slot| slot.waited).sum();
            total as f64 / n as f64
        };

        ScheduleResult {
            order: self.engine.ctx.order.clone(),
            wait_average,
        }
    }

    pub fn jobs_map<'a, T, F>(&'a self, f: F) -> impl Iterator<Item = T> + 'a
    where
        F: FnMut(&JobSlot) -> T + 'a,
    {
        self.engine.ctx.slots.iter().map(f)
    }
}

/// Run one full simulation of `jobs` under `discipline` and return the
/// dispatch order and average wait. Every call works on its own copy of
/// the job table and its own ready queue.
pub fn simulate(jobs: &[Job], discipline: DisciplineKind) -> ScheduleResult {
    match discipline {
        DisciplineKind::Fcfs => Sim::<Fcfs>::new(jobs).run(),
        DisciplineKind::Sjf => Sim::<Sjf>::new(jobs).run(),
    }
}
