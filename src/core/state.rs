use keyed_priority_queue::KeyedPriorityQueue;
use std::collections::VecDeque;

use crate::sim::JobId;

// Index into the working slot table of one simulation run
pub type SlotIdx = usize;
pub type Cycle = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Pending,
    Queued,
    Running,
    Completed,
}

#[derive(Debug, Clone)]
pub struct JobSlot {
    pub id: JobId,
    pub index: SlotIdx,
    pub arrival: Cycle,
    pub burst: Cycle,
    pub state: SlotState,
    pub consumed: Cycle,
    pub waited: Cycle,
    pub dispatch_time: Option<Cycle>,
    pub completion_time: Option<Cycle>,
}

impl JobSlot {
    pub fn remaining(&self) -> Cycle {
        self.burst.saturating_sub(self.consumed)
    }
}

#[derive(Debug, Default)]
pub struct CpuState {
    pub current: Option<SlotIdx>,
}

// Selection key for the min-burst queue: smallest burst wins, then the
// lower job id, then the lower input index (ids are labels and may repeat).
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone)]
pub struct BurstOrder {
    pub burst: Cycle,
    pub id: JobId,
    pub index: SlotIdx,
}

impl BurstOrder {
    fn key(&self) -> (Cycle, JobId, SlotIdx) {
        (self.burst, self.id, self.index)
    }
}

// KeyedPriorityQueue is a max-heap, so we need to flip-flop BurstOrder's Ord
impl PartialOrd for BurstOrder {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BurstOrder {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.key().cmp(&self.key())
    }
}

#[derive(Debug)]
pub enum ReadyQueue {
    Fifo {
        jobs: VecDeque<SlotIdx>,
    },
    MinBurst {
        jobs: KeyedPriorityQueue<SlotIdx, BurstOrder>,
    },
}

impl ReadyQueue {
    pub fn new_fifo() -> Self {
        Self::Fifo {
            jobs: VecDeque::new(),
        }
    }

    pub fn new_min_burst() -> Self {
        Self::MinBurst {
            jobs: KeyedPriorityQueue::new(),
        }
    }

    pub fn push(&mut self, slot: &JobSlot) {
        match self {
            Self::Fifo { jobs } => jobs.push_back(slot.index),
            Self::MinBurst { jobs } => {
                jobs.push(
                    slot.index,
                    BurstOrder {
                        burst: slot.burst,
                        id: slot.id,
                        index: slot.index,
                    },
                );
            }
        }
    }

    pub fn pop(&mut self) -> Option<SlotIdx> {
        match self {
            Self::Fifo { jobs } => jobs.pop_front(),
            Self::MinBurst { jobs } => jobs.pop().map(|(idx, _)| idx),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Fifo { jobs } => jobs.len(),
            Self::MinBurst { jobs } => jobs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, idx: SlotIdx) -> bool {
        match self {
            Self::Fifo { jobs } => jobs.contains(&idx),
            Self::MinBurst { jobs } => jobs.get_priority(&idx).is_some(),
        }
    }
}

// Per-run simulation state: one CPU, one ready queue, the working copy of
// the job table. Never shared across runs.
#[derive(Debug)]
pub struct SimCtx {
    pub now: Cycle,
    pub cpu: CpuState,
    pub slots: Vec<JobSlot>,
    pub queue: ReadyQueue,
    pub order: Vec<JobId>,
}

impl SimCtx {
    pub fn new(slots: Vec<JobSlot>, queue: ReadyQueue) -> Self {
        let order = Vec::with_capacity(slots.len());
        Self {
            now: 0,
            cpu: CpuState::default(),
            slots,
            queue,
            order,
        }
    }

    pub fn slot(&self, idx: SlotIdx) -> &JobSlot {
        &self.slots[idx]
    }

    pub fn slot_mut(&mut self, idx: SlotIdx) -> &mut JobSlot {
        &mut self.slots[idx]
    }

    pub fn cpu_is_idle(&self) -> bool {
        self.cpu.current.is_none()
    }

    pub fn advance_cycle(&mut self) {
        self.now = self.now.saturating_add(1);
    }

    pub fn admit(&mut self, idx: SlotIdx) {
        let slot = &mut self.slots[idx];
        debug_assert_eq!(
            slot.state,
            SlotState::Pending,
            "Slot {idx} admitted more than once"
        );
        debug_assert!(
            slot.arrival <= self.now,
            "Slot {idx} admitted before its arrival time"
        );
        slot.state = SlotState::Queued;
        let slot = &self.slots[idx];
        self.queue.push(slot);
    }

    pub fn set_running(&mut self, idx: SlotIdx) {
        debug_assert!(self.cpu.current.is_none(), "CPU already running a job");
        debug_assert!(
            !self.queue.contains(idx),
            "Running slot {idx} must not stay enqueued"
        );
        self.cpu.current = Some(idx);
        let now = self.now;
        let slot = &mut self.slots[idx];
        slot.state = SlotState::Running;
        slot.dispatch_time = Some(now);
        let id = slot.id;
        self.order.push(id);
    }

    pub fn mark_completed(&mut self, idx: SlotIdx) {
        debug_assert_eq!(
            self.cpu.current,
            Some(idx),
            "Completing slot {idx} that is not on the CPU"
        );
        self.cpu.current = None;
        let now = self.now;
        let slot = &mut self.slots[idx];
        slot.state = SlotState::Completed;
        slot.completion_time = Some(now);
    }

    // One wait unit per cycle per admitted-but-not-yet-dispatched job.
    pub fn charge_waiting(&mut self) {
        for slot in &mut self.slots {
            if slot.state == SlotState::Queued {
                slot.waited = slot.waited.saturating_add(1);
            }
        }
    }

    pub fn all_completed(&self) -> bool {
        self.slots
            .iter()
            .all(|slot| slot.state == SlotState::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(index: SlotIdx, id: JobId, arrival: Cycle, burst: Cycle) -> JobSlot {
        JobSlot {
            id,
            index,
            arrival,
            burst,
            state: SlotState::Pending,
            consumed: 0,
            waited: 0,
            dispatch_time: None,
            completion_time: None,
        }
    }

    #[test]
    fn fifo_pops_in_push_order() {
        let mut queue = ReadyQueue::new_fifo();
        queue.push(&slot(0, 1, 0, 9));
        queue.push(&slot(1, 2, 0, 1));
        queue.push(&slot(2, 3, 0, 4));

        assert_eq!(queue.pop(), Some(0));
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn min_burst_pops_smallest_burst_first() {
        let mut queue = ReadyQueue::new_min_burst();
        queue.push(&slot(0, 1, 0, 9));
        queue.push(&slot(1, 2, 0, 1));
        queue.push(&slot(2, 3, 0, 4));

        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(0));
    }

    #[test]
    fn min_burst_breaks_burst_ties_by_lower_id() {
        let mut queue = ReadyQueue::new_min_burst();
        queue.push(&slot(0, 4, 0, 3));
        queue.push(&slot(1, 2, 0, 3));
        queue.push(&slot(2, 3, 0, 3));

        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(0));
    }

    #[test]
    fn min_burst_breaks_duplicate_ids_by_input_index() {
        let mut queue = ReadyQueue::new_min_burst();
        queue.push(&slot(1, 7, 0, 3));
        queue.push(&slot(0, 7, 0, 3));

        assert_eq!(queue.pop(), Some(0));
        assert_eq!(queue.pop(), Some(1));
    }

    #[test]
    fn contains_tracks_membership() {
        let mut queue = ReadyQueue::new_min_burst();
        queue.push(&slot(0, 1, 0, 2));
        assert!(queue.contains(0));
        assert!(!queue.contains(1));
        queue.pop();
        assert!(!queue.contains(0));
        assert!(queue.is_empty());
    }
}
