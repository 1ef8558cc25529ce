pub mod core;
pub mod scheduler;
pub mod sim;

pub use scheduler::{Discipline, DisciplineKind, Fcfs, Sjf};
pub use sim::{simulate, Job, JobId, ScheduleResult, Sim};
