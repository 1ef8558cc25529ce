pub mod driver;
pub mod job;

pub use driver::{simulate, Sim};
pub use job::{Job, JobId, ScheduleResult};
