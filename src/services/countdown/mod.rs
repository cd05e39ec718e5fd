mod calculator;
mod scheduler;

pub use calculator::{compute, compute_now};
pub use scheduler::{Clock, RefreshScheduler, SchedulerError, SchedulerState, SystemClock};
