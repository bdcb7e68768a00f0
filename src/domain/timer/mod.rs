//! Work timer: active sessions across pauses

mod clock;
mod summary;
mod work_timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use summary::{format_hms, format_time_of_day, WorkSummary, MISSING_TIME};
pub use work_timer::{StopPeriod, TimerState, WorkSession, WorkTimer};
