//! Core domain types

pub mod clock;
pub mod stamp;
pub mod status;

pub use clock::{Clock, FixedClock, SystemClock};
pub use stamp::DateStamp;
pub use status::{Step, StepStatus};
