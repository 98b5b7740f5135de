//! The view state machine.
//!
//! A [`Session`] owns everything that changes while the demo runs: which
//! screen is shown, the onboarding answers, the active plan and exercise,
//! the completed-session counter and the exercise timer. It is a plain
//! value; [`Session::apply`] consumes it and returns the next state.
//!
//! ```text
//! Landing --start--> Onboarding --submit--> Dashboard --last complete--> Completion
//!                        ^                     ^                              |
//!                        |                     +-------- plan tomorrow -------+
//!                        +---------------------------- new assessment --------+
//! ```

mod state;
mod ticker;
mod timer;

pub use state::{Action, Session, Stage, View};
pub use ticker::{IntervalTicker, ManualTicker, TickSource};
pub use timer::{format_time, ExerciseTimer};
