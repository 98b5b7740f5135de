//! Screen views for the TUI.

mod completion;
mod dashboard;
mod landing;
mod onboarding;

pub use completion::render_completion;
pub use dashboard::render_dashboard;
pub use landing::render_landing;
pub use onboarding::render_onboarding;
