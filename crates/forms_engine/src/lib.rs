//! Forms engine: page model and effect execution.
mod controller;
mod page;
mod render;
mod timer;

pub use controller::{FormController, SubmitOutcome};
pub use page::{ButtonElement, Page, PageError, PageForm, Submission};
pub use timer::{TimerEvent, TimerScheduler, TokioTimerScheduler};
