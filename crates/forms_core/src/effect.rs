use std::time::Duration;

use crate::{FormKind, TimerToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Let the browser's default submission for `form` proceed.
    AllowSubmit { form: FormKind },
    /// Suppress the default submission for `form`.
    PreventSubmit { form: FormKind },
    /// Blocking, user-facing alert.
    ShowAlert { message: String },
    ScheduleReEnable { token: TimerToken, delay: Duration },
    CancelReEnable { token: TimerToken },
}
