use crate::{FormKind, TimerToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Native submit event on the forecast form.
    ForecastSubmitted,
    /// Native submit event on the email form, carrying the field value at submit time.
    EmailSubmitted { email: String },
    /// Click on the download button.
    DownloadClicked,
    /// A scheduled re-enable fired.
    DownloadTimerElapsed { token: TimerToken },
    /// Return a button to idle, cancelling any pending re-enable.
    Reset { form: FormKind },
    /// An observer saw a submission fail without the page navigating away.
    SubmissionFailed { form: FormKind },
    /// The page navigated; every button returns to idle.
    NavigationObserved,
}
