use forms_core::{update, AppState, ControllerConfig, Effect, FormKind, Msg};
use forms_logging::{forms_debug, forms_info, forms_warn, set_dispatch_seq};

use crate::render::render;
use crate::{Page, TimerEvent, TimerScheduler};

/// What happened to the native submission behind a dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Prevented,
    /// The event carried no submission (timers, resets, absent forms).
    NoSubmission,
}

/// Wires page events through the core state machine and executes its effects.
pub struct FormController<S> {
    page: Page,
    state: AppState,
    scheduler: S,
    seq: u64,
}

impl<S: TimerScheduler> FormController<S> {
    pub fn new(page: Page, config: ControllerConfig, scheduler: S) -> Self {
        let bindings = page.bindings();
        for kind in FormKind::ALL {
            match bindings.get(kind) {
                Some(binding) => forms_info!("attached to {} form ({:?})", kind, binding.idle_label),
                None => forms_debug!("no {} form on page", kind),
            }
        }
        Self {
            page,
            state: AppState::new(config, bindings),
            scheduler,
            seq: 0,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Field edits go straight to the page; the core only reads them at submit time.
    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// A user submits `form` or clicks its button.
    pub fn activate(&mut self, form: FormKind) -> SubmitOutcome {
        let msg = match form {
            FormKind::Forecast => Msg::ForecastSubmitted,
            FormKind::Email => Msg::EmailSubmitted {
                email: self
                    .page
                    .field(FormKind::Email, "email")
                    .unwrap_or_default()
                    .to_string(),
            },
            FormKind::Download => Msg::DownloadClicked,
        };
        self.dispatch(msg)
    }

    pub fn handle_timer(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Elapsed { token } => {
                self.dispatch(Msg::DownloadTimerElapsed { token });
            }
        }
    }

    pub fn reset(&mut self, form: FormKind) {
        self.dispatch(Msg::Reset { form });
    }

    /// Called by whatever observes a submission failing without navigation.
    pub fn report_failure(&mut self, form: FormKind) {
        forms_warn!("{} submission failed; returning button to idle", form);
        self.dispatch(Msg::SubmissionFailed { form });
    }

    /// Returns every button to idle and cancels the download timer. The rest
    /// of the page model (typed fields, alerts, submissions) is kept.
    pub fn navigate(&mut self) {
        self.dispatch(Msg::NavigationObserved);
    }

    /// Runs one message through `update`, renders, then executes effects.
    ///
    /// Rendering happens first so a recorded submission always sees the
    /// button already disabled and relabelled.
    pub fn dispatch(&mut self, msg: Msg) -> SubmitOutcome {
        self.seq += 1;
        set_dispatch_seq(self.seq);
        forms_debug!("dispatch {:?}", msg);

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            render(&mut self.page, &state.view());
        }
        self.state = state;

        let mut outcome = SubmitOutcome::NoSubmission;
        for effect in effects {
            match effect {
                Effect::AllowSubmit { form } => {
                    if let Some(submission) = self.page.record_submission(form) {
                        forms_info!(
                            "{} form submitted: {} {} ({} fields)",
                            form,
                            submission.method.to_uppercase(),
                            submission.action,
                            submission.fields.len()
                        );
                    }
                    outcome = SubmitOutcome::Submitted;
                }
                Effect::PreventSubmit { form } => {
                    forms_debug!("{} submission prevented", form);
                    outcome = SubmitOutcome::Prevented;
                }
                Effect::ShowAlert { message } => {
                    forms_info!("alert: {}", message);
                    self.page.push_alert(message);
                }
                Effect::ScheduleReEnable { token, delay } => {
                    self.scheduler.schedule(token, delay);
                }
                Effect::CancelReEnable { token } => {
                    self.scheduler.cancel(token);
                }
            }
        }
        outcome
    }
}
