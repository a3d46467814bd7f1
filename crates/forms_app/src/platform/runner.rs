use std::time::{Duration, Instant};

use forms_core::ControllerConfig;
use forms_engine::{FormController, Page, SubmitOutcome, TimerEvent, TokioTimerScheduler};
use forms_logging::{forms_debug, forms_info};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::UnboundedReceiver;

use super::report::StepRecord;
use super::script::{ScriptError, Step};

/// Replays scripted steps against a controller whose timers run on a
/// private tokio runtime.
pub(crate) struct ScriptRunner {
    runtime: Runtime,
    controller: FormController<TokioTimerScheduler>,
    timer_rx: UnboundedReceiver<TimerEvent>,
}

impl ScriptRunner {
    pub(crate) fn new(page: Page, config: ControllerConfig) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()?;
        let (scheduler, timer_rx) = TokioTimerScheduler::new(runtime.handle().clone());
        let controller = FormController::new(page, config, scheduler);
        Ok(Self {
            runtime,
            controller,
            timer_rx,
        })
    }

    pub(crate) fn run(&mut self, steps: &[Step]) -> Result<Vec<StepRecord>, ScriptError> {
        let mut records = Vec::with_capacity(steps.len());
        for (offset, step) in steps.iter().enumerate() {
            let index = offset + 1;
            if !step.has_matching_trigger() {
                return Err(ScriptError::WrongTrigger {
                    index,
                    step: step.clone(),
                });
            }
            forms_info!("step {}: {}", index, step);
            let outcome = self.apply(step).map_err(|source| ScriptError::Step {
                index,
                step: step.clone(),
                source,
            })?;
            records.push(StepRecord::capture(
                index,
                step.to_string(),
                outcome,
                self.controller.page(),
            ));
        }
        Ok(records)
    }

    fn apply(&mut self, step: &Step) -> Result<Option<SubmitOutcome>, forms_engine::PageError> {
        let outcome = match step {
            Step::SetField { form, name, value } => {
                self.controller.page_mut().set_field(*form, name, value)?;
                None
            }
            Step::Submit(form) | Step::Click(form) => Some(self.controller.activate(*form)),
            Step::Wait(ms) => {
                self.wait(Duration::from_millis(*ms));
                None
            }
            Step::Navigate => {
                self.controller.navigate();
                None
            }
            Step::Fail(form) => {
                self.controller.report_failure(*form);
                None
            }
            Step::Reset(form) => {
                self.controller.reset(*form);
                None
            }
        };
        Ok(outcome)
    }

    /// Dispatches every timer that fires before `duration` has passed.
    fn wait(&mut self, duration: Duration) {
        let deadline = Instant::now() + duration;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            let timer_rx = &mut self.timer_rx;
            let received = self
                .runtime
                .block_on(async { tokio::time::timeout(remaining, timer_rx.recv()).await });
            match received {
                Ok(Some(event)) => {
                    forms_debug!("timer event {:?}", event);
                    self.controller.handle_timer(event);
                }
                // Timed out, or the scheduler is gone.
                Ok(None) | Err(_) => break,
            }
        }
    }
}
