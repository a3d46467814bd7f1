use std::fmt;

use crate::view_model::{AppViewModel, ButtonView};
use crate::{ControllerConfig, FormKind};

/// Owned state of one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    Working,
}

/// Identifies one scheduled download re-enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(pub u64);

impl fmt::Display for TimerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Handle to a button located on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonBinding {
    pub idle_label: String,
}

impl ButtonBinding {
    pub fn new(idle_label: impl Into<String>) -> Self {
        Self {
            idle_label: idle_label.into(),
        }
    }
}

/// The forms the controller was handed at construction. Absent forms are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormBindings {
    pub forecast: Option<ButtonBinding>,
    pub email: Option<ButtonBinding>,
    pub download: Option<ButtonBinding>,
}

impl FormBindings {
    pub fn get(&self, form: FormKind) -> Option<&ButtonBinding> {
        match form {
            FormKind::Forecast => self.forecast.as_ref(),
            FormKind::Email => self.email.as_ref(),
            FormKind::Download => self.download.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ButtonSlot {
    idle_label: String,
    state: ButtonState,
}

impl ButtonSlot {
    fn from_binding(binding: Option<ButtonBinding>) -> Option<Self> {
        binding.map(|binding| Self {
            idle_label: binding.idle_label,
            state: ButtonState::Idle,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    config: ControllerConfig,
    forecast: Option<ButtonSlot>,
    email: Option<ButtonSlot>,
    download: Option<ButtonSlot>,
    pending_timer: Option<TimerToken>,
    next_token: u64,
    dirty: bool,
}

impl AppState {
    pub fn new(config: ControllerConfig, bindings: FormBindings) -> Self {
        Self {
            config,
            forecast: ButtonSlot::from_binding(bindings.forecast),
            email: ButtonSlot::from_binding(bindings.email),
            download: ButtonSlot::from_binding(bindings.download),
            pending_timer: None,
            next_token: 0,
            dirty: false,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// `None` when the form is not on the page.
    pub fn button_state(&self, form: FormKind) -> Option<ButtonState> {
        self.slot(form).map(|slot| slot.state)
    }

    pub fn pending_timer(&self) -> Option<TimerToken> {
        self.pending_timer
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            forecast: self.button_view(FormKind::Forecast),
            email: self.button_view(FormKind::Email),
            download: self.button_view(FormKind::Download),
            pending_timer: self.pending_timer,
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_button(&mut self, form: FormKind, next: ButtonState) -> bool {
        let Some(slot) = self.slot_mut(form) else {
            return false;
        };
        if slot.state == next {
            return false;
        }
        slot.state = next;
        self.dirty = true;
        true
    }

    pub(crate) fn arm_download_timer(&mut self) -> TimerToken {
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.pending_timer = Some(token);
        token
    }

    /// Clears the pending timer only if `token` is the one armed.
    pub(crate) fn disarm_download_timer(&mut self, token: TimerToken) -> bool {
        if self.pending_timer == Some(token) {
            self.pending_timer = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn take_pending_timer(&mut self) -> Option<TimerToken> {
        self.pending_timer.take()
    }

    fn working_label(&self, form: FormKind) -> Option<&str> {
        match form {
            FormKind::Forecast => Some(&self.config.forecast_working_label),
            FormKind::Email => Some(&self.config.email_working_label),
            FormKind::Download => self.config.download_working_label.as_deref(),
        }
    }

    fn button_view(&self, form: FormKind) -> Option<ButtonView> {
        let slot = self.slot(form)?;
        let view = match slot.state {
            ButtonState::Idle => ButtonView {
                disabled: false,
                label: slot.idle_label.clone(),
            },
            ButtonState::Working => ButtonView {
                disabled: true,
                label: self
                    .working_label(form)
                    .unwrap_or(slot.idle_label.as_str())
                    .to_string(),
            },
        };
        Some(view)
    }

    fn slot(&self, form: FormKind) -> Option<&ButtonSlot> {
        match form {
            FormKind::Forecast => self.forecast.as_ref(),
            FormKind::Email => self.email.as_ref(),
            FormKind::Download => self.download.as_ref(),
        }
    }

    fn slot_mut(&mut self, form: FormKind) -> Option<&mut ButtonSlot> {
        match form {
            FormKind::Forecast => self.forecast.as_mut(),
            FormKind::Email => self.email.as_mut(),
            FormKind::Download => self.download.as_mut(),
        }
    }
}
