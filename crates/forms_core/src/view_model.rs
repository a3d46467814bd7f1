use crate::{FormKind, TimerToken};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub disabled: bool,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub forecast: Option<ButtonView>,
    pub email: Option<ButtonView>,
    pub download: Option<ButtonView>,
    pub pending_timer: Option<TimerToken>,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn button(&self, form: FormKind) -> Option<&ButtonView> {
        match form {
            FormKind::Forecast => self.forecast.as_ref(),
            FormKind::Email => self.email.as_ref(),
            FormKind::Download => self.download.as_ref(),
        }
    }
}
