//! Forms core: pure state machine for the dashboard form controller.
mod config;
mod effect;
mod email;
mod form;
mod msg;
mod state;
mod update;
mod view_model;

pub use config::ControllerConfig;
pub use effect::Effect;
pub use email::is_plausible_email;
pub use form::FormKind;
pub use msg::Msg;
pub use state::{AppState, ButtonBinding, ButtonState, FormBindings, TimerToken};
pub use update::update;
pub use view_model::{AppViewModel, ButtonView};
