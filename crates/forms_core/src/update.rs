use crate::{is_plausible_email, AppState, ButtonState, Effect, FormKind, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Submit decisions are made here, synchronously, so the runtime can act on
/// `AllowSubmit`/`PreventSubmit` before the default submission would run.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ForecastSubmitted => match state.button_state(FormKind::Forecast) {
            Some(ButtonState::Idle) => {
                state.set_button(FormKind::Forecast, ButtonState::Working);
                vec![Effect::AllowSubmit {
                    form: FormKind::Forecast,
                }]
            }
            Some(ButtonState::Working) => vec![Effect::PreventSubmit {
                form: FormKind::Forecast,
            }],
            None => Vec::new(),
        },
        Msg::EmailSubmitted { email } => match state.button_state(FormKind::Email) {
            Some(ButtonState::Idle) if is_plausible_email(&email) => {
                state.set_button(FormKind::Email, ButtonState::Working);
                vec![Effect::AllowSubmit {
                    form: FormKind::Email,
                }]
            }
            Some(ButtonState::Idle) => vec![
                Effect::ShowAlert {
                    message: state.config().invalid_email_alert.clone(),
                },
                Effect::PreventSubmit {
                    form: FormKind::Email,
                },
            ],
            Some(ButtonState::Working) => vec![Effect::PreventSubmit {
                form: FormKind::Email,
            }],
            None => Vec::new(),
        },
        Msg::DownloadClicked => {
            // A disabled button swallows clicks. An accepted click keeps its
            // default action, so the download request still goes out.
            if state.button_state(FormKind::Download) == Some(ButtonState::Idle) {
                state.set_button(FormKind::Download, ButtonState::Working);
                let token = state.arm_download_timer();
                vec![
                    Effect::ScheduleReEnable {
                        token,
                        delay: state.config().download_delay(),
                    },
                    Effect::AllowSubmit {
                        form: FormKind::Download,
                    },
                ]
            } else {
                Vec::new()
            }
        }
        Msg::DownloadTimerElapsed { token } => {
            if state.disarm_download_timer(token) {
                state.set_button(FormKind::Download, ButtonState::Idle);
            }
            Vec::new()
        }
        Msg::Reset { form } | Msg::SubmissionFailed { form } => reset(&mut state, form),
        Msg::NavigationObserved => FormKind::ALL
            .into_iter()
            .flat_map(|form| reset(&mut state, form))
            .collect(),
    };

    (state, effects)
}

fn reset(state: &mut AppState, form: FormKind) -> Vec<Effect> {
    state.set_button(form, ButtonState::Idle);
    if form != FormKind::Download {
        return Vec::new();
    }
    match state.take_pending_timer() {
        Some(token) => vec![Effect::CancelReEnable { token }],
        None => Vec::new(),
    }
}
