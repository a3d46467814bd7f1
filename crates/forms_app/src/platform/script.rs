use std::fmt;

use forms_core::FormKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("malformed script: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("step {index} ({step}) failed: {source}")]
    Step {
        index: usize,
        step: Step,
        #[source]
        source: forms_engine::PageError,
    },
    #[error("step {index} ({step}): the download form is clicked, the other forms are submitted")]
    WrongTrigger { index: usize, step: Step },
}

/// One scripted user or browser event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Type `value` into the named field.
    SetField {
        form: FormKind,
        name: String,
        value: String,
    },
    /// Submit the forecast or email form.
    Submit(FormKind),
    /// Click the download button.
    Click(FormKind),
    /// Let timers run for this many milliseconds.
    Wait(u64),
    /// Report a navigation. Only the buttons return to idle; typed fields,
    /// alerts and recorded submissions stay as they are.
    Navigate,
    Fail(FormKind),
    Reset(FormKind),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::SetField { form, name, value } => write!(f, "set {form}.{name} = {value:?}"),
            Step::Submit(form) => write!(f, "submit {form}"),
            Step::Click(form) => write!(f, "click {form}"),
            Step::Wait(ms) => write!(f, "wait {ms}ms"),
            Step::Navigate => write!(f, "navigate"),
            Step::Fail(form) => write!(f, "fail {form}"),
            Step::Reset(form) => write!(f, "reset {form}"),
        }
    }
}

impl Step {
    pub(crate) fn has_matching_trigger(&self) -> bool {
        match self {
            Step::Submit(form) => *form != FormKind::Download,
            Step::Click(form) => *form == FormKind::Download,
            _ => true,
        }
    }
}

pub(crate) fn parse_script(text: &str) -> Result<Vec<Step>, ScriptError> {
    let steps: Vec<Step> = ron::from_str(text)?;
    if let Some((offset, step)) = steps
        .iter()
        .enumerate()
        .find(|(_, step)| !step.has_matching_trigger())
    {
        return Err(ScriptError::WrongTrigger {
            index: offset + 1,
            step: step.clone(),
        });
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_every_step_kind() {
        let text = r#"[
            SetField(form: Email, name: "email", value: "a@b.co"),
            Submit(Email),
            Click(Download),
            Wait(2000),
            Fail(Forecast),
            Reset(Download),
            Navigate,
        ]"#;

        assert_eq!(
            parse_script(text).unwrap(),
            vec![
                Step::SetField {
                    form: FormKind::Email,
                    name: "email".to_string(),
                    value: "a@b.co".to_string(),
                },
                Step::Submit(FormKind::Email),
                Step::Click(FormKind::Download),
                Step::Wait(2000),
                Step::Fail(FormKind::Forecast),
                Step::Reset(FormKind::Download),
                Step::Navigate,
            ]
        );
    }

    #[test]
    fn unknown_step_is_rejected() {
        let err = parse_script("[Explode]").unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn verb_must_match_the_form() {
        let err = parse_script("[Submit(Forecast), Submit(Download)]").unwrap_err();
        assert!(
            matches!(
                err,
                ScriptError::WrongTrigger {
                    index: 2,
                    step: Step::Submit(FormKind::Download)
                }
            ),
            "{err}"
        );

        let err = parse_script("[Click(Email)]").unwrap_err();
        assert!(
            matches!(err, ScriptError::WrongTrigger { index: 1, .. }),
            "{err}"
        );
    }

    #[test]
    fn steps_describe_themselves() {
        let step = Step::SetField {
            form: FormKind::Email,
            name: "email".to_string(),
            value: "x".to_string(),
        };
        assert_eq!(step.to_string(), "set email.email = \"x\"");
        assert_eq!(Step::Wait(5).to_string(), "wait 5ms");
    }
}
