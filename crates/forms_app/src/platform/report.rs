use std::fmt::Write as _;

use forms_core::FormKind;
use forms_engine::{Page, SubmitOutcome};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonSnapshot {
    pub form: FormKind,
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub index: usize,
    pub step: String,
    /// Set only for steps that fire a submit or click.
    pub outcome: Option<String>,
    pub buttons: Vec<ButtonSnapshot>,
    pub alerts: Vec<String>,
    pub submissions: usize,
}

impl StepRecord {
    pub(crate) fn capture(
        index: usize,
        step: String,
        outcome: Option<SubmitOutcome>,
        page: &Page,
    ) -> Self {
        let buttons = FormKind::ALL
            .into_iter()
            .filter_map(|form| {
                page.form(form).map(|located| ButtonSnapshot {
                    form,
                    label: located.button.label.clone(),
                    disabled: located.button.disabled,
                })
            })
            .collect();
        Self {
            index,
            step,
            outcome: outcome.map(|outcome| outcome_label(outcome).to_string()),
            buttons,
            alerts: page.alerts().to_vec(),
            submissions: page.submissions().len(),
        }
    }
}

fn outcome_label(outcome: SubmitOutcome) -> &'static str {
    match outcome {
        SubmitOutcome::Submitted => "submitted",
        SubmitOutcome::Prevented => "prevented",
        SubmitOutcome::NoSubmission => "no submission",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub started_utc: String,
    pub page: String,
    pub steps: Vec<StepRecord>,
}

impl Report {
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "page: {} (run {})", self.page, self.started_utc);
        for record in &self.steps {
            let _ = write!(out, "{:>3}. {}", record.index, record.step);
            if let Some(outcome) = &record.outcome {
                let _ = write!(out, " -> {outcome}");
            }
            out.push('\n');
            for button in &record.buttons {
                let state = if button.disabled { "disabled" } else { "enabled" };
                let _ = writeln!(
                    out,
                    "     {:<8} [{}] {}",
                    button.form.to_string(),
                    state,
                    button.label
                );
            }
            let _ = writeln!(
                out,
                "     alerts: {}, submissions: {}",
                record.alerts.len(),
                record.submissions
            );
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report {
            started_utc: "2024-01-01T00:00:00+00:00".to_string(),
            page: "dashboard.html".to_string(),
            steps: vec![StepRecord {
                index: 1,
                step: "submit email".to_string(),
                outcome: Some("prevented".to_string()),
                buttons: vec![ButtonSnapshot {
                    form: FormKind::Email,
                    label: "Email Report".to_string(),
                    disabled: false,
                }],
                alerts: vec!["Enter a valid email".to_string()],
                submissions: 0,
            }],
        }
    }

    #[test]
    fn text_report_lists_buttons() {
        let text = sample().to_text();
        assert!(text.contains("  1. submit email -> prevented"), "{text}");
        assert!(text.contains("email    [enabled] Email Report"), "{text}");
        assert!(text.contains("alerts: 1, submissions: 0"), "{text}");
    }

    #[test]
    fn json_report_uses_variant_names() {
        let json: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(json["steps"][0]["buttons"][0]["form"], "Email");
        assert_eq!(json["steps"][0]["alerts"][0], "Enter a valid email");
    }

    #[test]
    fn capture_reads_page_state() {
        let page = Page::parse(r#"<form action="/download"><button>Get</button></form>"#).unwrap();
        let record = StepRecord::capture(
            3,
            "click download".to_string(),
            Some(SubmitOutcome::NoSubmission),
            &page,
        );

        assert_eq!(record.outcome.as_deref(), Some("no submission"));
        assert_eq!(
            record.buttons,
            vec![ButtonSnapshot {
                form: FormKind::Download,
                label: "Get".to_string(),
                disabled: false,
            }]
        );
    }
}
