use std::collections::{BTreeMap, BTreeSet};

use forms_core::{ButtonBinding, FormBindings, FormKind};
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("invalid selector {selector:?}: {message}")]
    Selector { selector: String, message: String },
    #[error("no {0} form on the page")]
    FormMissing(FormKind),
    #[error("{form} form has no field named {name:?}")]
    FieldMissing { form: FormKind, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonElement {
    /// Text content with nested markup flattened and whitespace runs collapsed
    /// to single spaces. This normalised text is what a reset writes back, so
    /// it can differ from the source markup's raw `textContent`.
    pub label: String,
    pub disabled: bool,
}

/// A located form and the mutable parts of its DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageForm {
    pub kind: FormKind,
    pub action: String,
    pub method: String,
    pub button: ButtonElement,
    pub fields: BTreeMap<String, String>,
}

/// A native form submission, captured with the button as it looked when the
/// request left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub form: FormKind,
    pub action: String,
    pub method: String,
    pub fields: BTreeMap<String, String>,
    pub button: ButtonElement,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    forms: BTreeMap<FormKind, PageForm>,
    alerts: Vec<String>,
    submissions: Vec<Submission>,
}

impl Page {
    /// Locates the forecast, email and download forms in `html`.
    ///
    /// The first forecast and email forms win even without a `button`, in
    /// which case that kind stays absent. The download button is the first
    /// `button` inside any download form.
    pub fn parse(html: &str) -> Result<Self, PageError> {
        let document = Html::parse_document(html);
        let form_selector = selector("form")?;
        let button_selector = selector("button")?;
        let field_selector = selector("input[name], textarea[name], select[name]")?;

        let mut forms = BTreeMap::new();
        let mut seen = BTreeSet::new();
        for element in document.select(&form_selector) {
            let Some(action) = element.value().attr("action") else {
                continue;
            };
            let Some(kind) = FormKind::from_action(action) else {
                continue;
            };
            if seen.contains(&kind) {
                continue;
            }
            let Some(button) = element.select(&button_selector).next() else {
                // The download button is looked up across every download form;
                // the other two bind to the first form of their kind or nothing.
                if kind != FormKind::Download {
                    seen.insert(kind);
                }
                continue;
            };
            seen.insert(kind);

            forms.insert(
                kind,
                PageForm {
                    kind,
                    action: action.to_string(),
                    method: element
                        .value()
                        .attr("method")
                        .map(str::to_ascii_lowercase)
                        .unwrap_or_else(|| "get".to_string()),
                    button: ButtonElement {
                        label: element_text(button),
                        disabled: button.value().attr("disabled").is_some(),
                    },
                    fields: collect_fields(element, &field_selector),
                },
            );
        }

        Ok(Self {
            forms,
            ..Self::default()
        })
    }

    /// Handles for the controller, one per located form.
    pub fn bindings(&self) -> FormBindings {
        let binding = |kind: FormKind| {
            self.forms
                .get(&kind)
                .map(|form| ButtonBinding::new(form.button.label.clone()))
        };
        FormBindings {
            forecast: binding(FormKind::Forecast),
            email: binding(FormKind::Email),
            download: binding(FormKind::Download),
        }
    }

    pub fn form(&self, kind: FormKind) -> Option<&PageForm> {
        self.forms.get(&kind)
    }

    pub fn field(&self, kind: FormKind, name: &str) -> Option<&str> {
        self.forms.get(&kind)?.fields.get(name).map(String::as_str)
    }

    /// Types into an existing field, the way a user would.
    pub fn set_field(&mut self, kind: FormKind, name: &str, value: &str) -> Result<(), PageError> {
        let form = self
            .forms
            .get_mut(&kind)
            .ok_or(PageError::FormMissing(kind))?;
        let field = form
            .fields
            .get_mut(name)
            .ok_or_else(|| PageError::FieldMissing {
                form: kind,
                name: name.to_string(),
            })?;
        *field = value.to_string();
        Ok(())
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub(crate) fn button_mut(&mut self, kind: FormKind) -> Option<&mut ButtonElement> {
        self.forms.get_mut(&kind).map(|form| &mut form.button)
    }

    pub(crate) fn push_alert(&mut self, message: String) {
        self.alerts.push(message);
    }

    pub(crate) fn record_submission(&mut self, kind: FormKind) -> Option<&Submission> {
        let form = self.forms.get(&kind)?;
        self.submissions.push(Submission {
            form: kind,
            action: form.action.clone(),
            method: form.method.clone(),
            fields: form.fields.clone(),
            button: form.button.clone(),
        });
        self.submissions.last()
    }
}

fn selector(css: &str) -> Result<Selector, PageError> {
    Selector::parse(css).map_err(|err| PageError::Selector {
        selector: css.to_string(),
        message: err.to_string(),
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn collect_fields(form: ElementRef<'_>, field_selector: &Selector) -> BTreeMap<String, String> {
    form.select(field_selector)
        .filter(|field| {
            !matches!(
                field.value().attr("type"),
                Some("submit" | "button" | "reset")
            )
        })
        .filter_map(|field| {
            let name = field.value().attr("name")?;
            let value = match field.value().name() {
                "textarea" => field.text().collect::<String>(),
                _ => field.value().attr("value").unwrap_or_default().to_string(),
            };
            Some((name.to_string(), value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_label_collapses_whitespace() {
        let page = Page::parse(
            r#"<form action="/download"><button>
                  Download
                  <b>CSV</b>
               </button></form>"#,
        )
        .unwrap();
        assert_eq!(
            page.form(FormKind::Download).unwrap().button.label,
            "Download CSV"
        );
    }

    #[test]
    fn submit_inputs_are_not_fields() {
        let page = Page::parse(
            r#"<form action="/email" method="POST">
                 <input name="email" value="x@y.z">
                 <input type="submit" name="go" value="Go">
                 <button>Send</button>
               </form>"#,
        )
        .unwrap();
        let form = page.form(FormKind::Email).unwrap();
        assert_eq!(form.method, "post");
        assert_eq!(form.fields.len(), 1);
        assert_eq!(page.field(FormKind::Email, "email"), Some("x@y.z"));
    }
}
