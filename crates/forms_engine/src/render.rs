use forms_core::{AppViewModel, FormKind};

use crate::Page;

/// Writes button state from the view onto the page's DOM model.
pub(crate) fn render(page: &mut Page, view: &AppViewModel) {
    for kind in FormKind::ALL {
        let (Some(button_view), Some(button)) = (view.button(kind), page.button_mut(kind)) else {
            continue;
        };
        button.disabled = button_view.disabled;
        if button.label != button_view.label {
            button.label.clone_from(&button_view.label);
        }
    }
}
