use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three forms the controller attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FormKind {
    Forecast,
    Email,
    Download,
}

impl FormKind {
    pub const ALL: [FormKind; 3] = [FormKind::Forecast, FormKind::Email, FormKind::Download];

    /// Classifies a form by its literal `action` attribute.
    ///
    /// The forecast form may carry query parameters (`/forecast?months=6`),
    /// so it matches by prefix; the other two must match exactly.
    pub fn from_action(action: &str) -> Option<Self> {
        if action.starts_with("/forecast") {
            Some(FormKind::Forecast)
        } else if action == "/email" {
            Some(FormKind::Email)
        } else if action == "/download" {
            Some(FormKind::Download)
        } else {
            None
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormKind::Forecast => write!(f, "forecast"),
            FormKind::Email => write!(f, "email"),
            FormKind::Download => write!(f, "download"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_matches_by_prefix() {
        assert_eq!(FormKind::from_action("/forecast"), Some(FormKind::Forecast));
        assert_eq!(
            FormKind::from_action("/forecast?months=12"),
            Some(FormKind::Forecast)
        );
        assert_eq!(FormKind::from_action("/forecasting"), Some(FormKind::Forecast));
    }

    #[test]
    fn email_and_download_match_exactly() {
        assert_eq!(FormKind::from_action("/email"), Some(FormKind::Email));
        assert_eq!(FormKind::from_action("/email?x=1"), None);
        assert_eq!(FormKind::from_action("/download"), Some(FormKind::Download));
        assert_eq!(FormKind::from_action("/download/"), None);
        assert_eq!(FormKind::from_action(""), None);
    }
}
