use forms_core::ControllerConfig;

#[test]
fn defaults_match_dashboard_script() {
    let config = ControllerConfig::default();
    assert_eq!(config.forecast_working_label, "Generating...");
    assert_eq!(config.email_working_label, "Sending...");
    assert_eq!(config.download_working_label, None);
    assert_eq!(config.invalid_email_alert, "Enter a valid email");
    assert_eq!(config.download_delay().as_millis(), 2000);
}

#[test]
fn partial_ron_falls_back_to_defaults() {
    let config: ControllerConfig =
        ron::from_str("(email_working_label: \"Mailing...\", download_reenable_ms: 750)").unwrap();

    assert_eq!(config.email_working_label, "Mailing...");
    assert_eq!(config.download_reenable_ms, 750);
    assert_eq!(config.forecast_working_label, "Generating...");
    assert_eq!(config.invalid_email_alert, "Enter a valid email");
}
