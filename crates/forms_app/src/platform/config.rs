use std::fs;
use std::path::Path;

use anyhow::Context;
use forms_core::ControllerConfig;
use forms_logging::forms_info;

/// Loads controller settings from a RON file, or the defaults when no file is given.
///
/// Missing keys fall back to their defaults, so a file may override a single label.
pub(crate) fn load_config(path: Option<&Path>) -> anyhow::Result<ControllerConfig> {
    let Some(path) = path else {
        return Ok(ControllerConfig::default());
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: ControllerConfig = ron::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    forms_info!("Loaded controller config from {:?}", path);
    Ok(config)
}
