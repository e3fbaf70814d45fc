//! Config command
//!
//! Shows where the client keeps its files and, with flags, updates and
//! persists settings.

use crate::config::settings::API_URL_ENV;
use crate::config::{BudgetPaths, LogLevel, Settings};
use crate::error::{BudgetError, BudgetResult};

/// Apply any requested changes, save them and describe the configuration
pub fn handle_config_command(
    paths: &BudgetPaths,
    settings: &mut Settings,
    api_url: Option<String>,
    log_level: Option<LogLevel>,
) -> BudgetResult<String> {
    let mut changed = false;

    if let Some(url) = api_url {
        let url = url.trim().trim_end_matches('/').to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(BudgetError::Validation(format!(
                "API URL must start with http:// or https://: '{}'",
                url
            )));
        }
        settings.api_base_url = url;
        changed = true;
    }

    if let Some(level) = log_level {
        settings.log_level = level;
        changed = true;
    }

    let mut output = String::new();
    if changed {
        settings.save(paths)?;
        tracing::info!(path = %paths.settings_file().display(), "settings saved");
        output.push_str("Settings saved.\n\n");
    }

    output.push_str("Family Budget Configuration\n");
    output.push_str("===========================\n");
    output.push_str(&format!(
        "Data directory:  {}\n",
        paths.base_dir().display()
    ));
    output.push_str(&format!(
        "Settings file:   {}\n",
        paths.settings_file().display()
    ));
    output.push_str(&format!("Log file:        {}\n", paths.log_file().display()));
    output.push('\n');
    output.push_str("Settings:\n");

    let effective = settings.effective_api_url();
    if effective != settings.api_base_url {
        output.push_str(&format!(
            "  API URL:         {} (from {})\n",
            effective, API_URL_ENV
        ));
    } else {
        output.push_str(&format!("  API URL:         {}\n", settings.api_base_url));
    }
    output.push_str(&format!("  Log level:       {}\n", settings.log_level));
    output.push_str(&format!(
        "  Request timeout: {}s\n",
        settings.request_timeout_secs
    ));
    output.push_str(&format!("  Currency symbol: {}\n", settings.currency_symbol));

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths() -> (TempDir, BudgetPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, paths)
    }

    #[test]
    fn test_show_without_changes_does_not_save() {
        let (_temp, paths) = paths();
        let mut settings = Settings::default();

        let output = handle_config_command(&paths, &mut settings, None, None).unwrap();
        assert!(output.contains("Log level:       INFO"));
        assert!(!output.contains("Settings saved"));
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_updates_are_persisted() {
        let (_temp, paths) = paths();
        let mut settings = Settings::default();

        let output = handle_config_command(
            &paths,
            &mut settings,
            Some("http://budget.lan:9000/".into()),
            Some(LogLevel::Debug),
        )
        .unwrap();
        assert!(output.starts_with("Settings saved."));

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.api_base_url, "http://budget.lan:9000");
        assert_eq!(loaded.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_rejects_bad_url() {
        let (_temp, paths) = paths();
        let mut settings = Settings::default();

        let err =
            handle_config_command(&paths, &mut settings, Some("budget.lan".into()), None)
                .unwrap_err();
        assert!(err.is_validation());
        assert!(!paths.settings_file().exists());
    }
}
