use crate::config::types::{Config, HttpConfig, OutputConfig, SitemapConfig};
use crate::ConfigError;

/// Validates the entire configuration
///
/// Called by the loaders; command-line overrides applied afterwards should be
/// re-validated by the caller.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    validate_sitemap_config(&config.sitemap)?;
    Ok(())
}

/// Validates HTTP fetcher configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "request_timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect_timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs > config.request_timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs ({}) cannot exceed request_timeout_secs ({})",
            config.connect_timeout_secs, config.request_timeout_secs
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.sitemap_path.is_empty() {
        return Err(ConfigError::Validation(
            "sitemap_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates sitemap entry defaults
fn validate_sitemap_config(config: &SitemapConfig) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&config.priority) {
        return Err(ConfigError::Validation(format!(
            "priority must be between 0.0 and 1.0, got {}",
            config.priority
        )));
    }

    Ok(())
}
