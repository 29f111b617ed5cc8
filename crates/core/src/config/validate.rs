use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Addon section exists (enforced by serde)
/// - Server port is not 0
/// - Addon URL is an http(s) address
/// - Vocabulary covers every locale and language
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    let url = config.addon.url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "addon.url must start with http:// or https:// (got {:?})",
            config.addon.url
        )));
    }

    config
        .vocabulary
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("vocabulary: {}", e)))?;

    Ok(())
}
