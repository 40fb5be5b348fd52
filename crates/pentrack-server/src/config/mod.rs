use serde::Serialize;
use std::time::Duration;

pub const CONFIG_SCHEMA_VERSION: &str = "1";

#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
    pub shutdown_drain: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 16 * 1024,
            shutdown_drain: Duration::from_millis(3000),
        }
    }
}

pub fn validate_startup_config_contract(api: &ApiConfig) -> Result<(), String> {
    if api.max_body_bytes == 0 {
        return Err("max_body_bytes must be > 0".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_config_validation_rejects_zero_body_limit() {
        let api = ApiConfig {
            max_body_bytes: 0,
            ..ApiConfig::default()
        };
        let err = validate_startup_config_contract(&api).expect_err("zero body limit");
        assert!(err.contains("max_body_bytes"));
    }

    #[test]
    fn default_config_passes_the_contract() {
        assert!(validate_startup_config_contract(&ApiConfig::default()).is_ok());
    }
}
