/// Build-time endpoints for the backend and the frontend

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub frontend_url: String,
}

impl ClientConfig {
    /// Reads `TAGSCOPE_API_BASE_URL` and `TAGSCOPE_FRONTEND_URL` at compile time.
    pub fn from_env() -> ClientConfig {
        ClientConfig::new(
            option_env!("TAGSCOPE_API_BASE_URL"),
            option_env!("TAGSCOPE_FRONTEND_URL"),
        )
    }

    fn new(api_base_url: Option<&str>, frontend_url: Option<&str>) -> ClientConfig {
        ClientConfig {
            api_base_url: normalize(api_base_url, DEFAULT_API_BASE_URL),
            frontend_url: normalize(frontend_url, DEFAULT_FRONTEND_URL),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn normalize(value: Option<&str>, fallback: &str) -> String {
    let value = value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(fallback);
    value.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new(None, None);
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.frontend_url, "http://localhost:3000");
    }

    #[test]
    fn test_overrides_are_trimmed() {
        let config = ClientConfig::new(Some(" https://api.example.com/ "), Some(""));
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.frontend_url, "http://localhost:3000");
    }
}
