//! Build-time configuration for the API endpoint with an optional runtime
//! override. The runtime config is read from `window.SPREADLOVE_CONFIG` (if
//! present) so static deployments can point at another API without rebuilding.
//! Configuration values are public; do not store secrets here.

use super::api::DEFAULT_TIMEOUT_MS;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u32,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("SPREADLOVE_API_BASE_URL").unwrap_or("");
        let request_timeout_ms = option_env!("SPREADLOVE_REQUEST_TIMEOUT_MS")
            .and_then(parse_timeout)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            request_timeout_ms,
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    request_timeout_ms: Option<u32>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.request_timeout_ms {
        config.request_timeout_ms = value;
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("SPREADLOVE_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        request_timeout_ms: read_runtime_value(&object, "request_timeout_ms")
            .as_deref()
            .and_then(parse_timeout),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses a positive millisecond timeout; zero and garbage are ignored.
fn parse_timeout(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|ms| *ms > 0)
}

#[cfg(test)]
mod tests {
    use super::{
        apply_runtime_overrides, normalize_runtime_value, parse_timeout, AppConfig,
        RuntimeConfig, DEFAULT_TIMEOUT_MS,
    };

    fn default_config() -> AppConfig {
        AppConfig {
            api_base_url: "https://api.default".to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://spreadlove.club "),
            Some("https://spreadlove.club".to_string())
        );
    }

    #[test]
    fn parse_timeout_rejects_zero_and_garbage() {
        assert_eq!(parse_timeout("2500"), Some(2500));
        assert_eq!(parse_timeout(" 30000 "), Some(30_000));
        assert_eq!(parse_timeout("0"), None);
        assert_eq!(parse_timeout("-1"), None);
        assert_eq!(parse_timeout("soon"), None);
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = default_config();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            request_timeout_ms: parse_timeout("0"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, default_config());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = default_config();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            request_timeout_ms: parse_timeout("2500"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.request_timeout_ms, 2500);
    }

    #[test]
    fn load_without_runtime_config_uses_defaults() {
        let config = AppConfig::load();
        assert!(config.request_timeout_ms > 0);
    }
}
