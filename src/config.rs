//! Frontend configuration for the auth API origin and session constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API base URL comes from the `TODO_WEB_API_BASE_URL` build-time variable
//! and can be overridden at runtime through `window.TODO_WEB_CONFIG` so static
//! deployments can retarget the API without rebuilding. Values here are
//! public; never store secrets in them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding the session token.
pub const TOKEN_KEY: &str = "access_token";

/// Route shown once a session token exists.
pub const LANDING_ROUTE: &str = "/todo";

/// Runtime config global read in the browser.
#[cfg(feature = "hydrate")]
const RUNTIME_CONFIG_GLOBAL: &str = "TODO_WEB_CONFIG";

/// Client configuration resolved once per page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin prefix for auth endpoints; empty means same-origin.
    pub api_base_url: String,
}

impl AppConfig {
    /// Load config from build-time env and apply runtime overrides.
    pub fn load() -> Self {
        let mut config = Self {
            api_base_url: option_env!("TODO_WEB_API_BASE_URL").unwrap_or("").to_owned(),
        };
        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }
        config
    }

    /// Join an absolute API path onto the configured base URL.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base_url.trim().trim_end_matches('/');
        format!("{base}{path}")
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
}

#[cfg(feature = "hydrate")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::Reflect;
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_GLOBAL)).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let value = Reflect::get(&config, &JsValue::from_str("apiBaseUrl"))
        .ok()?
        .as_string();

    Some(RuntimeConfig {
        api_base_url: value.as_deref().and_then(normalize_runtime_value),
    })
}

#[cfg(not(feature = "hydrate"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
