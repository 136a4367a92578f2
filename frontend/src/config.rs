use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub search_debounce_ms: Option<u32>,
}

impl RuntimeConfig {
    /// Fills unset fields from `fallback`.
    pub fn merge(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            search_debounce_ms: self.search_debounce_ms.or(fallback.search_debounce_ms),
        }
    }

    pub fn base_url(&self) -> String {
        self.api_base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string()
    }

    pub fn debounce_ms(&self) -> u32 {
        self.search_debounce_ms.unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS)
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn cache_config(cfg: RuntimeConfig) -> RuntimeConfig {
    let _ = RUNTIME_CONFIG.set(cfg.clone());
    RUNTIME_CONFIG.get().cloned().unwrap_or(cfg)
}

/// Last resolved config, or defaults before `init` has finished.
pub fn current() -> RuntimeConfig {
    RUNTIME_CONFIG.get().cloned().unwrap_or_default()
}

pub async fn await_api_base_url() -> String {
    resolve().await.base_url()
}

pub fn search_debounce_ms() -> u32 {
    current().debounce_ms()
}

pub async fn init() {
    let cfg = resolve().await;
    log::info!("runtime config resolved: api_base_url={}", cfg.base_url());
}

async fn resolve() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let from_globals = browser::snapshot_from_globals().unwrap_or_default();
    if from_globals.api_base_url.is_some() {
        return cache_config(from_globals);
    }
    match browser::fetch_runtime_config().await {
        Some(fetched) => {
            let merged = from_globals.merge(fetched);
            browser::write_window_config(&merged);
            cache_config(merged)
        }
        None => cache_config(from_globals),
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    fn read_global(name: &str) -> Option<RuntimeConfig> {
        // Accepts `window.<name> = { API_BASE_URL | api_base_url, SEARCH_DEBOUNCE_MS | search_debounce_ms }`
        let window = web_sys::window()?;
        let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        let field = |upper: &str, lower: &str| {
            js_sys::Reflect::get(&obj, &upper.into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .or_else(|| js_sys::Reflect::get(&obj, &lower.into()).ok())
                .filter(|v| !v.is_undefined() && !v.is_null())
        };
        Some(RuntimeConfig {
            api_base_url: field("API_BASE_URL", "api_base_url").and_then(|v| v.as_string()),
            search_debounce_ms: field("SEARCH_DEBOUNCE_MS", "search_debounce_ms")
                .and_then(|v| v.as_f64())
                .map(|ms| ms.max(0.0) as u32),
        })
    }

    pub(super) fn snapshot_from_globals() -> Option<RuntimeConfig> {
        let env = read_global("__LIMS_ENV");
        let cfg = read_global("__LIMS_CONFIG");
        match (env, cfg) {
            (Some(env), Some(cfg)) => Some(env.merge(cfg)),
            (env, cfg) => env.or(cfg),
        }
    }

    pub(super) fn write_window_config(cfg: &RuntimeConfig) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let obj = js_sys::Object::new();
        if let Some(url) = &cfg.api_base_url {
            let _ = js_sys::Reflect::set(
                &obj,
                &"api_base_url".into(),
                &wasm_bindgen::JsValue::from_str(url),
            );
        }
        if let Some(ms) = cfg.search_debounce_ms {
            let _ = js_sys::Reflect::set(
                &obj,
                &"search_debounce_ms".into(),
                &wasm_bindgen::JsValue::from_f64(f64::from(ms)),
            );
        }
        let _ = js_sys::Reflect::set(&window, &"__LIMS_CONFIG".into(), &obj);
    }

    pub(super) async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            log::warn!("config.json unavailable (status {})", resp.status());
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod browser {
    use super::RuntimeConfig;

    pub(super) fn snapshot_from_globals() -> Option<RuntimeConfig> {
        None
    }

    pub(super) fn write_window_config(_cfg: &RuntimeConfig) {}

    pub(super) async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trims_trailing_slash_and_falls_back() {
        let cfg = RuntimeConfig {
            api_base_url: Some("https://lims.example/api/".into()),
            search_debounce_ms: None,
        };
        assert_eq!(cfg.base_url(), "https://lims.example/api");
        assert_eq!(RuntimeConfig::default().base_url(), DEFAULT_API_BASE_URL);

        let blank = RuntimeConfig {
            api_base_url: Some("/".into()),
            search_debounce_ms: None,
        };
        assert_eq!(blank.base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn merge_prefers_explicit_values() {
        let env = RuntimeConfig {
            api_base_url: Some("https://env".into()),
            search_debounce_ms: None,
        };
        let file = RuntimeConfig {
            api_base_url: Some("https://file".into()),
            search_debounce_ms: Some(150),
        };
        let merged = env.merge(file);
        assert_eq!(merged.api_base_url.as_deref(), Some("https://env"));
        assert_eq!(merged.debounce_ms(), 150);
        assert_eq!(RuntimeConfig::default().debounce_ms(), DEFAULT_SEARCH_DEBOUNCE_MS);
    }

    #[test]
    fn runtime_config_deserializes_partial_json() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{ "api_base_url": "https://lims" }"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://lims"));
        assert!(cfg.search_debounce_ms.is_none());
    }
}
