use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One entry of `menuList` as the server sends it. Every field is optional on
/// the wire; absent, `null` and `false` values collapse to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedUserMenuItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub system_user_id: String,
    #[serde(default, rename = "combinedUserID", deserialize_with = "lenient_string")]
    pub combined_user_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub login_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub exp_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub locked: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub disabled: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub active: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub timeout: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSectionOption {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,
}

/// Shared shape of `UnifiedSystemUserMenu` and `SearchUnifiedSystemUserMenu`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnifiedUserMenuResponse {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub menu_list: Vec<UnifiedUserMenuItem>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub test_sections: Vec<TestSectionOption>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_record_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub from_record_count: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub to_record_count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeactivateUsersRequest {
    #[serde(rename = "selectedIDs")]
    pub selected_ids: Vec<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Bool(true)) => "true".to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    })
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Server,
    Malformed,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn server(status: u16, msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "SERVER_ERROR".to_string(),
            details: Some(serde_json::json!({ "status": status })),
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "MALFORMED_RESPONSE".to_string(),
            details: None,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self.code.as_str() {
            "REQUEST_FAILED" => FailureKind::Transport,
            "SERVER_ERROR" => FailureKind::Server,
            "MALFORMED_RESPONSE" => FailureKind::Malformed,
            "VALIDATION_ERROR" => FailureKind::Validation,
            _ => FailureKind::Unknown,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.details
            .as_ref()
            .and_then(|d| d.get("status"))
            .and_then(Value::as_u64)
            .and_then(|s| u16::try_from(s).ok())
    }
}
