//! Response envelope shared by every endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// A single entry of an envelope's `errors` or `messages` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseInfo {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl std::fmt::Display for ResponseInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Generic status carried next to every typed result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseStatus {
    /// Application-level success flag. Treated as `true` when absent.
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<ResponseInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub messages: Vec<ResponseInfo>,
}

impl Default for ResponseStatus {
    fn default() -> Self {
        Self {
            success: true,
            errors: vec![],
            messages: vec![],
        }
    }
}

/// Outer JSON object returned by the API: the status wrapper plus the
/// operation-specific `result`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(flatten)]
    pub status: ResponseStatus,
    /// `None` when the key is missing or `null`, which the API does on failure.
    pub result: Option<T>,
}

impl<T> Envelope<T> {
    /// Wrap a result in a successful envelope.
    pub fn success(result: T) -> Self {
        Self {
            status: ResponseStatus::default(),
            result: Some(result),
        }
    }

    /// Build an unsuccessful envelope with the given errors and no result.
    pub fn failure(errors: Vec<ResponseInfo>) -> Self {
        Self {
            status: ResponseStatus {
                success: false,
                errors,
                messages: vec![],
            },
            result: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.success
    }
}

fn default_true() -> bool {
    true
}

/// Decode an explicit `null` the same way as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
