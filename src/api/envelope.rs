use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;

/// The `{success, message, data}` wrapper every backend response uses.
///
/// The backend is inconsistent about casing, so each logical field is read
/// through a list of known aliases (`success`/`Success`, ...) with a default
/// when none match.
#[derive(Debug, Clone)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// A locally-constructed failure envelope, used when a transport fault
    /// has to be surfaced through the same path as a server-reported one.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Unwraps a raw response body into a typed envelope.
    ///
    /// A `null` body is fatal: it means no response was received at all. A
    /// payload that is present but fails to decode is a `Decode` fault,
    /// which the repository layer folds into a failed envelope.
    pub fn from_value(value: Value) -> Result<Self, ClientError> {
        if value.is_null() {
            return Err(ClientError::MissingResponse);
        }

        let success = field(&value, &["success", "Success"])
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let message = field(&value, &["message", "Message"])
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        let data = match field(&value, &["data", "Data"]) {
            None | Some(Value::Null) => None,
            Some(payload) => Some(
                serde_json::from_value(payload.clone())
                    .map_err(|e| ClientError::Decode(e.to_string()))?,
            ),
        };

        Ok(Self { success, message, data })
    }
}

fn field<'a>(value: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    let obj = value.as_object()?;
    aliases.iter().find_map(|name| obj.get(*name))
}

/// One slice of a resource list plus its pagination bookkeeping. Replaces
/// (never merges into) the previous page held by a store.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "data", alias = "Data", default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(rename = "currentPage", alias = "CurrentPage", default = "one")]
    pub current_page: u32,
    #[serde(rename = "totalPages", alias = "TotalPages", default = "one")]
    pub total_pages: u32,
    #[serde(rename = "totalItems", alias = "TotalItems", default)]
    pub total_items: u64,
    #[serde(rename = "pageSize", alias = "PageSize", default)]
    page_size: Option<u32>,
}

fn one() -> u32 {
    1
}

impl<T> Page<T> {
    /// Reported page size, falling back to the item count when the backend
    /// omitted the field. The stores page by the size they requested, so
    /// this accessor exists to expose the full wire pagination contract to
    /// library consumers rather than for internal use.
    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(self.items.len() as u32)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            page_size: None,
        }
    }
}
