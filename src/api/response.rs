use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// `{status, data?, message?, url?, filename?}` as returned by the script.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetResponse {
    pub status: ResponseStatus,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

impl SheetResponse {
    pub fn success() -> Self {
        Self {
            status: ResponseStatus::Success,
            data: None,
            message: None,
            url: None,
            filename: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    /// Turn an `error` response into `AppError::Server`.
    pub fn into_result(self, action: &str) -> AppResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(AppError::Server {
                action: action.to_string(),
                message: self
                    .message
                    .unwrap_or_else(|| "unknown server error".to_string()),
            })
        }
    }

    /// Decode `data` as a list. A missing or non-array `data` is an empty list.
    pub fn data_list<T: DeserializeOwned>(&self) -> AppResult<Vec<T>> {
        match &self.data {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    serde_json::from_value(item.clone())
                        .map_err(|e| AppError::InvalidData(format!("bad row: {e}")))
                })
                .collect(),
            _ => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_becomes_server_error() {
        let r: SheetResponse =
            serde_json::from_str(r#"{"status":"error","message":"Sheet not found"}"#).unwrap();
        let err = r.into_result("get_users").unwrap_err();
        assert!(err.to_string().contains("Sheet not found"));
        assert!(!err.is_network());
    }

    #[test]
    fn undecodable_row_is_not_a_network_failure() {
        let r: SheetResponse =
            serde_json::from_str(r#"{"status":"success","data":[{"nip":"1"}]}"#).unwrap();
        let err = r.data_list::<crate::models::User>().unwrap_err();
        assert!(matches!(err, AppError::InvalidData(_)));
        assert!(!err.is_network());
    }

    #[test]
    fn non_array_data_is_empty() {
        let r: SheetResponse = serde_json::from_str(r#"{"status":"success","data":"ok"}"#).unwrap();
        let list: Vec<Value> = r.data_list().unwrap();
        assert!(list.is_empty());
    }
}
