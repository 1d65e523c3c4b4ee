//! Response wrapper shared by every endpoint.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// One HTTP exchange with the API, body already read.
#[derive(Debug, Clone)]
pub struct Response {
    pub status_code: u16,
    pub content_type: Option<String>,
    /// Raw body text
    pub body: String,
    /// Whether `body` was parsed into `result`
    pub parsed: bool,
    /// Whole JSON document, when the body was JSON
    pub result: Option<Value>,
    /// The `data` member of `result`, if present
    pub data: Option<Value>,
}

/// Entry of the `errors` array the API returns on failures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ApiErrorSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Response {
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self> {
        let status_code = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response.text().await?;

        Ok(Self::from_parts(status_code, content_type.as_deref(), body))
    }

    /// Build a response from its raw parts, parsing the body when it is JSON.
    pub fn from_parts(status_code: u16, content_type: Option<&str>, body: String) -> Self {
        let result = if body.trim().is_empty() {
            None
        } else {
            serde_json::from_str::<Value>(&body).ok()
        };
        let data = result.as_ref().and_then(|r| r.get("data")).cloned();

        Self {
            status_code,
            content_type: content_type.map(String::from),
            parsed: result.is_some(),
            body,
            result,
            data,
        }
    }

    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.contains("json"))
            .unwrap_or(false)
    }

    /// 2xx, and if the server claimed JSON with a body, the body parsed
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
            && (self.parsed || !self.is_json() || self.body.trim().is_empty())
    }

    /// Turn an unsuccessful response into the matching [`Error`].
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::from_response(self))
        }
    }

    /// Deserialize the `data` member into `T`.
    pub fn parse_data<T: DeserializeOwned>(&self) -> Result<T> {
        let data = self.data.clone().unwrap_or(Value::Null);
        Ok(serde_json::from_value(data)?)
    }

    /// Deserialize the whole JSON document into `T`.
    pub fn parse_result<T: DeserializeOwned>(&self) -> Result<T> {
        let result = self.result.clone().unwrap_or(Value::Null);
        Ok(serde_json::from_value(result)?)
    }

    /// The API's `errors` array, empty when absent or malformed
    pub fn errors(&self) -> Vec<ApiError> {
        self.result
            .as_ref()
            .and_then(|r| r.get("errors"))
            .and_then(|e| serde_json::from_value(e.clone()).ok())
            .unwrap_or_default()
    }

    /// Short human-readable summary used in error messages
    pub fn describe(&self) -> String {
        let errors = self.errors();
        if errors.is_empty() {
            return if self.body.is_empty() {
                "no body".to_string()
            } else {
                self.body.clone()
            };
        }

        errors
            .iter()
            .map(|e| {
                let mut line = String::new();
                if let Some(parameter) = e.source.as_ref().and_then(|s| s.parameter.as_deref()) {
                    line.push_str(&format!("[{}] ", parameter));
                }
                match (&e.title, &e.detail) {
                    (Some(title), Some(detail)) => line.push_str(&format!("{}: {}", title, detail)),
                    (Some(text), None) | (None, Some(text)) => line.push_str(text),
                    (None, None) => line.push_str("unknown error"),
                }
                line
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_json_body_and_data() {
        let body = r#"{"data":[{"id":"9CB40CB5D0"}],"meta":{"count":1}}"#;
        let response = Response::from_parts(200, Some("application/vnd.amadeus+json"), body.into());

        assert!(response.parsed);
        assert!(response.is_success());
        assert_eq!(response.data, Some(json!([{"id": "9CB40CB5D0"}])));
        assert_eq!(response.result.unwrap()["meta"]["count"], 1);
    }

    #[test]
    fn test_non_json_body_is_kept_raw() {
        let response = Response::from_parts(200, Some("text/plain"), "hello".into());
        assert!(!response.parsed);
        assert!(response.is_success());
        assert_eq!(response.body, "hello");
        assert!(response.data.is_none());
    }

    #[test]
    fn test_broken_json_is_not_success() {
        let response = Response::from_parts(200, Some("application/json"), "{".into());
        assert!(!response.is_success());
        assert!(matches!(response.into_result(), Err(Error::Parser(_))));
    }

    #[test]
    fn test_empty_json_body_is_success() {
        let response = Response::from_parts(204, Some("application/json"), String::new());
        assert!(response.is_success());
        assert!(response.data.is_none());
        assert!(response.into_result().is_ok());

        let blank = Response::from_parts(200, Some("application/vnd.amadeus+json"), "  ".into());
        assert!(blank.is_success());
    }

    #[test]
    fn test_parse_data_into_type() {
        #[derive(Deserialize)]
        struct Item {
            id: String,
        }

        let body = r#"{"data":{"id":"AB12"}}"#;
        let response = Response::from_parts(200, Some("application/json"), body.into());
        let item: Item = response.parse_data().unwrap();
        assert_eq!(item.id, "AB12");
    }

    #[test]
    fn test_parse_data_mismatch_is_decode_error() {
        let body = r#"{"data":"not an object"}"#;
        let response = Response::from_parts(200, Some("application/json"), body.into());
        let result: Result<Vec<u32>> = response.parse_data();
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_errors_and_describe() {
        let body = r#"{"errors":[{"status":400,"code":32171,"title":"MANDATORY DATA MISSING","detail":"Missing mandatory query parameter","source":{"parameter":"longitude"}}]}"#;
        let response = Response::from_parts(400, Some("application/json"), body.into());

        let errors = response.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, Some(32171));
        assert_eq!(
            response.describe(),
            "[longitude] MANDATORY DATA MISSING: Missing mandatory query parameter"
        );
    }

    #[test]
    fn test_describe_falls_back_to_body() {
        let response = Response::from_parts(502, Some("text/html"), "Bad Gateway".into());
        assert_eq!(response.describe(), "Bad Gateway");

        let empty = Response::from_parts(500, None, String::new());
        assert_eq!(empty.describe(), "no body");
    }
}
