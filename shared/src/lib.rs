use serde::{Deserialize, Serialize};

/// Body returned to the caller for every failed invocation.
pub const INTERNAL_SERVER_ERROR_BODY: &str = "Internal Server Error";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QueryParameters {
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Invocation record: the query string of the incoming request.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvocationEvent {
    #[serde(default)]
    pub query_string_parameters: Option<QueryParameters>,
}

impl InvocationEvent {
    pub fn with_image_url(image_url: impl Into<String>) -> Self {
        Self {
            query_string_parameters: Some(QueryParameters {
                image_url: Some(image_url.into()),
            }),
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.image_url.as_deref())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub status_code: u16,
    pub body: String,
}

impl AnalysisResponse {
    pub fn ok(body: String) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }

    pub fn internal_error() -> Self {
        Self {
            status_code: 500,
            body: INTERNAL_SERVER_ERROR_BODY.to_string(),
        }
    }
}

/// A detected entity with its confidence score (0-100).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Label {
    pub name: String,
    pub confidence: f64,
}

impl Label {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}
