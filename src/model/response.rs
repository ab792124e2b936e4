use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::standings::aggregator::SkippedFixture;
use crate::standings::ranker::Standing;

#[derive(Debug, Serialize)]
pub struct Response {
    pub status: String,
    pub message: String,
}

impl Response {
    pub fn success(message: impl Into<String>) -> Self {
        Response {
            status: "success".to_string(),
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Response {
            status: "failed".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub status: String,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn success(data: T) -> Self {
        DataResponse {
            status: "success".to_string(),
            data,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecalculationResponse {
    pub recalculated: usize,
    pub skipped_fixtures: Vec<SkippedFixture>,
    pub recalculated_at: DateTime<Utc>,
    pub standings: Vec<Standing>,
}
