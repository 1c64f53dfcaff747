use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// WGS 84 point submitted in a bulk prediction request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageLocation {
    pub lat: f64,
    pub lng: f64,
}

/// Response of `GET /coverages/global/predictions`.
///
/// `margins[0..3]` are the link margins (dB) for 1, 2 and 3+ base
/// station redundancy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoveragePrediction {
    #[serde(rename = "locationCovered", skip_serializing_if = "Option::is_none")]
    pub location_covered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margins: Option<Vec<i32>>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Payload for `POST /coverages/global/predictions/bulk`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageBulkRequest {
    pub locations: Vec<CoverageLocation>,
    /// Estimated radius of the device location, in meters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
    #[serde(rename = "groupId", skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// `{ "jobId": ... }` returned when a bulk prediction is started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkJob {
    #[serde(rename = "jobId")]
    pub job_id: String,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// One location's outcome within a finished bulk job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageBulkResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(rename = "locationCovered", skip_serializing_if = "Option::is_none")]
    pub location_covered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margins: Option<Vec<i32>>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Response of `GET /coverages/global/predictions/bulk/{jobId}`.
///
/// While the job runs, `job_done` is `Some(false)` and `results` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageBulkResponse {
    #[serde(rename = "jobDone", skip_serializing_if = "Option::is_none")]
    pub job_done: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<CoverageBulkResult>>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl CoverageBulkResponse {
    pub fn is_done(&self) -> bool {
        self.job_done == Some(true)
    }
}

/// Response of `GET /coverages/operators/redundancy`.
///
/// `redundancy`: 0 = no coverage, 1/2 = that many base stations, 3 = three or more.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageRedundancy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redundancy: Option<i32>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
