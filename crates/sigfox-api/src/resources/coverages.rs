// Coverage endpoints
//
// Three shapes: a synchronous single-point prediction, an asynchronous
// bulk job (start, then poll by job id), and an operator redundancy lookup.
// Polling is left to the caller.

use std::fmt;

use crate::client::{SigfoxClient, decode};
use crate::error::Error;
use crate::models::{
    BulkJob, CoverageBulkRequest, CoverageBulkResponse, CoveragePrediction, CoverageRedundancy,
};
use crate::query::QueryParams;

use super::item_path;

const PREDICTIONS: &str = "/coverages/global/predictions";
const BULK: &str = "/coverages/global/predictions/bulk";
const REDUNDANCY: &str = "/coverages/operators/redundancy";

/// Query for `GET /coverages/global/predictions`.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionQuery {
    pub lat: f64,
    pub lng: f64,
    /// Estimated radius of the device location, in meters.
    pub radius: Option<u32>,
    pub group_id: Option<String>,
}

impl PredictionQuery {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            radius: None,
            group_id: None,
        }
    }

    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .num("lat", Some(self.lat))
            .num("lng", Some(self.lng))
            .num("radius", self.radius)
            .text("groupId", self.group_id.as_deref())
    }
}

/// Installation context of the device for a redundancy lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceSituation {
    Outdoor,
    Indoor,
    Underground,
}

impl fmt::Display for DeviceSituation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Outdoor => "OUTDOOR",
            Self::Indoor => "INDOOR",
            Self::Underground => "UNDERGROUND",
        })
    }
}

/// Query for `GET /coverages/operators/redundancy`.
#[derive(Debug, Clone, PartialEq)]
pub struct RedundancyQuery {
    pub lat: f64,
    pub lng: f64,
    /// Operator group id; required when calling as a root Sigfox user.
    pub operator_id: Option<String>,
    pub device_situation: Option<DeviceSituation>,
    /// Sigfox radio class (0u..3u), sent as its digit.
    pub device_class_id: Option<u8>,
}

impl RedundancyQuery {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            operator_id: None,
            device_situation: None,
            device_class_id: None,
        }
    }

    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .num("lat", Some(self.lat))
            .num("lng", Some(self.lng))
            .text("operatorId", self.operator_id.as_deref())
            .num("deviceSituation", self.device_situation)
            .num("deviceClassId", self.device_class_id)
    }
}

/// Façade over `/coverages/`.
#[derive(Debug, Clone, Copy)]
pub struct Coverages<'a> {
    client: &'a SigfoxClient,
}

impl<'a> Coverages<'a> {
    pub fn new(client: &'a SigfoxClient) -> Self {
        Self { client }
    }

    pub async fn global_prediction(
        &self,
        query: &PredictionQuery,
    ) -> Result<CoveragePrediction, Error> {
        decode(self.client.get(PREDICTIONS, &query.to_query()).await?)
    }

    /// Start a bulk prediction job and return its id immediately.
    pub async fn start_bulk_prediction(
        &self,
        request: &CoverageBulkRequest,
    ) -> Result<BulkJob, Error> {
        if request.locations.is_empty() {
            return Err(Error::Validation {
                message: "bulk prediction needs at least one location".into(),
            });
        }
        let resp = self
            .client
            .post(BULK, Some(request), &QueryParams::new())
            .await?;
        decode(resp)
    }

    /// Current state of a bulk job; `results` is only set once `jobDone` is true.
    pub async fn get_bulk_prediction(&self, job_id: &str) -> Result<CoverageBulkResponse, Error> {
        let path = item_path(&format!("{BULK}/"), job_id)?;
        decode(self.client.get(&path, &QueryParams::new()).await?)
    }

    pub async fn operator_redundancy(
        &self,
        query: &RedundancyQuery,
    ) -> Result<CoverageRedundancy, Error> {
        decode(self.client.get(REDUNDANCY, &query.to_query()).await?)
    }
}
