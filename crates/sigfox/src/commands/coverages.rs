//! Coverage command handlers.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Tabled;

use sigfox_api::models::{
    CoverageBulkRequest, CoverageBulkResponse, CoverageBulkResult, CoverageLocation,
    CoveragePrediction, CoverageRedundancy,
};
use sigfox_api::{Coverages, DeviceSituation, PredictionQuery, RedundancyQuery, Sigfox};

use crate::cli::{CoveragesArgs, CoveragesCommand, GlobalOpts, Situation};
use crate::error::CliError;
use crate::output;

/// Upper bound on `bulk-get --wait` polls.
const MAX_POLLS: u32 = 360;

#[derive(Tabled)]
struct BulkResultRow {
    #[tabled(rename = "Lat")]
    lat: String,
    #[tabled(rename = "Lng")]
    lng: String,
    #[tabled(rename = "Covered")]
    covered: String,
    #[tabled(rename = "Margins (dB)")]
    margins: String,
}

impl From<&CoverageBulkResult> for BulkResultRow {
    fn from(r: &CoverageBulkResult) -> Self {
        Self {
            lat: output::opt(r.lat),
            lng: output::opt(r.lng),
            covered: output::flag(r.location_covered),
            margins: margins(r.margins.as_deref()),
        }
    }
}

fn margins(values: Option<&[i32]>) -> String {
    match values {
        Some(m) if !m.is_empty() => m
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" / "),
        _ => "-".into(),
    }
}

fn prediction_detail(p: &CoveragePrediction) -> String {
    [
        format!("Covered:      {}", output::flag(p.location_covered)),
        format!("Margins (dB): {}", margins(p.margins.as_deref())),
    ]
    .join("\n")
}

fn redundancy_detail(r: &CoverageRedundancy) -> String {
    format!("Redundancy: {}", output::opt(r.redundancy))
}

fn bulk_detail(b: &CoverageBulkResponse) -> String {
    format!(
        "Job Done: {}\nTime:     {}\nResults:  {}",
        output::flag(b.job_done),
        output::timestamp(b.time),
        b.results.as_ref().map_or(0, Vec::len)
    )
}

impl From<Situation> for DeviceSituation {
    fn from(s: Situation) -> Self {
        match s {
            Situation::Outdoor => Self::Outdoor,
            Situation::Indoor => Self::Indoor,
            Situation::Underground => Self::Underground,
        }
    }
}

/// Parse `--locations`, a JSON array of `{"lat": .., "lng": ..}` objects.
fn parse_locations(raw: &str) -> Result<Vec<CoverageLocation>, CliError> {
    let locations: Vec<CoverageLocation> =
        serde_json::from_str(raw).map_err(|e| CliError::Validation {
            field: "locations".into(),
            reason: format!("expected a JSON array of {{\"lat\", \"lng\"}} objects: {e}"),
        })?;
    if locations.is_empty() {
        return Err(CliError::Validation {
            field: "locations".into(),
            reason: "at least one location is required".into(),
        });
    }
    Ok(locations)
}

/// Poll a bulk job until it reports done, with a spinner on stderr.
async fn wait_for_job(
    coverages: &Coverages<'_>,
    job_id: &str,
    interval: Duration,
    global: &GlobalOpts,
) -> Result<CoverageBulkResponse, CliError> {
    let spinner = if global.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(format!("Waiting for bulk job {job_id}"));
    spinner.enable_steady_tick(Duration::from_millis(120));

    for attempt in 1..=MAX_POLLS {
        let state = coverages.get_bulk_prediction(job_id).await?;
        if state.is_done() {
            spinner.finish_and_clear();
            return Ok(state);
        }
        tracing::debug!(job_id, attempt, "bulk job still running");
        tokio::time::sleep(interval).await;
    }

    spinner.finish_and_clear();
    Err(CliError::Validation {
        field: "wait".into(),
        reason: format!("bulk job {job_id} not done after {MAX_POLLS} polls"),
    })
}

pub async fn handle(
    sigfox: &Sigfox,
    args: CoveragesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let coverages = sigfox.coverages();
    let format = output::format(global);

    match args.command {
        CoveragesCommand::GlobalPrediction {
            lat,
            lng,
            radius,
            group_id,
        } => {
            let query = PredictionQuery {
                radius,
                group_id,
                ..PredictionQuery::new(lat, lng)
            };
            let prediction = coverages.global_prediction(&query).await?;
            let out = output::render_single(format, &prediction, prediction_detail, |p| {
                output::flag(p.location_covered)
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CoveragesCommand::BulkStart {
            locations,
            radius,
            group_id,
        } => {
            let request = CoverageBulkRequest {
                locations: parse_locations(&locations)?,
                radius,
                group_id,
            };
            let job = coverages.start_bulk_prediction(&request).await?;
            output::success(global, &format!("Bulk job started. Job ID: {}", job.job_id));
            output::info(global, &format!("Run: sigfox coverages bulk-get {}", job.job_id));
            output::print_output(&job.job_id, false);
            Ok(())
        }

        CoveragesCommand::BulkGet {
            job_id,
            wait,
            interval,
        } => {
            let state = if wait {
                wait_for_job(&coverages, &job_id, Duration::from_secs(interval), global).await?
            } else {
                coverages.get_bulk_prediction(&job_id).await?
            };

            if !state.is_done() {
                output::info(global, &format!("Bulk job {job_id} is still running."));
                let out = output::render_single(format, &state, bulk_detail, |_| "pending".into())?;
                output::print_output(&out, global.quiet);
                return Ok(());
            }

            let results = state.results.unwrap_or_default();
            if output::report_empty(global, &results, "results") {
                return Ok(());
            }
            let out = output::render_list(
                format,
                &results,
                |r| BulkResultRow::from(r),
                |r| {
                    format!(
                        "{},{},{}",
                        output::opt(r.lat),
                        output::opt(r.lng),
                        output::flag(r.location_covered)
                    )
                },
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CoveragesCommand::OperatorRedundancy {
            lat,
            lng,
            operator_id,
            device_situation,
            device_class_id,
        } => {
            let query = RedundancyQuery {
                operator_id,
                device_situation: device_situation.map(DeviceSituation::from),
                device_class_id,
                ..RedundancyQuery::new(lat, lng)
            };
            let redundancy = coverages.operator_redundancy(&query).await?;
            let out = output::render_single(format, &redundancy, redundancy_detail, |r| {
                output::opt(r.redundancy)
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_parse_from_json_array() {
        let parsed =
            parse_locations(r#"[{"lat": 48.86, "lng": 2.35}, {"lat": -33.9, "lng": 18.4}]"#);
        let locations = parsed.unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(locations.len(), 2);
        assert!((locations[1].lat + 33.9).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_or_malformed_locations_are_rejected() {
        assert!(matches!(parse_locations("[]"), Err(CliError::Validation { .. })));
        assert!(matches!(parse_locations("{\"lat\": 1}"), Err(CliError::Validation { .. })));
    }

    #[test]
    fn margins_join_with_slashes() {
        assert_eq!(margins(Some(&[42, 30, 12])), "42 / 30 / 12");
        assert_eq!(margins(Some(&[])), "-");
        assert_eq!(margins(None), "-");
    }
}
