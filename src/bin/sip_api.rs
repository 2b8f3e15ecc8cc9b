//! AWS Lambda handler for SIP projections
//!
//! Accepts a plan definition (plus optional comparison plans) as JSON and
//! returns headline metrics with optional chart series.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use chrono::NaiveDate;
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};
use sip_calculator::comparison::MAX_COMPARISON_PLANS;
use sip_calculator::projection::{SeriesPoint, YearlyRow};
use sip_calculator::{ComparisonRunner, Plan, Schedule};

/// Input configuration for the projection
#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    /// Contribution amount per period (default: 2000)
    #[serde(default = "default_contribution")]
    pub contribution: f64,

    /// Investment period in years (default: 4)
    #[serde(default = "default_years")]
    pub years: u32,

    /// Expected annual return rate in percent (default: 12)
    #[serde(default = "default_rate")]
    pub annual_rate_pct: f64,

    /// Reduce the rate by the 5% inflation offset
    #[serde(default)]
    pub adjust_for_inflation: bool,

    /// Contribution schedule (default: Monthly)
    #[serde(default = "default_schedule")]
    pub schedule: Schedule,

    /// Additional plans for side-by-side comparison
    #[serde(default)]
    pub comparisons: Vec<Plan>,

    /// Whether to include the per-period growth series in the response
    #[serde(default)]
    pub include_series: bool,

    /// First contribution date for series labels (default: 2024-01-01)
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
}

fn default_contribution() -> f64 { 2000.0 }
fn default_years() -> u32 { 4 }
fn default_rate() -> f64 { 12.0 }
fn default_schedule() -> Schedule { Schedule::Monthly }
fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid default date")
}

/// Outcome for one plan in the request
#[derive(Debug, Serialize)]
pub struct PlanOutcome {
    pub schedule: String,
    pub years: u32,
    pub annual_rate_pct: f64,
    pub adjust_for_inflation: bool,
    pub total_invested: f64,
    pub future_value: f64,
    pub estimated_returns: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<SeriesPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_breakdown: Option<Vec<YearlyRow>>,
}

/// Output from the projection
#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub plan_count: usize,
    pub results: Vec<PlanOutcome>,
    pub execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &ProjectionResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body = event.body();
    let body_str = match body {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: ProjectionRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    // Assemble primary plan plus comparison plans
    let mut plans = Vec::with_capacity(1 + request.comparisons.len());
    plans.push(Plan {
        contribution: request.contribution,
        years: request.years,
        annual_rate_pct: request.annual_rate_pct,
        adjust_for_inflation: request.adjust_for_inflation,
        schedule: request.schedule,
    });
    plans.extend(request.comparisons.iter().cloned());

    if plans.len() > MAX_COMPARISON_PLANS {
        return Ok(error_response(
            400,
            &format!("At most {} plans per comparison request", MAX_COMPARISON_PLANS),
        ));
    }

    // Reject malformed inputs before they reach the engine
    for plan in &plans {
        if let Err(e) = plan.validate() {
            return Ok(error_response(400, &e.to_string()));
        }
    }

    let runner = ComparisonRunner::new();
    let results = runner.run_batch(&plans);

    let outcomes: Vec<PlanOutcome> = plans
        .iter()
        .zip(&results)
        .map(|(plan, result)| {
            let (series, yearly_breakdown) = if request.include_series {
                let growth = runner.engine().growth_series(plan, request.start_date);
                let yearly = growth.yearly_breakdown();
                (Some(growth.points), Some(yearly))
            } else {
                (None, None)
            };

            PlanOutcome {
                schedule: plan.schedule.as_str().to_string(),
                years: plan.years,
                annual_rate_pct: plan.annual_rate_pct,
                adjust_for_inflation: plan.adjust_for_inflation,
                total_invested: result.total_invested,
                future_value: result.future_value,
                estimated_returns: result.estimated_returns(),
                series,
                yearly_breakdown,
            }
        })
        .collect();

    let response = ProjectionResponse {
        plan_count: outcomes.len(),
        results: outcomes,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
