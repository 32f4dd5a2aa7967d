//! HTTP handler serving premium quotes to the website front-end
//!
//! Accepts a quote request via JSON and returns the premium breakdown at full
//! precision; the front-end is responsible for rounding and labeling.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use umbrella_pricing::{DensityCategory, Tariff};

/// Input for a single quote
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Applicant age; must fall in the rated band 65-94
    pub age: u8,

    /// Zone density category: "high" or "low". The front-end maps its
    /// human-readable zone label to this value before calling.
    pub density_category: DensityCategory,
}

/// Premium breakdown returned to the front-end
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub base_cost: f64,
    pub loadings: f64,
    pub commercial_premium: f64,
    pub execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(
            serde_json::json!({ "error": message }).to_string(),
        ))
        .unwrap()
}

fn json_response(body: &QuoteResponse) -> Response<Body> {
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
async fn handler(tariff: &Tariff, event: Request) -> Result<Response<Body>, Error> {
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
        Body::Empty => {
            return Ok(error_response(400, "Empty request body"));
        }
    };

    let request: QuoteRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    // A rejected quote is surfaced as-is, never as a partial result
    let quote = match tariff.quote(request.age, request.density_category) {
        Ok(q) => q,
        Err(e) => {
            log::warn!("rejected quote request: {}", e);
            return Ok(error_response(400, &e.to_string()));
        }
    };

    let response = QuoteResponse {
        base_cost: quote.base_cost,
        loadings: quote.loadings,
        commercial_premium: quote.commercial_premium,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    // Rates are loaded once at startup and shared read-only across requests
    let tariff = match Tariff::from_csv() {
        Ok(t) => t,
        Err(e) => {
            log::warn!("falling back to published in-memory rates: {}", e);
            Tariff::published()
        }
    };
    tariff.validate()?;
    let tariff = Arc::new(tariff);

    run(service_fn(move |event| {
        let tariff = tariff.clone();
        async move { handler(&tariff, event).await }
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request: QuoteRequest =
            serde_json::from_str(r#"{"age": 72, "densityCategory": "high"}"#).unwrap();
        assert_eq!(request.age, 72);
        assert_eq!(request.density_category, DensityCategory::High);
    }

    #[test]
    fn test_request_rejects_unknown_category() {
        let result: Result<QuoteRequest, _> =
            serde_json::from_str(r#"{"age": 72, "densityCategory": "forte"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_body_stays_valid_json() {
        // serde errors quote the offending token, so the message itself can
        // carry quote characters
        let response = error_response(400, r#"Invalid JSON: expected `"` at line 1"#);
        let body = match response.into_body() {
            Body::Text(s) => s,
            _ => panic!("expected a text body"),
        };

        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(parsed["error"].as_str().unwrap().contains('"'));
    }

    #[test]
    fn test_response_wire_format() {
        let tariff = Tariff::published();
        let quote = tariff.quote(65, DensityCategory::High).unwrap();

        let response = QuoteResponse {
            base_cost: quote.base_cost,
            loadings: quote.loadings,
            commercial_premium: quote.commercial_premium,
            execution_time_ms: 0,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"baseCost\":22.58"));
        assert!(json.contains("\"commercialPremium\""));
        assert!(json.contains("\"loadings\""));
    }
}
