//! Replay bid translations against recorded files.
//!
//! Nothing here talks to the network: `request` shows what the adapter would
//! send, `response` shows what it makes of an answer the partner gave.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use error_stack::Report;
use http::StatusCode;
use nanointeractive_adapter::adapters::{build_bidders, find_bidder};
use nanointeractive_adapter::bidder::{Bidder, RequestData, ResponseData};
use nanointeractive_adapter::error::AdapterError;
use nanointeractive_adapter::openrtb::BidRequest;
use nanointeractive_adapter::settings::Settings;
use serde_json::{json, Map, Value as Json};

use crate::error::CliError;

const BIDDER_NAME: &str = "nano";

pub(crate) fn bidder_from_settings(settings: &Settings) -> Result<Arc<dyn Bidder>, CliError> {
    let bidders = build_bidders(settings);
    find_bidder(&bidders, BIDDER_NAME)
        .cloned()
        .ok_or_else(|| CliError::Config("NanoInteractive bidder is disabled".into()))
}

fn read_bid_request(path: &Path) -> Result<BidRequest, CliError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn errors_json(errors: &[Report<AdapterError>]) -> Json {
    Json::Array(
        errors
            .iter()
            .map(|err| Json::String(err.current_context().to_string()))
            .collect(),
    )
}

fn request_json(request: &RequestData) -> Json {
    let headers: Map<String, Json> = request
        .headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                Json::String(String::from_utf8_lossy(value.as_bytes()).into_owned()),
            )
        })
        .collect();

    // The body is our own serde_json output, so it always decodes.
    let body = serde_json::from_slice::<Json>(&request.body).unwrap_or_else(|_| {
        Json::String(String::from_utf8_lossy(&request.body).into_owned())
    });

    json!({
        "method": request.method.as_str(),
        "uri": request.uri,
        "headers": headers,
        "body": body,
    })
}

/// Run the request builder and describe its outcome.
pub(crate) fn build_requests(bidder: &dyn Bidder, request: &BidRequest) -> Json {
    let (requests, errors) = bidder.make_requests(request);
    json!({
        "bidder": bidder.name(),
        "requests": requests.iter().map(request_json).collect::<Vec<_>>(),
        "errors": errors_json(&errors),
    })
}

/// Run the response parser on a recorded answer and describe its outcome.
pub(crate) fn parse_response(
    bidder: &dyn Bidder,
    request: &BidRequest,
    status: StatusCode,
    body: Vec<u8>,
) -> Result<Json, CliError> {
    let (mut requests, request_errors) = bidder.make_requests(request);
    let external = requests.pop().ok_or_else(|| {
        CliError::Input(format!(
            "bid request produces no outbound request to answer: {}",
            errors_json(&request_errors)
        ))
    })?;

    let response = ResponseData::new(status, body);
    let (bidder_response, errors) = bidder.make_bids(request, &external, &response);

    Ok(json!({
        "bidder": bidder.name(),
        "response": serde_json::to_value(&bidder_response)?,
        "errors": errors_json(&errors),
    }))
}

/// `nanocli request`
pub fn request(input: &Path, config: Option<&Path>, verbose: bool) -> Result<(), CliError> {
    let (settings, _) = crate::config::load_and_merge_config(config, verbose)?;
    let bidder = bidder_from_settings(&settings)?;
    let bid_request = read_bid_request(input)?;

    let output = build_requests(bidder.as_ref(), &bid_request);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// `nanocli response`
pub fn response(
    request_file: &Path,
    status: u16,
    body_file: Option<&Path>,
    config: Option<&Path>,
    verbose: bool,
) -> Result<(), CliError> {
    let (settings, _) = crate::config::load_and_merge_config(config, verbose)?;
    let bidder = bidder_from_settings(&settings)?;
    let bid_request = read_bid_request(request_file)?;

    let status = StatusCode::from_u16(status)
        .map_err(|e| CliError::Input(format!("invalid status {status}: {e}")))?;
    let body = match body_file {
        Some(path) => fs::read(path)?,
        None => Vec::new(),
    };

    log::debug!("Replaying {} byte response with status {}", body.len(), status);

    let output = parse_response(bidder.as_ref(), &bid_request, status, body)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
