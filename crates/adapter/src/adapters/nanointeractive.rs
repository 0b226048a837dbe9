//! NanoInteractive demand-partner adapter.
//!
//! Only banner impressions are supported. The whole bid request goes out as a
//! single OpenRTB 2.5 POST with the invalid impressions removed; only the
//! first seat-bid of the answer is read.

use std::sync::Arc;

use error_stack::{Report, ResultExt};
use http::header::{self, HeaderMap, HeaderName, HeaderValue};
use http::{Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::bidder::{
    AdapterErrors, BidType, Bidder, BidderResponse, RequestData, ResponseData, TypedBid,
};
use crate::constants::{
    ACCEPT_JSON, CONTENT_TYPE_JSON_UTF8, HEADER_X_FORWARDED_IP, HEADER_X_OPENRTB_VERSION,
    OPENRTB_VERSION, PARTNER_COOKIE_NAME,
};
use crate::error::AdapterError;
use crate::logging::is_debug_enabled;
use crate::openrtb::{BidRequest, BidResponse, Imp, Site};
use crate::openrtb_ext::{ExtImpBidder, ExtImpNanoInteractive};
use crate::settings::Settings;

const BIDDER_NAME: &str = "Nano";

pub const NO_IMPRESSIONS_MESSAGE: &str = "no impressions in the bid request";

/// Bidder that forwards banner impressions to a NanoInteractive endpoint.
///
/// Holds no per-auction state, so one instance serves every auction.
pub struct NanoInteractiveAdapter {
    endpoint: String,
}

impl NanoInteractiveAdapter {
    /// Create an adapter that posts every request to `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// URL the outbound POST is sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Bidder for NanoInteractiveAdapter {
    fn name(&self) -> &'static str {
        BIDDER_NAME
    }

    fn make_requests(&self, request: &BidRequest) -> (Vec<RequestData>, AdapterErrors) {
        let mut errors: AdapterErrors = Vec::new();
        let mut valid_imps: Vec<Imp> = Vec::with_capacity(request.imp.len());
        let mut referrer: Option<String> = None;

        for imp in &request.imp {
            match check_imp(imp) {
                Ok(imp_referrer) => {
                    if referrer.is_none() {
                        referrer = imp_referrer;
                    }
                    valid_imps.push(imp.clone());
                }
                // A bad impression is dropped; the rest still go out.
                Err(err) => errors.push(err),
            }
        }

        log::debug!(
            "NanoInteractive: request {} has {} valid and {} invalid impressions",
            request.id,
            valid_imps.len(),
            errors.len()
        );

        if valid_imps.is_empty() {
            errors.push(Report::new(AdapterError::bad_input(NO_IMPRESSIONS_MESSAGE)));
            return (Vec::new(), errors);
        }

        let mut outbound = BidRequest {
            imp: valid_imps,
            ..request.clone()
        };

        // Overwrites any referrer the host already set on the site.
        if let Some(referrer) = referrer {
            outbound
                .site
                .get_or_insert_with(Site::default)
                .referrer = Some(referrer);
        }

        let body = match serde_json::to_vec(&outbound).change_context(
            AdapterError::Serialization {
                message: "Failed to encode NanoInteractive bid request".to_string(),
            },
        ) {
            Ok(body) => body,
            Err(err) => {
                errors.push(err);
                return (Vec::new(), errors);
            }
        };

        if is_debug_enabled() {
            log::debug!(
                "NanoInteractive OpenRTB request to {}: {}",
                self.endpoint,
                String::from_utf8_lossy(&body)
            );
        }

        let request_data = RequestData {
            method: Method::POST,
            uri: self.endpoint.clone(),
            body,
            headers: create_headers(&outbound),
        };

        (vec![request_data], errors)
    }

    fn make_bids(
        &self,
        _internal_request: &BidRequest,
        _external_request: &RequestData,
        response: &ResponseData,
    ) -> (Option<BidderResponse>, AdapterErrors) {
        match response.status_code {
            StatusCode::NO_CONTENT => return (None, Vec::new()),
            StatusCode::BAD_REQUEST => {
                return (
                    None,
                    vec![Report::new(AdapterError::bad_input("Invalid request."))],
                );
            }
            StatusCode::OK => {}
            status => {
                log::warn!("NanoInteractive returned unexpected status: {status}");
                return (
                    None,
                    vec![Report::new(AdapterError::bad_server_response(format!(
                        "unexpected HTTP status {}.",
                        status.as_u16()
                    )))],
                );
            }
        }

        let bid_response: BidResponse = match serde_json::from_slice::<BidResponse>(&response.body)
            .change_context(AdapterError::bad_server_response("bad server body response"))
        {
            Ok(parsed) => parsed,
            Err(err) => return (None, vec![err]),
        };

        (Some(collect_bids(bid_response)), Vec::new())
    }
}

/// Keep the positive-price bids of the first seat, all tagged as banner.
///
/// Extra seats are ignored; no seat at all means no bids.
fn collect_bids(bid_response: BidResponse) -> BidderResponse {
    let BidResponse { seatbid, cur, .. } = bid_response;
    let bids = seatbid
        .into_iter()
        .next()
        .map(|seat| seat.bid)
        .unwrap_or_default();

    let mut bidder_response = BidderResponse::with_bids_capacity(bids.len());
    if let Some(cur) = cur.filter(|c| !c.is_empty()) {
        bidder_response.currency = cur;
    }

    bidder_response.bids.extend(
        bids.into_iter()
            .filter(|bid| bid.price > 0.0)
            .map(|bid| TypedBid {
                bid,
                bid_type: BidType::Banner,
            }),
    );

    bidder_response
}

/// Validate one impression and return the referrer it asks for, if any.
fn check_imp(imp: &Imp) -> Result<Option<String>, Report<AdapterError>> {
    if imp.banner.is_none() {
        return Err(Report::new(AdapterError::bad_input(format!(
            "invalid MediaType. NanoInteractive only supports Banner type. ImpID={}",
            imp.id
        ))));
    }

    let ext_not_provided =
        || AdapterError::bad_input(format!("ext not provided; ImpID={}", imp.id));
    // Only a JSON object counts; serde would also map an array onto the fields.
    let bidder_ext: ExtImpBidder = match &imp.ext {
        Some(ext @ Value::Object(_)) => {
            ExtImpBidder::deserialize(ext).change_context_lazy(ext_not_provided)?
        }
        _ => return Err(Report::new(ext_not_provided())),
    };

    let bidder_not_provided =
        || AdapterError::bad_input(format!("ext.bidder not provided; ImpID={}", imp.id));
    let nano_ext: ExtImpNanoInteractive = match &bidder_ext.bidder {
        Some(bidder @ Value::Object(_)) => {
            ExtImpNanoInteractive::deserialize(bidder).change_context_lazy(bidder_not_provided)?
        }
        _ => return Err(Report::new(bidder_not_provided())),
    };

    if !nano_ext.has_identifier() {
        return Err(Report::new(AdapterError::bad_input(format!(
            "pid and nid are empty, one of them must be provided; ImpID={}",
            imp.id
        ))));
    }

    Ok(Some(nano_ext.referrer).filter(|r| !r.is_empty()))
}

fn create_headers(request: &BidRequest) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(CONTENT_TYPE_JSON_UTF8),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
    headers.insert(
        HEADER_X_OPENRTB_VERSION,
        HeaderValue::from_static(OPENRTB_VERSION),
    );

    if let Some(device) = &request.device {
        insert_non_empty(&mut headers, header::USER_AGENT, device.ua.as_deref());
        insert_non_empty(&mut headers, HEADER_X_FORWARDED_IP, device.ip.as_deref());
    }

    if let Some(site) = &request.site {
        insert_non_empty(&mut headers, header::REFERER, site.page.as_deref());
    }

    if let Some(buyer_uid) = request
        .user
        .as_ref()
        .and_then(|user| user.buyeruid.as_deref())
        .filter(|uid| !uid.is_empty())
    {
        let cookie = format!("{PARTNER_COOKIE_NAME}={buyer_uid}");
        insert_non_empty(&mut headers, header::COOKIE, Some(cookie.as_str()));
    }

    headers
}

fn insert_non_empty(headers: &mut HeaderMap, name: HeaderName, value: Option<&str>) {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return;
    };

    match HeaderValue::from_str(value) {
        Ok(header_value) => {
            headers.insert(name, header_value);
        }
        Err(e) => log::warn!("NanoInteractive: skipping {name} header: {e}"),
    }
}

/// Build the NanoInteractive bidder from settings.
///
/// Returns nothing when the bidder is disabled or has no endpoint.
#[must_use]
pub fn register_bidders(settings: &Settings) -> Vec<Arc<dyn Bidder>> {
    let config = &settings.nanointeractive;

    if !config.enabled {
        log::info!("NanoInteractive bidder not registered: disabled");
        return Vec::new();
    }
    if config.endpoint.trim().is_empty() {
        log::warn!("NanoInteractive bidder disabled: nanointeractive.endpoint missing");
        return Vec::new();
    }

    log::info!(
        "Registering NanoInteractive bidder (endpoint={})",
        config.endpoint
    );
    let bidder: Arc<dyn Bidder> = Arc::new(NanoInteractiveAdapter::new(config.endpoint.clone()));
    vec![bidder]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openrtb::{Banner, Device, User};
    use crate::test_support::tests::{
        banner_imp, bid_request, nano_ext, test_settings, TEST_ENDPOINT,
    };
    use serde_json::{json, Value};

    fn adapter() -> NanoInteractiveAdapter {
        NanoInteractiveAdapter::new(TEST_ENDPOINT)
    }

    fn body_json(request: &RequestData) -> Value {
        serde_json::from_slice(&request.body).expect("should decode outbound body")
    }

    fn header<'a>(request: &'a RequestData, name: &str) -> Option<&'a str> {
        request
            .headers
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    fn messages(errors: &[Report<AdapterError>]) -> Vec<String> {
        errors
            .iter()
            .map(|err| err.current_context().message().to_string())
            .collect()
    }

    fn ok_response(body: Value) -> ResponseData {
        ResponseData::new(
            StatusCode::OK,
            serde_json::to_vec(&body).expect("should encode response"),
        )
    }

    fn outbound_for(request: &BidRequest) -> RequestData {
        let (mut requests, errors) = adapter().make_requests(request);
        assert!(errors.is_empty(), "unexpected errors: {:?}", messages(&errors));
        requests.pop().expect("should build one request")
    }

    #[test]
    fn bidder_identity() {
        let adapter = adapter();
        assert_eq!(adapter.name(), "Nano");
        assert!(!adapter.skip_no_cookies());
        assert_eq!(adapter.endpoint(), TEST_ENDPOINT);
    }

    #[test]
    fn builds_single_post_for_valid_impressions() {
        let request = bid_request(vec![
            banner_imp("imp-1", nano_ext(json!({"pid": "p1"}))),
            banner_imp("imp-2", nano_ext(json!({"nid": "n2"}))),
        ]);

        let (requests, errors) = adapter().make_requests(&request);

        assert!(errors.is_empty());
        assert_eq!(requests.len(), 1);
        let outbound = &requests[0];
        assert_eq!(outbound.method, Method::POST);
        assert_eq!(outbound.uri, TEST_ENDPOINT);
        assert_eq!(header(outbound, "x-openrtb-version"), Some("2.5"));
        assert_eq!(
            header(outbound, "content-type"),
            Some("application/json;charset=utf-8")
        );
        assert_eq!(header(outbound, "accept"), Some("application/json"));

        let body = body_json(outbound);
        assert_eq!(body["id"], "req-1");
        let ids: Vec<&str> = body["imp"]
            .as_array()
            .expect("imp should be an array")
            .iter()
            .filter_map(|imp| imp["id"].as_str())
            .collect();
        assert_eq!(ids, vec!["imp-1", "imp-2"]);
    }

    #[test]
    fn drops_invalid_impressions_and_keeps_order() {
        let mut no_banner = banner_imp("no-banner", nano_ext(json!({"pid": "p"})));
        no_banner.banner = None;

        let request = bid_request(vec![
            banner_imp("first", nano_ext(json!({"pid": "p1"}))),
            no_banner,
            banner_imp("no-ids", nano_ext(json!({"category": "sports"}))),
            banner_imp("last", nano_ext(json!({"nid": "n1"}))),
        ]);

        let (requests, errors) = adapter().make_requests(&request);

        assert_eq!(requests.len(), 1);
        assert_eq!(
            messages(&errors),
            vec![
                "invalid MediaType. NanoInteractive only supports Banner type. ImpID=no-banner"
                    .to_string(),
                "pid and nid are empty, one of them must be provided; ImpID=no-ids".to_string(),
            ]
        );
        assert!(errors.iter().all(|e| e.current_context().is_bad_input()));

        let body = body_json(&requests[0]);
        let ids: Vec<&str> = body["imp"]
            .as_array()
            .expect("imp should be an array")
            .iter()
            .filter_map(|imp| imp["id"].as_str())
            .collect();
        assert_eq!(ids, vec!["first", "last"]);
    }

    #[test]
    fn no_valid_impressions_yields_aggregate_error() {
        let request = bid_request(vec![banner_imp("imp-1", json!({}))]);

        let (requests, errors) = adapter().make_requests(&request);

        assert!(requests.is_empty());
        assert_eq!(
            messages(&errors),
            vec![
                "ext.bidder not provided; ImpID=imp-1".to_string(),
                NO_IMPRESSIONS_MESSAGE.to_string(),
            ]
        );
    }

    #[test]
    fn empty_request_yields_only_aggregate_error() {
        let (requests, errors) = adapter().make_requests(&bid_request(Vec::new()));

        assert!(requests.is_empty());
        assert_eq!(messages(&errors), vec![NO_IMPRESSIONS_MESSAGE.to_string()]);
    }

    #[test]
    fn check_imp_reports_each_failure() {
        let mut imp = Imp {
            id: "x".to_string(),
            ..Default::default()
        };
        let err = check_imp(&imp).expect_err("no banner");
        assert!(err.current_context().message().starts_with("invalid MediaType"));

        imp.banner = Some(Banner::default());
        let err = check_imp(&imp).expect_err("no ext");
        assert_eq!(err.current_context().message(), "ext not provided; ImpID=x");

        imp.ext = Some(json!("not-an-object"));
        let err = check_imp(&imp).expect_err("ext of the wrong shape");
        assert_eq!(err.current_context().message(), "ext not provided; ImpID=x");

        imp.ext = Some(json!([]));
        let err = check_imp(&imp).expect_err("ext given as an array");
        assert_eq!(err.current_context().message(), "ext not provided; ImpID=x");

        imp.ext = Some(json!({"bidder": ["pid-from-array", "nid"]}));
        let err = check_imp(&imp).expect_err("bidder params given as an array");
        assert_eq!(
            err.current_context().message(),
            "ext.bidder not provided; ImpID=x"
        );

        imp.ext = Some(json!({"bidder": []}));
        let err = check_imp(&imp).expect_err("bidder params given as an empty array");
        assert_eq!(
            err.current_context().message(),
            "ext.bidder not provided; ImpID=x"
        );

        imp.ext = Some(json!({"bidder": {"pid": 7}}));
        let err = check_imp(&imp).expect_err("bidder params of the wrong shape");
        assert_eq!(
            err.current_context().message(),
            "ext.bidder not provided; ImpID=x"
        );

        imp.ext = Some(nano_ext(json!({"pid": "", "nid": ""})));
        let err = check_imp(&imp).expect_err("both identifiers empty");
        assert_eq!(
            err.current_context().message(),
            "pid and nid are empty, one of them must be provided; ImpID=x"
        );

        imp.ext = Some(nano_ext(json!({"pid": "p"})));
        assert_eq!(check_imp(&imp).expect("valid imp"), None);

        imp.ext = Some(nano_ext(json!({"pid": "p", "ref": "https://r.example"})));
        assert_eq!(
            check_imp(&imp).expect("valid imp"),
            Some("https://r.example".to_string())
        );
    }

    #[test]
    fn array_shaped_bidder_params_are_not_forwarded() {
        let request = bid_request(vec![
            banner_imp("arr", json!({"bidder": ["pid-from-array", "nid"]})),
            banner_imp("ok", nano_ext(json!({"pid": "p"}))),
        ]);

        let (requests, errors) = adapter().make_requests(&request);

        assert_eq!(
            messages(&errors),
            vec!["ext.bidder not provided; ImpID=arr".to_string()]
        );
        let body = body_json(&requests[0]);
        assert_eq!(body["imp"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["imp"][0]["id"], "ok");
    }

    #[test]
    fn first_referrer_wins_and_overwrites_site_ref() {
        let mut request = bid_request(vec![
            banner_imp("a", nano_ext(json!({"pid": "p"}))),
            banner_imp("b", nano_ext(json!({"pid": "p", "ref": "https://first.example"}))),
            banner_imp("c", nano_ext(json!({"nid": "n", "ref": "https://second.example"}))),
        ]);
        request.site = Some(Site {
            page: Some("https://publisher.example/article".to_string()),
            referrer: Some("https://original.example".to_string()),
            ..Default::default()
        });

        let outbound = outbound_for(&request);
        let body = body_json(&outbound);

        assert_eq!(body["site"]["ref"], "https://first.example");
        assert_eq!(body["site"]["page"], "https://publisher.example/article");
        assert_eq!(
            request.site.as_ref().and_then(|s| s.referrer.as_deref()),
            Some("https://original.example"),
            "caller's request is left untouched"
        );
    }

    #[test]
    fn referrer_creates_site_when_missing() {
        let request = bid_request(vec![banner_imp(
            "a",
            nano_ext(json!({"pid": "p", "ref": "https://ref.example"})),
        )]);
        assert!(request.site.is_none());

        let body = body_json(&outbound_for(&request));

        assert_eq!(body["site"], json!({"ref": "https://ref.example"}));
    }

    #[test]
    fn unknown_request_fields_are_forwarded() {
        let mut request = bid_request(vec![banner_imp("a", nano_ext(json!({"pid": "p"})))]);
        request.extra.insert("tmax".to_string(), json!(300));
        request.imp[0]
            .extra
            .insert("tagid".to_string(), json!("slot-1"));

        let body = body_json(&outbound_for(&request));

        assert_eq!(body["tmax"], 300);
        assert_eq!(body["imp"][0]["tagid"], "slot-1");
        assert_eq!(body["imp"][0]["ext"]["bidder"]["pid"], "p");
    }

    #[test]
    fn headers_come_from_device_site_and_user() {
        let mut request = bid_request(vec![banner_imp("a", nano_ext(json!({"pid": "p"})))]);
        request.device = Some(Device {
            ua: Some("Mozilla/5.0".to_string()),
            ip: Some("203.0.113.7".to_string()),
            ..Default::default()
        });
        request.site = Some(Site {
            page: Some("https://publisher.example/".to_string()),
            ..Default::default()
        });
        request.user = Some(User {
            buyeruid: Some("buyer-42".to_string()),
            ..Default::default()
        });

        let outbound = outbound_for(&request);

        assert_eq!(header(&outbound, "user-agent"), Some("Mozilla/5.0"));
        assert_eq!(header(&outbound, "x-forwarded-ip"), Some("203.0.113.7"));
        assert_eq!(header(&outbound, "referer"), Some("https://publisher.example/"));
        assert_eq!(header(&outbound, "cookie"), Some("Nano=buyer-42"));
    }

    #[test]
    fn empty_source_fields_set_no_headers() {
        let mut request = bid_request(vec![banner_imp("a", nano_ext(json!({"pid": "p"})))]);
        request.device = Some(Device {
            ua: Some(String::new()),
            ..Default::default()
        });
        request.site = Some(Site::default());
        request.user = Some(User {
            buyeruid: Some(String::new()),
            ..Default::default()
        });

        let outbound = outbound_for(&request);

        assert_eq!(outbound.headers.len(), 3);
        assert!(outbound.headers.get("user-agent").is_none());
        assert!(outbound.headers.get("x-forwarded-ip").is_none());
        assert!(outbound.headers.get("referer").is_none());
        assert!(outbound.headers.get("cookie").is_none());
    }

    #[test]
    fn illegal_header_values_are_skipped() {
        let mut request = bid_request(vec![banner_imp("a", nano_ext(json!({"pid": "p"})))]);
        request.device = Some(Device {
            ua: Some("bad\nagent".to_string()),
            ip: Some("198.51.100.1".to_string()),
            ..Default::default()
        });

        let outbound = outbound_for(&request);

        assert!(outbound.headers.get("user-agent").is_none());
        assert_eq!(header(&outbound, "x-forwarded-ip"), Some("198.51.100.1"));
    }

    fn make_bids_for(response: &ResponseData) -> (Option<BidderResponse>, AdapterErrors) {
        let request = bid_request(vec![banner_imp("a", nano_ext(json!({"pid": "p"})))]);
        let outbound = outbound_for(&request);
        adapter().make_bids(&request, &outbound, response)
    }

    #[test]
    fn no_content_is_not_an_error() {
        let (response, errors) = make_bids_for(&ResponseData::new(StatusCode::NO_CONTENT, ""));
        assert!(response.is_none());
        assert!(errors.is_empty());
    }

    #[test]
    fn bad_request_is_bad_input() {
        let (response, errors) = make_bids_for(&ResponseData::new(StatusCode::BAD_REQUEST, ""));
        assert!(response.is_none());
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].current_context(),
            &AdapterError::bad_input("Invalid request.")
        );
    }

    #[test]
    fn unexpected_status_is_server_error() {
        let (response, errors) =
            make_bids_for(&ResponseData::new(StatusCode::INTERNAL_SERVER_ERROR, "oops"));
        assert!(response.is_none());
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].current_context(),
            &AdapterError::bad_server_response("unexpected HTTP status 500.")
        );
    }

    #[test]
    fn unparsable_body_is_server_error() {
        let (response, errors) = make_bids_for(&ResponseData::new(StatusCode::OK, "{not json"));
        assert!(response.is_none());
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].current_context(),
            &AdapterError::bad_server_response("bad server body response")
        );
    }

    #[test]
    fn keeps_only_positive_prices_tagged_banner() {
        let (response, errors) = make_bids_for(&ok_response(json!({
            "id": "resp-1",
            "cur": "USD",
            "seatbid": [{
                "seat": "nano",
                "bid": [
                    {"id": "zero", "impid": "a", "price": 0},
                    {"id": "five", "impid": "a", "price": 5, "adm": "<div></div>"}
                ]
            }]
        })));

        assert!(errors.is_empty());
        let response = response.expect("should produce a bidder response");
        assert_eq!(response.currency, "USD");
        assert_eq!(response.bids.len(), 1);
        assert_eq!(response.bids[0].bid.id, "five");
        assert_eq!(response.bids[0].bid.price, 5.0);
        assert_eq!(response.bids[0].bid_type, BidType::Banner);
    }

    #[test]
    fn preserves_partner_order_and_reads_first_seat_only() {
        let (response, _) = make_bids_for(&ok_response(json!({
            "id": "resp-1",
            "cur": "EUR",
            "seatbid": [
                {"bid": [
                    {"id": "b2", "impid": "a", "price": 2.5},
                    {"id": "neg", "impid": "a", "price": -1},
                    {"id": "b1", "impid": "a", "price": 1.5}
                ]},
                {"bid": [{"id": "other-seat", "impid": "a", "price": 9}]}
            ]
        })));

        let response = response.expect("should produce a bidder response");
        assert_eq!(response.currency, "EUR");
        let ids: Vec<&str> = response.bids.iter().map(|b| b.bid.id.as_str()).collect();
        assert_eq!(ids, vec!["b2", "b1"]);
    }

    #[test]
    fn empty_seatbid_means_no_bids() {
        let (response, errors) = make_bids_for(&ok_response(json!({
            "id": "resp-1",
            "cur": "USD",
            "seatbid": []
        })));

        assert!(errors.is_empty());
        let response = response.expect("should produce an empty bidder response");
        assert_eq!(response.currency, "USD");
        assert!(response.bids.is_empty());
    }

    #[test]
    fn missing_currency_defaults_to_usd() {
        let (response, _) = make_bids_for(&ok_response(json!({
            "id": "resp-1",
            "seatbid": [{"bid": [{"id": "b", "impid": "a", "price": 0.8}]}]
        })));

        assert_eq!(
            response.expect("should produce a bidder response").currency,
            "USD"
        );
    }

    #[test]
    fn registers_from_settings() {
        let settings = test_settings();
        let bidders = register_bidders(&settings);
        assert_eq!(bidders.len(), 1);
        assert_eq!(bidders[0].name(), "Nano");
    }

    #[test]
    fn skips_registration_when_disabled_or_blank() {
        let mut settings = test_settings();
        settings.nanointeractive.enabled = false;
        assert!(register_bidders(&settings).is_empty());

        let mut settings = test_settings();
        settings.nanointeractive.endpoint = "   ".to_string();
        assert!(register_bidders(&settings).is_empty());
    }
}
