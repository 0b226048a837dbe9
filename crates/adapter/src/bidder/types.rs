//! Envelope types exchanged between the host and a bidder.

use derive_more::Display;
use http::{HeaderMap, Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CURRENCY;
use crate::openrtb::Bid;

/// An HTTP request the host should send to the partner on our behalf.
#[derive(Debug, Clone)]
pub struct RequestData {
    pub method: Method,
    pub uri: String,
    pub body: Vec<u8>,
    pub headers: HeaderMap,
}

/// The partner's answer, as handed back by the host transport.
#[derive(Debug, Clone)]
pub struct ResponseData {
    pub status_code: StatusCode,
    pub body: Vec<u8>,
    pub headers: HeaderMap,
}

impl ResponseData {
    /// Response with the given status and body and no headers.
    #[must_use]
    pub fn new(status_code: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status_code,
            body: body.into(),
            headers: HeaderMap::new(),
        }
    }
}

/// Creative type a bid is for.
#[derive(Debug, Clone, Copy, Display, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BidType {
    #[display("banner")]
    Banner,
    #[display("video")]
    Video,
    #[display("audio")]
    Audio,
    #[display("native")]
    Native,
}

/// A partner bid tagged with the creative type it serves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypedBid {
    pub bid: Bid,
    pub bid_type: BidType,
}

/// Everything one bidder contributes to an auction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BidderResponse {
    /// ISO-4217 currency of every bid in `bids`.
    pub currency: String,
    pub bids: Vec<TypedBid>,
}

impl BidderResponse {
    /// Empty response in the default currency with room for `capacity` bids.
    #[must_use]
    pub fn with_bids_capacity(capacity: usize) -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            bids: Vec::with_capacity(capacity),
        }
    }
}
