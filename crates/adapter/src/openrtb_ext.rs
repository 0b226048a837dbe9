//! Extension payloads carried in `imp.ext`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Generic per-bidder envelope the host places in `imp.ext`.
///
/// The host fills `bidder` with the parameters configured for the bidder the
/// request is being sent to; everything else is host business.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtImpBidder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prebid: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidder: Option<Value>,
}

/// Contract for `imp[i].ext.bidder` when the bidder is NanoInteractive.
///
/// `pid` is optional when `nid` is provided, and the other way around.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtImpNanoInteractive {
    /// Pixel id.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pid: String,
    /// Network id.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub nid: String,
    /// Query terms.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nq: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(rename = "subId", default, skip_serializing_if = "String::is_empty")]
    pub sub_id: String,
    /// Referrer to report to the partner instead of the page's own.
    #[serde(rename = "ref", default, skip_serializing_if = "String::is_empty")]
    pub referrer: String,
}

impl ExtImpNanoInteractive {
    /// At least one of the two identifiers is required by the partner.
    #[must_use]
    pub fn has_identifier(&self) -> bool {
        !self.pid.is_empty() || !self.nid.is_empty()
    }
}
