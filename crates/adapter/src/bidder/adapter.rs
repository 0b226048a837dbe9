//! Trait definition for bid adapters.

use error_stack::Report;

use crate::error::AdapterError;
use crate::openrtb::BidRequest;

use super::types::{BidderResponse, RequestData, ResponseData};

/// Errors collected during one translation call.
///
/// A call can succeed partially, so errors travel next to the results instead
/// of replacing them.
pub type AdapterErrors = Vec<Report<AdapterError>>;

/// Trait implemented by every demand-partner adapter.
///
/// The host calls [`Bidder::make_requests`] with its internal request, sends
/// whatever comes back, and hands each answer to [`Bidder::make_bids`].
/// Implementations hold no per-call state and may be shared across threads.
pub trait Bidder: Send + Sync {
    /// Name the host uses for this bidder in logs and reporting.
    fn name(&self) -> &'static str;

    /// Whether the host should skip this bidder for users without a cookie.
    fn skip_no_cookies(&self) -> bool {
        false
    }

    /// Translate the host's bid request into partner requests.
    ///
    /// Returns zero or more requests plus every problem found on the way.
    fn make_requests(&self, request: &BidRequest) -> (Vec<RequestData>, AdapterErrors);

    /// Translate one partner response back into typed bids.
    ///
    /// `None` means the partner took part but had nothing to offer, or the
    /// response was unusable (see the errors).
    fn make_bids(
        &self,
        internal_request: &BidRequest,
        external_request: &RequestData,
        response: &ResponseData,
    ) -> (Option<BidderResponse>, AdapterErrors);
}
