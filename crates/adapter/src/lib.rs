//! NanoInteractive bid adapter.
//!
//! Translates the host exchange's OpenRTB 2.5 bid request into the single
//! HTTP request the NanoInteractive partner expects, and the partner's answer
//! back into typed bids. Transport, retries, currency conversion and auction
//! logic stay with the host.
//!
//! # Modules
//!
//! - [`adapters`]: The NanoInteractive adapter and bidder registration
//! - [`bidder`]: Host plugin contract (`Bidder` trait and envelopes)
//! - [`constants`]: Header names and fixed protocol values
//! - [`error`]: Error types
//! - [`logging`]: Logger installation for binaries
//! - [`openrtb`]: OpenRTB 2.5 request/response types
//! - [`openrtb_ext`]: Bidder extension payloads carried in `imp.ext`
//! - [`settings`]: Configuration loading and validation
//! - [`test_support`]: Testing utilities

pub mod adapters;
pub mod bidder;
pub mod constants;
pub mod error;
pub mod logging;
pub mod openrtb;
pub mod openrtb_ext;
pub mod settings;
