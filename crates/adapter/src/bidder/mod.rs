//! Host plugin contract.
//!
//! The host's dispatch framework only ever sees adapters through the
//! [`Bidder`] trait and the envelope types in [`types`]. Concrete adapters
//! live in [`crate::adapters`].

pub mod adapter;
pub mod types;

pub use adapter::{AdapterErrors, Bidder};
pub use types::{BidType, BidderResponse, RequestData, ResponseData, TypedBid};
