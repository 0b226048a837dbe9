//! Concrete demand-partner adapters.

use std::sync::Arc;

use crate::bidder::Bidder;
use crate::settings::Settings;

pub mod nanointeractive;

pub use nanointeractive::NanoInteractiveAdapter;

/// Type alias for bidder builder functions.
type BidderBuilder = fn(&Settings) -> Vec<Arc<dyn Bidder>>;

fn bidder_builders() -> &'static [BidderBuilder] {
    &[nanointeractive::register_bidders]
}

/// Build every bidder enabled in `settings`.
///
/// The host keeps the returned list for the life of the process and calls
/// into it once per auction.
#[must_use]
pub fn build_bidders(settings: &Settings) -> Vec<Arc<dyn Bidder>> {
    let bidders: Vec<Arc<dyn Bidder>> = bidder_builders()
        .iter()
        .flat_map(|builder| builder(settings))
        .collect();

    log::info!("Built {} bidder(s)", bidders.len());
    bidders
}

/// Find a built bidder by the name it reports.
#[must_use]
pub fn find_bidder<'a>(
    bidders: &'a [Arc<dyn Bidder>],
    name: &str,
) -> Option<&'a Arc<dyn Bidder>> {
    bidders
        .iter()
        .find(|bidder| bidder.name().eq_ignore_ascii_case(name))
}
