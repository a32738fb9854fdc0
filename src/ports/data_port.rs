//! Bid source port trait.

use crate::domain::bid::Bid;
use crate::domain::error::BidIndexError;

/// Supplies the finite sequence of bids to index.
pub trait BidSource {
    fn load_bids(&self) -> Result<Vec<Bid>, BidIndexError>;
}
