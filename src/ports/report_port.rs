//! Display sink port trait.

use crate::domain::bid::Bid;
use crate::domain::error::BidIndexError;

/// Port for presenting bid records to the user, one line per record.
///
/// Traversals and searches hand records to a sink instead of formatting
/// output themselves, which keeps the tree logic testable without capturing
/// stdout.
pub trait BidSink {
    fn emit(&mut self, bid: &Bid) -> Result<(), BidIndexError>;

    /// Default implementation: emit every record of `bids` in order and
    /// return how many were written.
    fn emit_all<'a, I>(&mut self, bids: I) -> Result<usize, BidIndexError>
    where
        I: Iterator<Item = &'a Bid>,
        Self: Sized,
    {
        let mut count = 0;
        for bid in bids {
            self.emit(bid)?;
            count += 1;
        }
        Ok(count)
    }
}
