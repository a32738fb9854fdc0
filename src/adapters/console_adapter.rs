//! Console display sink adapter.

use crate::domain::bid::Bid;
use crate::domain::error::BidIndexError;
use crate::ports::report_port::BidSink;
use std::io::Write;

/// Writes one `id: title | amount | fund` line per bid.
///
/// Generic over the writer so tests can capture into a buffer; production
/// code uses [`ConsoleSink::stdout`].
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleSink {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        ConsoleSink { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BidSink for ConsoleSink<W> {
    fn emit(&mut self, bid: &Bid) -> Result<(), BidIndexError> {
        writeln!(
            self.out,
            "{}: {} | {:.2} | {}",
            bid.id, bid.title, bid.amount, bid.fund
        )?;
        Ok(())
    }
}
