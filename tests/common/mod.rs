#![allow(dead_code)]

use bidindex::domain::bid::Bid;
use bidindex::domain::error::BidIndexError;
use bidindex::domain::index::BidIndex;
use bidindex::ports::data_port::BidSource;

pub struct MockBidSource {
    pub bids: Vec<Bid>,
    pub error: Option<String>,
}

impl MockBidSource {
    pub fn new() -> Self {
        Self {
            bids: Vec::new(),
            error: None,
        }
    }

    pub fn with_bid(mut self, id: &str, title: &str, amount: f64) -> Self {
        self.bids.push(make_bid(id, title, amount));
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl BidSource for MockBidSource {
    fn load_bids(&self) -> Result<Vec<Bid>, BidIndexError> {
        if let Some(reason) = &self.error {
            return Err(BidIndexError::Source {
                reason: reason.clone(),
            });
        }
        Ok(self.bids.clone())
    }
}

pub fn make_bid(id: &str, title: &str, amount: f64) -> Bid {
    Bid::new(id, title, "General Fund", amount)
}

pub fn index_of(bids: &[(&str, &str)]) -> BidIndex {
    let mut index = BidIndex::new();
    for (id, title) in bids {
        index.insert(make_bid(id, title, 50.0));
    }
    index
}

pub fn ids<'a, I: Iterator<Item = &'a Bid>>(iter: I) -> Vec<String> {
    iter.map(|b| b.id.clone()).collect()
}

pub fn titles<'a, I: Iterator<Item = &'a Bid>>(iter: I) -> Vec<String> {
    iter.map(|b| b.title.clone()).collect()
}
