//! Auction bid record.

/// One bid as loaded from the monthly sales export.
///
/// `id` is the unique lookup key, `title` the non-unique one. `fund` is
/// carried as an opaque payload and `amount` is the winning amount in
/// dollars, 0.0 when the export field was absent or unparseable.
#[derive(Debug, Clone, PartialEq)]
pub struct Bid {
    pub id: String,
    pub title: String,
    pub fund: String,
    pub amount: f64,
}

impl Bid {
    pub fn new(id: impl Into<String>, title: impl Into<String>, fund: impl Into<String>, amount: f64) -> Self {
        Bid {
            id: id.into(),
            title: title.into(),
            fund: fund.into(),
            amount,
        }
    }
}
