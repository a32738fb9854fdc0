//! Dual-key index over the bid set.

use super::bid::Bid;
use super::tree::{ById, ByTitle, InOrder, OrderedTree, PostOrder, PreOrder};

/// Two independent search trees over one logical set of bids, one keyed by
/// id and one by title. The trees share no nodes; every insert lands a clone
/// of the record in each, and every remove prunes both.
#[derive(Debug)]
pub struct BidIndex {
    by_id: OrderedTree<ById>,
    by_title: OrderedTree<ByTitle>,
}

impl BidIndex {
    pub fn new() -> BidIndex {
        BidIndex {
            by_id: OrderedTree::new(),
            by_title: OrderedTree::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Add a bid to both trees. Accepts any record unconditionally: duplicate
    /// ids, duplicate titles, empty strings and zero amounts are all kept.
    pub fn insert(&mut self, bid: Bid) {
        self.by_title.insert(bid.clone());
        self.by_id.insert(bid);
    }

    /// Look up a bid by id, O(height).
    pub fn search(&self, id: &str) -> Option<&Bid> {
        self.by_id.get(id)
    }

    /// Remove a bid by id and return it. The matching title entry is pruned
    /// as well, so the two trees never drift apart.
    pub fn remove(&mut self, id: &str) -> Option<Bid> {
        let removed = self.by_id.remove(id)?;
        // Titles are not unique; the removed bid's id picks the exact entry.
        self.by_title.remove_entry(&removed.title, &removed.id);
        Some(removed)
    }

    /// All bids with the given title. Duplicate titles sit in each other's
    /// right subtrees, so this finds every one of them, not just the matches
    /// on a single descent path.
    pub fn search_title(&self, title: &str) -> Vec<&Bid> {
        self.by_title.find_all(title)
    }

    /// Bids in ascending id order.
    pub fn in_order(&self) -> InOrder<'_> {
        self.by_id.in_order()
    }

    /// Bids in pre-order of the id tree.
    pub fn pre_order(&self) -> PreOrder<'_> {
        self.by_id.pre_order()
    }

    /// Bids in ascending title order.
    pub fn title_order(&self) -> InOrder<'_> {
        self.by_title.in_order()
    }

    /// Bids in post-order of the title tree.
    pub fn post_order_title(&self) -> PostOrder<'_> {
        self.by_title.post_order()
    }
}

impl Default for BidIndex {
    fn default() -> Self {
        Self::new()
    }
}
