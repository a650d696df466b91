use serde::{Deserialize, Serialize};

use super::session::CanonicalSession;

/// Page coordinates for history retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub index: usize,
    pub size: usize,
}

impl PageRequest {
    /// A size below 1 is treated as 1 so page math stays defined.
    pub fn new(index: usize, size: usize) -> Self {
        Self {
            index,
            size: size.max(1),
        }
    }
}

/// One newest-first page of a subject's canonical sessions.
///
/// Requesting a page at or past `total_pages` is not an error; it yields
/// empty `items` with the totals unchanged, matching what a tolerant
/// dashboard client expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPage {
    pub items: Vec<CanonicalSession>,
    pub page_index: usize,
    pub total_pages: usize,
    pub total_elements: usize,
}
