use playtrace_types::{CanonicalSession, PageRequest, SessionPage};

use crate::order::newest_first;

/// Serve one stable, newest-first page of a session history.
///
/// Ordering is timestamp descending with ties broken by session id
/// descending, so repeated calls against an unchanged set return
/// identical pages. A page index at or past `total_pages` yields empty
/// items with the totals intact — dashboards page past the end rather
/// than handling errors.
pub fn paginate(sessions: &[CanonicalSession], request: PageRequest) -> SessionPage {
    let ordered = newest_first(sessions);
    let total_elements = ordered.len();
    let total_pages = total_elements.div_ceil(request.size);

    let start = request.index.saturating_mul(request.size);
    let items = if start >= total_elements {
        Vec::new()
    } else {
        let end = (start + request.size).min(total_elements);
        ordered[start..end].iter().map(|s| (*s).clone()).collect()
    };

    SessionPage {
        items,
        page_index: request.index,
        total_pages,
        total_elements,
    }
}
