use playtrace_types::CanonicalSession;

/// Oldest-first: timestamp ascending, ties by session id ascending.
/// The aggregation/trend ordering — summation follows this order so
/// reruns are bit-identical.
pub(crate) fn chronological(sessions: &[CanonicalSession]) -> Vec<&CanonicalSession> {
    let mut ordered: Vec<&CanonicalSession> = sessions.iter().collect();
    ordered.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| a.session_id.cmp(&b.session_id))
    });
    ordered
}

/// Newest-first: timestamp descending, ties by session id descending.
/// The pagination ordering.
pub(crate) fn newest_first(sessions: &[CanonicalSession]) -> Vec<&CanonicalSession> {
    let mut ordered: Vec<&CanonicalSession> = sessions.iter().collect();
    ordered.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.session_id.cmp(&a.session_id))
    });
    ordered
}
