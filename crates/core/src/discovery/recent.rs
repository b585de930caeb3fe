//! "Recently listed" feed for the landing page

use std::cmp::Reverse;

use crate::models::Space;

/// Number of listings shown on the landing page
pub const RECENT_FEED_LEN: usize = 3;

/// Newest listings first: runtime spaces by `created_at` descending, then
/// seed spaces in reverse insertion order. At most `limit` entries.
pub fn recent(spaces: &[Space], limit: usize) -> Vec<Space> {
    let mut created: Vec<&Space> = spaces.iter().filter(|s| !s.is_seed()).collect();
    created.sort_by_key(|s| Reverse(s.created_at));

    created
        .into_iter()
        .chain(spaces.iter().filter(|s| s.is_seed()).rev())
        .take(limit)
        .cloned()
        .collect()
}
