//! Listing ownership resolution
//!
//! Ownership is two-tier:
//!
//! 1. **Account match**: `space.owner_id` equals the requested owner id.
//! 2. **Contact match**: the listing's denormalized `owner_email` equals the
//!    signed-in owner's email, case-insensitively.
//!
//! Tier 2 exists because seed listings carry placeholder owner ids
//! (`owner_1`, ...) that never match a registered account; an owner who
//! registers with the email printed on a seed listing sees it on their
//! dashboard. Without a signed-in owner nothing is owned.

use crate::models::{Owner, Space};

/// Whether `space` belongs on the dashboard of `session` viewing `owner_id`
pub fn is_owned(space: &Space, owner_id: &str, session: &Owner) -> bool {
    space.is_owned_by(owner_id)
        || (!space.owner_email.is_empty() && session.email_matches(&space.owner_email))
}

/// Keep only the spaces owned under the two-tier rule, in input order
pub fn owned_spaces(spaces: Vec<Space>, owner_id: &str, session: Option<&Owner>) -> Vec<Space> {
    let Some(session) = session else {
        return Vec::new();
    };

    spaces
        .into_iter()
        .filter(|s| is_owned(s, owner_id, session))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn owner(email: &str) -> Owner {
        Owner::new("Priya".into(), "Sharma".into(), "919876543210".into(), email.into())
    }

    #[test]
    fn test_no_session_owns_nothing() {
        assert!(owned_spaces(seed::spaces(), "owner_1", None).is_empty());
    }

    #[test]
    fn test_account_match() {
        let session = owner("someone@else.com");
        let ids: Vec<_> = owned_spaces(seed::spaces(), "owner_1", Some(&session))
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["1", "5"]);
    }

    #[test]
    fn test_contact_match_ignores_case() {
        let session = owner("PRIYA@TechPark.com");
        let ids: Vec<_> = owned_spaces(seed::spaces(), &session.id, Some(&session))
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["5"]);
    }

    #[test]
    fn test_empty_listing_email_never_matches() {
        let mut space = seed::spaces().remove(0);
        space.owner_email.clear();
        let session = owner("");
        assert!(!is_owned(&space, "nobody", &session));
    }
}
