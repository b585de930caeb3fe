//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::models::{Enquiry, Owner, Space};

/// Validate that a Space is internally consistent
pub fn assert_space_invariants(space: &Space) {
    debug_assert!(!space.id.trim().is_empty(), "Space has empty id");

    debug_assert!(
        !space.title.trim().is_empty(),
        "Space {} has empty title",
        space.id
    );

    debug_assert!(
        space.price.is_finite() && space.price > 0.0,
        "Space {} has non-positive price {}",
        space.id,
        space.price
    );
}

/// Validate that a space about to be persisted carries no query state
pub fn assert_space_persistable(space: &Space) {
    assert_space_invariants(space);

    debug_assert!(
        space.distance.is_none(),
        "Space {} carries a transient distance into storage",
        space.id
    );

    debug_assert!(
        space.views.is_some(),
        "Space {} saved without a view counter",
        space.id
    );
}

/// Validate that an Owner record is usable as a login key
pub fn assert_owner_invariants(owner: &Owner) {
    debug_assert!(!owner.id.trim().is_empty(), "Owner has empty id");

    debug_assert!(
        !owner.email.trim().is_empty(),
        "Owner {} has empty email",
        owner.id
    );
}

/// Validate that an Enquiry is routed somewhere
pub fn assert_enquiry_invariants(enquiry: &Enquiry) {
    debug_assert!(
        !enquiry.space_id.trim().is_empty(),
        "Enquiry {} has no target space",
        enquiry.id
    );
}

/// Validate a ranked discovery result: distances ascend and unranked
/// entries trail every ranked one
pub fn assert_ranked_order(spaces: &[Space]) {
    let first_unranked = spaces
        .iter()
        .position(|s| s.distance.is_none())
        .unwrap_or(spaces.len());

    debug_assert!(
        spaces[first_unranked..].iter().all(|s| s.distance.is_none()),
        "Ranked space appears after an unranked one"
    );

    debug_assert!(
        spaces[..first_unranked]
            .windows(2)
            .all(|w| w[0].distance <= w[1].distance),
        "Ranked spaces are not in ascending distance order"
    );
}
