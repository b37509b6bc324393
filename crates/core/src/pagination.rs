//! Pagination planning and page-metadata math.
//!
//! Two input modes exist and are never conflated: page mode
//! (`page`/`per_page`, the primary API) and the legacy window mode
//! (`start`/`count`, kept for older clients). Both produce a [`QueryPlan`]
//! that the storage layer turns into a skip/limit scan.

use serde::Serialize;

use crate::constants::{DEFAULT_PAGE, DEFAULT_PER_PAGE, LEGACY_DEFAULT_COUNT, LEGACY_DEFAULT_START};

/// Validated skip/limit plan for a single query.
///
/// Always `per_page >= 1`. Page-mode plans additionally guarantee
/// `page >= 1` and `skip = (page - 1) * per_page`; window-mode plans carry
/// the raw offset in `page` and the window size in `per_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryPlan {
    /// Documents to skip before the window starts.
    pub skip: u64,
    /// Maximum documents returned.
    pub limit: u64,
    /// 1-based page number (page mode) or raw offset (window mode).
    pub page: u64,
    /// Window size.
    pub per_page: u64,
}

/// Page metadata combined from a plan and the store's full count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: u64,
    pub per_page: u64,
    pub page_count: u64,
    pub total_count: u64,
}

/// Build a plan from page-mode inputs.
///
/// Missing values default to page 1 / 100 per page. Zero is clamped to 1
/// so the plan invariants hold; no upper bound is enforced — oversized
/// values pass straight into the skip/limit clause, with a skip beyond
/// `u64::MAX` saturating rather than overflowing.
pub fn plan_page(page: Option<u64>, per_page: Option<u64>) -> QueryPlan {
    let page = page.unwrap_or(DEFAULT_PAGE).max(1);
    let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE).max(1);
    QueryPlan { skip: (page - 1).saturating_mul(per_page), limit: per_page, page, per_page }
}

/// Build a plan from legacy `start`/`count` inputs, supplied as raw strings.
///
/// Both values must parse as non-negative integers, with `count >= 1`.
/// Otherwise BOTH revert to the defaults `start=0, count=100` — not just
/// the invalid one. This all-or-nothing fallback reproduces long-standing
/// observed behavior that existing clients depend on.
pub fn plan_window(start: Option<&str>, count: Option<&str>) -> QueryPlan {
    let parsed = match (start, count) {
        (Some(s), Some(c)) => s.parse::<u64>().ok().zip(c.parse::<u64>().ok()),
        _ => None,
    };
    let (start, count) = match parsed {
        Some((_, 0)) | None => (LEGACY_DEFAULT_START, LEGACY_DEFAULT_COUNT),
        Some(pair) => pair,
    };
    // The window is reported back as-is: page is the raw offset, not a
    // 1-based page number.
    QueryPlan { skip: start, limit: count, page: start, per_page: count }
}

impl QueryPlan {
    /// Combine the plan with the store's pre-limit total count.
    ///
    /// `page_count = ceil(total_count / per_page)`; the planner guarantees
    /// `per_page >= 1`, so the division is always defined.
    pub fn assemble(&self, total_count: u64) -> PageMeta {
        PageMeta {
            page: self.page,
            per_page: self.per_page,
            page_count: total_count.div_ceil(self.per_page),
            total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_mode_defaults() {
        let plan = plan_page(None, None);
        assert_eq!(plan, QueryPlan { skip: 0, limit: 100, page: 1, per_page: 100 });
    }

    #[test]
    fn page_mode_skip_math() {
        let plan = plan_page(Some(3), Some(25));
        assert_eq!(plan.skip, 50);
        assert_eq!(plan.limit, 25);
    }

    #[test]
    fn page_mode_clamps_zero_to_one() {
        let plan = plan_page(Some(0), Some(0));
        assert_eq!(plan, QueryPlan { skip: 0, limit: 1, page: 1, per_page: 1 });
    }

    #[test]
    fn page_mode_has_no_upper_bound() {
        let plan = plan_page(Some(1_000_000), Some(10_000));
        assert_eq!(plan.skip, 999_999 * 10_000);
        assert_eq!(plan.limit, 10_000);
    }

    #[test]
    fn page_mode_extreme_page_saturates_instead_of_overflowing() {
        let plan = plan_page(Some(u64::MAX), Some(2));
        assert_eq!(plan.skip, u64::MAX);
        assert_eq!(plan.limit, 2);
        assert_eq!(plan.page, u64::MAX);
    }

    #[test]
    fn window_mode_valid_inputs() {
        let plan = plan_window(Some("40"), Some("20"));
        assert_eq!(plan, QueryPlan { skip: 40, limit: 20, page: 40, per_page: 20 });
    }

    // All-or-nothing fallback: one bad field reverts both. Deliberately
    // preserved quirk — clients relying on it exist.
    #[test]
    fn window_invalid_start_reverts_both() {
        let plan = plan_window(Some("abc"), Some("10"));
        assert_eq!(plan, QueryPlan { skip: 0, limit: 100, page: 0, per_page: 100 });
    }

    #[test]
    fn window_invalid_count_reverts_both() {
        let plan = plan_window(Some("40"), Some("ten"));
        assert_eq!(plan.skip, 0);
        assert_eq!(plan.limit, 100);
    }

    #[test]
    fn window_missing_either_reverts_both() {
        assert_eq!(plan_window(None, Some("10")).limit, 100);
        assert_eq!(plan_window(Some("40"), None).skip, 0);
        assert_eq!(plan_window(None, None).limit, 100);
    }

    #[test]
    fn window_negative_reverts_both() {
        let plan = plan_window(Some("-5"), Some("10"));
        assert_eq!(plan, QueryPlan { skip: 0, limit: 100, page: 0, per_page: 100 });
    }

    #[test]
    fn window_zero_count_reverts_both() {
        let plan = plan_window(Some("40"), Some("0"));
        assert_eq!(plan, QueryPlan { skip: 0, limit: 100, page: 0, per_page: 100 });
    }

    #[test]
    fn assemble_rounds_page_count_up() {
        let meta = plan_page(Some(1), Some(100)).assemble(250);
        assert_eq!(meta.page_count, 3);
        assert_eq!(meta.total_count, 250);
    }

    #[test]
    fn assemble_exact_multiple() {
        let meta = plan_page(Some(2), Some(50)).assemble(200);
        assert_eq!(meta.page_count, 4);
        assert_eq!(meta.page, 2);
    }

    #[test]
    fn assemble_empty_collection_has_zero_pages() {
        let meta = plan_page(None, None).assemble(0);
        assert_eq!(meta.page_count, 0);
        assert_eq!(meta.total_count, 0);
    }
}
