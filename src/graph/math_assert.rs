//! Debug-only invariant assertion helpers.
//!
//! The ordering and spanning-tree code uses these to keep graph-theoretic
//! postconditions explicit while release builds remain unaffected.

/// Debug-asserts a mathematical invariant with a message.
#[inline(always)]
pub(crate) fn math_assert_msg(condition: bool, message: &str) {
    debug_assert!(condition, "Mathematical invariant violated: {}", message);
}
