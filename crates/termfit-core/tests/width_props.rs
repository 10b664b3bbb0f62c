//! Property-based invariant tests for the width classifier and calculator.
//!
//! These invariants must hold for **any** input:
//!
//! 1. Classification is total: every `u32` yields a class of at most 2 cells.
//! 2. Classification is deterministic.
//! 3. Width of printable ASCII equals its length.
//! 4. Width is non-negative and additive over concatenation.
//! 5. The ASCII fast path agrees with the per-scalar sum.

use proptest::prelude::*;
use termfit_core::{ascii_width, classify, display_width};

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Classification totality and determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn classify_is_total_and_bounded(cp in any::<u32>()) {
        let class = classify(cp);
        prop_assert!(class.cells() <= 2);
    }

    #[test]
    fn classify_is_deterministic(cp in any::<u32>()) {
        prop_assert_eq!(classify(cp), classify(cp));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Printable ASCII width equals length
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn printable_ascii_width_is_length(s in "[ -~]{0,64}") {
        prop_assert_eq!(display_width(&s), s.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Additivity over concatenation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn width_is_additive(a in any::<String>(), b in any::<String>()) {
        let joined = format!("{a}{b}");
        prop_assert_eq!(
            display_width(&joined),
            display_width(&a) + display_width(&b)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Fast path agrees with the scalar sum
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ascii_fast_path_agrees(s in any::<String>()) {
        if let Some(width) = ascii_width(&s) {
            let slow: usize = s.chars()
                .map(|ch| classify(u32::from(ch)).cells())
                .sum();
            prop_assert_eq!(width, slow);
        }
    }
}
