//! Premium multiplier step function over the debit score

/// Debit score above which an underwriter follow-up interview is
/// requested. Flagging only; the multiplier and premium are unaffected.
pub const MANUAL_REVIEW_THRESHOLD: u32 = 50;

/// Whether the score calls for a follow-up interview
pub fn needs_manual_review(debit: u32) -> bool {
    debit > MANUAL_REVIEW_THRESHOLD
}

/// Risk multiplier from the accumulated debit score
pub fn premium_multiplier(debit: u32) -> f64 {
    if debit > 100 {
        1.25
    } else if debit > 75 {
        1.15
    } else {
        1.0
    }
}
