//! Assorted slice helpers used by the scans and the recursive engine.

/// Owned copy of `s` in reverse order.
#[inline]
pub fn reversed<S: Copy>(s: &[S]) -> Vec<S> {
    s.iter().rev().copied().collect()
}

/// Split point of the first sequence at each recursion step.
#[inline]
pub fn midpoint(len: usize) -> usize {
    len / 2
}
