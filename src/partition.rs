//! Midpoint Partitioner: where the optimal path crosses the middle row.

/// Choose the column `k` maximizing `forward[k] + backward[len - k]`.
///
/// `forward` is the last Needleman–Wunsch row of the top half against the
/// whole second sequence; `backward` the same for the reversed bottom half
/// against the reversed second sequence, so it is indexed from the far end.
/// Both rows have the same length. The lowest maximizing index wins.
pub fn partition(forward: &[i32], backward: &[i32]) -> usize {
    debug_assert_eq!(forward.len(), backward.len());
    debug_assert!(!forward.is_empty());

    let mut best_k = 0usize;
    let mut best_val = i32::MIN;

    for (k, (&f, &b)) in forward.iter().zip(backward.iter().rev()).enumerate() {
        let v = f + b;
        if v > best_val {
            best_val = v;
            best_k = k;
        }
    }

    best_k
}
