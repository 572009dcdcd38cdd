//! Search on monotonic grids
//!
//! Both routines accept ascending or descending data. [`linear`] returns
//! the cell `i` with `ys[i] <= x < ys[i + 1]` (mirrored for descending
//! grids) and is fastest when a hint from a previous lookup is available;
//! [`bisection`] returns the largest `i` with `ys[i] < x` (smallest for
//! descending grids) in O(log n) without a hint.

/// Linear search from a starting hint.
///
/// Returns `None` when `x` lies before the first element, and
/// `Some(len - 1)` when it lies at or beyond the last. Grids with fewer
/// than two elements have no cells and yield `None`.
pub fn linear(ys: &[f64], x: f64, hint: usize) -> Option<usize> {
    let n = ys.len();
    if n < 2 {
        return None;
    }
    // ascending: s = 1, descending: s = -1
    let s = if ys[n - 1] >= ys[0] { 1.0 } else { -1.0 };
    if s * (x - ys[0]) < 0.0 {
        return None;
    }
    if s * (x - ys[n - 1]) >= 0.0 {
        return Some(n - 1);
    }

    let i0 = hint.min(n - 2);
    if s * (x - ys[i0 + 1]) < 0.0 {
        if s * (x - ys[i0]) >= 0.0 {
            return Some(i0);
        }
        // scan downward; the range check guarantees a hit by index 0
        Some(
            (0..i0)
                .rev()
                .find(|&i| s * (x - ys[i]) >= 0.0)
                .unwrap_or(0),
        )
    } else {
        // scan upward; the range check guarantees a hit by index n - 2
        Some(
            (i0 + 1..n - 1)
                .find(|&i| s * (x - ys[i + 1]) < 0.0)
                .unwrap_or(n - 2),
        )
    }
}

/// Bisection search.
///
/// Returns the largest `i` with `ys[i] < x` on an ascending grid (the
/// smallest such cell on a descending grid); `None` when no element is
/// below `x`.
pub fn bisection(ys: &[f64], x: f64) -> Option<usize> {
    if ys.is_empty() {
        return None;
    }
    let ascending = ys[ys.len() - 1] > ys[0];
    let mut lower: isize = -1;
    let mut upper = ys.len() as isize;
    while upper - lower > 1 {
        let mid = (upper + lower) / 2;
        if (x > ys[mid as usize]) == ascending {
            lower = mid;
        } else {
            upper = mid;
        }
    }
    usize::try_from(lower).ok()
}
