//! Formatting helpers for index columns.

/// Number of decimal digits needed to print every index below `count`.
///
/// Dumps zero-pad indices to this width so columns line up.
pub fn width_for_count(count: usize) -> usize {
    let mut last = count.saturating_sub(1);
    let mut width = 1;
    while last >= 10 {
        last /= 10;
        width += 1;
    }
    width
}
