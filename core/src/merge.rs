use crate::Occurrence;

/// Move the last occurrence of `occs` into place, keeping the list in
/// non-increasing frequency order.
///
/// Elements `0..n-1` must already be sorted. A binary search over them finds
/// the insertion point; equal frequencies end the search early, so a new entry
/// lands next to *some* entry of the same frequency rather than at the end of
/// that run.
///
/// Returns the midpoints probed by the search, or `None` when the list has
/// fewer than two elements and nothing needs to move.
pub fn insert_last_occurrence(occs: &mut Vec<Occurrence>) -> Option<Vec<usize>> {
    if occs.len() <= 1 {
        return None;
    }

    let target = occs[occs.len() - 1].frequency;
    let mut probes = Vec::new();
    let mut lo = 0usize;
    let mut hi = occs.len() - 2;
    let mut mid = 0usize;

    while lo <= hi {
        mid = (lo + hi) / 2;
        probes.push(mid);
        let f = occs[mid].frequency;
        if f == target {
            break;
        } else if f < target {
            if mid == 0 {
                break;
            }
            hi = mid - 1;
        } else {
            lo = mid + 1;
        }
    }

    let pos = if occs[mid].frequency >= target { mid + 1 } else { mid };
    if let Some(last) = occs.pop() {
        occs.insert(pos, last);
    }
    tracing::trace!(?probes, pos, "placed occurrence");
    Some(probes)
}
