use std::collections::BTreeSet;

/// Remove the elements at `indices` from `seq`, keeping survivors in order.
///
/// Indices are treated as a set: duplicates collapse, and anything negative
/// or `>= seq.len()` is ignored. The removed elements are returned in their
/// original relative order.
pub fn remove_indices<T, I>(seq: &mut Vec<T>, indices: I) -> Vec<T>
where
    I: IntoIterator<Item = i64>,
{
    let len = seq.len();
    let doomed: BTreeSet<usize> = indices
        .into_iter()
        .filter_map(|i| usize::try_from(i).ok())
        .filter(|&i| i < len)
        .collect();

    tracing::trace!(len, removing = doomed.len(), "removing pool indices");

    if doomed.is_empty() {
        return Vec::new();
    }

    let mut removed = Vec::with_capacity(doomed.len());
    let mut kept = Vec::with_capacity(len - doomed.len());
    for (i, item) in std::mem::take(seq).into_iter().enumerate() {
        if doomed.contains(&i) {
            removed.push(item);
        } else {
            kept.push(item);
        }
    }
    *seq = kept;

    debug_assert_eq!(removed.len() + seq.len(), len);
    removed
}
