//! Fixed-size page slicing over an already-materialized, already-ordered
//! result set. Performs no ordering of its own.

/// 1-based page slice: start = (page - 1) * page_size, end clamped to the
/// slice length. An out-of-range page, including page 0, yields an empty
/// slice, not an error.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = items.len().min(start.saturating_add(page_size));
    &items[start..end]
}
