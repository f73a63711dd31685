//! Support for the operations over collections of ranges or intervals, which all begin by
//! sorting and then scan adjacent pairs.

use {
    crate::{
        guard,
        ArgumentError,
    },
    alloc::vec::Vec,
    core::cmp::Ordering,
};


/// Collect `items`, requiring that none are `None`, and stably sort them by `compare`.
pub(crate) fn sorted<T>(
    items: impl IntoIterator<Item = impl Into<Option<T>>>,
    param: &'static str,
    compare: impl Fn(&T, &T) -> Ordering,
) -> Result<Vec<T>, ArgumentError>
{
    let mut all = guard::contents_not_null::<T>(items, param)?;
    all.sort_by(compare);
    log::trace!("sorted {} elements of `{param}`", all.len());
    Ok(all)
}


/// Index of the first adjacent pair in `sorted` that doesn't satisfy `abuts`, if any.
pub(crate) fn first_non_abutting<T>(
    sorted: &[T],
    abuts: impl Fn(&T, &T) -> bool,
) -> Option<usize>
{
    sorted.windows(2).position(|pair| match pair {
        [a, b] => !abuts(a, b),
        _ => false,
    })
}


/// Like [`first_non_abutting`] but as the error for a non-contiguous collection.
pub(crate) fn require_contiguous<T>(
    sorted: &[T],
    abuts: impl Fn(&T, &T) -> bool,
) -> Result<(), ArgumentError>
{
    match first_non_abutting(sorted, abuts) {
        None => Ok(()),
        Some(index) => {
            log::debug!("elements {index} and {} (sorted) do not abut", index + 1);
            Err(ArgumentError::NotContiguous { index })
        },
    }
}


/// Whether any adjacent pair in `sorted` satisfies `overlaps`.
pub(crate) fn any_adjacent_overlap<T>(
    sorted: &[T],
    overlaps: impl Fn(&T, &T) -> bool,
) -> bool
{
    sorted.windows(2).any(|pair| match pair {
        [a, b] => overlaps(a, b),
        _ => false,
    })
}
