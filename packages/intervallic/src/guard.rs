//! Precondition checks of the arguments given to the operations over collections.

use {
    crate::ArgumentError,
    alloc::vec::Vec,
};


/// Collect the elements of `items`, requiring that none are `None`.
///
/// # Errors
/// [`ArgumentError::NullElement`], carrying `param`, at the first `None` element.
#[inline]
pub fn contents_not_null<T>(
    items: impl IntoIterator<Item = impl Into<Option<T>>>,
    param: &'static str,
) -> Result<Vec<T>, ArgumentError>
{
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            item.into().ok_or_else(|| {
                log::debug!("`{param}` has a `None` element at {index}");
                ArgumentError::NullElement { param, index }
            })
        })
        .collect()
}
