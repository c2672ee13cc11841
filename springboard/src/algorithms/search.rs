use crate::sequence::Sequence;
use crate::thunk::Bounce;
use crate::trampoline;

/// Is `needle` an element of `seq`?
pub fn linear_search<S>(seq: S, needle: &S::Item) -> bool
where
    S: Sequence,
    S::Item: PartialEq,
{
    trampoline(linear_search_bounce(seq, needle))
}

/// First step of a linear search; one thunk per element passed over
pub fn linear_search_bounce<'a, S>(seq: S, needle: &'a S::Item) -> Bounce<'a, bool>
where
    S: Sequence + 'a,
    S::Item: PartialEq,
{
    match seq.first() {
        None => Bounce::Done(false),
        Some(item) if item == needle => Bounce::Done(true),
        Some(_) => Bounce::call(
            |(rest, needle)| linear_search_bounce(rest, needle),
            (seq.rest(), needle),
        ),
    }
}

/// Is `needle` in the sorted slice `items`?
pub fn binary_search<T: Ord>(items: &[T], needle: &T) -> bool {
    trampoline(binary_search_bounce(items, needle))
}

/// First step of a binary search over the whole slice
///
/// Every recursive step strictly shrinks the window, so a search over `n`
/// elements forces at most `floor(log2 n) + 1` thunks.
pub fn binary_search_bounce<'a, T: Ord>(items: &'a [T], needle: &'a T) -> Bounce<'a, bool> {
    match items.len().checked_sub(1) {
        None => Bounce::Done(false),
        Some(last) => search_window(Window {
            items,
            needle,
            first: 0,
            last,
        }),
    }
}

/// Inclusive index window `[first, last]`
struct Window<'a, T> {
    items: &'a [T],
    needle: &'a T,
    first: usize,
    last: usize,
}

fn search_window<T: Ord>(window: Window<'_, T>) -> Bounce<'_, bool> {
    use std::cmp::Ordering;

    if window.last < window.first {
        return Bounce::Done(false);
    }

    let middle = window.first + (window.last - window.first) / 2;
    match window.needle.cmp(&window.items[middle]) {
        Ordering::Equal => Bounce::Done(true),
        // middle itself is excluded on both sides, otherwise a two-element
        // window can stop shrinking
        Ordering::Less => match middle.checked_sub(1) {
            Some(last) => Bounce::call(search_window, Window { last, ..window }),
            None => Bounce::Done(false),
        },
        Ordering::Greater => Bounce::call(
            search_window,
            Window {
                first: middle + 1,
                ..window
            },
        ),
    }
}
