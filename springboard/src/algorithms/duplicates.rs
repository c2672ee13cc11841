use crate::sequence::Sequence;
use crate::thunk::Bounce;
use crate::trampoline;

/// Drop elements equal to the element right before them
///
/// Only adjacent runs collapse: `[1, 1, 2, 1]` becomes `[1, 2, 1]`.
pub fn remove_adjacent_duplicates<S>(seq: S) -> Vec<S::Item>
where
    S: Sequence,
    S::Item: PartialEq + Clone,
{
    trampoline(remove_adjacent_duplicates_bounce(seq))
}

/// First step of duplicate removal; the output vector is the accumulator
/// threaded through every step
pub fn remove_adjacent_duplicates_bounce<'a, S>(seq: S) -> Bounce<'a, Vec<S::Item>>
where
    S: Sequence + 'a,
    S::Item: PartialEq + Clone + 'a,
{
    dedup_step((seq, Vec::new()))
}

fn dedup_step<'a, S>((seq, mut kept): (S, Vec<S::Item>)) -> Bounce<'a, Vec<S::Item>>
where
    S: Sequence + 'a,
    S::Item: PartialEq + Clone + 'a,
{
    match seq.first() {
        None => Bounce::Done(kept),
        Some(item) => {
            if kept.last() != Some(item) {
                kept.push(item.clone());
            }
            Bounce::call(dedup_step, (seq.rest(), kept))
        }
    }
}
