//! Nearest-element queries ("next greater element" and friends).
//!
//! Every query is one monotonic-stack pass: walk the sequence from the
//! requested side, pop entries that fail the relation against the current
//! value, and whatever remains on top is the answer. Each index is pushed and
//! popped at most once, so a pass is O(n).

use crate::extremum::{Relation, Side};
use crate::stack::ArrayStack;

/// For every `i`, the nearest `j` on `side` with `seq[j] REL seq[i]`.
pub fn nearest<T: Ord>(seq: &[T], side: Side, relation: Relation) -> Vec<Option<usize>> {
    nearest_with(seq, side, relation, |_| {})
}

/// Like [`nearest`], but calls `observe` with the stack (bottom to top)
/// after every push. Consecutive entries always satisfy `relation`.
pub fn nearest_with<T, F>(
    seq: &[T],
    side: Side,
    relation: Relation,
    mut observe: F,
) -> Vec<Option<usize>>
where
    T: Ord,
    F: FnMut(&[usize]),
{
    let n = seq.len();
    let mut found = vec![None; n];
    let mut stack = ArrayStack::with_capacity(n);

    let order: Box<dyn Iterator<Item = usize>> = match side {
        Side::Previous => Box::new(0..n),
        Side::Next => Box::new((0..n).rev()),
    };

    for i in order {
        while let Some(top) = stack.peek() {
            if relation.holds(&seq[top], &seq[i]) {
                break;
            }
            stack.pop();
        }
        found[i] = stack.peek();
        let pushed = stack.push(i);
        debug_assert!(pushed.is_some());
        observe(stack.as_slice());
    }

    found
}

/// Nearest-element query on a circular sequence: the search wraps around the
/// end, but never reaches `i` itself.
pub fn nearest_circular<T: Ord>(seq: &[T], side: Side, relation: Relation) -> Vec<Option<usize>> {
    let n = seq.len();
    let mut found = vec![None; n];
    // Non-strict relations can keep both copies of a run of equal values.
    let mut stack = ArrayStack::with_capacity(2 * n);

    let order: Box<dyn Iterator<Item = usize>> = match side {
        Side::Previous => Box::new(0..2 * n),
        Side::Next => Box::new((0..2 * n).rev()),
    };

    for step in order {
        let i = step % n;
        while let Some(top) = stack.peek() {
            if relation.holds(&seq[top], &seq[i]) {
                break;
            }
            stack.pop();
        }
        let answering = match side {
            Side::Previous => step >= n,
            Side::Next => step < n,
        };
        if answering {
            found[i] = stack.peek().filter(|&j| j != i);
        }
        let pushed = stack.push(i);
        debug_assert!(pushed.is_some());
    }

    found
}

pub fn previous_smaller<T: Ord>(seq: &[T]) -> Vec<Option<usize>> {
    nearest(seq, Side::Previous, Relation::Less)
}

pub fn next_smaller<T: Ord>(seq: &[T]) -> Vec<Option<usize>> {
    nearest(seq, Side::Next, Relation::Less)
}

pub fn previous_greater<T: Ord>(seq: &[T]) -> Vec<Option<usize>> {
    nearest(seq, Side::Previous, Relation::Greater)
}

pub fn next_greater<T: Ord>(seq: &[T]) -> Vec<Option<usize>> {
    nearest(seq, Side::Next, Relation::Greater)
}

pub fn next_greater_circular<T: Ord>(seq: &[T]) -> Vec<Option<usize>> {
    nearest_circular(seq, Side::Next, Relation::Greater)
}

/// Maps index answers to values, using `sentinel` where there is none.
pub fn values_or<T: Copy>(seq: &[T], found: &[Option<usize>], sentinel: T) -> Vec<T> {
    found
        .iter()
        .map(|slot| slot.map_or(sentinel, |j| seq[j]))
        .collect()
}
