// reorder/movement.rs

/// Move the element at `from` to `to`, shifting everything in between by one.
///
/// Equivalent to `remove(from)` followed by `insert(to, ..)`, but done in place
/// with a rotation so the slice length never changes.
/// Returns `false` (and leaves the slice untouched) when `from == to` or either
/// index is out of bounds.
pub fn relocate<T>(items: &mut [T], from: usize, to: usize) -> bool {
    let len = items.len();
    if from == to || from >= len || to >= len {
        return false;
    }

    if from < to {
        items[from..=to].rotate_left(1);
    } else {
        items[to..=from].rotate_right(1);
    }

    log::trace!("relocated element {} -> {}", from, to);
    true
}
