//! Persistent-style helpers over `[Rc<T>]`.
//!
//! Each helper returns a new vector whose untouched slots are the same
//! `Rc`s as the input. That sharing is what lets the differ skip unchanged
//! subtrees by pointer equality.

use std::rc::Rc;

pub fn get_at<T>(items: &[Rc<T>], index: usize) -> Option<&Rc<T>> {
    items.get(index)
}

/// Replace slot `index` with `update(&items[index])`.
///
/// Out-of-range indices return the input unchanged.
pub fn update_at<T>(
    items: &[Rc<T>],
    index: usize,
    update: impl FnOnce(&Rc<T>) -> Rc<T>,
) -> Vec<Rc<T>> {
    let mut next = items.to_vec();
    if let Some(slot) = next.get_mut(index) {
        *slot = update(slot);
    }
    next
}

/// Drop slot `index`. Out-of-range indices return the input unchanged.
pub fn remove_at<T>(items: &[Rc<T>], index: usize) -> Vec<Rc<T>> {
    let mut next = items.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}

/// New vector with `item` in front.
pub fn prepend<T>(items: &[Rc<T>], item: T) -> Vec<Rc<T>> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.push(Rc::new(item));
    next.extend(items.iter().cloned());
    next
}

/// New vector with `item` at the back.
pub fn append<T>(items: &[Rc<T>], item: T) -> Vec<Rc<T>> {
    let mut next = items.to_vec();
    next.push(Rc::new(item));
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[i32]) -> Vec<Rc<i32>> {
        values.iter().copied().map(Rc::new).collect()
    }

    fn values(items: &[Rc<i32>]) -> Vec<i32> {
        items.iter().map(|item| **item).collect()
    }

    #[test]
    fn get_at_handles_bounds() {
        let items = list(&[15, 10, 5, 1]);
        assert_eq!(get_at(&items, 1).map(|item| **item), Some(10));
        assert!(get_at(&items, 9).is_none());
    }

    #[test]
    fn update_at_touches_one_slot() {
        let items = list(&[15, 10, 5, 1]);

        let next = update_at(&items, 1, |item| Rc::new(**item + 1));

        assert_eq!(values(&next), vec![15, 11, 5, 1]);
        assert!(Rc::ptr_eq(&next[0], &items[0]));
        assert!(Rc::ptr_eq(&next[3], &items[3]));
    }

    #[test]
    fn update_at_first_and_last() {
        let items = list(&[15, 10, 5, 1]);

        let next = update_at(&items, 0, |item| Rc::new(**item + 1));
        let next = update_at(&next, 3, |item| Rc::new(**item + 1));

        assert_eq!(values(&next), vec![16, 10, 5, 2]);
    }

    #[test]
    fn update_at_out_of_range_keeps_everything() {
        let items = list(&[1, 2]);

        let next = update_at(&items, 5, |_| panic!("must not be called"));

        assert_eq!(values(&next), vec![1, 2]);
        assert!(next.iter().zip(&items).all(|(a, b)| Rc::ptr_eq(a, b)));
    }

    #[test]
    fn update_at_returning_same_rc_keeps_identity() {
        let items = list(&[1, 2]);
        let next = update_at(&items, 1, Rc::clone);
        assert!(Rc::ptr_eq(&next[1], &items[1]));
    }

    #[test]
    fn remove_at_drops_one_slot() {
        let items = list(&[15, 10, 5, 1]);

        assert_eq!(values(&remove_at(&items, 2)), vec![15, 10, 1]);
        assert_eq!(values(&remove_at(&items, 0)), vec![10, 5, 1]);
        assert_eq!(values(&remove_at(&items, 9)), vec![15, 10, 5, 1]);
    }

    #[test]
    fn prepend_and_append_share_existing_slots() {
        let items = list(&[1, 2]);

        let front = prepend(&items, 0);
        let back = append(&items, 3);

        assert_eq!(values(&front), vec![0, 1, 2]);
        assert_eq!(values(&back), vec![1, 2, 3]);
        assert!(Rc::ptr_eq(&front[1], &items[0]));
        assert!(Rc::ptr_eq(&back[1], &items[1]));
    }
}
