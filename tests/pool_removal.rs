use std::collections::LinkedList;

use knapsack_core::pool::remove_indices;

fn letters() -> Vec<&'static str> {
    vec!["a", "b", "c", "d"]
}

#[test]
fn removes_from_either_end() {
    let mut v = letters();
    let removed = remove_indices(&mut v, [2, 3]);
    assert_eq!(v, vec!["a", "b"]);
    assert_eq!(removed, vec!["c", "d"]);

    let mut v = letters();
    remove_indices(&mut v, [0, 1]);
    assert_eq!(v, vec!["c", "d"]);
}

#[test]
fn index_order_does_not_matter() {
    let mut v = letters();
    let removed = remove_indices(&mut v, [3, 1]);
    assert_eq!(v, vec!["a", "c"]);
    assert_eq!(removed, vec!["b", "d"], "removed items come back in pool order");

    let mut v = letters();
    remove_indices(&mut v, [2, 0]);
    assert_eq!(v, vec!["b", "d"]);
}

#[test]
fn removes_everything() {
    let mut v = letters();
    let removed = remove_indices(&mut v, [0, 1, 2, 3]);
    assert!(v.is_empty());
    assert_eq!(removed, letters());
}

#[test]
fn duplicate_indices_collapse() {
    let mut dup = letters();
    remove_indices(&mut dup, [2, 2]);

    let mut single = letters();
    remove_indices(&mut single, [2]);

    assert_eq!(dup, single);
    assert_eq!(dup, vec!["a", "b", "d"]);
}

#[test]
fn out_of_range_indices_are_ignored() {
    let mut v = letters();
    let removed = remove_indices(&mut v, [-1, -2]);
    assert_eq!(v, letters());
    assert!(removed.is_empty());

    let mut v = letters();
    remove_indices(&mut v, [-1, 10]);
    assert_eq!(v, letters());

    let mut v = letters();
    remove_indices(&mut v, [-1, -2, 2, 4]);
    assert_eq!(v, vec!["a", "b", "d"]);
}

#[test]
fn empty_inputs_are_noops() {
    let mut empty: Vec<&str> = Vec::new();
    assert!(remove_indices(&mut empty, [2, 3]).is_empty());
    assert!(empty.is_empty());

    let mut v = letters();
    assert!(remove_indices(&mut v, Vec::<i64>::new()).is_empty());
    assert_eq!(v, letters());
}

#[test]
fn accepts_any_index_collection() {
    let mut v = letters();
    let indices: LinkedList<i64> = [1, 1, 3].into_iter().collect();
    remove_indices(&mut v, indices);
    assert_eq!(v, vec!["a", "c"]);
}
