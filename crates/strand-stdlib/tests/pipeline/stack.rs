//! Stack word tests.

use super::{assert_ints, eval_stack};
use strand::Value;

#[test]
fn dup() {
    assert_ints("5 dup +", &[10]);
}

#[test]
fn dup_on_empty_is_noop() {
    assert_ints("dup", &[]);
}

#[test]
fn over() {
    assert_ints("5 6 over", &[5, 6, 5]);
}

#[test]
fn swap() {
    assert_ints("3 4 swap -", &[1]);
}

#[test]
fn rot_reorders_top_three() {
    // Stacks print bottom to top here: 1 2 3 rot leaves 3 1 2.
    assert_ints("1 2 3 rot", &[3, 1, 2]);
}

#[test]
fn rup_inverts_rot() {
    assert_ints("1 2 3 rot rup", &[1, 2, 3]);
}

#[test]
fn rot4_and_rup4() {
    assert_ints("1 2 3 4 rot4", &[4, 1, 2, 3]);
    assert_ints("1 2 3 4 rot4 rup4", &[1, 2, 3, 4]);
}

#[test]
fn rotn_generalizes() {
    assert_ints("1 2 3 2 rotn", &[1, 3, 2]);
    assert_ints("1 2 3 3 rotn", &[3, 1, 2]);
    assert_ints("1 2 3 4 4 rupn", &[2, 3, 4, 1]);
}

#[test]
fn indexed_copies() {
    assert_ints("1 2 3 aty", &[1, 2, 3, 2]);
    assert_ints("1 2 3 atz", &[1, 2, 3, 1]);
    assert_ints("1 2 3 0 at", &[1, 2, 3, 3]);
    assert_ints("1 2 3 2 at", &[1, 2, 3, 1]);
}

#[test]
fn deep_indexed_copies() {
    assert_ints("1 2 3 4 5 6 atu", &[1, 2, 3, 4, 5, 6, 3]);
    assert_ints("1 2 3 4 5 6 atv", &[1, 2, 3, 4, 5, 6, 2]);
    assert_ints("1 2 3 4 5 6 atw", &[1, 2, 3, 4, 5, 6, 1]);
}

#[test]
fn out_of_range_copy_is_noop() {
    assert_ints("1 2 9 at", &[1, 2]);
}

#[test]
fn drops() {
    assert_ints("1 2 3 drop", &[1, 2]);
    assert_ints("1 2 3 drop2", &[1]);
    assert_ints("1 2 dup2", &[1, 2, 1, 2]);
    assert_ints("1 2 3 clst", &[]);
}

#[test]
fn stash_roundtrip() {
    assert_ints("1 2 >>> 3 <<<", &[1, 3, 2]);
}

#[test]
fn stash_swap_exchanges_roles() {
    // 1 goes to the stash; <swap> makes the stash primary.
    assert_ints("1 >>> 2 <swap>", &[1]);
}

#[test]
fn stack_size() {
    assert_ints("stack:size", &[0]);
    assert_ints("7 8 stack:size", &[7, 8, 2]);
}

#[test]
fn dup_copies_arrays_deeply() {
    // Mutating the copy must not touch the original.
    let stack = eval_stack("2 array identity dup 0 99 puta");
    assert_eq!(
        stack,
        vec![Value::array(vec![0, 1]), Value::array(vec![99, 1])]
    );
}
