//! Integer array word tests.

use super::{assert_ints, assert_stack_eq, eval_stack};
use strand::Value;

#[test]
fn array_allocates_zeros() {
    assert_stack_eq("4 array", &[Value::array(vec![0, 0, 0, 0])]);
}

#[test]
fn identity_fills_indices() {
    assert_stack_eq("4 array identity", &[Value::array(vec![0, 1, 2, 3])]);
}

#[test]
fn identity_leaves_other_values_alone() {
    assert_ints("7 identity", &[7]);
}

#[test]
fn scalar_broadcast_over_array() {
    assert_stack_eq(
        "4 array identity 2 *",
        &[Value::array(vec![0, 2, 4, 6])],
    );
}

#[test]
fn array_array_zero_pads_shorter() {
    let stack = eval_stack("4 array identity 2 array identity +");
    assert_eq!(stack, vec![Value::array(vec![0, 2, 2, 3])]);
}

#[test]
fn unary_broadcast_keeps_length() {
    assert_stack_eq(
        "4 array identity 1 - abs",
        &[Value::array(vec![1, 0, 1, 2])],
    );
}

#[test]
fn sum() {
    assert_ints("4 array identity sum", &[6]);
    assert_ints("5 sum", &[0]);
}

#[test]
fn size() {
    let stack = eval_stack("3 array size");
    assert_eq!(stack, vec![Value::array(vec![0, 0, 0]), Value::int(3)]);
    assert_ints("5 size", &[5, 0]);
}

#[test]
fn geta_reads_elements() {
    let stack = eval_stack("4 array identity 2 geta");
    assert_eq!(stack, vec![Value::array(vec![0, 1, 2, 3]), Value::int(2)]);
}

#[test]
fn geta_out_of_range_reads_zero() {
    let stack = eval_stack("2 array identity 9 geta");
    assert_eq!(stack[1], Value::int(0));
    let stack = eval_stack("2 array identity -1 geta");
    assert_eq!(stack[1], Value::int(0));
}

#[test]
fn puta_writes_elements() {
    assert_stack_eq(
        "3 array 1 42 puta",
        &[Value::array(vec![0, 42, 0])],
    );
}

#[test]
fn puta_out_of_range_is_noop() {
    assert_stack_eq("2 array 9 42 puta", &[Value::array(vec![0, 0])]);
}

#[test]
fn dict_bound_array_access() {
    assert_ints(
        "3 array identity 'frame def  'frame 1 dgeta",
        &[1],
    );
    assert_ints(
        "3 array 'frame def  'frame 1 77 dputa  'frame 1 dgeta",
        &[77],
    );
}

#[test]
fn dgeta_missing_binding_reads_zero() {
    assert_ints("'ghost 0 dgeta", &[0]);
    assert_ints("5 'n def  'n 0 dgeta", &[0]);
}

#[test]
fn map_transforms_in_place() {
    assert_stack_eq(
        "4 array identity [ 10 * ] map",
        &[Value::array(vec![0, 10, 20, 30])],
    );
}

#[test]
fn map_over_non_array_consumes_it() {
    assert_ints("7 [ 10 * ] map", &[]);
}

#[test]
fn index_is_reserved_noop() {
    let stack = eval_stack("3 array identity 2 array index");
    assert_eq!(stack, vec![Value::array(vec![0, 1, 2])]);
}
