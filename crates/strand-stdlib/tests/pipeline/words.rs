//! Definition word tests.

use super::{assert_ints, eval_stack};
use strand::Value;

#[test]
fn colon_definition_and_call() {
    assert_ints(": sq2 dup * ;\n5 sq2", &[25]);
}

#[test]
fn attached_colon_name_also_works() {
    assert_ints(":sq2 dup * ;\n5 sq2", &[25]);
}

#[test]
fn bracket_definition_and_call() {
    assert_ints("[ dup * swap dup * + sqrt ] 'pyth def\n3 4 pyth", &[5]);
}

#[test]
fn definitions_span_multiple_lines() {
    assert_ints(": double\n2 *\n;\n21 double", &[42]);
}

#[test]
fn def_rebinds() {
    assert_ints("1 'x def  2 'x def  @x", &[2]);
}

#[test]
fn redef_shadows_then_forget_restores() {
    assert_ints("1 'x def  2 'x redef  @x  'x forget  @x", &[2, 1]);
}

#[test]
fn forget_removes_binding() {
    assert_ints("1 'x def  'x forget  'x def?", &[0]);
}

#[test]
fn defp_reports_definitions() {
    assert_ints("'dup def?  'nope def?", &[1, 0]);
}

#[test]
fn vget_pushes_copy() {
    assert_ints("9 'n def  'n vget", &[9]);
    assert_ints("'missing vget", &[0]);
}

#[test]
fn get_sigil_reads_variables() {
    assert_ints("5 'n def  @n @n +", &[10]);
}

#[test]
fn put_sigil_defines_variables() {
    assert_ints("12 !n  @n", &[12]);
}

#[test]
fn variables_update_through_words() {
    assert_ints(": bump @count 1 + !count ;\n0 !count bump bump bump @count", &[3]);
}

#[test]
fn words_calling_words() {
    assert_ints(": double 2 * ;\n: quad double double ;\n3 quad", &[12]);
}

#[test]
fn sequence_binding_survives_transient_cleanup() {
    // The defined body is a deep copy; re-running it on later lines
    // works after the parse-time sequence tree is gone.
    assert_ints("[ 1 + ] 'inc def\n0 inc inc inc", &[3]);
}

#[test]
fn symbols_resolve_through_dictionary() {
    // A word bound to a non-callable pushes a symbol that coerces to
    // its bound value.
    let stack = eval_stack("5 'n def  n 1 +");
    assert_eq!(stack, vec![Value::int(6)]);
}

#[test]
fn defined_array_is_copied_on_vget() {
    // Mutating the copy leaves the binding untouched.
    assert_ints(
        "2 array 'frame def  @frame 0 9 puta drop  'frame 0 dgeta",
        &[0],
    );
}
