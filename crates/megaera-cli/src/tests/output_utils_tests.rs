use crate::output_utils::plural;

#[test]
fn plural_wording() {
    assert_eq!(plural(0, "operation", "operations"), "0 operations");
    assert_eq!(plural(1, "operation", "operations"), "1 operation");
    assert_eq!(plural(2, "fragment", "fragments"), "2 fragments");
}
