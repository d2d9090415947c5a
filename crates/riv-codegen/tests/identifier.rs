//! Properties of identifier synthesis.

use proptest::prelude::*;
use riv_codegen::to_identifier;

#[test]
fn documented_examples() {
    assert_eq!(to_identifier("Tip Button"), "Tip_Button");
    assert_eq!(to_identifier("123"), "_123");
    assert_eq!(to_identifier(""), "Unnamed");
    assert_eq!(to_identifier("A__B"), "A_B");
}

#[test]
fn distinct_names_can_collide() {
    assert_eq!(to_identifier("A B"), to_identifier("A_B"));
    assert_eq!(to_identifier("A-B"), to_identifier("A  B"));
}

proptest! {
    #[test]
    fn output_is_a_valid_identifier(name in any::<String>()) {
        let identifier = to_identifier(&name);
        prop_assert!(!identifier.is_empty());
        prop_assert!(identifier.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_'));
        prop_assert!(!identifier.starts_with(|ch: char| ch.is_ascii_digit()));
        prop_assert!(!identifier.ends_with('_'));
        prop_assert!(!identifier.contains("__"));
    }

    #[test]
    fn sanitizing_twice_changes_nothing(name in any::<String>()) {
        let once = to_identifier(&name);
        prop_assert_eq!(to_identifier(&once), once);
    }

    #[test]
    fn clean_names_pass_through(name in "[A-Za-z][A-Za-z0-9]{0,12}(_[A-Za-z0-9]{1,6}){0,3}") {
        prop_assert_eq!(to_identifier(&name), name);
    }
}
