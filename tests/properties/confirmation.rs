//! Property tests for the confirmation prompt.

use std::io::Cursor;

use proptest::prelude::*;

use pxf_cluster::domain::services::parse_answer;
use pxf_cluster::{Confirmation, ConfirmationGate};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing an answer never panics on arbitrary input.
    #[test]
    fn property_parse_answer_never_panics(s in "(?s).{0,256}") {
        let _ = parse_answer(&s);
    }

    /// PROPERTY: Only a case-folded `y` proceeds, whatever line ending follows it.
    #[test]
    fn property_only_y_proceeds(
        answer in "[A-Za-z ]{0,4}",
        ending in prop_oneof![Just(""), Just("\n"), Just("\r\n")],
    ) {
        let line = format!("{answer}{ending}");
        let expected = if answer.eq_ignore_ascii_case("y") {
            Confirmation::Proceed
        } else {
            Confirmation::Cancel
        };
        prop_assert_eq!(parse_answer(&line), expected);
    }

    /// PROPERTY: A gate answers every later question with its first answer.
    #[test]
    fn property_gate_resolves_once(
        first in prop_oneof![Just("y\n"), Just("n\n"), Just("\n")],
        rest in "[yn\n]{0,16}",
        asks in 1usize..5,
    ) {
        let input = format!("{first}{rest}");
        let mut gate = ConfirmationGate::new(Cursor::new(input.into_bytes()), Vec::new());

        let answer = gate.confirm("continue? ");
        for _ in 1..asks {
            prop_assert_eq!(gate.confirm("again? "), answer);
        }
        prop_assert_eq!(answer, parse_answer(first));
    }
}
