//! Property-based tests for the tokenizer and text rendering
//!
//! Strings are generated, written back out in source syntax (escapes re-applied), and fed
//! through the tokenizer and the compiler.

use peml::compile;
use peml::ir::escape_text;
use peml::lexing::{tokenize_line, Atom, AtomKind, Statement};
use proptest::prelude::*;

/// Text without double quotes (the language has no escape for them)
fn string_value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 &<>\\\\\n\t\r.,!?{}-]{0,24}"
}

fn keyword_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,8}"
}

proptest! {
    #[test]
    fn string_atoms_round_trip_through_display(value in string_value_strategy()) {
        let source = Atom::string(value.clone()).to_string();
        let statement = tokenize_line(&source).unwrap();
        prop_assert_eq!(statement.atoms(), &[Atom::string(value)][..]);
    }

    #[test]
    fn keywords_are_uppercased(words in prop::collection::vec(keyword_strategy(), 1..6)) {
        let statement = tokenize_line(&words.join(" ")).unwrap();
        prop_assert_eq!(statement.len(), words.len());
        for (atom, word) in statement.atoms().iter().zip(&words) {
            prop_assert_eq!(atom.kind(), AtomKind::Keyword);
            prop_assert_eq!(atom.value(), word.to_uppercase());
        }
    }

    #[test]
    fn statements_round_trip_through_display(
        words in prop::collection::vec(keyword_strategy(), 0..4),
        value in string_value_strategy(),
    ) {
        let mut atoms: Vec<Atom> = words.iter().map(|w| Atom::keyword(w)).collect();
        atoms.push(Atom::string(value));
        let statement = Statement::new(atoms);
        prop_assert_eq!(tokenize_line(&statement.to_string()).unwrap(), statement);
    }

    #[test]
    fn text_escapes_each_special_character_once(value in string_value_strategy()) {
        let escaped = escape_text(&value);
        prop_assert_eq!(escaped.matches("&amp;").count(), value.matches('&').count());
        prop_assert_eq!(escaped.matches("&lt;").count(), value.matches('<').count());
        prop_assert_eq!(escaped.matches("&gt;").count(), value.matches('>').count());
        prop_assert!(!escaped.contains('<') || escaped.contains("<br/>"));
    }

    #[test]
    fn add_text_compiles_to_escaped_text(value in string_value_strategy()) {
        let source = format!("ADD TEXT {}", Atom::string(value.clone()));
        let html = compile(&source).unwrap();
        prop_assert_eq!(
            html,
            format!("<html><body><span>{}</span></body></html>", escape_text(&value))
        );
    }
}
