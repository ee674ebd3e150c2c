//! Extractor and renderer invariants over arbitrary stylesheet text.

use cssmod_types::{extract_class_names, render_definition, ClassNameSet};
use proptest::prelude::*;

fn class_name() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_-]{0,12}"
}

proptest! {
    #[test]
    fn never_panics(text in ".{0,400}") {
        let _ = extract_class_names(&text);
    }

    #[test]
    fn names_are_unique(text in "[.a-z0-9 {}:;-]{0,200}") {
        let classes = extract_class_names(&text);
        let mut seen = std::collections::HashSet::new();
        for name in classes.iter() {
            prop_assert!(seen.insert(name.clone()), "duplicate {}", name);
        }
    }

    #[test]
    fn names_never_start_with_digit(text in "[.0-9a-z ;-]{0,200}") {
        for name in extract_class_names(&text).iter() {
            let first = name.chars().next().unwrap();
            prop_assert!(!first.is_ascii_digit(), "{} starts with a digit", name);
        }
    }

    #[test]
    fn declared_selectors_are_found(names in prop::collection::vec(class_name(), 1..8)) {
        let text: String = names
            .iter()
            .map(|n| format!(".{} {{ color: red; }}\n", n))
            .collect();
        let classes = extract_class_names(&text);
        for name in &names {
            prop_assert!(classes.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn render_has_one_line_per_class(names in prop::collection::vec(class_name(), 0..10)) {
        let classes: ClassNameSet = names.iter().cloned().collect();
        let rendered = render_definition(&classes);
        prop_assert_eq!(rendered.lines().count(), classes.len() + 2);
        prop_assert!(rendered.starts_with("{\n"), "rendered does not start with an opening brace");
        prop_assert!(rendered.ends_with('}'), "rendered does not end with a closing brace");
    }
}
