use super::*;
use proptest::prelude::*;

fn known_script() -> impl Strategy<Value = Script> {
    (0..Script::ALL.len()).prop_map(|i| Script::ALL[i].1)
}

// Property: every table entry survives tag -> characters -> tag
proptest! {
    #[test]
    fn prop_script_tag_round_trips(script in known_script()) {
        let text = script.tag().to_string();
        prop_assert_eq!(text.len(), 4);

        let reparsed: Tag = text.parse().unwrap();
        prop_assert_eq!(reparsed, script.tag());
        prop_assert_eq!(Script::from_iso15924(&text), script);
    }
}

// Property: packing and unpacking are inverses for any four bytes
proptest! {
    #[test]
    fn prop_tag_bytes_round_trip(bytes in any::<[u8; 4]>()) {
        let tag = Tag::new(bytes);
        prop_assert_eq!(tag.to_bytes(), bytes);
        prop_assert_eq!(Tag::from_raw(tag.to_raw()), tag);
    }
}

// Property: case never changes which script a code resolves to
proptest! {
    #[test]
    fn prop_iso15924_ignores_case(script in known_script(), upper in any::<bool>()) {
        let code = script.tag().to_string();
        let cased = if upper { code.to_ascii_uppercase() } else { code.to_ascii_lowercase() };
        prop_assert_eq!(Script::from_iso15924(&cased), script);
    }
}

// Property: names and scripts are mutually inverse
proptest! {
    #[test]
    fn prop_name_round_trips(script in known_script()) {
        let name = script.name().unwrap();
        prop_assert_eq!(Script::from_name(name), Some(script));
    }
}

// Property: raw direction values never map outside the five known variants
proptest! {
    #[test]
    fn prop_direction_from_raw_is_total(raw in any::<i32>()) {
        let dir = Direction::from_raw(raw);
        if dir != Direction::Invalid {
            prop_assert_eq!(dir.to_raw(), raw);
            prop_assert_eq!(dir.reverse().reverse(), dir);
        }
    }
}
