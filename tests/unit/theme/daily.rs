use super::*;

#[test]
fn every_day_has_a_complete_palette() {
    for day in Weekday::ALL {
        let theme = resolve(day);
        assert!(!theme.name.is_empty());
        for c in [
            theme.primary_color,
            theme.accent_color,
            theme.background_color,
            theme.text_color,
        ] {
            assert_eq!(c.a, 0xFF);
            assert!(!c.to_hex().is_empty());
        }
    }
}

#[test]
fn lookup_is_deterministic() {
    for day in Weekday::ALL {
        assert!(std::ptr::eq(resolve(day), resolve(day)));
        assert_eq!(resolve(day), Theme::for_day_index(day.index() as i64));
    }
}

#[test]
fn table_order_matches_calendar_indices() {
    assert_eq!(Theme::for_day_index(0).name, "Simple");
    assert_eq!(Theme::for_day_index(1).name, "Pop");
    assert_eq!(Theme::for_day_index(5).name, "Elegant");
    assert_eq!(Theme::for_day_index(6).name, "Colorful");
    assert_eq!(
        Theme::for_day_index(1).primary_color,
        Color::rgb(0xFF, 0x6B, 0x9D)
    );
}

#[test]
fn day_index_normalizes_modulo_seven() {
    assert_eq!(Weekday::from_index(7), Weekday::Sunday);
    assert_eq!(Weekday::from_index(-1), Weekday::Saturday);
    assert_eq!(Weekday::from_index(15), Weekday::Monday);
}

#[test]
fn civil_weekday_converts_sunday_zero() {
    assert_eq!(
        Weekday::from_civil(jiff::civil::Weekday::Sunday),
        Weekday::Sunday
    );
    assert_eq!(
        Weekday::from_civil(jiff::civil::Weekday::Wednesday),
        Weekday::Wednesday
    );
}

#[test]
fn by_key_accepts_day_keys_and_names() {
    assert_eq!(Theme::by_key("friday").unwrap().name, "Elegant");
    assert_eq!(Theme::by_key("FRIDAY").unwrap().name, "Elegant");
    assert_eq!(Theme::by_key("retro").unwrap().name, "Retro");
    assert!(Theme::by_key("neon").is_none());
}

#[test]
fn theme_choice_resolves_or_rejects() {
    assert_eq!(
        ThemeChoice::Day(Weekday::Thursday).resolve().unwrap().name,
        "Natural"
    );
    assert_eq!(
        ThemeChoice::Named("Cool".to_owned()).resolve().unwrap().name,
        "Cool"
    );
    assert!(ThemeChoice::Named("neon".to_owned()).resolve().is_err());
    assert!(ThemeChoice::Today.resolve().is_ok());
}

#[test]
fn serializes_with_wire_field_names() {
    let v = serde_json::to_value(resolve(Weekday::Monday)).unwrap();
    assert_eq!(v["name"], "Pop");
    assert_eq!(v["primaryColor"], "#ff6b9d");
    assert_eq!(v["textColor"], "#2c3e50");
}
