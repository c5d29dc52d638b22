use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        QuizreelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        QuizreelError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        QuizreelError::timeline("x")
            .to_string()
            .contains("timeline error:")
    );
    assert!(
        QuizreelError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        QuizreelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = QuizreelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let e = serde_json::from_str::<u32>("nope").unwrap_err();
    assert!(matches!(QuizreelError::from(e), QuizreelError::Serde(_)));
}
