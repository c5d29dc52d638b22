use super::*;
use serde_json::json;

#[test]
fn parses_enveloped_quiz_props() {
    let v = json!({
        "data": {
            "question": "一週間過ごすなら？",
            "questionEn": "Where would you spend a week?",
            "choices": [
                { "number": 1, "text": "溶岩の中", "textEn": "In the lava", "videoPath": "videos/lava.mp4" }
            ],
            "endMessage": "またね",
            "endMessageEn": "See you"
        }
    });
    let comp = Composition::from_value(CompositionId::QuizWithVideos, v).unwrap();
    let Composition::QuizWithVideos(data) = &comp else {
        panic!("wrong composition");
    };
    assert_eq!(data.choices[0].text_en, "In the lava");
    assert_eq!(data.choices[0].video_path, "videos/lava.mp4");
    assert_eq!(comp.spec().unwrap().duration_frames, 240 + 90);
}

#[test]
fn parses_bare_question_props_with_overrides() {
    let v = json!({
        "question": "Cats or dogs?",
        "options": ["Cats", "Dogs"],
        "theme": "friday"
    });
    let comp = Composition::from_value(CompositionId::QuestionTemplate1, v).unwrap();
    let Composition::QuestionTemplate1(data) = &comp else {
        panic!("wrong composition");
    };
    assert_eq!(data.options.len(), 2);
    assert_eq!(data.theme.as_deref(), Some("friday"));
    assert_eq!(data.id, "");
    assert_eq!(comp.spec().unwrap().duration_frames, 150);
}

#[test]
fn rejects_empty_question_and_bad_json() {
    let v = json!({ "question": "  ", "options": [] });
    assert!(matches!(
        Composition::from_value(CompositionId::QuestionTemplate1, v),
        Err(QuizreelError::Validation(_))
    ));
    let v = json!({ "options": ["a"] });
    assert!(matches!(
        Composition::from_value(CompositionId::QuestionTemplate1, v),
        Err(QuizreelError::Serde(_))
    ));
}

#[test]
fn sample_quiz_spans_1050_frames() {
    let comp = Composition::sample(CompositionId::QuizWithVideos);
    assert_eq!(comp.id(), CompositionId::QuizWithVideos);
    assert_eq!(comp.spec().unwrap().duration_frames, 1050);
    assert!(comp.diagnostics().is_empty());
}

#[test]
fn diagnostics_flag_out_of_contract_input() {
    let mut quiz = QuizData::sample();
    quiz.choices[1].number = 12;
    quiz.choices[2].number = 1;
    let notes = Composition::QuizWithVideos(quiz).diagnostics();
    assert!(notes.iter().any(|n| n.contains("ordinal 12")));
    assert!(notes.iter().any(|n| n.contains("more than once")));

    let question = QuestionData {
        options: (0..27).map(|i| format!("opt{i}")).collect(),
        ..QuestionData::sample()
    };
    let notes = Composition::QuestionTemplate1(question).diagnostics();
    assert_eq!(notes.len(), 1);
    assert!(notes[0].contains("option 26"));
}

#[test]
fn serializes_with_wire_names() {
    let v = serde_json::to_value(PropsEnvelope {
        data: QuizData::sample(),
    })
    .unwrap();
    assert_eq!(v["data"]["questionEn"], "Where would you spend a week?");
    assert_eq!(v["data"]["choices"][3]["videoPath"], "videos/underwater.mp4");
}

#[test]
fn from_path_reports_missing_file() {
    let err = Composition::from_path(
        CompositionId::QuizWithVideos,
        Path::new("target/definitely/missing.json"),
    )
    .unwrap_err();
    assert!(err.to_string().contains("open props"));
}
