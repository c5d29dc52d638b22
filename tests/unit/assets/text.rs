use super::*;

const END_LINE: &str = "あなたはどこに住みたいと思いましたか？";

#[test]
fn hard_breaks_count_as_lines() {
    let m = TextMeasurer::estimating();
    assert!(!m.is_shaped());
    assert_eq!(m.line_count("", 50.0, 900.0), 1);
    assert_eq!(m.line_count("one", 50.0, 900.0), 1);
    assert_eq!(m.line_count("one\ntwo", 50.0, 900.0), 2);
}

#[test]
fn long_lines_wrap_at_box_width() {
    let m = TextMeasurer::estimating();
    // 19 full-width glyphs at 65px are ~1235px wide.
    assert_eq!(m.line_count(END_LINE, 65.0, 960.0), 2);
    assert_eq!(m.line_count(END_LINE, 65.0, 1300.0), 1);
    assert_eq!(m.line_count(&format!("{END_LINE}\n感想はコメント欄へ！"), 65.0, 960.0), 3);
}

#[test]
fn narrower_boxes_never_need_fewer_lines() {
    let m = TextMeasurer::estimating();
    let text = "Where would you like to live? Tell us in the comments below!";
    let mut prev = 0;
    for width in [2000.0, 1200.0, 800.0, 400.0, 200.0] {
        let n = m.line_count(text, 48.0, width);
        assert!(n >= prev, "width {width}: {n} < {prev}");
        prev = n;
    }
    assert!(prev >= 3);
}

#[test]
fn results_are_cached() {
    let m = TextMeasurer::estimating();
    let a = m.line_count(END_LINE, 65.0, 960.0);
    let b = m.line_count(END_LINE, 65.0, 960.0);
    assert_eq!(a, b);
    assert_eq!(m.cache.lock().unwrap().len(), 1);
}

#[test]
fn garbage_font_bytes_fall_back_to_estimates() {
    let m = TextMeasurer::from_font_bytes(b"not a font".to_vec());
    assert!(!m.is_shaped());
    assert_eq!(m.line_count(END_LINE, 65.0, 960.0), 2);
}

#[test]
fn system_fonts_wrap_long_latin_text() {
    let m = TextMeasurer::for_font(&ResolvedFont::fallback());
    let text = "Where would you like to live if you had to spend a whole week there? \
                Tell us in the comments below!";
    // Any sans-serif face needs several lines for ~100 characters at 65px in 960px.
    assert!(m.line_count(text, 65.0, 960.0) >= 3);
    assert_eq!(m.line_count("Hi", 65.0, 960.0), 1);
}

#[test]
fn measurer_is_shareable_across_workers() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TextMeasurer>();
}
