use termgrid::text::{char_width, display_width, truncate_to_width};

#[test]
fn test_display_width() {
    assert_eq!(display_width("May"), 3);
    assert_eq!(display_width("▲"), 1);
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn test_truncate_to_width() {
    assert_eq!(truncate_to_width("Hudson", 10), "Hudson");
    assert_eq!(truncate_to_width("Hudson", 4), "Hud…");
    assert_eq!(truncate_to_width("Hudson", 0), "");
    assert_eq!(truncate_to_width("日本語", 4), "日…");
}
