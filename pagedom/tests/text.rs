use pagedom::text::{char_width, display_width, line_count, wrap_chars, wrap_words};

#[test]
fn test_display_width_ascii() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width(""), 0);
    assert_eq!(display_width("a b c"), 5);
}

#[test]
fn test_display_width_cjk() {
    // CJK characters take two columns
    assert_eq!(display_width("日本語"), 6);
    assert_eq!(display_width("a日b"), 4);
}

#[test]
fn test_char_width() {
    assert_eq!(char_width('a'), 1);
    assert_eq!(char_width('日'), 2);
}

#[test]
fn test_wrap_words_basic() {
    assert_eq!(wrap_words("hello world", 20), vec!["hello world"]);
    assert_eq!(wrap_words("hello world", 5), vec!["hello", "world"]);
    assert_eq!(wrap_words("aaaa bbbb cccc", 10), vec!["aaaa bbbb", "cccc"]);
}

#[test]
fn test_wrap_words_breaks_long_words() {
    assert_eq!(wrap_words("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
}

#[test]
fn test_wrap_words_keeps_explicit_newlines() {
    assert_eq!(wrap_words("one\n\ntwo", 10), vec!["one", "", "two"]);
}

#[test]
fn test_wrap_words_zero_width() {
    assert!(wrap_words("hello", 0).is_empty());
}

#[test]
fn test_wrap_chars() {
    assert_eq!(wrap_chars("abcdef", 4), vec!["abcd", "ef"]);
    assert_eq!(wrap_chars("日本語", 4), vec!["日本", "語"]);
}

#[test]
fn test_line_count() {
    assert_eq!(line_count("", 10), 0);
    assert_eq!(line_count("short", 10), 1);
    assert_eq!(line_count("aaaa bbbb cccc", 5), 3);
    // A zero column budget still lays text out one column at a time
    assert_eq!(line_count("abc", 0), 3);
}
