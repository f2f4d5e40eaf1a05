use samplecalc::strings::{join_strings, reverse_string};

#[test]
fn join_table() {
    let cases: [(&str, &[&str], &str, &str); 4] = [
        ("simple words", &["hello", "world"], " ", "hello world"),
        ("hyphen separator", &["go", "actions"], "-", "go-actions"),
        ("empty words", &[], "-", ""),
        ("single word", &["test"], "-", "test"),
    ];
    for (name, words, separator, expected) in cases {
        assert_eq!(join_strings(words, separator), expected, "{name}");
    }
}

#[test]
fn join_keeps_empty_elements() {
    assert_eq!(join_strings(&["", "a", ""], ","), ",a,");
}

#[test]
fn join_multichar_separator() {
    assert_eq!(join_strings(&["Go", "Actions", "Example"], " :: "), "Go :: Actions :: Example");
}

#[test]
fn reverse_table() {
    let cases = [
        ("simple word", "hello", "olleh"),
        ("palindrome", "racecar", "racecar"),
        ("empty string", "", ""),
        ("single char", "a", "a"),
        ("numbers", "12345", "54321"),
    ];
    for (name, input, expected) in cases {
        assert_eq!(reverse_string(input), expected, "{name}");
    }
}

#[test]
fn reverse_does_not_split_code_points() {
    let reversed = reverse_string("añb€c😀");
    assert_eq!(reversed, "😀c€bña");
    assert_eq!(reversed.chars().count(), 6);
}

#[test]
fn reverse_single_multibyte_char_is_fixed_point() {
    assert_eq!(reverse_string("€"), "€");
}
