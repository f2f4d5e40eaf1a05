/// Concatenate `words` in order with `separator` between neighbours.
pub fn join_strings<S: AsRef<str>>(words: &[S], separator: &str) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(word.as_ref());
    }
    out
}

/// Reverse by Unicode scalar value, so multi-byte characters stay intact.
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}
