//! Word-casing helpers used for human-readable enum labels.

/// Upper-cases the first character of every space-separated word.
///
/// Empty words are dropped and the result is joined with single spaces.
pub fn pascal_case(input: &str) -> String {
    join_words(input, |rest| rest.to_string())
}

/// Like [`pascal_case`], but lower-cases the remainder of every word.
pub fn capitalize(input: &str) -> String {
    join_words(input, str::to_lowercase)
}

fn join_words(input: &str, rest_case: impl Fn(&str) -> String) -> String {
    input
        .split(' ')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + &rest_case(chars.as_str()),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
