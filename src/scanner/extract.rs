//! Style-class candidate extraction
//!
//! Splits template content on characters that cannot appear in a utility
//! class name and collects the surviving tokens. Deliberately dumb: no HTML
//! parsing, no knowledge of which tokens the downstream style tool actually
//! defines. Over-reporting candidates is fine; missing one is not.

use std::collections::BTreeSet;

/// Extract the set of style-class candidates used in a template
pub fn class_candidates(content: &str) -> BTreeSet<String> {
    content
        .split(is_separator)
        .filter(|token| !token.is_empty() && token.chars().all(is_candidate_char))
        .map(str::to_string)
        .collect()
}

/// Characters that terminate a candidate token
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '"' | '\'' | '`' | '<' | '>' | '=' | '{' | '}' | ';' | ',')
}

/// Characters allowed inside a candidate token. Covers variant prefixes
/// (`md:`, `hover:`), fractions (`w-1/2`), arbitrary values (`p-[3px]`,
/// `bg-[#1d4ed8]`, `w-[50%]`) and important markers (`!mt-0`).
fn is_candidate_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '-' | '_' | ':' | '/' | '.' | '[' | ']' | '(' | ')' | '#' | '%' | '!'
        )
}
