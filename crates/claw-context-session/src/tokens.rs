//! Token estimation for transcript size reporting

use claw_context_core::Message;

/// Estimate BPE token count from text
///
/// CJK characters cost roughly one token each; everything else is counted
/// at about four characters per token.
pub fn estimate_tokens(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }

    let (cjk, other) = text.chars().fold((0usize, 0usize), |(cjk, other), c| {
        if is_cjk(c) {
            (cjk + 1, other)
        } else {
            (cjk, other + 1)
        }
    });

    (cjk + other.div_ceil(4)).max(1)
}

/// Summed estimate over every message body
pub fn estimate_session_tokens(messages: &[Message]) -> usize {
    messages.iter().map(|m| estimate_tokens(&m.content)).sum()
}

fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30FF}'   // kana
        | '\u{3400}'..='\u{4DBF}' // ext A
        | '\u{4E00}'..='\u{9FFF}' // unified ideographs
        | '\u{AC00}'..='\u{D7AF}' // hangul
        | '\u{FF00}'..='\u{FFEF}' // full-width forms
        | '\u{3000}'..='\u{303F}')
}
