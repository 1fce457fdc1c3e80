//! Length-bounded transcript compression

use crate::{Message, Role, SessionAnalyzer};

/// Default message budget for [`SessionAnalyzer::compress`]
pub const DEFAULT_MAX_MESSAGES: usize = 50;

const KEEP_FIRST: usize = 10;
const KEEP_LAST: usize = 10;

impl SessionAnalyzer {
    /// Shrink a transcript to at most `max_messages` non-system messages.
    ///
    /// System messages are always kept and are moved to the front. The first
    /// and last ten non-system messages survive, and the middle is sampled
    /// at an even stride. Budgets under twenty shrink the head and tail so
    /// they never overlap.
    pub fn compress(&self, messages: &[Message], max_messages: usize) -> Vec<Message> {
        let (system, others): (Vec<&Message>, Vec<&Message>) =
            messages.iter().partition(|m| m.role == Role::System);

        if others.len() <= max_messages {
            return messages.to_vec();
        }

        let keep_first = KEEP_FIRST.min(max_messages / 2);
        let keep_last = KEEP_LAST.min(max_messages - keep_first);
        let middle_sample = max_messages - keep_first - keep_last;

        let first_part = &others[..keep_first];
        let last_part = &others[others.len() - keep_last..];
        let middle_part = sample_middle(
            &others[keep_first..others.len() - keep_last],
            middle_sample,
        );

        tracing::debug!(
            input = messages.len(),
            system = system.len(),
            sampled = middle_part.len(),
            "compressed session"
        );

        system
            .into_iter()
            .chain(first_part.iter().copied())
            .chain(middle_part)
            .chain(last_part.iter().copied())
            .cloned()
            .collect()
    }
}

/// Walk `messages` at an even stride, taking up to `sample_size` picks
fn sample_middle<'a>(messages: &[&'a Message], sample_size: usize) -> Vec<&'a Message> {
    if sample_size == 0 || messages.is_empty() {
        return Vec::new();
    }

    let step = (messages.len() / sample_size).max(1);
    messages
        .iter()
        .step_by(step)
        .take(sample_size)
        .copied()
        .collect()
}
