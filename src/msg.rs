//! Message log fed by combat resolution, consumed by the display layer.

use serde::{Deserialize, Serialize};

/// Who caused a log entry. The display layer picks text colors by tone.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum MsgTone {
    #[default]
    Neutral,
    PlayerAttack,
    EnemyAttack,
    PlayerDeath,
    EnemyDeath,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub tone: MsgTone,
    /// How many times in a row this message has repeated.
    pub count: u32,
}

/// Ordered log of game event messages.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct MessageLog {
    entries: Vec<Message>,
}

impl MessageLog {
    /// Append a message, stacking repeats into a count on the last entry.
    pub fn push(&mut self, tone: MsgTone, text: impl Into<String>) {
        let text = text.into();
        if let Some(last) = self.entries.last_mut() {
            if last.text == text && last.tone == tone {
                last.count += 1;
                return;
            }
        }
        self.entries.push(Message {
            text,
            tone,
            count: 1,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Message> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Uppercase the first letter for message display.
pub(crate) fn sentence(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeats_stack() {
        let mut log = MessageLog::default();
        log.push(MsgTone::Neutral, "The orc waits.");
        log.push(MsgTone::Neutral, "The orc waits.");
        log.push(MsgTone::PlayerAttack, "The orc waits.");
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().next().unwrap().count, 2);
    }

    #[test]
    fn sentence_case() {
        assert_eq!(sentence("you hit the orc."), "You hit the orc.");
        assert_eq!(sentence(""), "");
    }
}
