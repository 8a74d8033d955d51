//! # Optimistic chat thread
//!
//! The one message-list abstraction behind every chat panel in the portal.
//! A thread is an ordered sequence of messages, each tagged with a
//! [`Delivery`] state:
//!
//! - `Confirmed` — came from the server, keyed by its database id.
//! - `Pending` — a local placeholder appended synchronously when the user
//!   hits send, before the network promise resolves.
//! - `Failed` — a placeholder whose send was rejected. Its text is mutated
//!   to say so; it is never removed, and nothing retries automatically.
//!
//! Placeholder keys come from a per-thread monotonic counter. The client this
//! replaces keyed placeholders by wall-clock timestamp, which can collide when
//! two sends land in the same millisecond; a counter cannot.
//!
//! Reconciliation is deliberately blunt: after a successful send the caller
//! refetches the conversation and [`ChatThread::replace_with`] swaps the whole
//! list (dropping resolved placeholders, keeping failed ones). Server order is
//! normalized by a stable timestamp sort.

use api::models::Message;
use store::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Confirmed,
    Pending,
    Failed,
}

/// Identity of a message within a thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageKey {
    /// Backend database id.
    Server(String),
    /// Client-side placeholder id.
    Local(u64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub key: MessageKey,
    pub text: String,
    pub timestamp: Option<String>,
    /// Sent by the viewing user (bubble alignment).
    pub mine: bool,
    pub is_read: bool,
    pub delivery: Delivery,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatThread {
    messages: Vec<ChatMessage>,
    next_local_id: u64,
}

impl ChatThread {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append exactly one pending placeholder for an outgoing message and
    /// return its local key.
    pub fn begin_send(&mut self, text: &str) -> u64 {
        let id = self.next_local_id;
        self.next_local_id += 1;
        self.messages.push(ChatMessage {
            key: MessageKey::Local(id),
            text: text.to_string(),
            timestamp: None,
            mine: true,
            is_read: false,
            delivery: Delivery::Pending,
        });
        id
    }

    /// Mark a placeholder as failed: its text is mutated to indicate the
    /// failure and it stays in the list. The user resends by typing again.
    pub fn fail_send(&mut self, local_id: u64) {
        if let Some(msg) = self
            .messages
            .iter_mut()
            .find(|m| m.key == MessageKey::Local(local_id))
        {
            msg.delivery = Delivery::Failed;
            msg.text = format!("{} (failed)", msg.text);
        }
    }

    /// Replace the thread with a fresh server list. Failed placeholders are
    /// kept at the tail; pending ones are resolved by the refetch and drop.
    pub fn replace_with(&mut self, server: Vec<Message>, own_role: Role) {
        let failed: Vec<ChatMessage> = self
            .messages
            .drain(..)
            .filter(|m| m.delivery == Delivery::Failed)
            .collect();

        let mut confirmed: Vec<ChatMessage> = server
            .into_iter()
            .map(|m| ChatMessage {
                mine: m.sent_by(own_role.prefix()),
                key: MessageKey::Server(m.id),
                text: m.text,
                timestamp: m.timestamp,
                is_read: m.is_read,
                delivery: Delivery::Confirmed,
            })
            .collect();

        // ISO-8601 timestamps sort lexicographically; untimestamped rows sink
        // to the end in their server order.
        confirmed.sort_by(|a, b| match (&a.timestamp, &b.timestamp) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        self.messages = confirmed;
        self.messages.extend(failed);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_msg(id: &str, sender: &str, text: &str, timestamp: &str) -> Message {
        serde_json::from_str(&format!(
            r#"{{ "_id": "{id}", "sender": "{sender}", "text": "{text}", "timestamp": "{timestamp}" }}"#
        ))
        .unwrap()
    }

    #[test]
    fn begin_send_appends_exactly_one_pending_placeholder() {
        let mut thread = ChatThread::new();
        thread.begin_send("hello");

        assert_eq!(thread.messages().len(), 1);
        let placeholder = &thread.messages()[0];
        assert_eq!(placeholder.delivery, Delivery::Pending);
        assert!(placeholder.mine);
        assert_eq!(placeholder.text, "hello");
    }

    #[test]
    fn rapid_sends_get_distinct_keys() {
        let mut thread = ChatThread::new();
        let a = thread.begin_send("first");
        let b = thread.begin_send("second");
        let c = thread.begin_send("third");
        assert!(a != b && b != c && a != c);
        assert_eq!(thread.messages().len(), 3);
    }

    #[test]
    fn failed_send_is_mutated_not_removed() {
        let mut thread = ChatThread::new();
        let id = thread.begin_send("are you there?");

        thread.fail_send(id);

        assert_eq!(thread.messages().len(), 1);
        let msg = &thread.messages()[0];
        assert_eq!(msg.delivery, Delivery::Failed);
        assert_eq!(msg.text, "are you there? (failed)");
    }

    #[test]
    fn replace_with_sorts_by_timestamp_and_tags_ownership() {
        let mut thread = ChatThread::new();
        thread.replace_with(
            vec![
                server_msg("m2", "Admin", "second", "2026-02-11T09:00:00Z"),
                server_msg("m1", "Student Ada", "first", "2026-02-11T08:00:00Z"),
            ],
            Role::Student,
        );

        let texts: Vec<&str> = thread.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
        assert!(thread.messages()[0].mine);
        assert!(!thread.messages()[1].mine);
    }

    #[test]
    fn replace_with_drops_pending_but_keeps_failed() {
        let mut thread = ChatThread::new();
        let resolved = thread.begin_send("made it");
        let doomed = thread.begin_send("lost");
        thread.fail_send(doomed);
        let _ = resolved; // resolved by the refetch below

        thread.replace_with(
            vec![server_msg(
                "m1",
                "Student Ada",
                "made it",
                "2026-02-11T08:00:00Z",
            )],
            Role::Student,
        );

        assert_eq!(thread.messages().len(), 2);
        assert_eq!(thread.messages()[0].key, MessageKey::Server("m1".into()));
        assert_eq!(thread.messages()[1].delivery, Delivery::Failed);
        assert_eq!(thread.messages()[1].text, "lost (failed)");
    }
}
