use serde::{Deserialize, Serialize};

/// Notification identifiers arrive as Mongo object-id strings from newer
/// endpoints and as plain numbers from older ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotificationId {
    Text(String),
    Number(i64),
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationId::Text(s) => f.write_str(s),
            NotificationId::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One inbox entry from `GET {role}/notifications`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub read: bool,
}

/// `{ "notifications": [...] }` envelope. The one place an absent list
/// defaults to empty, instead of `|| []` at every call site.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationList {
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl NotificationList {
    pub fn unread(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_decode_as_string_or_number() {
        let n: Notification =
            serde_json::from_str(r#"{ "id": "66f1ab", "message": "Fees due" }"#).unwrap();
        assert_eq!(n.id, NotificationId::Text("66f1ab".into()));

        let n: Notification = serde_json::from_str(r#"{ "id": 42, "read": true }"#).unwrap();
        assert_eq!(n.id, NotificationId::Number(42));
        assert_eq!(n.id.to_string(), "42");
    }

    #[test]
    fn unread_counts_only_unread() {
        let list: NotificationList = serde_json::from_str(
            r#"{ "notifications": [
                { "id": 1, "read": true },
                { "id": 2 },
                { "id": 3, "read": false }
            ] }"#,
        )
        .unwrap();
        assert_eq!(list.unread(), 2);
    }

    #[test]
    fn empty_body_is_empty_inbox() {
        let list: NotificationList = serde_json::from_str("{}").unwrap();
        assert!(list.notifications.is_empty());
    }
}
