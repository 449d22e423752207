//! Chat message types as exchanged with the chat server.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{INVALID_TIMESTAMP_LABEL, NO_TIMESTAMP_LABEL};

/// A message as returned by `GET /api/messages`.
///
/// The client never interprets a message beyond rendering it and comparing
/// `username` with the local user; any other field the server sends is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub username: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

/// Server supplied time of a message.
///
/// Servers send either epoch milliseconds or a date string, so both are
/// accepted. Any other JSON value is kept as is and renders as an invalid
/// date, so one odd message cannot make the whole list unreadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(f64),
    Text(String),
    Other(Value),
}

/// Body of `POST /api/messages`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingMessage {
    pub username: String,
    pub message: String,
}

/// Whether a message was written under the local username.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Mine,
    Other,
}

impl MessageStyle {
    pub fn class(self) -> &'static str {
        match self {
            MessageStyle::Mine => "my-message",
            MessageStyle::Other => "other-message",
        }
    }
}

impl Message {
    /// Display-only ownership check. Usernames are free text, so this says
    /// nothing about who actually sent the message.
    pub fn style_for(&self, local_username: &str) -> MessageStyle {
        if self.username == local_username {
            MessageStyle::Mine
        } else {
            MessageStyle::Other
        }
    }

    /// Local time of day of the message, or "Now" when it has no timestamp.
    pub fn time_label(&self) -> String {
        let Some(ts) = self.timestamp.as_ref().filter(|ts| ts.is_set()) else {
            return NO_TIMESTAMP_LABEL.to_string();
        };
        match ts.to_local() {
            Some(dt) => format_time_of_day(&dt),
            None => INVALID_TIMESTAMP_LABEL.to_string(),
        }
    }
}

impl Timestamp {
    /// Zero and the empty string count as "no timestamp".
    pub fn is_set(&self) -> bool {
        match self {
            Timestamp::Millis(ms) => *ms != 0.0,
            Timestamp::Text(s) => !s.is_empty(),
            Timestamp::Other(v) => !matches!(v, Value::Null | Value::Bool(false)),
        }
    }

    pub fn to_local(&self) -> Option<DateTime<Local>> {
        match self {
            Timestamp::Millis(ms) => DateTime::from_timestamp_millis(ms.trunc() as i64)
                .map(|dt| dt.with_timezone(&Local)),
            Timestamp::Text(s) => parse_date_text(s),
            Timestamp::Other(_) => None,
        }
    }
}

/// Accepts RFC 3339 and offset-less ISO 8601 date-times. The latter are
/// taken as local time.
fn parse_date_text(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()?;
    Local.from_local_datetime(&naive).earliest()
}

pub fn format_time_of_day(dt: &DateTime<Local>) -> String {
    dt.format("%-I:%M:%S %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(username: &str, timestamp: Option<Timestamp>) -> Message {
        Message {
            username: username.into(),
            message: "hi".into(),
            timestamp,
        }
    }

    #[test]
    fn own_message_is_styled_mine() {
        let body = r#"[{"username":"alice","message":"hi","timestamp":1700000000000}]"#;
        let list: Vec<Message> = serde_json::from_str(body).unwrap();
        assert_eq!(list.len(), 1);

        let m = &list[0];
        assert_eq!(m.style_for("alice"), MessageStyle::Mine);
        assert_eq!(m.style_for("alice").class(), "my-message");

        let expected = Local
            .timestamp_millis_opt(1_700_000_000_000)
            .single()
            .map(|dt| dt.format("%-I:%M:%S %p").to_string())
            .unwrap();
        assert_eq!(m.time_label(), expected);
        assert_ne!(m.time_label(), "Now");
    }

    #[test]
    fn style_is_plain_string_equality() {
        let m = msg("alice", None);
        assert_eq!(m.style_for("bob"), MessageStyle::Other);
        assert_eq!(m.style_for("Alice"), MessageStyle::Other);
        assert_eq!(m.style_for("alice "), MessageStyle::Other);
        assert_eq!(MessageStyle::Other.class(), "other-message");
    }

    #[test]
    fn missing_timestamp_renders_now() {
        let list: Vec<Message> = serde_json::from_str(
            r#"[
                {"username":"a","message":"x"},
                {"username":"a","message":"x","timestamp":null},
                {"username":"a","message":"x","timestamp":0},
                {"username":"a","message":"x","timestamp":""}
            ]"#,
        )
        .unwrap();
        for m in list {
            assert_eq!(m.time_label(), "Now", "{m:?}");
        }
    }

    #[test]
    fn string_timestamps_are_parsed() {
        let rfc = msg(
            "a",
            Some(Timestamp::Text("2023-11-14T22:13:20Z".into())),
        );
        let from_millis = msg("a", Some(Timestamp::Millis(1_700_000_000_000.0)));
        assert_eq!(rfc.time_label(), from_millis.time_label());

        let naive = msg(
            "a",
            Some(Timestamp::Text("2024-03-01T09:05:07.123456".into())),
        );
        assert_eq!(naive.time_label(), "9:05:07 AM");

        let spaced = msg("a", Some(Timestamp::Text("2024-03-01 21:30:00".into())));
        assert_eq!(spaced.time_label(), "9:30:00 PM");

        let junk = msg("a", Some(Timestamp::Text("yesterday".into())));
        assert_eq!(junk.time_label(), "Invalid Date");
    }

    #[test]
    fn odd_timestamp_does_not_spoil_the_list() {
        let body = r#"[
            {"username":"alice","message":"hi","timestamp":1700000000000},
            {"username":"bob","message":"yo","timestamp":{"$date":1}},
            {"username":"carol","message":"hey","timestamp":[1, 2]},
            {"username":"dave","message":"sup","timestamp":true},
            {"username":"erin","message":"ok","timestamp":false}
        ]"#;
        let list: Vec<Message> = serde_json::from_str(body).unwrap();
        assert_eq!(list.len(), 5);
        assert_ne!(list[0].time_label(), "Invalid Date");
        assert_eq!(list[1].time_label(), "Invalid Date");
        assert_eq!(list[2].time_label(), "Invalid Date");
        assert_eq!(list[3].time_label(), "Invalid Date");
        assert_eq!(list[4].time_label(), "Now");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body = r#"[{"id":7,"username":"bob","message":"yo","room":"x"}]"#;
        let list: Vec<Message> = serde_json::from_str(body).unwrap();
        assert_eq!(list[0].username, "bob");
        assert_eq!(list[0].timestamp, None);
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(serde_json::from_str::<Vec<Message>>(r#"{"messages":[]}"#).is_err());
        assert!(serde_json::from_str::<Vec<Message>>(r#"[{"username":"a"}]"#).is_err());
    }

    #[test]
    fn outgoing_body_shape() {
        let out = OutgoingMessage {
            username: "alice".into(),
            message: "hello\nthere".into(),
        };
        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            serde_json::json!({"username": "alice", "message": "hello\nthere"})
        );
    }
}
