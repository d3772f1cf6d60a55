use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Sent,
    Received,
}

/// Delivery state of a sent message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sending,
    Sent,
    Delivered,
    Failed,
}

impl DeliveryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Sending => "sending",
            DeliveryStatus::Sent => "sent",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub message: String,
    /// `None` for the canned sample conversation, which carries no time.
    pub timestamp: Option<DateTime<Local>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeliveryStatus>,
}

impl Message {
    pub fn sent(id: u64, message: impl Into<String>, status: DeliveryStatus) -> Self {
        Self {
            id,
            kind: MessageKind::Sent,
            message: message.into(),
            timestamp: Some(Local::now()),
            status: Some(status),
        }
    }

    pub fn received(id: u64, message: impl Into<String>) -> Self {
        Self {
            id,
            kind: MessageKind::Received,
            message: message.into(),
            timestamp: Some(Local::now()),
            status: None,
        }
    }

    pub fn is_sent(&self) -> bool {
        self.kind == MessageKind::Sent
    }

    /// `HH:MM`, plus the delivery status for sent messages.
    pub fn caption(&self) -> Option<String> {
        let time = self.timestamp.map(|t| t.format("%H:%M").to_string());
        match (time, self.status) {
            (Some(time), Some(status)) if status != DeliveryStatus::Sent => {
                Some(format!("{} · {}", time, status.label()))
            }
            (Some(time), _) => Some(time),
            (None, _) => None,
        }
    }
}

const SAMPLE_CONVERSATION: [(MessageKind, &str); 5] = [
    (
        MessageKind::Received,
        "Hello! Welcome to our support chat. How can I assist you today?",
    ),
    (MessageKind::Sent, "Hi, I have a question about your pricing plans."),
    (
        MessageKind::Received,
        "I'd be happy to help you with that! Are you looking for information about our basic, professional, or enterprise plans?",
    ),
    (MessageKind::Sent, "I'm interested in the professional plan features."),
    (
        MessageKind::Received,
        "Great choice! The professional plan includes advanced analytics, priority support, and unlimited integrations. Would you like me to schedule a demo for you?",
    ),
];

/// Demo conversation a fresh widget starts with. Ids run from 0.
pub fn sample_conversation() -> Vec<Message> {
    SAMPLE_CONVERSATION
        .iter()
        .enumerate()
        .map(|(id, (kind, text))| Message {
            id: id as u64,
            kind: *kind,
            message: text.to_string(),
            timestamp: None,
            status: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_conversation_alternates() {
        let messages = sample_conversation();
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[0].kind, MessageKind::Received);
        assert!(messages[1].is_sent());
        assert!(messages.iter().all(|m| m.caption().is_none()));
    }

    #[test]
    fn test_caption_includes_non_default_status() {
        let mut message = Message::sent(9, "hi", DeliveryStatus::Sent);
        let time = message.caption().unwrap();
        assert_eq!(time.len(), 5);

        message.status = Some(DeliveryStatus::Failed);
        assert_eq!(message.caption().unwrap(), format!("{} · failed", time));
    }

    #[test]
    fn test_message_serializes_type_field() {
        let json = serde_json::to_value(Message::received(1, "hello")).unwrap();
        assert_eq!(json["type"], "received");
        assert_eq!(json["message"], "hello");
        assert!(json.get("status").is_none());
    }
}
