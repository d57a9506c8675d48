//! NodeVoteReceipt - signed record of one processed tally message.

use serde::{Deserialize, Serialize};

use super::VoteResultStatus;
use crate::domain::foundation::Timestamp;

/// Immutable receipt a holder node issues for every tally message it processes.
///
/// The signature is produced by an external signer over
/// [`NodeVoteReceipt::signing_payload`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeVoteReceipt {
    input_message: String,
    timestamp: Timestamp,
    status: VoteResultStatus,
    signature: String,
}

impl NodeVoteReceipt {
    pub fn new(
        input_message: impl Into<String>,
        timestamp: Timestamp,
        status: VoteResultStatus,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            input_message: input_message.into(),
            timestamp,
            status,
            signature: signature.into(),
        }
    }

    /// Canonical bytes a signer signs for a receipt: message, epoch millis
    /// and status, newline-separated.
    pub fn signing_payload(input_message: &str, timestamp: Timestamp, status: VoteResultStatus) -> String {
        format!("{}\n{}\n{}", input_message, timestamp.as_millis(), status)
    }

    pub fn input_message(&self) -> &str {
        &self.input_message
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn status(&self) -> VoteResultStatus {
        self.status
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt() -> NodeVoteReceipt {
        NodeVoteReceipt::new(
            "1,h,100,1.1:1:60",
            Timestamp::from_millis(1_456_835_696_789).unwrap(),
            VoteResultStatus::Ok,
            "c2lnbmF0dXJl",
        )
    }

    #[test]
    fn serializes_all_four_fields_in_camel_case() {
        let json = serde_json::to_value(receipt()).unwrap();
        assert_eq!(json["inputMessage"], "1,h,100,1.1:1:60");
        assert_eq!(json["timestamp"], 1_456_835_696_789_i64);
        assert_eq!(json["status"], "OK");
        assert_eq!(json["signature"], "c2lnbmF0dXJl");
    }

    #[test]
    fn deserialization_requires_every_field() {
        let json = r#"{"inputMessage":"x","timestamp":1,"status":"OK"}"#;
        assert!(serde_json::from_str::<NodeVoteReceipt>(json).is_err());
    }

    #[test]
    fn json_roundtrips() {
        let json = serde_json::to_string(&receipt()).unwrap();
        let parsed: NodeVoteReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, receipt());
    }

    #[test]
    fn signing_payload_covers_message_time_and_status() {
        let ts = Timestamp::from_millis(42).unwrap();
        let payload = NodeVoteReceipt::signing_payload("V,", ts, VoteResultStatus::Malformed);
        assert_eq!(payload, "V,\n42\nMALFORMED");
    }
}
