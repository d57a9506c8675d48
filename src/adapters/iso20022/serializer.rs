//! `VoteSerializer` over ISO 20022 meeting documents.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use super::documents::{InstructionDocument, NotificationDocument};
use super::instruction::{decode_instruction, encode_instruction};
use super::notification::{decode_notification, encode_notification};
use super::wire_adapter::{adapt_for_wire, adapt_from_wire};
use crate::adapters::json::JsonVoteSerializer;
use crate::adapters::messaging::DelimitedMessageBundler;
use crate::config::CodecConfig;
use crate::domain::tally::VoteResult;
use crate::domain::voting::Voting;
use crate::ports::{CodecError, MessageBundler, VoteSerializer};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const RESULT_PART_COUNT: usize = 2;

/// ISO 20022 serializer.
///
/// - A voting travels as a `seev.001` meeting notification.
/// - A tally travels as a composite message: the `seev.004` meeting
///   instruction plus the voting's JSON form, joined by the bundler. The
///   embedded voting lets a receiver translate wire slots back to
///   questions without a side channel.
pub struct Iso20022Serializer {
    bundler: Arc<dyn MessageBundler>,
    embedded: JsonVoteSerializer,
    pretty_print: bool,
}

impl Iso20022Serializer {
    pub fn new(bundler: Arc<dyn MessageBundler>) -> Self {
        Self {
            bundler,
            embedded: JsonVoteSerializer::new(),
            pretty_print: false,
        }
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        Self::new(Arc::new(DelimitedMessageBundler::new(config.message_delimiter.clone())))
            .with_pretty_print(config.pretty_print)
    }

    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    fn to_xml<T: Serialize>(&self, document: &T) -> Result<String, CodecError> {
        let mut body = String::new();
        let mut serializer = quick_xml::se::Serializer::new(&mut body);
        if self.pretty_print {
            serializer.indent(' ', 2);
        }
        document
            .serialize(serializer)
            .map_err(|err| CodecError::Marshal(err.to_string()))?;

        let separator = if self.pretty_print { "\n" } else { "" };
        Ok(format!("{}{}{}", XML_DECLARATION, separator, body))
    }

    fn from_xml<T: DeserializeOwned>(payload: &str) -> Result<T, CodecError> {
        quick_xml::de::from_str(payload).map_err(|err| CodecError::malformed(payload, err))
    }
}

impl Default for Iso20022Serializer {
    fn default() -> Self {
        Self::new(Arc::new(DelimitedMessageBundler::default()))
    }
}

impl VoteSerializer for Iso20022Serializer {
    fn serialize_voting(&self, voting: &Voting) -> Option<String> {
        let encoded = encode_notification(voting).and_then(|document| self.to_xml(&document));
        match encoded {
            Ok(xml) => Some(xml),
            Err(err) => {
                warn!(voting_id = voting.id(), error = %err, "Voting cannot be encoded as a meeting notification");
                None
            }
        }
    }

    fn deserialize_voting(&self, message: &str) -> Result<Voting, CodecError> {
        let document: NotificationDocument = Self::from_xml(message)?;
        debug!(
            meeting_id = %document.meeting_notification.meeting.meeting_id,
            meeting_type = %document.meeting_notification.meeting.meeting_type,
            resolutions = document.meeting_notification.resolutions.len(),
            "Decoding meeting notification"
        );
        decode_notification(document, message)
    }

    fn serialize_result(&self, result: &VoteResult, voting: &Voting) -> Result<String, CodecError> {
        let wire = adapt_for_wire(result, voting)?;
        let instruction = self.to_xml(&encode_instruction(&wire)?)?;
        let embedded = self
            .embedded
            .serialize_voting(voting)
            .ok_or_else(|| CodecError::Marshal(format!("voting {} cannot be embedded", voting.id())))?;
        self.bundler.build(&[&instruction, &embedded])
    }

    fn deserialize_result(&self, message: &str) -> Result<VoteResult, CodecError> {
        let parts = self.bundler.split(message);
        let [instruction, embedded] = parts.as_slice() else {
            return Err(CodecError::WrongPartCount {
                expected: RESULT_PART_COUNT,
                actual: parts.len(),
            });
        };

        let voting = self.embedded.deserialize_voting(embedded)?;
        let document: InstructionDocument = Self::from_xml(instruction)?;
        debug!(
            meeting_id = %document.meeting_instruction.meeting_reference.meeting_id,
            instructions = document.meeting_instruction.instructions.len(),
            "Decoding meeting instruction"
        );

        let wire = decode_instruction(document, instruction)?;
        if wire.voting_id() != voting.id() {
            return Err(CodecError::malformed(
                message,
                format!(
                    "instruction refers to meeting {} but embedded voting is {}",
                    wire.voting_id(),
                    voting.id()
                ),
            ));
        }
        adapt_from_wire(&wire, &voting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::tally::VotedAnswer;
    use crate::domain::voting::{Answer, AnswerType, Question};
    use rust_decimal_macros::dec;

    fn voting(name: &str) -> Voting {
        let standard = AnswerType::ALL
            .iter()
            .map(|t| Answer::new(t.code(), t.label()))
            .collect();
        Voting::new(
            "1",
            name,
            Timestamp::from_millis(1_456_835_696_789).unwrap(),
            Timestamp::from_millis(1_457_440_496_789).unwrap(),
            "RU000A0JX0J2",
            vec![Question::single("1", "Approve report", standard)],
        )
        .unwrap()
    }

    #[test]
    fn notification_has_declaration_and_namespace() {
        let xml = Iso20022Serializer::default()
            .serialize_voting(&voting("GMET_Annual"))
            .unwrap();

        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.contains("urn:iso:std:iso:20022:tech:xsd:seev.001.001.04"));
        assert!(xml.contains("<Tp>GMET</Tp>"));
        assert!(xml.contains("<VoteInstrTp>CFOR</VoteInstrTp>"));
        assert!(xml.contains("<Dt>2016-03-08T12:34:56</Dt>"));
    }

    #[test]
    fn pretty_print_indents_elements() {
        let xml = Iso20022Serializer::default()
            .with_pretty_print(true)
            .serialize_voting(&voting("GMET_Annual"))
            .unwrap();

        assert!(xml.contains("\n  <MtgNtfctn>"));
    }

    #[test]
    fn unknown_meeting_type_gives_none() {
        let encoded = Iso20022Serializer::default().serialize_voting(&voting("Annual"));

        assert!(encoded.is_none());
    }

    #[test]
    fn garbage_notification_is_malformed() {
        let err = Iso20022Serializer::default()
            .deserialize_voting("<Document><MtgNtfctn/></Document>")
            .unwrap_err();

        assert!(matches!(err, CodecError::Malformed { .. }));
    }

    #[test]
    fn result_message_has_two_parts() {
        let serializer = Iso20022Serializer::from_config(&CodecConfig {
            message_delimiter: "\u{1f}".to_string(),
            pretty_print: false,
        });
        let tally = VoteResult::new("1", Some("h".to_string()), dec!(100))
            .with_answer(VotedAnswer::new("1", "1", dec!(60)))
            .unwrap();

        let message = serializer.serialize_result(&tally, &voting("GMET_Annual")).unwrap();

        let parts: Vec<_> = message.split('\u{1f}').collect();
        assert_eq!(parts.len(), 2);
        assert!(parts[0].contains("<For>60</For>"));
        assert!(parts[1].starts_with('{'));
    }

    #[test]
    fn meeting_reference_must_match_embedded_voting() {
        let serializer = Iso20022Serializer::default();
        let tally = VoteResult::new("1", Some("h".to_string()), dec!(1));
        let message = serializer.serialize_result(&tally, &voting("GMET_Annual")).unwrap();
        let tampered = message.replacen("<MtgId>1</MtgId>", "<MtgId>2</MtgId>", 1);

        let err = serializer.deserialize_result(&tampered).unwrap_err();

        assert!(matches!(err, CodecError::Malformed { .. }));
    }
}
