//! Plain serializer: votings as JSON, tallies as compact text.

use tracing::warn;

use crate::domain::tally::VoteResult;
use crate::domain::voting::Voting;
use crate::ports::{CodecError, VoteSerializer};

/// `VoteSerializer` over `serde_json` and the tally compact text form.
///
/// The voting JSON is lossless, which is why the ISO 20022 codec embeds it
/// next to each instruction document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonVoteSerializer;

impl JsonVoteSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl VoteSerializer for JsonVoteSerializer {
    fn serialize_voting(&self, voting: &Voting) -> Option<String> {
        match serde_json::to_string(voting) {
            Ok(json) => Some(json),
            Err(err) => {
                warn!(voting_id = voting.id(), error = %err, "Failed to serialize voting as JSON");
                None
            }
        }
    }

    fn deserialize_voting(&self, message: &str) -> Result<Voting, CodecError> {
        serde_json::from_str(message).map_err(|err| CodecError::malformed(message, err))
    }

    fn serialize_result(&self, result: &VoteResult, _voting: &Voting) -> Result<String, CodecError> {
        Ok(result.to_string())
    }

    fn deserialize_result(&self, message: &str) -> Result<VoteResult, CodecError> {
        message
            .parse::<VoteResult>()
            .map_err(|err| CodecError::malformed(message, err))
    }
}
