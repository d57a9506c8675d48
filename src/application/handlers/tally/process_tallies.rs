//! ProcessTalliesHandler - folding child tallies into a holder's outgoing tally.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::aggregation::{TallyAggregator, TallyValidator};
use crate::domain::foundation::Timestamp;
use crate::domain::tally::{NodeVoteReceipt, TallyError, VoteResult, VoteResultStatus};
use crate::domain::voting::Voting;
use crate::ports::ReceiptSigner;

/// Command to process the tallies a holder received from its children.
#[derive(Debug, Clone)]
pub struct ProcessTalliesCommand {
    /// The holder's own tally, the starting point of the outgoing tally.
    pub own_tally: VoteResult,
    /// Child tallies in compact text form, in arrival order.
    pub child_messages: Vec<String>,
}

/// Result of processing child tallies.
#[derive(Debug, Clone)]
pub struct ProcessTalliesResult {
    /// Own tally combined with every accepted child.
    pub outgoing: VoteResult,
    /// One receipt per child message, in arrival order.
    pub receipts: Vec<NodeVoteReceipt>,
    /// Number of child messages that were not merged.
    pub rejected: usize,
}

/// Handler for processing child tallies at one holder node for one voting.
pub struct ProcessTalliesHandler {
    voting: Arc<Voting>,
    signer: Arc<dyn ReceiptSigner>,
}

impl ProcessTalliesHandler {
    pub fn new(voting: Arc<Voting>, signer: Arc<dyn ReceiptSigner>) -> Self {
        Self { voting, signer }
    }

    /// Processes every child message and issues a receipt for each.
    ///
    /// A child is merged only when it parses, passes validation, combines
    /// cleanly and its receipt is signed. A rejected child never stops the
    /// others from being processed.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::VotingMismatch` when the own tally belongs to a
    /// different voting than the handler's.
    pub fn handle(&self, cmd: ProcessTalliesCommand) -> Result<ProcessTalliesResult, TallyError> {
        if cmd.own_tally.voting_id() != self.voting.id() {
            return Err(TallyError::voting_mismatch(self.voting.id(), cmd.own_tally.voting_id()));
        }

        let mut outgoing = cmd.own_tally;
        let mut receipts = Vec::with_capacity(cmd.child_messages.len());
        let mut rejected = 0;

        for message in &cmd.child_messages {
            let (status, merged) = self.evaluate(&outgoing, message);
            let receipt = self.issue_receipt(message, status);

            if receipt.status().is_ok() {
                if let Some(merged) = merged {
                    outgoing = merged;
                }
            } else {
                rejected += 1;
            }
            receipts.push(receipt);
        }

        let final_status = match TallyValidator::validate(&outgoing, &self.voting) {
            None => VoteResultStatus::Ok,
            Some(violation) => {
                warn!(
                    voting_id = self.voting.id(),
                    violation = %violation,
                    "Outgoing tally fails validation"
                );
                VoteResultStatus::ValidationFailed
            }
        };
        outgoing.set_status(final_status);

        info!(
            voting_id = self.voting.id(),
            received = cmd.child_messages.len(),
            rejected,
            status = %final_status,
            "Processed child tallies"
        );

        Ok(ProcessTalliesResult {
            outgoing,
            receipts,
            rejected,
        })
    }

    /// Decides the receipt status for one child and, when accepted, the
    /// tally it would produce.
    fn evaluate(&self, outgoing: &VoteResult, message: &str) -> (VoteResultStatus, Option<VoteResult>) {
        let child = match message.parse::<VoteResult>() {
            Ok(child) => child,
            Err(err) => {
                warn!(voting_id = self.voting.id(), error = %err, "Rejecting malformed child tally");
                return (VoteResultStatus::Malformed, None);
            }
        };

        if let Some(violation) = TallyValidator::validate(&child, &self.voting) {
            warn!(
                voting_id = self.voting.id(),
                holder_id = child.holder_id().unwrap_or_default(),
                violation = %violation,
                "Rejecting invalid child tally"
            );
            return (VoteResultStatus::ValidationFailed, None);
        }

        match TallyAggregator::combine(outgoing, Some(&child)) {
            Ok(merged) => (VoteResultStatus::Ok, Some(merged)),
            Err(err) => {
                warn!(
                    voting_id = self.voting.id(),
                    holder_id = child.holder_id().unwrap_or_default(),
                    error = %err,
                    "Rejecting child tally that cannot be combined"
                );
                (VoteResultStatus::ValidationFailed, None)
            }
        }
    }

    fn issue_receipt(&self, message: &str, status: VoteResultStatus) -> NodeVoteReceipt {
        let timestamp = Timestamp::now();
        let payload = NodeVoteReceipt::signing_payload(message, timestamp, status);
        match self.signer.sign(&payload) {
            Ok(signature) => NodeVoteReceipt::new(message, timestamp, status, signature),
            Err(err) => {
                warn!(voting_id = self.voting.id(), error = %err, "Receipt signing failed");
                NodeVoteReceipt::new(message, timestamp, VoteResultStatus::SignatureFailed, "")
            }
        }
    }
}
