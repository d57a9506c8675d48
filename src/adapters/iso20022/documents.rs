//! Serde shapes of the ISO 20022 meeting documents this crate exchanges.
//!
//! Only the elements needed to round-trip votings and tallies are modelled:
//! - `seev.001` meeting notification (`NotificationDocument`)
//! - `seev.004` meeting instruction (`InstructionDocument`)
//!
//! Amounts and dates are kept as text here and parsed by the codecs, so a
//! bad value is reported against the field it came from.

use serde::{Deserialize, Serialize};

pub const NOTIFICATION_NAMESPACE: &str = "urn:iso:std:iso:20022:tech:xsd:seev.001.001.04";
pub const INSTRUCTION_NAMESPACE: &str = "urn:iso:std:iso:20022:tech:xsd:seev.004.001.04";

// =============================================================================
// Meeting notification (seev.001)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Document")]
pub struct NotificationDocument {
    #[serde(rename = "@xmlns", default)]
    pub xmlns: String,
    #[serde(rename = "MtgNtfctn")]
    pub meeting_notification: MeetingNotification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingNotification {
    #[serde(rename = "Mtg")]
    pub meeting: MeetingNotice,
    #[serde(rename = "Scty", default)]
    pub securities: Vec<SecurityPosition>,
    #[serde(rename = "Rsltn", default)]
    pub resolutions: Vec<Resolution>,
    #[serde(rename = "Vote")]
    pub vote: VoteParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingNotice {
    #[serde(rename = "MtgId")]
    pub meeting_id: String,
    #[serde(rename = "Tp")]
    pub meeting_type: String,
    #[serde(rename = "AnncmntDt")]
    pub announcement_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityPosition {
    #[serde(rename = "Id")]
    pub id: SecurityIdentification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityIdentification {
    #[serde(rename = "Id")]
    pub id: SecurityIdentifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityIdentifier {
    #[serde(rename = "ISIN")]
    pub isin: String,
}

/// One agenda item. Either a whole single-select question or one candidate
/// of a cumulative question, told apart by `Titl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    #[serde(rename = "IssrLabl")]
    pub issuer_label: String,
    #[serde(rename = "Titl", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "ForInfOnly", default)]
    pub for_information_only: bool,
    #[serde(rename = "VoteInstrTp", default)]
    pub vote_instruction_types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteParameters {
    #[serde(rename = "VoteDdln", default, skip_serializing_if = "Option::is_none")]
    pub vote_deadline: Option<DateFormat>,
    #[serde(rename = "VoteMktDdln", default, skip_serializing_if = "Option::is_none")]
    pub vote_market_deadline: Option<DateFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateFormat {
    #[serde(rename = "Dt")]
    pub date: String,
}

// =============================================================================
// Meeting instruction (seev.004)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Document")]
pub struct InstructionDocument {
    #[serde(rename = "@xmlns", default)]
    pub xmlns: String,
    #[serde(rename = "MtgInstr")]
    pub meeting_instruction: MeetingInstruction,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingInstruction {
    #[serde(rename = "MtgRef")]
    pub meeting_reference: MeetingReference,
    #[serde(rename = "Instr", default)]
    pub instructions: Vec<Instruction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingReference {
    #[serde(rename = "MtgId")]
    pub meeting_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    #[serde(rename = "AcctDtls")]
    pub account_details: SafekeepingAccount,
    #[serde(rename = "VoteDtls")]
    pub vote_details: VoteDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafekeepingAccount {
    #[serde(rename = "AcctId", default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(rename = "InstdBal", default)]
    pub instructed_balances: Vec<HoldingBalance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingBalance {
    #[serde(rename = "Bal")]
    pub balance: Balance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    #[serde(rename = "Unit")]
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteDetails {
    #[serde(rename = "VoteInstrForAgndRsltn")]
    pub agenda_instructions: AgendaInstructions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaInstructions {
    #[serde(rename = "VoteInstr", default)]
    pub vote_instructions: Vec<VoteInstruction>,
}

/// One vote line. Exactly one of the three amounts is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteInstruction {
    #[serde(rename = "IssrLabl")]
    pub issuer_label: String,
    #[serde(rename = "For", default, skip_serializing_if = "Option::is_none")]
    pub for_amount: Option<String>,
    #[serde(rename = "Agnst", default, skip_serializing_if = "Option::is_none")]
    pub against_amount: Option<String>,
    #[serde(rename = "Abstn", default, skip_serializing_if = "Option::is_none")]
    pub abstain_amount: Option<String>,
}
