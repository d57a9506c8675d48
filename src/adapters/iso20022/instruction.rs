//! Wire-form tally ⇄ `seev.004` meeting instruction.

use rust_decimal::Decimal;

use super::documents::{
    AgendaInstructions, Balance, HoldingBalance, InstructionDocument, Instruction, MeetingInstruction,
    MeetingReference, SafekeepingAccount, VoteDetails, VoteInstruction, INSTRUCTION_NAMESPACE,
};
use crate::domain::tally::{VoteResult, VotedAnswer};
use crate::domain::voting::AnswerType;
use crate::ports::CodecError;

/// Builds the instruction document for a tally already in wire form.
///
/// # Errors
///
/// - `UnknownAnswerType` when a line's answer id is not one of the
///   FOR/AGAINST/ABSTAIN codes
/// - `Marshal` when the holder id starts or ends with whitespace, which the
///   XML reader trims away
pub(super) fn encode_instruction(wire: &VoteResult) -> Result<InstructionDocument, CodecError> {
    if let Some(holder_id) = wire.holder_id().filter(|id| id.trim() != *id) {
        return Err(CodecError::Marshal(format!(
            "holder id {:?} has surrounding whitespace",
            holder_id
        )));
    }

    let vote_instructions = wire
        .answers()
        .map(encode_line)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(InstructionDocument {
        xmlns: INSTRUCTION_NAMESPACE.to_string(),
        meeting_instruction: MeetingInstruction {
            meeting_reference: MeetingReference {
                meeting_id: wire.voting_id().to_string(),
            },
            instructions: vec![Instruction {
                account_details: SafekeepingAccount {
                    account_id: wire.holder_id().map(str::to_string),
                    instructed_balances: vec![HoldingBalance {
                        balance: Balance {
                            unit: wire.packet_size().to_string(),
                        },
                    }],
                },
                vote_details: VoteDetails {
                    agenda_instructions: AgendaInstructions { vote_instructions },
                },
            }],
        },
    })
}

fn encode_line(line: &VotedAnswer) -> Result<VoteInstruction, CodecError> {
    let answer_type = AnswerType::from_answer_id(line.answer_id())
        .ok_or_else(|| CodecError::UnknownAnswerType(line.answer_id().to_string()))?;
    let amount = Some(line.vote_amount().to_string());
    let mut instruction = VoteInstruction {
        issuer_label: line.question_id().to_string(),
        for_amount: None,
        against_amount: None,
        abstain_amount: None,
    };
    match answer_type {
        AnswerType::For => instruction.for_amount = amount,
        AnswerType::Against => instruction.against_amount = amount,
        AnswerType::Abstain => instruction.abstain_amount = amount,
    }
    Ok(instruction)
}

/// Reads a wire-form tally from an instruction document.
///
/// Only the first `Instr` block and its first `InstdBal` are read. Lines
/// with the same slot and answer are summed.
///
/// # Errors
///
/// Returns `Malformed` (carrying `payload`) when the instruction or its
/// balance is missing, when a vote line does not carry exactly one amount,
/// or when an amount is not a decimal number.
pub(super) fn decode_instruction(
    document: InstructionDocument,
    payload: &str,
) -> Result<VoteResult, CodecError> {
    let instruction = document.meeting_instruction;
    let voting_id = instruction.meeting_reference.meeting_id;

    let block = instruction
        .instructions
        .into_iter()
        .next()
        .ok_or_else(|| CodecError::malformed(payload, "instruction carries no Instr block"))?;

    let account = block.account_details;
    let balance = account
        .instructed_balances
        .first()
        .ok_or_else(|| CodecError::malformed(payload, "instruction carries no instructed balance"))?;
    let packet_size = parse_amount(&balance.balance.unit, payload)?;

    let mut wire = VoteResult::new(voting_id, account.account_id, packet_size);
    for line in &block.vote_details.agenda_instructions.vote_instructions {
        let (answer_type, amount) = decode_line(line, payload)?;
        wire.add_answer(VotedAnswer::new(
            line.issuer_label.clone(),
            answer_type.code(),
            amount,
        ))?;
    }
    Ok(wire)
}

fn decode_line(line: &VoteInstruction, payload: &str) -> Result<(AnswerType, Decimal), CodecError> {
    let populated: Vec<(AnswerType, &str)> = [
        (AnswerType::For, &line.for_amount),
        (AnswerType::Against, &line.against_amount),
        (AnswerType::Abstain, &line.abstain_amount),
    ]
    .into_iter()
    .filter_map(|(answer_type, amount)| amount.as_deref().map(|a| (answer_type, a)))
    .collect();

    match populated.as_slice() {
        [(answer_type, amount)] => Ok((*answer_type, parse_amount(amount, payload)?)),
        [] => Err(CodecError::malformed(
            payload,
            format!("vote instruction {} carries no amount", line.issuer_label),
        )),
        _ => Err(CodecError::malformed(
            payload,
            format!("vote instruction {} carries more than one amount", line.issuer_label),
        )),
    }
}

fn parse_amount(value: &str, payload: &str) -> Result<Decimal, CodecError> {
    Decimal::from_str_exact(value.trim())
        .map_err(|err| CodecError::malformed(payload, format!("bad amount '{}': {}", value, err)))
}
