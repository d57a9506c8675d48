//! ISO 20022 adapter - meeting notifications and instructions.
//!
//! - `documents` - serde shapes of `seev.001` / `seev.004`
//! - `resolutions` - questions ⇄ agenda resolutions
//! - `wire_adapter` - domain tally ⇄ instruction-slot tally
//! - `Iso20022Serializer` - the `VoteSerializer` tying them together

pub mod documents;
mod instruction;
mod notification;
mod resolutions;
mod serializer;
mod wire_adapter;

pub use resolutions::{CANDIDATE_TITLE, RESOLUTION_TITLE};
pub use serializer::Iso20022Serializer;
pub use wire_adapter::{adapt_for_wire, adapt_from_wire};
