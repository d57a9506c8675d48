//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `iso20022` - ISO 20022 meeting documents (`VoteSerializer`)
//! - `json` - Plain JSON / compact text (`VoteSerializer`)
//! - `messaging` - Composite message framing (`MessageBundler`)
//! - `signing` - Receipt signing (`ReceiptSigner`)

pub mod iso20022;
pub mod json;
pub mod messaging;
pub mod signing;

pub use iso20022::Iso20022Serializer;
pub use json::JsonVoteSerializer;
pub use messaging::DelimitedMessageBundler;
pub use signing::PlaceholderSigner;
