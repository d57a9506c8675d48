//! JSON adapter - plain `VoteSerializer` used standalone and embedded by
//! the ISO 20022 codec.

mod json_serializer;

pub use json_serializer::JsonVoteSerializer;
