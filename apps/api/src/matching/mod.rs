//! The matching pipeline: canonical records, relevance filtering, embedding
//! similarity scoring, and ranking/export.

pub mod filter;
pub mod handlers;
pub mod rank;
pub mod record;
pub mod scorer;
