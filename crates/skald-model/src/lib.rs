mod client;
mod response;

pub use client::{ModelExtractor, ModelOutcome};
