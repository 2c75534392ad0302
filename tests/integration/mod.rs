//! Integration Tests Module
//!
//! End-to-end tests from raw input to a written artifact.

pub mod decode_pipeline;
pub mod encode_round_trip;
