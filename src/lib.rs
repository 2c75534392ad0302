//! Base64 decoder with content sniffing
//!
//! Pasted or file-sourced base64 is normalised, strictly decoded, and
//! classified by magic numbers and text heuristics so the payload can be
//! saved under a sensible filename after the user confirms it.

pub mod cli;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod errors;
pub mod shared;
pub mod types;
pub mod utils;
