//! Small formatting helpers shared by the decoder, encoder and CLI.

pub mod size;
pub mod time;
