//! Interactive filename confirmation

use crate::decoder::{Confirmation, PendingConfirmation};
use crate::errors::AppResult;
use std::io::{BufRead, Write};

/// Ask for a final filename on `output`, reading the answer from `input`
///
/// An empty line keeps the suggested name, end of input cancels. Anything
/// else is taken verbatim (minus the line ending) as the new name.
pub fn ask_filename<R: BufRead, W: Write>(
    pending: &PendingConfirmation,
    input: &mut R,
    output: &mut W,
) -> AppResult<Confirmation> {
    write!(output, "{}", pending.prompt_message())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(Confirmation::Cancel);
    }

    let answer = line.trim_end_matches(['\n', '\r']);
    if answer.is_empty() {
        Ok(Confirmation::Accept)
    } else {
        Ok(Confirmation::Rename(answer.to_string()))
    }
}
