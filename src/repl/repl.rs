use std::io::{BufRead, Write};

use crate::{errors::errors::Error, lexer::lexer::Lexer};

pub const PROMPT: &str = ">> ";

/// Reads lines from `input` and echoes their tokens to `output` until the
/// input is exhausted.
pub fn start<R: BufRead, W: Write>(mut input: R, output: &mut W) -> Result<(), Error> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("repl input closed");
            return Ok(());
        }

        let mut lexer = Lexer::new(&line);
        loop {
            let token = lexer.next_token();
            if token.is_eof() {
                break;
            }

            writeln!(output, "{}", token)?;
        }
    }
}
