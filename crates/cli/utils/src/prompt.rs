use std::io::{BufRead, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Invalid choice `{0}`, enter a number from the list or an option name")]
    InvalidChoice(String),

    #[error("Input closed before a choice was made")]
    EndOfInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Resolves one line of operator input to an index into `options`.
///
/// Accepts a 1-based position or a case-insensitive option name. An empty
/// line picks `default`.
pub fn parse_choice<S: AsRef<str>>(
    input: &str,
    options: &[S],
    default: usize,
) -> Result<usize, PromptError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }

    if let Ok(position) = input.parse::<usize>() {
        if (1..=options.len()).contains(&position) {
            return Ok(position - 1);
        }
    }

    options
        .iter()
        .position(|option| option.as_ref().eq_ignore_ascii_case(input))
        .ok_or_else(|| PromptError::InvalidChoice(input.to_string()))
}

/// Asks `question` until the answer resolves to one of `options`.
///
/// Bad answers are reported on `output` and the menu is shown again. Running
/// out of input is an error.
pub fn prompt_choice<R, W, S>(
    input: &mut R,
    output: &mut W,
    question: &str,
    options: &[S],
    default: usize,
) -> Result<usize, PromptError>
where
    R: BufRead,
    W: Write,
    S: AsRef<str>,
{
    loop {
        writeln!(output, "{question}")?;
        for (idx, option) in options.iter().enumerate() {
            let marker = if idx == default { " (default)" } else { "" };
            writeln!(output, "{}) {}{}", idx + 1, option.as_ref(), marker)?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }

        match parse_choice(&line, options, default) {
            Ok(choice) => return Ok(choice),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}
