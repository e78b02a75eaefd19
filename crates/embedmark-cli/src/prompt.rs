//! Blocking read-validate loop over a line-oriented console

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use embedmark_core::{ValidationError, Validator};

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("end of input while reading a line")]
    EndOfInput,

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Asks questions on `output` and reads answers from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the terminal
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `query`, read one line and strip its line terminator.
    fn read_answer(&mut self, query: &str) -> Result<String, PromptError> {
        write!(self.output, "{query}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }

    /// Ask until every validator accepts the answer and `transform` converts it.
    ///
    /// Validators run in order and the first failure's message is printed
    /// before asking again. There is no attempt limit.
    pub fn ask<T, F>(
        &mut self,
        query: &str,
        validators: &[Validator],
        transform: F,
    ) -> Result<T, PromptError>
    where
        F: Fn(&str) -> Result<T, ValidationError>,
    {
        loop {
            let answer = self.read_answer(query)?;

            let checked = validators
                .iter()
                .try_for_each(|validate| validate(&answer))
                .and_then(|()| transform(&answer));

            match checked {
                Ok(value) => return Ok(value),
                Err(error) => {
                    tracing::debug!(%error, query, "Rejected answer");
                    writeln!(self.output, "{error}")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedmark_core::validation::{is_float, is_greater_than_zero, is_numeric, text_to_float, text_to_int};
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn as_text(text: &str) -> Result<String, ValidationError> {
        Ok(text.to_string())
    }

    fn printed(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_accepts_first_valid_answer() {
        let mut prompter = prompter("12\n");
        let margin = prompter.ask("embed margin: ", &[is_numeric], text_to_int).unwrap();

        assert_eq!(margin, 12);
        assert_eq!(printed(prompter), "embed margin: ");
    }

    #[test]
    fn test_reprompts_with_validator_message() {
        let mut prompter = prompter("abc\n-3\n7\n");
        let margin = prompter.ask("embed margin: ", &[is_numeric], text_to_int).unwrap();

        assert_eq!(margin, 7);
        assert_eq!(
            printed(prompter),
            "embed margin: input must be numeric\n\
             embed margin: input must be numeric\n\
             embed margin: "
        );
    }

    #[test]
    fn test_only_first_failing_validator_reports() {
        let mut prompter = prompter("x\n0\n1.5\n");
        let scale = prompter
            .ask("embed scale: ", &[is_float, is_greater_than_zero], text_to_float)
            .unwrap();

        assert_eq!(scale, 1.5);
        assert_eq!(
            printed(prompter),
            "embed scale: input must be a float\n\
             embed scale: input must be greater than 0\n\
             embed scale: "
        );
    }

    #[test]
    fn test_transform_failure_reprompts() {
        let mut prompter = prompter("99999999999\n5\n");
        let margin = prompter.ask("m: ", &[is_numeric], text_to_int).unwrap();

        assert_eq!(margin, 5);
        assert_eq!(printed(prompter), "m: input must be numeric\nm: ");
    }

    #[test]
    fn test_strips_crlf_only() {
        let mut prompter = prompter(" left \r\n");
        let answer = prompter.ask("q: ", &[], as_text).unwrap();
        assert_eq!(answer, " left ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut prompter = prompter("right");
        assert_eq!(prompter.ask("q: ", &[], as_text).unwrap(), "right");
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut prompter = prompter("nope\n");
        let err = prompter.ask("m: ", &[is_numeric], text_to_int).unwrap_err();

        assert!(matches!(err, PromptError::EndOfInput));
        assert_eq!(err.to_string(), "end of input while reading a line");
    }
}
