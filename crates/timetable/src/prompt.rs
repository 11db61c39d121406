use std::io::{self, BufRead, Write};

/// Asks questions one at a time and blocks for each answer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    interactive: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, interactive: bool) -> Self {
        Self {
            input,
            output,
            interactive,
        }
    }

    /// Returns `given` untouched when it is present, otherwise asks.
    ///
    /// End of input and non-interactive runs both count as a blank answer.
    pub fn answer(&mut self, given: Option<String>, question: &str) -> io::Result<String> {
        if let Some(given) = given {
            return Ok(given);
        }
        if !self.interactive {
            return Ok(String::new());
        }

        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        Ok(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_one_line_per_question() {
        let mut out = vec![];
        let mut p = Prompter::new(Cursor::new("Math, Art\r\n9:00\n"), &mut out, true);

        assert_eq!(p.answer(None, "Subjects: ").unwrap(), "Math, Art");
        assert_eq!(p.answer(None, "Start: ").unwrap(), "9:00");
        assert_eq!(p.answer(None, "End: ").unwrap(), "");
        drop(p);

        assert_eq!(String::from_utf8(out).unwrap(), "Subjects: Start: End: ");
    }

    #[test]
    fn given_values_skip_the_question() {
        let mut out = vec![];
        let mut p = Prompter::new(Cursor::new("unused\n"), &mut out, true);

        assert_eq!(p.answer(Some("10:00".into()), "Start: ").unwrap(), "10:00");
        assert_eq!(p.answer(None, "End: ").unwrap(), "unused");
        drop(p);

        assert_eq!(String::from_utf8(out).unwrap(), "End: ");
    }

    #[test]
    fn non_interactive_is_blank() {
        let mut out = vec![];
        let mut p = Prompter::new(Cursor::new("ignored\n"), &mut out, false);

        assert_eq!(p.answer(None, "Lunch: ").unwrap(), "");
        drop(p);
        assert!(out.is_empty());
    }
}
