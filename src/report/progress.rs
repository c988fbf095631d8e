use std::io::{IsTerminal, Write};

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

const LABEL: &str = "  Successful requests #: ";

/// Single-line running count of successful requests, redrawn in place.
pub struct ProgressCounter<W: Write> {
    out: W,
    styled: bool,
    no_color: bool,
}

impl ProgressCounter<std::io::Stdout> {
    /// Counter on stdout; cursor control and color are only used on a TTY.
    #[must_use]
    pub fn stdout(no_color: bool) -> Self {
        let out = std::io::stdout();
        let styled = out.is_terminal();
        Self {
            out,
            styled,
            no_color,
        }
    }
}

impl<W: Write> ProgressCounter<W> {
    pub const fn plain(out: W) -> Self {
        Self {
            out,
            styled: false,
            no_color: true,
        }
    }

    /// Redraws the line with `successes`.
    ///
    /// # Errors
    ///
    /// Returns an error when the output cannot be written.
    pub fn update(&mut self, successes: u64) -> std::io::Result<()> {
        if !self.styled {
            write!(self.out, "\r{}{}", LABEL, successes)?;
            return self.out.flush();
        }

        queue!(
            self.out,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(LABEL)
        )?;
        if self.no_color {
            queue!(self.out, Print(successes))?;
        } else {
            queue!(
                self.out,
                SetForegroundColor(Color::Green),
                Print(successes),
                ResetColor
            )?;
        }
        self.out.flush()
    }

    /// Ends the counter line.
    ///
    /// # Errors
    ///
    /// Returns an error when the output cannot be written.
    pub fn finish(&mut self) -> std::io::Result<()> {
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
