#![forbid(unsafe_code)]

//! Human-readable status lines on stdout
//!
//! Every outcome of a run, success or failure, is reported here as a single
//! line. Colour is applied through `termcolor` and can be switched off.

use crate::cli::ColorChoice;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Writes run outcomes to a colour-capable stream
pub struct Reporter<W: WriteColor> {
    out: W,
}

impl Reporter<StandardStream> {
    /// Creates a reporter on stdout honouring the `--color` choice
    pub fn stdout(choice: ColorChoice) -> Self {
        Reporter::new(StandardStream::stdout(resolve_color(choice)))
    }
}

impl<W: WriteColor> Reporter<W> {
    pub fn new(out: W) -> Self {
        Reporter { out }
    }

    /// Report a successful rewrite
    pub fn updated(
        &mut self,
        role: &str,
        previous: Option<&str>,
        version: &str,
        path: &Path,
    ) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(self.out, "Updated")?;
        self.out.reset()?;
        match previous {
            Some(previous) if previous != version => writeln!(
                self.out,
                " role {} from {} to {} in {}",
                role,
                previous,
                version,
                path.display()
            ),
            _ => writeln!(
                self.out,
                " role {} to {} in {}",
                role,
                version,
                path.display()
            ),
        }
    }

    /// Report that the role is already pinned to the requested version
    pub fn already_at_version(&mut self, role: &str, version: &str) -> io::Result<()> {
        writeln!(self.out, "Role {} is already at version {}.", role, version)
    }

    /// Report a failure
    pub fn error(&mut self, err: &dyn std::error::Error) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(self.out, "Error:")?;
        self.out.reset()?;
        writeln!(self.out, " {}", err)
    }

    /// Print the one-line usage summary
    pub fn usage(&mut self, usage: &str) -> io::Result<()> {
        writeln!(self.out, "{}", usage)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Map the CLI colour choice onto termcolor's
///
/// `auto` only colours when stdout is a terminal; termcolor itself then
/// also honours `NO_COLOR` and `TERM=dumb`.
pub fn resolve_color(choice: ColorChoice) -> termcolor::ColorChoice {
    match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto => {
            if io::stdout().is_terminal() {
                termcolor::ColorChoice::Auto
            } else {
                termcolor::ColorChoice::Never
            }
        }
    }
}
