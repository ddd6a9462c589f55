// src/printer/printers.rs

//! Colored printing of verification results to stdout.

use crate::debug::printers::de_err;
use crate::harness::verify::{Summary, VerifyResult};

use std::io::Write; // for `flush`

#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, WriteColor};

/// [`Color`] for printing passed checks.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const COLOR_OK: Color = Color::Green;

/// [`Color`] for printing failed checks.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const COLOR_ERROR: Color = Color::Red;

/// Print `value` in `color` then reset the color.
pub fn print_colored(
    color: Color,
    value: &[u8],
    out: &mut termcolor::StandardStream,
) -> std::io::Result<()> {
    match out.set_color(ColorSpec::new().set_fg(Some(color))) {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: out.set_color({:?}) returned error {}", color, err);
            return Err(err);
        }
    };
    match out.write_all(value) {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: out.write_all(…) returned error {}", err);
            return Err(err);
        }
    }
    match out.reset() {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: out.reset() returned error {}", err);
            return Err(err);
        }
    }
    out.flush()?;

    Ok(())
}

/// Prints one line per verification check; `ok` or `FAIL` followed by the
/// check name, and the mismatch for a failure.
pub struct PrinterVerify {
    stdout_color: termcolor::StandardStream,
}

impl PrinterVerify {
    pub fn new(color_choice: ColorChoice) -> PrinterVerify {
        PrinterVerify {
            stdout_color: termcolor::StandardStream::stdout(color_choice),
        }
    }

    /// Print the result of check `name`.
    pub fn print_result(
        &mut self,
        name: &str,
        result: &VerifyResult,
    ) -> std::io::Result<()> {
        match result {
            Ok(_) => {
                print_colored(COLOR_OK, b"ok  ", &mut self.stdout_color)?;
                writeln!(self.stdout_color, "{}", name)?;
            }
            Err(err) => {
                print_colored(COLOR_ERROR, b"FAIL", &mut self.stdout_color)?;
                writeln!(self.stdout_color, "{}: {}", name, err)?;
            }
        }

        Ok(())
    }

    /// Print the final tally.
    pub fn print_summary(
        &mut self,
        summary: &Summary,
    ) -> std::io::Result<()> {
        let color: Color = if summary.ok() { COLOR_OK } else { COLOR_ERROR };
        let line = format!(
            "\n{} checks: {} passed, {} failed\n",
            summary.total(),
            summary.passed,
            summary.failed,
        );

        print_colored(color, line.as_bytes(), &mut self.stdout_color)
    }
}
