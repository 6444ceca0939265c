// src/printer/printers.rs

//! Printer struct [`LevelPrinter`] and helper functions for rendering the
//! level report; the per-level counts table and the per-level detail
//! listing.
//!
//! All report output goes to stdout. The formatting helpers are separate
//! from the printing so the rendered text is testable without capturing
//! a stream.
//!
//! [`LevelPrinter`]: self::LevelPrinter

use crate::common::Count;
use crate::data::levels::LevelCounts;
use crate::data::logrecord::LogRecord;
use crate::debug::printers::de_err;

use std::io::{Result, Write};

#[doc(hidden)]
pub use ::termcolor::{Color, ColorChoice, ColorSpec, WriteColor};
use ::more_asserts::debug_assert_le;
use ::unicode_width::UnicodeWidthStr;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// globals and constants
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// [`Color`] for printing user-facing error messages.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const COLOR_ERROR: Color = Color::Red;

/// [`Color`] for printing the report header rows.
///
/// [`Color`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.Color.html
pub const COLOR_HEADER: Color = Color::Cyan;

/// Minimum display width of the level column in the counts table.
/// Longer level names overrun the column rather than truncate.
const LEVEL_COLUMN_WIDTH: usize = 16;

/// Counts table header row; matches [`COUNTS_SEPARATOR`].
const COUNTS_HEADER: &str = "Рівень логування | Кількість";

/// Counts table separator row; matches [`COUNTS_HEADER`].
const COUNTS_SEPARATOR: &str = "-----------------|----------";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// formatting helper functions
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One counts table row; the level padded to display width
/// [`LEVEL_COLUMN_WIDTH`], then ` | `, then the count.
///
/// Padding is by terminal display width, not `char` count, so levels with
/// wide characters still align.
pub fn format_count_row(
    level: &str,
    count: Count,
) -> String {
    let width: usize = UnicodeWidthStr::width(level);
    let pad: usize = LEVEL_COLUMN_WIDTH.saturating_sub(width);
    debug_assert_le!(pad, LEVEL_COLUMN_WIDTH, "pad {} exceeds column width", pad);

    format!("{}{} | {}", level, " ".repeat(pad), count)
}

/// Detail listing header naming the requested level, upper-cased.
pub fn format_details_header(level: &str) -> String {
    format!("Деталі логів для рівня '{}':", level.to_uppercase())
}

/// One detail listing row; `date time - message`.
pub fn format_detail_row(record: &LogRecord) -> String {
    format!("{} {} - {}", record.date, record.time, record.message)
}

/// Printed in place of the detail listing when no record matched the
/// requested level.
pub fn format_no_records_found(level: &str) -> String {
    format!("No logs found for level '{}'.", level.to_uppercase())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// LevelPrinter
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A printer for the level report; counts table and detail listing.
///
/// Wraps a [`termcolor::StandardStream`] on stdout. Header rows are
/// colored when color is enabled; data rows print plain so the report
/// pipes cleanly.
///
/// [`termcolor::StandardStream`]: https://docs.rs/termcolor/1.4.1/termcolor/struct.StandardStream.html
pub struct LevelPrinter {
    /// termcolor handle to stdout
    stdout_color: termcolor::StandardStream,
    /// should printing be in color?
    do_color: bool,
    /// color settings for header rows
    color_spec_header: ColorSpec,
}

impl LevelPrinter {
    pub fn new(color_choice: ColorChoice) -> LevelPrinter {
        let do_color: bool = !matches!(color_choice, ColorChoice::Never);
        let mut color_spec_header = ColorSpec::new();
        color_spec_header.set_fg(Some(COLOR_HEADER));

        LevelPrinter {
            stdout_color: termcolor::StandardStream::stdout(color_choice),
            do_color,
            color_spec_header,
        }
    }

    /// Print one line in the header color, resetting afterward.
    fn print_header_line(
        &mut self,
        text: &str,
    ) -> Result<()> {
        if self.do_color {
            self.stdout_color
                .set_color(&self.color_spec_header)?;
        }
        writeln!(self.stdout_color, "{}", text)?;
        if self.do_color {
            self.stdout_color.reset()?;
        }

        Ok(())
    }

    /// Print the counts table; a blank line, the header row, the separator
    /// row, then one row per level in first-seen order.
    pub fn print_counts_table(
        &mut self,
        counts: &LevelCounts,
    ) -> Result<()> {
        writeln!(self.stdout_color)?;
        self.print_header_line(COUNTS_HEADER)?;
        self.print_header_line(COUNTS_SEPARATOR)?;
        for (level, count) in counts.iter() {
            writeln!(self.stdout_color, "{}", format_count_row(level, *count))?;
        }
        self.stdout_color.flush()?;

        Ok(())
    }

    /// Print the detail listing; a blank line, the header naming the
    /// requested level, then one row per matched record in file order.
    ///
    /// The caller must not invoke this with an empty `records`; print
    /// [`print_no_records_found`] instead.
    ///
    /// [`print_no_records_found`]: LevelPrinter::print_no_records_found
    pub fn print_details(
        &mut self,
        records: &[&LogRecord],
        level: &str,
    ) -> Result<()> {
        writeln!(self.stdout_color)?;
        self.print_header_line(&format_details_header(level))?;
        for record in records.iter() {
            writeln!(self.stdout_color, "{}", format_detail_row(record))?;
        }
        self.stdout_color.flush()?;

        Ok(())
    }

    /// Print the no-match message; a blank line then the message.
    pub fn print_no_records_found(
        &mut self,
        level: &str,
    ) -> Result<()> {
        writeln!(self.stdout_color)?;
        writeln!(self.stdout_color, "{}", format_no_records_found(level))?;
        self.stdout_color.flush()?;

        Ok(())
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// helper functions - various print and write
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Print `value` to `out` in the passed `color`, resetting afterward.
fn print_colored(
    color: Color,
    value: &[u8],
    out: &mut termcolor::StandardStream,
) -> Result<()> {
    let mut color_spec: ColorSpec = ColorSpec::new();
    color_spec.set_fg(Some(color));
    if let Err(err) = out.set_color(&color_spec) {
        de_err!("print_colored: out.set_color({:?}) returned error {}", color, err);
        return Err(err);
    }
    if let Err(err) = out.write_all(value) {
        de_err!("print_colored: out.write_all(…) returned error {}", err);
        return Err(err);
    }
    if let Err(err) = out.reset() {
        de_err!("print_colored: out.reset() returned error {}", err);
        return Err(err);
    }
    out.flush()?;

    Ok(())
}

/// Print colored output to terminal on stdout.
///
/// See an example <https://docs.rs/termcolor/1.4.1/termcolor/#detecting-presence-of-a-terminal>.
pub fn print_colored_stdout(
    color: Color,
    color_choice_opt: Option<ColorChoice>,
    value: &[u8],
) -> Result<()> {
    let choice: ColorChoice = match color_choice_opt {
        Some(choice_) => choice_,
        None => ColorChoice::Auto,
    };
    let mut stdout = termcolor::StandardStream::stdout(choice);

    print_colored(color, value, &mut stdout)
}

/// Safely write the `buffer` to stdout with help of [`StdoutLock`].
///
/// [`StdoutLock`]: std::io::StdoutLock
pub fn write_stdout(buffer: &[u8]) {
    let stdout = std::io::stdout();
    let mut stdout_lock = stdout.lock();
    match stdout_lock.write_all(buffer) {
        Ok(_) => {}
        Err(_err) => {
            // XXX: this will print when this program stdout is truncated, like when piping
            //      to `head`, e.g. `lla file.log | head`
            //          Broken pipe (os error 32)
            de_err!("stdout_lock.write_all(buffer (len {})) error {}", buffer.len(), _err);
        }
    }
    match stdout_lock.flush() {
        Ok(_) => {}
        Err(_err) => {
            de_err!("stdout_lock.flush() error {}", _err);
        }
    }
}
