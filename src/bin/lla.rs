// src/bin/lla.rs

//! Driver program _lla_ drives the [_llalib_].
//!
//! Processes user-passed command-line arguments, loads the passed log
//! file with a [`LogReader`], counts records per severity level, and
//! prints the counts table. If a level argument was passed then also
//! prints the matching records, or a no-match message.
//!
//! A load failure is printed as a single user-facing message and the
//! program exits non-zero; there is no partial report.
//!
//! `lla.rs` should be the only thread and the only code that prints to
//! STDOUT.
//!
//! [_llalib_]: llalib
//! [`LogReader`]: llalib::readers::logreader::LogReader

#![allow(non_camel_case_types)]

// first setup the custom global allocator
cfg_if::cfg_if! {
    if #[cfg(feature = "jemalloc")] {
        use ::tikv_jemallocator::Jemalloc;
        #[global_allocator]
        static GLOBAL: Jemalloc = Jemalloc;
        const CLI_HELP_AFTER_ALLOCATOR: &str = "jemalloc";
    }
    else if #[cfg(feature = "mimalloc")] {
        use ::mimalloc::MiMalloc;
        #[global_allocator]
        static GLOBAL: MiMalloc = MiMalloc;
        const CLI_HELP_AFTER_ALLOCATOR: &str = "mimalloc";
    }
    else {
        const CLI_HELP_AFTER_ALLOCATOR: &str = "system";
    }
}

use std::process::ExitCode;
use std::time::Instant;

use ::clap::{Parser, ValueEnum};
use ::const_format::concatcp;
use ::llalib::common::FPath;
use ::llalib::data::levels::{count_records_by_level, filter_records_by_level, LevelCounts};
use ::llalib::data::logrecord::LogRecord;
use ::llalib::debug::printers::de_err;
use ::llalib::printer::printers::{
    print_colored_stdout,
    write_stdout,
    ColorChoice,
    LevelPrinter,
    COLOR_ERROR,
};
use ::llalib::printer::summary::print_summary;
use ::llalib::readers::logreader::LogReader;
use ::si_trace_print::stack::stack_offset_set;
use ::si_trace_print::{defn, defo, defx};

// --------------------
// command-line parsing

/// usage message printed to stdout when no file path argument is given
const CLI_USAGE: &str = "Usage: lla <log_file_path> [log_level]\n";

/// CLI enum that maps to [`termcolor::ColorChoice`].
///
/// [`termcolor::ColorChoice`]: https://docs.rs/termcolor/1.4.1/termcolor/enum.ColorChoice.html
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    ValueEnum, // from `clap`
)]
enum CLI_Color_Choice {
    always,
    auto,
    never,
}

const CLI_HELP_AFTER: &str = concatcp!(
    "\
Analyze the log file at LOG_FILE_PATH; print a count of log records per
severity level. If LOG_LEVEL is passed, also list the records of that
level, matched case-insensitively.

A log record is one line of text of the form

    DATE TIME LEVEL MESSAGE...

with fields separated by single spaces. The MESSAGE is the remainder of
the line and may itself contain spaces. Blank lines are ignored. A line
with fewer than 4 fields aborts the run.

---

Version: ", env!("CARGO_PKG_VERSION"), "
MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "
Allocator: ", CLI_HELP_AFTER_ALLOCATOR, "
License: ", env!("CARGO_PKG_LICENSE"), "
Repository: ", env!("CARGO_PKG_REPOSITORY"), "
Author: ", env!("CARGO_PKG_AUTHORS"),
);

/// clap command-line arguments build-time definitions.
//
// Note:
// * the `about` is taken from `Cargo.toml:[package]:description`.
#[derive(Parser, Debug)]
#[clap(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    name = "lla",
    // write expanded information for the `--version` output
    version = concatcp!(
        "(log level analyzer)\n",
        "Version: ", env!("CARGO_PKG_VERSION"), "\n",
        "MSRV: ", env!("CARGO_PKG_RUST_VERSION"), "\n",
        "Allocator: ", CLI_HELP_AFTER_ALLOCATOR, "\n",
        "License: ", env!("CARGO_PKG_LICENSE"), "\n",
        "Repository: ", env!("CARGO_PKG_REPOSITORY"), "\n",
        "Author: ", env!("CARGO_PKG_AUTHORS"), "\n",
    ),
    after_help = CLI_HELP_AFTER,
    verbatim_doc_comment,
)]
struct CLI_Args {
    /// Path of the log file to analyze.
    // XXX: not `required`; a missing path is reported with the plain
    //      `CLI_USAGE` line on stdout, not a clap error on stderr
    #[clap(required = false, verbatim_doc_comment)]
    path: Option<String>,

    /// Severity level to list matching log records of, e.g. "ERROR".
    /// Matched against record levels case-insensitively.
    #[clap(required = false, verbatim_doc_comment)]
    level: Option<String>,

    /// Choose to print using colors.
    #[clap(
        required = false,
        short = 'c',
        long = "color",
        verbatim_doc_comment,
        value_enum,
        default_value_t = CLI_Color_Choice::auto,
    )]
    color_choice: CLI_Color_Choice,

    /// Print a summary of the file processed to stderr.
    #[clap(short, long, verbatim_doc_comment)]
    summary: bool,
}

/// Process duplicated CLI argument data into program data.
fn cli_process_args() -> (Option<FPath>, Option<String>, ColorChoice, bool) {
    let args = CLI_Args::parse();
    defo!("args {:?}", args);
    let color_choice: ColorChoice = match args.color_choice {
        CLI_Color_Choice::always => ColorChoice::Always,
        CLI_Color_Choice::auto => ColorChoice::Auto,
        CLI_Color_Choice::never => ColorChoice::Never,
    };

    (args.path, args.level, color_choice, args.summary)
}

// --------------------
// main

pub fn main() -> ExitCode {
    let start_time = Instant::now();
    if cfg!(debug_assertions) {
        stack_offset_set(Some(0));
    }
    defn!();

    let (path_opt, level_opt, color_choice, cli_opt_summary) = cli_process_args();

    let path: FPath = match path_opt {
        Some(val) => val,
        None => {
            write_stdout(CLI_USAGE.as_bytes());
            defx!("no path passed; exitcode FAILURE");
            return ExitCode::FAILURE;
        }
    };

    let logreader: LogReader = match LogReader::new(path) {
        Ok(val) => val,
        Err(err) => {
            let message = format!("{}\n", err);
            match print_colored_stdout(COLOR_ERROR, Some(color_choice), message.as_bytes()) {
                Ok(_) => {}
                Err(_print_err) => {
                    de_err!("print_colored_stdout() error {}", _print_err);
                    write_stdout(message.as_bytes());
                }
            }
            defx!("LogReader::new failed; exitcode FAILURE");
            return ExitCode::FAILURE;
        }
    };

    let counts: LevelCounts = count_records_by_level(logreader.records());
    let mut printer = LevelPrinter::new(color_choice);
    if let Err(_err) = printer.print_counts_table(&counts) {
        // stdout went away mid-report, e.g. piping to `head`
        de_err!("print_counts_table() error {}", _err);
    }

    if let Some(level) = level_opt {
        let matched: Vec<&LogRecord> = filter_records_by_level(logreader.records(), &level);
        let print_result = if !matched.is_empty() {
            printer.print_details(&matched, &level)
        } else {
            printer.print_no_records_found(&level)
        };
        if let Err(_err) = print_result {
            de_err!("printing records of level {:?} error {}", level, _err);
        }
    }

    if cli_opt_summary {
        print_summary(&logreader.summary(), &counts, start_time);
    }

    defx!("exitcode SUCCESS");

    ExitCode::SUCCESS
}
