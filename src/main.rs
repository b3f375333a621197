//! CLI entry point for skimmer

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use skimmer::{ExportError, ProgressObserver, collect_records, format_size, write_csv};

#[derive(Parser, Debug)]
#[command(name = "skimmer")]
#[command(about = "Skims a directory and outputs data about every file inside (recursively) to a CSV file")]
#[command(version)]
struct Args {
    /// Input directory path
    #[arg(short, long, value_name = "DIR")]
    input: PathBuf,

    /// Output file path (should end in .csv)
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
}

/// Progress observer that renders a transient status line on stderr.
///
/// Only active when stderr is a terminal; under redirection the walk stays
/// silent and the persisted summary lines on stdout are all that appears.
struct ConsoleStatus {
    interactive: bool,
    last_len: usize,
}

impl ConsoleStatus {
    fn new() -> Self {
        Self {
            interactive: io::stderr().is_terminal(),
            last_len: 0,
        }
    }

    fn status(&mut self, text: &str) {
        if !self.interactive {
            return;
        }
        let len = text.chars().count();
        let pad = self.last_len.saturating_sub(len);
        eprint!("\r{}{}", text, " ".repeat(pad));
        let _ = io::stderr().flush();
        self.last_len = len;
    }

    fn clear(&mut self) {
        if self.interactive && self.last_len > 0 {
            eprint!("\r{}\r", " ".repeat(self.last_len));
            let _ = io::stderr().flush();
            self.last_len = 0;
        }
    }
}

impl ProgressObserver for ConsoleStatus {
    fn directory_entered(&mut self, path: &Path) {
        self.status(&format!("Reading directory: {}", path.display()));
    }

    fn finished(&mut self, _files_found: usize, _bytes_read: u64) {
        self.clear();
    }
}

/// Print a persisted result line with a colored ✓ or ✗ marker.
fn print_result(ok: bool, message: &str) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let mut marker = ColorSpec::new();
    marker
        .set_fg(Some(if ok { Color::Green } else { Color::Red }))
        .set_bold(true);
    stdout.set_color(&marker)?;
    write!(stdout, "{}", if ok { "✓" } else { "✗" })?;
    stdout.reset()?;
    writeln!(stdout, " {}", message)
}

fn main() {
    let args = Args::parse();

    let mut status = ConsoleStatus::new();
    let report = collect_records(&args.input, &mut status);

    let total = i64::try_from(report.bytes_read).unwrap_or(i64::MAX);
    let _ = print_result(
        true,
        &format!(
            "Read directory. Files found: {} ({})",
            report.files_found,
            format_size(total)
        ),
    );

    if let Err(e) = write_csv(&report.records, &args.output) {
        let hint = match &e {
            ExportError::Open { .. } => {
                " Make sure it isn't open in a separate program, such as Excel."
            }
            ExportError::Write(_) => "",
        };
        let _ = print_result(false, &format!("Failed to write file.{}", hint));
        eprintln!("skimmer: {}", e);
        process::exit(1);
    }

    let _ = print_result(true, &format!("Saved file to {}", args.output.display()));
}
