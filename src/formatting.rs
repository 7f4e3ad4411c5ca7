use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;

use figx_lib::{ErrorPayload, FigxError};

/// Write rendered text to a file (creating parent directories) or stdout.
pub fn write_output(content: &str, output: Option<&Path>) -> io::Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()
        }
    }
}

/// Render an error to stderr and return the appropriate exit code.
pub fn render_error(err: FigxError) -> ExitCode {
    let payload = err.to_payload();
    eprint!("{}", format_error(&payload, io::stderr().is_terminal()));

    // Every fatal error exits with 2.
    ExitCode::from(2)
}

/// `Error: …` / `Hint: …` lines for a payload.
pub fn format_error(payload: &ErrorPayload, colorize: bool) -> String {
    let mut buf = String::new();
    writeln!(buf, "{} {}", color("Error:", "31", colorize), payload.message).ok();
    if let Some(hint) = payload.remediation.as_deref().filter(|h| !h.is_empty()) {
        writeln!(buf, "{} {}", color("Hint:", "33", colorize), hint).ok();
    }
    buf
}

fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}
