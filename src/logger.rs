//! Terminal output: `log!`/`debug!` with colored module prefixes and an
//! in-place progress counter for the source scan.
//!
//! ```ignore
//! log!("assets"; "scanning {} files", count);
//! debug!("assets"; "{} -> {}", literal, path.display());
//!
//! let progress = ProgressLine::new("assets", "files", 120);
//! progress.inc();
//! progress.finish();
//! ```

use std::cell::Cell;
use std::io::{StdoutLock, Write, stdout};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;

/// Set by `--verbose`; gates `debug!`.
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// A progress line is drawn without a trailing newline.
static PROGRESS_ACTIVE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Print `[module] message` on its own line.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like `log!`, but only with `--verbose`.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

pub fn log(module: &str, message: &str) {
    let mut out = stdout().lock();
    if PROGRESS_ACTIVE.load(Ordering::Relaxed) {
        clear_line(&mut out);
    }
    writeln!(out, "{} {message}", prefix(module)).ok();
    out.flush().ok();
}

fn prefix(module: &str) -> String {
    let tag = format!("[{module}]");
    match module {
        "error" => tag.bright_red().bold().to_string(),
        "warning" => tag.bright_magenta().bold().to_string(),
        "check" => tag.bright_green().bold().to_string(),
        "index" | "assets" => tag.bright_blue().bold().to_string(),
        _ => tag.bright_yellow().bold().to_string(),
    }
}

fn clear_line(out: &mut StdoutLock<'_>) {
    execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
}

/// One counter redrawn in place, e.g. `[assets] files(42/69)`.
///
/// Log lines printed while it is active clear it first; the next `inc`
/// draws it again below them.
pub struct ProgressLine {
    module: &'static str,
    label: &'static str,
    total: usize,
    current: Cell<usize>,
}

impl ProgressLine {
    pub fn new(module: &'static str, label: &'static str, total: usize) -> Self {
        PROGRESS_ACTIVE.store(true, Ordering::Relaxed);
        let progress = Self {
            module,
            label,
            total,
            current: Cell::new(0),
        };
        progress.draw(false);
        progress
    }

    pub fn inc(&self) {
        self.current.set(self.current.get() + 1);
        self.draw(false);
    }

    fn line(&self) -> String {
        format!("{}({}/{})", self.label, self.current.get(), self.total)
    }

    fn draw(&self, done: bool) {
        let mut out = stdout().lock();
        clear_line(&mut out);
        write!(out, "{} {}", prefix(self.module), self.line()).ok();
        if done {
            writeln!(out).ok();
        }
        out.flush().ok();
    }

    /// Leave the final count on screen.
    pub fn finish(self) {
        PROGRESS_ACTIVE.store(false, Ordering::Relaxed);
        self.draw(true);
        std::mem::forget(self);
    }
}

impl Drop for ProgressLine {
    fn drop(&mut self) {
        PROGRESS_ACTIVE.store(false, Ordering::Relaxed);
        let mut out = stdout().lock();
        clear_line(&mut out);
        out.flush().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_line_counts() {
        let progress = ProgressLine::new("assets", "files", 3);
        assert_eq!(progress.line(), "files(0/3)");
        progress.inc();
        progress.inc();
        assert_eq!(progress.line(), "files(2/3)");
        progress.finish();
    }

    #[test]
    fn test_prefix_contains_module() {
        assert!(prefix("assets").contains("[assets]"));
        assert!(prefix("custom").contains("[custom]"));
    }
}
