//! Status output for pipeline runs
//!
//! Every user-facing line goes through [`Reporter`], which honors the
//! `--quiet` flag and colors the leading status tag.

use console::Style;

/// Status tag printed in front of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Info,
    New,
    Mod,
    Skip,
    Del,
    Exe,
    Ok,
    Err,
}

impl Tag {
    pub fn label(self) -> &'static str {
        match self {
            Tag::Info => "[INFO]",
            Tag::New => "[NEW]",
            Tag::Mod => "[MOD]",
            Tag::Skip => "[SKIP]",
            Tag::Del => "[DEL]",
            Tag::Exe => "[EXE]",
            Tag::Ok => "[OK]",
            Tag::Err => "[ERR]",
        }
    }

    fn style(self) -> Style {
        match self {
            Tag::Info => Style::new().cyan(),
            Tag::New | Tag::Ok => Style::new().green().bold(),
            Tag::Mod => Style::new().yellow(),
            Tag::Skip => Style::new().dim(),
            Tag::Del | Tag::Err => Style::new().red().bold(),
            Tag::Exe => Style::new().magenta(),
        }
    }
}

/// Quiet-aware line printer
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Format a tagged line without printing it
    pub fn format(tag: Tag, message: &str) -> String {
        format!("{} {}", tag.style().apply_to(tag.label()), message)
    }

    /// Print a tagged line; errors go to stderr
    pub fn line(&self, tag: Tag, message: impl AsRef<str>) {
        if self.quiet {
            return;
        }
        let line = Self::format(tag, message.as_ref());
        if tag == Tag::Err {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.line(Tag::Info, message);
    }

    pub fn ok(&self, message: impl AsRef<str>) {
        self.line(Tag::Ok, message);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.line(Tag::Err, message);
    }
}
