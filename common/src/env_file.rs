//! # Env File Model
//!
//! The env file is a newline-delimited list of shell `export NAME=VALUE` statements.
//! Apart from the line being replaced, every line is opaque and kept byte for byte.
//!
//! The text transforms here never touch the disk; the [`LineEditor`] port applies
//! them to a real file.

use std::fmt;
use std::path::Path;

use crate::error::FileError;
use crate::inventory::HostFqdn;

pub const HOST_IP_VAR: &str = "HOST_IP";

/// A single `export NAME=VALUE` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLine {
    name: String,
    value: String,
}

impl ExportLine {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// `export HOST_IP=<fqdn>`. The FQDN goes in unquoted and unchecked.
    pub fn host_ip(fqdn: &HostFqdn) -> Self {
        Self::new(HOST_IP_VAR, fqdn.as_str())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The text every declaration of this variable starts with, e.g. `export HOST_IP=`.
    pub fn prefix(&self) -> String {
        format!("export {}=", self.name)
    }
}

impl fmt::Display for ExportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix(), self.value)
    }
}

/// Drops every line starting with `prefix` and returns the rest with the number dropped.
///
/// Kept lines retain their own terminators, so `\r\n` files and a missing final
/// newline survive untouched.
pub fn strip_lines_with_prefix(content: &str, prefix: &str) -> (String, usize) {
    let mut kept = String::with_capacity(content.len());
    let mut removed = 0;

    for line in content.split_inclusive('\n') {
        if line.starts_with(prefix) {
            removed += 1;
        } else {
            kept.push_str(line);
        }
    }

    (kept, removed)
}

/// Puts `line` in front of `content`, normalising its ending to a single `\n`.
pub fn prepend_line(content: &str, line: &str) -> String {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut out = String::with_capacity(line.len() + 1 + content.len());
    out.push_str(line);
    out.push('\n');
    out.push_str(content);
    out
}

/// Line-level edits on a file that already exists.
pub trait LineEditor {
    /// Removes every line starting with `prefix`, returning how many were removed.
    fn remove_lines_with_prefix(&self, path: &Path, prefix: &str) -> Result<usize, FileError>;

    /// Writes `line` as the new first line, followed by the previous content.
    fn prepend_line(&self, path: &Path, line: &str) -> Result<(), FileError>;
}
