//! `/etc/sysconfig/docker` assignments
//!
//! The file is shell, but only two assignments matter and it is never
//! executed. Values are unquoted with shell word rules and then split on
//! commas and whitespace, which accepts both layouts seen in the wild:
//!
//! ```text
//! ADD_REGISTRY='--add-registry registry.access.redhat.com --add-registry quay.io'
//! INSECURE_REGISTRY="dev.example.com:5000","legacy.example.com"
//! ```

use std::path::{Path, PathBuf};

use reggie_fs::io;

use super::{MissingPolicy, RegistryMap, RegistrySource, display_path, upsert_urls};
use crate::{Error, Result};

const ADD_REGISTRY: &str = "ADD_REGISTRY";
const INSECURE_REGISTRY: &str = "INSECURE_REGISTRY";

/// Docker daemon flags that may prefix each URL inside the values.
const REGISTRY_FLAGS: [&str; 2] = ["--add-registry", "--insecure-registry"];

/// One recognized assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryAssignment {
    /// 1-based line number
    pub line: usize,
    /// `true` for `ADD_REGISTRY`, `false` for `INSECURE_REGISTRY`
    pub secure: bool,
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {message}")]
pub struct SyntaxError {
    pub line: usize,
    pub message: String,
}

/// Extract the `ADD_REGISTRY` and `INSECURE_REGISTRY` assignments, in file order.
///
/// Other keys are ignored without being tokenized, so a malformed unrelated
/// line never fails the parse.
pub fn parse_sysconfig(content: &str) -> std::result::Result<Vec<RegistryAssignment>, SyntaxError> {
    let mut assignments = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = match line.strip_prefix("export") {
            Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
            _ => line,
        };

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let secure = match key.trim_end() {
            ADD_REGISTRY => true,
            INSECURE_REGISTRY => false,
            _ => continue,
        };

        let urls = split_registry_list(value).map_err(|message| SyntaxError {
            line: idx + 1,
            message,
        })?;
        assignments.push(RegistryAssignment {
            line: idx + 1,
            secure,
            urls,
        });
    }

    Ok(assignments)
}

fn split_registry_list(value: &str) -> std::result::Result<Vec<String>, String> {
    let words = shell_words::split(value).map_err(|e| e.to_string())?;

    let mut urls = Vec::new();
    for word in &words {
        for token in word.split(|c: char| c == ',' || c.is_whitespace()) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match strip_flag(token) {
                Some(Some(url)) => urls.push(url.to_string()),
                Some(None) => {}
                None => urls.push(token.to_string()),
            }
        }
    }
    Ok(urls)
}

/// `Some(None)` for a bare flag, `Some(Some(url))` for `--flag=url`, `None` otherwise.
fn strip_flag(token: &str) -> Option<Option<&str>> {
    for flag in REGISTRY_FLAGS {
        if token == flag {
            return Some(None);
        }
        if let Some(url) = token.strip_prefix(flag).and_then(|rest| rest.strip_prefix('=')) {
            return Some((!url.is_empty()).then_some(url));
        }
    }
    None
}

/// The docker sysconfig file.
#[derive(Debug, Clone)]
pub struct SysconfigSource {
    path: PathBuf,
    missing: MissingPolicy,
}

impl SysconfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            missing: MissingPolicy::default(),
        }
    }

    pub fn with_missing_policy(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }
}

impl RegistrySource for SysconfigSource {
    fn name(&self) -> &'static str {
        "sysconfig"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn missing_policy(&self) -> MissingPolicy {
        self.missing
    }

    fn load_into(&self, entries: &mut RegistryMap) -> Result<usize> {
        let content = io::read_text(&self.path)?;
        let assignments = parse_sysconfig(&content).map_err(|e| Error::Sysconfig {
            path: self.path.clone(),
            line: e.line,
            message: e.message,
        })?;

        let from_file = display_path(&self.path);
        let mut count = 0;
        for assignment in &assignments {
            count += upsert_urls(entries, &assignment.urls, &from_file, assignment.secure);
        }
        Ok(count)
    }
}
