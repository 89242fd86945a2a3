//! # Project Name Validation
//!
//! Decides whether a user-supplied directory/project name is an acceptable npm-style
//! package name. The input may carry a path (`apps/my-app`), a single trailing separator
//! (`my-app/`) and a scope segment (`@acme/my-app`).
//!
//! The check is purely textual: it never touches the filesystem and never fails. A
//! rejection is an ordinary outcome carried by [`InvalidProjectName`].

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    // An optional `@scope/` prefix, then a lowercase alphanumeric first character.
    static ref PROJECT_NAME_RE: Regex = Regex::new(r"^(?:@[a-z0-9._-]+/)?[a-z0-9][a-z0-9._-]*$")
        .expect("project name pattern must compile");
}

/// The rejection shown to the user, verbatim, beneath the name prompt.
pub const INVALID_PROJECT_NAME_MESSAGE: &str =
    "Project name must only use lowercase alphanumeric characters, -, _, and may include a scope.";

/// The single way a project name can be rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{message}", message = INVALID_PROJECT_NAME_MESSAGE)]
pub struct InvalidProjectName;

/// Validates a raw project name.
///
/// `"."` and `""` are always accepted. Everything else is reduced to its effective
/// project name (see [`effective_project_name`]) and matched against the package name
/// pattern as a whole.
pub fn validate_project_name(input: &str) -> Result<(), InvalidProjectName> {
    if input == "." || input.is_empty() {
        return Ok(());
    }

    if PROJECT_NAME_RE.is_match(&effective_project_name(input)) {
        Ok(())
    } else {
        Err(InvalidProjectName)
    }
}

/// Returns the part of `input` that is checked against the naming pattern.
///
/// One trailing `/` is dropped, then the path is split into segments. If any segment
/// starts with `@`, everything from the first such segment onwards is the name
/// (`foo/@scope/app` becomes `@scope/app`). Otherwise the last segment is the name.
pub fn effective_project_name(input: &str) -> String {
    let trimmed = input.strip_suffix('/').unwrap_or(input);
    let segments: Vec<&str> = trimmed.split('/').collect();

    match segments.iter().position(|segment| segment.starts_with('@')) {
        Some(scope_index) => segments
            .get(scope_index..)
            .map(|scoped| scoped.join("/"))
            .unwrap_or_default(),
        None => segments.last().copied().unwrap_or_default().to_string(),
    }
}
