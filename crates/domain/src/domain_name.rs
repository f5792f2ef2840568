//! Helpers for the textual, lower-cased domain names used as store keys.
//!
//! Names are kept in presentation form without the trailing root dot:
//! `www.example.com`, never `WWW.Example.COM.`.
use smallvec::SmallVec;

use crate::errors::DomainError;

const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Label written in place of an owner name to mean the zone apex.
pub const APEX_LABEL: &str = "@";

/// Lower-cases `name` and strips a trailing root dot. Never fails; used on
/// the query path where an odd name simply matches nothing.
pub fn normalize(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_ascii_lowercase()
}

/// Normalizes `name` and checks it is a usable owner name.
pub fn canonicalize(name: &str) -> Result<String, DomainError> {
    let canonical = normalize(name);
    validate(&canonical)?;
    Ok(canonical)
}

pub fn validate(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "Domain cannot be empty".to_string(),
        ));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "{} exceeds {} characters",
            name, MAX_NAME_LEN
        )));
    }
    for label in labels(name) {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "{} has an empty or oversized label",
                name
            )));
        }
        let valid = label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '*');
        if !valid {
            return Err(DomainError::InvalidDomainName(format!(
                "{} contains invalid characters",
                name
            )));
        }
    }
    Ok(())
}

pub fn labels(name: &str) -> SmallVec<[&str; 8]> {
    name.split('.').collect()
}

/// Strips the leftmost label: `www.example.com` -> `example.com`.
/// Returns `None` once `name` is a single label.
#[inline]
pub fn parent(name: &str) -> Option<&str> {
    name.split_once('.')
        .map(|(_, rest)| rest)
        .filter(|rest| !rest.is_empty())
}

/// Builds the owner name for `label` inside `apex`. An empty label or `@`
/// names the apex itself.
pub fn join(label: &str, apex: &str) -> String {
    if label.is_empty() || label == APEX_LABEL {
        apex.to_string()
    } else {
        format!("{}.{}", label, apex)
    }
}

/// Whether `name` equals `apex` or lies below it. Both must already be
/// normalized.
pub fn is_within(name: &str, apex: &str) -> bool {
    name == apex
        || (name.len() > apex.len()
            && name.ends_with(apex)
            && name.as_bytes()[name.len() - apex.len() - 1] == b'.')
}
