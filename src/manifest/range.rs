//! npm-style version range evaluation.
//!
//! Manifest ranges follow npm rules, which differ from Cargo's in a few
//! places: a bare version is an exact match, comparators are separated by
//! whitespace, `||` joins alternatives and `a - b` is an inclusive span.
//! Ranges are rewritten into Cargo syntax and evaluated with the `semver`
//! crate.

use semver::{Version, VersionReq};

/// A union of comparator sets, e.g. `>=1.0.0 <2.0.0 || ^3.1.0`.
#[derive(Debug, Clone)]
pub struct VersionRange {
    alternatives: Vec<VersionReq>,
}

impl VersionRange {
    /// Parse an npm range. Returns `None` when any alternative is invalid.
    pub fn parse(text: &str) -> Option<Self> {
        let alternatives = text
            .split("||")
            .map(|part| {
                let normalized = normalize_comparator_set(part)?;
                VersionReq::parse(&normalized).ok()
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Self { alternatives })
    }

    /// Whether `version` satisfies at least one alternative.
    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|req| req.matches(version))
    }
}

/// Parse a single version, tolerating a leading `=` or `v`.
pub fn parse_version(raw: &str) -> Option<Version> {
    let t = raw.trim();
    let t = t.strip_prefix('=').unwrap_or(t).trim_start();
    let t = t
        .strip_prefix('v')
        .or_else(|| t.strip_prefix('V'))
        .unwrap_or(t);
    Version::parse(t).ok()
}

/// Whether the installed `version` satisfies `range`.
///
/// Unparseable versions or ranges never satisfy.
pub fn satisfies(version: &str, range: &str) -> bool {
    match (parse_version(version), VersionRange::parse(range)) {
        (Some(v), Some(r)) => r.matches(&v),
        _ => false,
    }
}

const OPERATOR_CHARS: &[char] = &['<', '>', '=', '^', '~'];

fn normalize_comparator_set(raw: &str) -> Option<String> {
    let set = raw.trim();
    if set.is_empty() {
        return Some("*".to_string());
    }

    if let Some((low, high)) = set.split_once(" - ") {
        let low = normalize_comparator(">=", low.trim())?;
        let high = normalize_comparator("<=", high.trim())?;
        return Some(join_comparators(vec![low, high]));
    }

    let mut comparators = Vec::new();
    let mut pending_op: Option<&str> = None;
    for token in set.split_whitespace() {
        if token.chars().all(|c| OPERATOR_CHARS.contains(&c)) {
            if pending_op.is_some() {
                return None;
            }
            pending_op = Some(token);
            continue;
        }
        let (op, version) = match pending_op.take() {
            Some(op) => (op, token),
            None => {
                let split = token
                    .find(|c: char| !OPERATOR_CHARS.contains(&c))
                    .unwrap_or(token.len());
                token.split_at(split)
            }
        };
        comparators.push(normalize_comparator(op, version)?);
    }
    if pending_op.is_some() {
        return None;
    }

    Some(join_comparators(comparators))
}

fn join_comparators(comparators: Vec<String>) -> String {
    let bounded: Vec<String> = comparators.into_iter().filter(|c| c != "*").collect();
    if bounded.is_empty() {
        "*".to_string()
    } else {
        bounded.join(", ")
    }
}

fn is_wildcard(part: &str) -> bool {
    matches!(part, "x" | "X" | "*")
}

fn normalize_comparator(op: &str, version: &str) -> Option<String> {
    let op = match op {
        "" | "=" => "=",
        "~>" => "~",
        ">" | ">=" | "<" | "<=" | "^" | "~" => op,
        _ => return None,
    };

    let version = version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version);
    if version.is_empty() {
        return None;
    }

    let core_end = version
        .find(|c: char| c == '-' || c == '+')
        .unwrap_or(version.len());
    let (core, suffix) = version.split_at(core_end);

    let mut parts = Vec::new();
    let mut truncated = false;
    for part in core.split('.') {
        if is_wildcard(part) {
            truncated = true;
            break;
        }
        parts.push(part);
    }

    if parts.is_empty() {
        // `*`, `>=x` and friends match anything; `<*` and `>*` match nothing.
        return match op {
            "<" | ">" => None,
            _ => Some("*".to_string()),
        };
    }

    let mut out = format!("{}{}", op, parts.join("."));
    if !truncated {
        out.push_str(suffix);
    }
    Some(out)
}
