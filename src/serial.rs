//! # Serial-Number Mini-Language
//!
//! A certificate's printed registration number comes from a free-text
//! format string carrying placeholder tokens:
//!
//! | Token | Replacement |
//! |-------|-------------|
//! | `{activityId}` | activity identifier |
//! | `{id}` | team identifier |
//! | `{year}` | four-digit Gregorian year |
//! | `{th_year}` | Gregorian year + 543 (Buddhist Era) |
//! | `{run:N}` | counter, left-zero-padded to N digits |
//! | `{run}` | counter, unpadded |
//!
//! Tokens are substituted left to right, each replaced once. Text outside
//! tokens passes through unchanged, so a format with no recognized token is
//! returned as-is — an authoring mistake the preview reveals visually, not
//! an error. Every function here is total: malformed tokens degrade to the
//! bare behavior, never a panic.
//!
//! The `with_*`/`without_*` toggles back the editing surface's "include
//! team id" / "include activity id" switches. They are idempotent:
//! including twice leaves exactly one occurrence, excluding when absent is
//! a no-op.

use chrono::Datelike;

/// Buddhist Era offset applied by `{th_year}`.
const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Segment appended/removed by the team-id toggle.
const TEAM_SEGMENT: &str = "-{id}";

/// Segment prepended/removed by the activity-id toggle.
const ACTIVITY_SEGMENT: &str = "{activityId}-";

/// Context values available to [`render`].
#[derive(Debug, Clone, Default)]
pub struct SerialVars {
    pub activity_id: String,
    pub team_id: String,
    /// Gregorian year for `{year}`/`{th_year}`. `None` uses the wall clock.
    pub year: Option<i32>,
}

/// Substitute all recognized tokens in `format` against `counter` and `vars`.
pub fn render(format: &str, counter: u32, vars: &SerialVars) -> String {
    let year = vars.year.unwrap_or_else(|| chrono::Local::now().year());
    let mut out = format.replacen("{activityId}", &vars.activity_id, 1);
    out = out.replacen("{th_year}", &(year + BUDDHIST_ERA_OFFSET).to_string(), 1);
    out = out.replacen("{year}", &year.to_string(), 1);
    out = out.replacen("{id}", &vars.team_id, 1);
    replace_run(&out, counter)
}

/// Replace the first `{run:N}` or bare `{run}` token with the counter.
///
/// A malformed count (`{run:}`, `{run:abc}`, zero) behaves like the bare
/// token: the counter is substituted unpadded. Unknown `{run`-prefixed
/// literals (`{runner}`, an unterminated `{run `) stay literal and the
/// scan continues, so they never block a genuine token later in the
/// format.
fn replace_run(s: &str, counter: u32) -> String {
    let mut search_from = 0;
    while let Some(found) = s[search_from..].find("{run") {
        let start = search_from + found;
        let Some(rel) = s[start..].find('}') else {
            // No closing brace left anywhere; nothing more to recognize.
            return s.to_string();
        };
        let end = start + rel;
        let body = &s[start + 1..end];

        let value = if body == "run" {
            counter.to_string()
        } else if let Some(count) = body.strip_prefix("run:") {
            match count.parse::<usize>() {
                Ok(width) if width > 0 => format!("{counter:0width$}"),
                _ => counter.to_string(),
            }
        } else {
            // Something like {runner} — not our token; keep scanning.
            search_from = start + 1;
            continue;
        };

        let mut out = String::with_capacity(s.len() + value.len());
        out.push_str(&s[..start]);
        out.push_str(&value);
        out.push_str(&s[end + 1..]);
        return out;
    }
    s.to_string()
}

/// Append a `-{id}` segment unless the format already carries `{id}`.
pub fn with_team_id(format: &str) -> String {
    if format.contains("{id}") {
        format.to_string()
    } else {
        format!("{format}{TEAM_SEGMENT}")
    }
}

/// Remove the team-id segment. No-op when absent.
pub fn without_team_id(format: &str) -> String {
    if format.contains(TEAM_SEGMENT) {
        format.replacen(TEAM_SEGMENT, "", 1)
    } else {
        format.replacen("{id}", "", 1)
    }
}

/// Prepend an `{activityId}-` segment unless the format already carries
/// `{activityId}`.
pub fn with_activity_id(format: &str) -> String {
    if format.contains("{activityId}") {
        format.to_string()
    } else {
        format!("{ACTIVITY_SEGMENT}{format}")
    }
}

/// Remove the activity-id segment. No-op when absent.
pub fn without_activity_id(format: &str) -> String {
    if format.contains(ACTIVITY_SEGMENT) {
        format.replacen(ACTIVITY_SEGMENT, "", 1)
    } else {
        format.replacen("{activityId}", "", 1)
    }
}
