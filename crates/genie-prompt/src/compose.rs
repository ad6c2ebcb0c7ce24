// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image prompt composition from caption and tag fragments.

/// Join prompt fragments into a single comma-separated image prompt.
///
/// Fragments are trimmed and stripped of trailing periods; empty fragments
/// and case-insensitive duplicates are dropped. First occurrence wins.
pub fn compose_image_prompt<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: Vec<String> = Vec::new();
    let mut parts: Vec<String> = Vec::new();
    for fragment in fragments {
        let part = fragment.as_ref().trim().trim_end_matches('.').trim_end();
        if part.is_empty() {
            continue;
        }
        let key = part.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        parts.push(part.to_string());
    }
    parts.join(", ")
}
