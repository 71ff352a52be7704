//! Maneuver text to narration-ready text
//!
//! Routing engines emit distances with abbreviated units ("200m", "1km") that
//! voice output reads poorly. The formatter swaps the meter token for "steps"
//! and the kilometer token for "kilometres", matching whole tokens only so the
//! `m` inside `km` (or inside any other word) is never substituted.

const METERS_TOKEN: &str = "m";
const METERS_SPOKEN: &str = "steps";
const KILOMETERS_TOKEN: &str = "km";
const KILOMETERS_SPOKEN: &str = "kilometres";

/// Rewrite raw maneuver text into its spoken form
///
/// A token is a maximal run of alphabetic characters, so "200m" splits into
/// "200" + "m" and "1km" into "1" + "km". Deterministic, total, and idempotent:
/// neither replacement ("steps", "kilometres") is itself a unit token.
pub fn spoken_instruction(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut token = String::new();

    for ch in raw.chars() {
        if ch.is_alphabetic() {
            token.push(ch);
        } else {
            flush_token(&mut out, &token);
            token.clear();
            out.push(ch);
        }
    }
    flush_token(&mut out, &token);

    out
}

fn flush_token(out: &mut String, token: &str) {
    match token {
        KILOMETERS_TOKEN => out.push_str(KILOMETERS_SPOKEN),
        METERS_TOKEN => out.push_str(METERS_SPOKEN),
        _ => out.push_str(token),
    }
}
