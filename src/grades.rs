//! Grade-band parsing and interval overlap.
//!
//! Program records describe their audience as free text ("K–1", "PreK–2",
//! "3, 5–7", "All Ages"). This module turns that text into closed integer
//! intervals and tests them against the fixed grade presets used as the
//! filter vocabulary.

/// Sentinel grade for PreK.
pub const PREK: i32 = -1;

/// Sentinel grade for "no upper bound" (adult, 13+, all ages).
pub const OPEN_END: i32 = 99;

/// Closed integer interval of grades, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeInterval {
    pub low: i32,
    pub high: i32,
}

impl GradeInterval {
    pub const fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    /// Boundary-inclusive overlap: [a,b] meets [x,y] iff max(a,x) <= min(b,y).
    pub fn overlaps(&self, other: &GradeInterval) -> bool {
        self.low.max(other.low) <= self.high.min(other.high)
    }
}

/// Named grade band offered as a filter chip.
pub struct GradePreset {
    pub id: &'static str,
    pub range: GradeInterval,
}

/// Fixed filter vocabulary. Never mutated.
pub const GRADE_PRESETS: &[GradePreset] = &[
    GradePreset { id: "PreK", range: GradeInterval::new(PREK, PREK) },
    GradePreset { id: "K–1", range: GradeInterval::new(0, 1) },
    GradePreset { id: "2–5", range: GradeInterval::new(2, 5) },
    GradePreset { id: "6–8", range: GradeInterval::new(6, 8) },
    GradePreset { id: "8–10", range: GradeInterval::new(8, 10) },
    GradePreset { id: "10–12", range: GradeInterval::new(10, 12) },
];

/// Delivery formats offered as filter chips. The id doubles as the label.
pub const FORMAT_PRESETS: &[&str] = &["10-week", "4-week", "5-day camp", "1-day field trip"];

/// Parse free-text grade description into a list of closed intervals.
///
/// Recognized whole-string forms: "all ages" (substring) -> [-1,99],
/// "adult" -> [18,99], "13+" -> [13,99], "prek" -> [-1,-1]. Anything else
/// is split on commas and each token is matched against, in order:
/// bare "prek", "prek–N", "k–N", "A–B", bare number. Tokens that match
/// nothing are dropped silently; this function never errors.
pub fn parse_grade_intervals(text: &str) -> Vec<GradeInterval> {
    let s = text.trim();
    if s.is_empty() {
        return Vec::new();
    }
    let lower = s.to_lowercase();

    if lower.contains("all ages") {
        return vec![GradeInterval::new(PREK, OPEN_END)];
    }
    match lower.as_str() {
        "adult" => return vec![GradeInterval::new(18, OPEN_END)],
        "13+" => return vec![GradeInterval::new(13, OPEN_END)],
        "prek" => return vec![GradeInterval::new(PREK, PREK)],
        _ => {}
    }

    s.split(',').filter_map(parse_token).collect()
}

fn parse_token(token: &str) -> Option<GradeInterval> {
    let t = token.trim();
    if t.is_empty() {
        return None;
    }
    let lower = t.to_lowercase();

    if lower == "prek" {
        return Some(GradeInterval::new(PREK, PREK));
    }
    // "PreK–1" and friends: "prek", a dash, then a number. Any occurrence
    // in the token may carry the range, not just the first.
    for (pos, _) in lower.match_indices("prek") {
        if let Some(n) = dash_number(&lower[pos + 4..]) {
            return Some(GradeInterval::new(PREK, n));
        }
    }
    // "K–1": a standalone k, a dash, then a number
    if let Some(n) = k_dash_number(&lower) {
        return Some(GradeInterval::new(0, n));
    }
    // "2–5": two numbers around a dash. Inverted ranges pass through as given.
    if let Some((a, b)) = number_range(&lower) {
        return Some(GradeInterval::new(a, b));
    }
    // "3": the whole token is a bare one or two digit number
    if !lower.is_empty() && lower.len() <= 2 && lower.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(n) = lower.parse::<i32>() {
            return Some(GradeInterval::new(n, n));
        }
    }
    None
}

/// Expect optional whitespace, a dash (hyphen or en-dash), optional
/// whitespace, then a one or two digit number. Trailing text is ignored.
fn dash_number(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let dash = s.chars().next()?;
    if dash != '-' && dash != '–' {
        return None;
    }
    let rest = s[dash.len_utf8()..].trim_start();
    leading_number(rest)
}

/// Parse up to two leading ASCII digits.
fn leading_number(s: &str) -> Option<i32> {
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).take(2).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Find "k" at a word boundary followed by a dash and a number. The
/// boundary check keeps the k in "prek" from matching here.
fn k_dash_number(s: &str) -> Option<i32> {
    let mut prev: Option<char> = None;
    for (i, c) in s.char_indices() {
        if c == 'k' {
            let at_boundary = prev.is_none_or(|p| !p.is_ascii_alphanumeric() && p != '_');
            if at_boundary {
                if let Some(n) = dash_number(&s[i + 1..]) {
                    return Some(n);
                }
            }
        }
        prev = Some(c);
    }
    None
}

/// Find the first number–dash–number sequence anywhere in the token.
/// Tries a two-digit first number, then backtracks to one digit.
fn number_range(s: &str) -> Option<(i32, i32)> {
    for (i, c) in s.char_indices() {
        if !c.is_ascii_digit() {
            continue;
        }
        let tail = &s[i..];
        let digits: String = tail.chars().take_while(|c| c.is_ascii_digit()).take(2).collect();
        for take in (1..=digits.len()).rev() {
            if let (Ok(first), Some(second)) = (digits[..take].parse::<i32>(), dash_number(&tail[take..])) {
                return Some((first, second));
            }
        }
    }
    None
}
