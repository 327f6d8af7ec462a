//! Hexagram casting.
//!
//! Five methods share one shape: derive upper and lower trigrams and a
//! changing-line set from the inputs, with a draw from the random source
//! folded in so identical inputs still spread across the cycle.

use serde::Serialize;

use mingli_time::LocalDateTime;

use crate::error::YijingError;
use crate::hexagram::Hexagram;
use crate::random::RandomSource;
use crate::trigram::Trigram;

/// Accepted question length, in characters.
pub const QUESTION_MIN_CHARS: usize = 2;
pub const QUESTION_MAX_CHARS: usize = 200;

/// Topic keywords the personalized method weighs a question by.
const TOPIC_KEYWORDS: [&str; 12] = [
    "事业", "工作", "财运", "金钱", "感情", "爱情", "婚姻", "健康", "学业", "考试", "家庭", "出行",
];

/// How a hexagram was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CastMethod {
    Coin,
    Time,
    Number,
    PlumBlossom,
    Personalized,
}

impl CastMethod {
    pub fn name(self) -> &'static str {
        match self {
            Self::Coin => "coin",
            Self::Time => "time",
            Self::Number => "number",
            Self::PlumBlossom => "plum_blossom",
            Self::Personalized => "personalized",
        }
    }
}

/// Outcome of a cast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastResult {
    pub method: CastMethod,
    pub hexagram: Hexagram,
}

/// Fold an optional caller identity into a number so distinct callers
/// casting at the same moment diverge.
fn identity_salt(user_id: Option<&str>) -> u64 {
    match user_id {
        Some(id) => id
            .bytes()
            .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64)),
        None => 0,
    }
}

fn draw64(src: &dyn RandomSource) -> u64 {
    (src.next_float() * 64.0) as u64
}

fn changing_line(n: u64) -> Vec<u8> {
    vec![(n % 6) as u8 + 1]
}

/// Three-coin method: six throws of three coins, bottom line first.
/// Zero or three heads make an old (changing) line.
pub fn cast_by_coins(src: &dyn RandomSource) -> CastResult {
    let mut lines = [false; 6];
    let mut changing = Vec::new();
    for (i, line) in lines.iter_mut().enumerate() {
        let heads = (0..3).filter(|_| src.next_float() < 0.5).count();
        // Heads count 3, tails count 2; totals 6..=9, odd totals are yang.
        *line = (6 + heads) % 2 == 1;
        if heads == 0 || heads == 3 {
            changing.push(i as u8 + 1);
        }
    }
    let hexagram = Hexagram::from_lines(lines, changing).expect("line positions in 1..=6");
    CastResult {
        method: CastMethod::Coin,
        hexagram,
    }
}

/// Time method: trigrams from the date and time digits plus salt and draw.
pub fn cast_by_time(
    t: &LocalDateTime,
    user_id: Option<&str>,
    src: &dyn RandomSource,
) -> CastResult {
    let salt = identity_salt(user_id);
    let draw = draw64(src);
    let date_sum = t.year as u64 + t.month as u64 + t.day as u64;
    let clock_sum = date_sum + t.hour as u64 + t.minute as u64;
    let upper = Trigram::from_number_wrapping(date_sum + salt + draw);
    let lower = Trigram::from_number_wrapping(clock_sum + salt + draw);
    let hexagram = Hexagram::new(upper, lower, changing_line(clock_sum + salt + draw))
        .expect("line positions in 1..=6");
    CastResult {
        method: CastMethod::Time,
        hexagram,
    }
}

/// Number method: trigrams from the epoch-minute count of the cast moment.
pub fn cast_by_number(
    t: &LocalDateTime,
    user_id: Option<&str>,
    src: &dyn RandomSource,
) -> CastResult {
    let salt = identity_salt(user_id);
    let draw = draw64(src);
    let v = t.minutes_since_epoch().unsigned_abs() + salt + draw;
    let upper = Trigram::from_number_wrapping(v);
    let lower = Trigram::from_number_wrapping(v / 8);
    let hexagram =
        Hexagram::new(upper, lower, changing_line(v)).expect("line positions in 1..=6");
    CastResult {
        method: CastMethod::Number,
        hexagram,
    }
}

/// Plum Blossom method: upper trigram from the question, lower from the
/// question plus the minute of day.
pub fn cast_by_plum_blossom(
    question: &str,
    t: &LocalDateTime,
    user_id: Option<&str>,
    src: &dyn RandomSource,
) -> Result<CastResult, YijingError> {
    let qlen = validated_length(question)? as u64;
    let salt = identity_salt(user_id);
    let draw = draw64(src);
    let minutes = t.minute_of_day() as u64;
    let upper = Trigram::from_number_wrapping(qlen + salt + draw);
    let lower = Trigram::from_number_wrapping(qlen + minutes + salt + draw);
    let hexagram = Hexagram::new(upper, lower, changing_line(qlen + minutes + salt + draw))?;
    Ok(CastResult {
        method: CastMethod::PlumBlossom,
        hexagram,
    })
}

fn validated_length(question: &str) -> Result<usize, YijingError> {
    let n = question.chars().count();
    if !(QUESTION_MIN_CHARS..=QUESTION_MAX_CHARS).contains(&n) {
        return Err(YijingError::QuestionLength(n));
    }
    Ok(n)
}

/// Weight in `[0, 1)` from the question text: topic keywords, length,
/// and punctuation density.
fn question_weight(question: &str, len: usize) -> f64 {
    let keywords = TOPIC_KEYWORDS
        .iter()
        .filter(|k| question.contains(*k))
        .count() as f64;
    let keyword_part = (keywords / TOPIC_KEYWORDS.len() as f64).min(1.0);
    let length_part = (len as f64 / QUESTION_MAX_CHARS as f64).min(1.0);
    let punct = question
        .chars()
        .filter(|c| matches!(c, '?' | '!' | '？' | '！' | '，' | '。' | '、'))
        .count() as f64;
    let punct_part = (punct / len as f64).min(1.0);
    ((keyword_part + length_part + punct_part) / 3.0).min(1.0 - f64::EPSILON)
}

/// Personalized method: blends a stable hash of caller and question, the
/// question weight, the time-of-day fraction, and a draw.
pub fn cast_personalized(
    question: &str,
    t: &LocalDateTime,
    user_id: Option<&str>,
    src: &dyn RandomSource,
) -> Result<CastResult, YijingError> {
    let len = validated_length(question)?;
    let seed = identity_salt(user_id)
        .wrapping_mul(1_000_003)
        .wrapping_add(identity_salt(Some(question)));
    let seed_part = (seed % 10_000) as f64 / 10_000.0;
    let weight = question_weight(question, len);
    let time_part = t.minute_of_day() as f64 / 1440.0;
    let blend = (seed_part + weight + time_part + src.next_float()) / 4.0;

    let upper = Trigram::from_number_wrapping((blend * 8.0) as u64 + 1);
    let lower = Trigram::from_number_wrapping((blend * 64.0) as u64 + 1);
    let hexagram = Hexagram::new(upper, lower, changing_line((blend * 384.0) as u64))?;
    Ok(CastResult {
        method: CastMethod::Personalized,
        hexagram,
    })
}
