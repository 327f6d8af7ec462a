//! Deserializable request types.
//!
//! These mirror the JSON contracts the outer API layer sends. Syntactic
//! validation happens upstream; numeric ranges are still re-checked here.

use serde::Deserialize;

use mingli_bazi::Gender;
use mingli_time::LocalDateTime;
use mingli_yijing::CastMethod;

use crate::error::MingliError;

/// A birth record as submitted by a caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    #[serde(default)]
    pub name: Option<String>,
    /// "YYYY-MM-DD".
    pub birth_date: String,
    /// "HH:MM"; noon is assumed when absent.
    #[serde(default)]
    pub birth_time: Option<String>,
    #[serde(default)]
    pub gender: Option<GenderInput>,
    #[serde(default)]
    pub birth_place: Option<String>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
}

/// A divination request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivinationInput {
    pub question: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub divination_method: Option<MethodInput>,
    /// "YYYY-MM-DD HH:MM" or "YYYY-MM-DDTHH:MM" local wall-clock time;
    /// the current clock is used when absent.
    #[serde(default)]
    pub local_time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderInput {
    Male,
    Female,
}

impl From<GenderInput> for Gender {
    fn from(g: GenderInput) -> Self {
        match g {
            GenderInput::Male => Gender::Male,
            GenderInput::Female => Gender::Female,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodInput {
    Coin,
    Time,
    Number,
    PlumBlossom,
    Personalized,
}

impl From<MethodInput> for CastMethod {
    fn from(m: MethodInput) -> Self {
        match m {
            MethodInput::Coin => CastMethod::Coin,
            MethodInput::Time => CastMethod::Time,
            MethodInput::Number => CastMethod::Number,
            MethodInput::PlumBlossom => CastMethod::PlumBlossom,
            MethodInput::Personalized => CastMethod::Personalized,
        }
    }
}

fn parse_u32(s: &str, msg: &'static str) -> Result<u32, MingliError> {
    s.parse().map_err(|_| MingliError::InvalidInput(msg))
}

/// Parse "YYYY-MM-DD" plus optional "HH:MM" into a validated instant.
pub fn parse_birth_instant(
    date: &str,
    time: Option<&str>,
) -> Result<LocalDateTime, MingliError> {
    let mut parts = date.split('-');
    let (Some(y), Some(m), Some(d), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(MingliError::InvalidInput("date must be YYYY-MM-DD"));
    };
    let year: i32 = y
        .parse()
        .map_err(|_| MingliError::InvalidInput("date must be YYYY-MM-DD"))?;
    let month = parse_u32(m, "date must be YYYY-MM-DD")?;
    let day = parse_u32(d, "date must be YYYY-MM-DD")?;

    let (hour, minute) = match time {
        Some(t) => {
            let mut parts = t.split(':');
            let (Some(h), Some(min)) = (parts.next(), parts.next()) else {
                return Err(MingliError::InvalidInput("time must be HH:MM"));
            };
            (
                parse_u32(h, "time must be HH:MM")?,
                parse_u32(min, "time must be HH:MM")?,
            )
        }
        None => (12, 0),
    };

    Ok(LocalDateTime::new(year, month, day, hour, minute)?)
}

/// Parse a local timestamp, accepting a space or 'T' separator and
/// ignoring any seconds/offset tail.
pub fn parse_local_time(s: &str) -> Result<LocalDateTime, MingliError> {
    let normalized = s.replacen('T', " ", 1);
    let (date, rest) = normalized
        .split_once(' ')
        .ok_or(MingliError::InvalidInput("localTime must carry a clock"))?;
    let clock = rest.get(..5).unwrap_or(rest);
    parse_birth_instant(date, Some(clock))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_and_time() {
        let t = parse_birth_instant("1990-01-15", Some("14:30")).unwrap();
        assert_eq!((t.year, t.month, t.day, t.hour, t.minute), (1990, 1, 15, 14, 30));
    }

    #[test]
    fn missing_time_defaults_to_noon() {
        let t = parse_birth_instant("1990-01-15", None).unwrap();
        assert_eq!((t.hour, t.minute), (12, 0));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_birth_instant("1990/01/15", None).is_err());
        assert!(parse_birth_instant("1990-01", None).is_err());
        assert!(parse_birth_instant("1990-01-15-2", None).is_err());
        assert!(parse_birth_instant("1990-02-30", None).is_err());
    }

    #[test]
    fn rejects_out_of_range_clock() {
        assert!(parse_birth_instant("1990-01-15", Some("24:00")).is_err());
        assert!(parse_birth_instant("1990-01-15", Some("14:60")).is_err());
        assert!(parse_birth_instant("1990-01-15", Some("noon")).is_err());
    }

    #[test]
    fn local_time_accepts_both_separators() {
        let a = parse_local_time("2024-02-04 16:27").unwrap();
        let b = parse_local_time("2024-02-04T16:27").unwrap();
        assert_eq!(a, b);
        // Seconds and offsets are ignored.
        let c = parse_local_time("2024-02-04T16:27:33+08:00").unwrap();
        assert_eq!(a, c);
        assert!(parse_local_time("2024-02-04").is_err());
    }

    #[test]
    fn input_json_shapes() {
        let birth: BirthInput = serde_json::from_str(
            r#"{"name":"测试","birthDate":"1990-01-15","birthTime":"14:30","gender":"male","longitude":116.4,"latitude":39.9}"#,
        )
        .unwrap();
        assert_eq!(birth.gender, Some(GenderInput::Male));
        assert_eq!(birth.longitude, Some(116.4));

        let div: DivinationInput = serde_json::from_str(
            r#"{"question":"今年财运如何？","userId":"u1","divinationMethod":"plum_blossom","localTime":"2024-02-04 16:27"}"#,
        )
        .unwrap();
        assert_eq!(div.divination_method, Some(MethodInput::PlumBlossom));

        let bare: DivinationInput =
            serde_json::from_str(r#"{"question":"今年财运如何？"}"#).unwrap();
        assert_eq!(bare.local_time, None);
    }
}
