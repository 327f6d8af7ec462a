//! High-level chart entry points.

use serde::Serialize;

use mingli_bazi::{BaziChart, DECADE_COUNT, DecadePeriod, ElementStrength, Gender};
use mingli_yijing::{
    CastMethod, Hexagram, QUESTION_MAX_CHARS, QUESTION_MIN_CHARS, RandomSource, Trigram,
    TrigramRelation, cast_by_coins, cast_by_number, cast_by_plum_blossom, cast_by_time,
    cast_personalized, changed, mutual,
};
use mingli_time::LocalDateTime;
use mingli_ziwei::ZiweiChart;

use crate::error::MingliError;
use crate::input::{BirthInput, DivinationInput, parse_birth_instant, parse_local_time};

/// Clock minutes east of the 120°E standard meridian: four per degree.
fn solar_time_offset(longitude: f64) -> i64 {
    ((longitude - 120.0) * 4.0).round() as i64
}

/// The birth instant with the true-solar-time correction applied when the
/// record carries a longitude. Latitude does not enter pillar math.
fn birth_instant(input: &BirthInput) -> Result<LocalDateTime, MingliError> {
    let t = parse_birth_instant(&input.birth_date, input.birth_time.as_deref())?;
    match input.longitude {
        Some(lon) if !(-180.0..=180.0).contains(&lon) => {
            Err(MingliError::InvalidInput("longitude outside -180..180"))
        }
        Some(lon) => Ok(t.add_minutes(solar_time_offset(lon))?),
        None => Ok(t),
    }
}

/// A Four Pillars chart with its derived analyses.
#[derive(Debug, Clone, Serialize)]
pub struct BaziReport {
    pub chart: BaziChart,
    pub strength: ElementStrength,
    /// Present when the input carried a gender.
    pub decade_luck: Option<[DecadePeriod; DECADE_COUNT]>,
}

/// A hexagram flattened for renderers.
#[derive(Debug, Clone, Serialize)]
pub struct HexagramView {
    pub number: u8,
    pub name: &'static str,
    pub upper: Trigram,
    pub lower: Trigram,
    pub changing: Vec<u8>,
    pub relation: TrigramRelation,
}

impl From<&Hexagram> for HexagramView {
    fn from(h: &Hexagram) -> Self {
        Self {
            number: h.king_wen_number(),
            name: h.name(),
            upper: h.upper,
            lower: h.lower,
            changing: h.changing.clone(),
            relation: h.trigram_relation(),
        }
    }
}

/// Result of a divination request.
#[derive(Debug, Clone, Serialize)]
pub struct DivinationReport {
    pub method: CastMethod,
    pub primary: HexagramView,
    pub changed: HexagramView,
    pub mutual: HexagramView,
}

/// Compute a Four Pillars report from a birth record.
pub fn bazi_chart(input: &BirthInput) -> Result<BaziReport, MingliError> {
    let t = birth_instant(input)?;
    let chart = mingli_bazi::compute_chart(&t)?;
    let strength = mingli_bazi::element_strength(&chart);
    let decade_luck = match input.gender {
        // The sequence conventionally opens at age 1.
        Some(g) => Some(mingli_bazi::decade_luck(&chart, Gender::from(g), 1)?),
        None => None,
    };
    Ok(BaziReport {
        chart,
        strength,
        decade_luck,
    })
}

/// Compute a Purple-Star chart from a birth record. Gender is required;
/// the major-period walk depends on it.
pub fn ziwei_chart(input: &BirthInput) -> Result<ZiweiChart, MingliError> {
    let gender = input
        .gender
        .ok_or(MingliError::InvalidInput("gender required for ziwei chart"))?;
    let t = birth_instant(input)?;
    Ok(mingli_ziwei::compute_ziwei_chart(&t, Gender::from(gender))?)
}

/// Cast a hexagram for a divination request.
pub fn cast_hexagram(
    input: &DivinationInput,
    src: &dyn RandomSource,
) -> Result<DivinationReport, MingliError> {
    let n = input.question.chars().count();
    if !(QUESTION_MIN_CHARS..=QUESTION_MAX_CHARS).contains(&n) {
        return Err(MingliError::InvalidInput("question length outside 2-200"));
    }
    let t = match input.local_time.as_deref() {
        Some(s) => parse_local_time(s)?,
        None => LocalDateTime::now()?,
    };
    let user_id = input.user_id.as_deref();
    let method = input
        .divination_method
        .map(CastMethod::from)
        .unwrap_or(CastMethod::Personalized);

    let result = match method {
        CastMethod::Coin => cast_by_coins(src),
        CastMethod::Time => cast_by_time(&t, user_id, src),
        CastMethod::Number => cast_by_number(&t, user_id, src),
        CastMethod::PlumBlossom => cast_by_plum_blossom(&input.question, &t, user_id, src)?,
        CastMethod::Personalized => cast_personalized(&input.question, &t, user_id, src)?,
    };

    let primary = HexagramView::from(&result.hexagram);
    let changed_view = HexagramView::from(&changed(&result.hexagram));
    let mutual_view = HexagramView::from(&mutual(&result.hexagram));
    Ok(DivinationReport {
        method: result.method,
        primary,
        changed: changed_view,
        mutual: mutual_view,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::GenderInput;
    use mingli_yijing::SeededSource;

    fn birth(date: &str, time: Option<&str>, gender: Option<GenderInput>) -> BirthInput {
        BirthInput {
            name: None,
            birth_date: date.to_string(),
            birth_time: time.map(str::to_string),
            gender,
            birth_place: None,
            longitude: None,
            latitude: None,
        }
    }

    #[test]
    fn bazi_report_without_gender_omits_decades() {
        let report = bazi_chart(&birth("1990-01-15", Some("14:30"), None)).unwrap();
        assert!(report.decade_luck.is_none());
        let with = bazi_chart(&birth("1990-01-15", Some("14:30"), Some(GenderInput::Male))).unwrap();
        assert!(with.decade_luck.is_some());
    }

    #[test]
    fn ziwei_requires_gender() {
        let e = ziwei_chart(&birth("1990-01-15", Some("14:30"), None)).unwrap_err();
        assert_eq!(e, MingliError::InvalidInput("gender required for ziwei chart"));
    }

    #[test]
    fn cast_defaults_to_personalized() {
        let input = DivinationInput {
            question: "今年财运如何？".to_string(),
            user_id: Some("u1".to_string()),
            divination_method: None,
            local_time: Some("2024-02-04 16:27".to_string()),
        };
        let report = cast_hexagram(&input, &SeededSource::new(1)).unwrap();
        assert_eq!(report.method, CastMethod::Personalized);
        assert!((1..=64).contains(&report.primary.number));
    }

    #[test]
    fn cast_rejects_short_question_before_dispatch() {
        let input = DivinationInput {
            question: "短".to_string(),
            user_id: None,
            divination_method: Some(crate::input::MethodInput::Coin),
            local_time: Some("2024-02-04 16:27".to_string()),
        };
        assert!(cast_hexagram(&input, &SeededSource::new(1)).is_err());
    }

    #[test]
    fn cast_without_local_time_uses_the_current_clock() {
        let input = DivinationInput {
            question: "今年财运如何？".to_string(),
            user_id: None,
            divination_method: Some(crate::input::MethodInput::Coin),
            local_time: None,
        };
        let report = cast_hexagram(&input, &SeededSource::new(3)).unwrap();
        assert!((1..=64).contains(&report.primary.number));
    }

    #[test]
    fn longitude_shifts_the_hour_pillar() {
        // 14:55 at 90°E is 120 clock minutes behind the 120°E meridian:
        // true solar time 12:55, Wu hour instead of Wei.
        let mut west = birth("1990-01-15", Some("14:55"), None);
        west.longitude = Some(90.0);
        let shifted = bazi_chart(&west).unwrap();
        let plain = bazi_chart(&birth("1990-01-15", Some("14:55"), None)).unwrap();
        assert_ne!(shifted.chart.hour.branch(), plain.chart.hour.branch());
        assert_eq!(shifted.chart.day, plain.chart.day);
    }

    #[test]
    fn rejects_impossible_longitude() {
        let mut input = birth("1990-01-15", Some("14:30"), None);
        input.longitude = Some(361.0);
        assert!(bazi_chart(&input).is_err());
    }
}
