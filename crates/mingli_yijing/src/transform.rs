//! Derived hexagrams: changed, mutual, opposite, and reversed.

use crate::hexagram::Hexagram;
use crate::trigram::Trigram;

/// The hexagram after all changing lines flip. Without changing lines
/// this is the hexagram itself (stabilized).
pub fn changed(h: &Hexagram) -> Hexagram {
    let mut lines = h.lines();
    for &pos in &h.changing {
        let i = pos as usize - 1;
        lines[i] = !lines[i];
    }
    let lower = Trigram::from_lines([lines[0], lines[1], lines[2]]);
    let upper = Trigram::from_lines([lines[3], lines[4], lines[5]]);
    Hexagram::stable(upper, lower)
}

/// The nuclear hexagram: lines 2..4 form the lower trigram, 3..5 the upper.
pub fn mutual(h: &Hexagram) -> Hexagram {
    let lines = h.lines();
    let lower = Trigram::from_lines([lines[1], lines[2], lines[3]]);
    let upper = Trigram::from_lines([lines[2], lines[3], lines[4]]);
    Hexagram::stable(upper, lower)
}

/// Every line inverted.
pub fn opposite(h: &Hexagram) -> Hexagram {
    let lines = h.lines();
    let lower = Trigram::from_lines([!lines[0], !lines[1], !lines[2]]);
    let upper = Trigram::from_lines([!lines[3], !lines[4], !lines[5]]);
    Hexagram::stable(upper, lower)
}

/// The hexagram turned upside down (line order reversed).
pub fn reversed(h: &Hexagram) -> Hexagram {
    let lines = h.lines();
    let lower = Trigram::from_lines([lines[5], lines[4], lines[3]]);
    let upper = Trigram::from_lines([lines[2], lines[1], lines[0]]);
    Hexagram::stable(upper, lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexagram::all_hexagrams;

    #[test]
    fn changed_flips_only_changing_lines() {
        // Qian with line 1 changing becomes Gou (44).
        let h = Hexagram::new(Trigram::Qian, Trigram::Qian, vec![1]).unwrap();
        let c = changed(&h);
        assert_eq!(c.king_wen_number(), 44);
        assert!(c.changing.is_empty());
    }

    #[test]
    fn changed_without_changing_lines_is_identity() {
        for h in all_hexagrams() {
            assert_eq!(changed(&h), h);
        }
    }

    #[test]
    fn opposite_is_an_involution() {
        for h in all_hexagrams() {
            assert_eq!(opposite(&opposite(&h)), h);
        }
        let qian = Hexagram::stable(Trigram::Qian, Trigram::Qian);
        assert_eq!(opposite(&qian).king_wen_number(), 2);
    }

    #[test]
    fn reversed_is_an_involution() {
        for h in all_hexagrams() {
            assert_eq!(reversed(&reversed(&h)), h);
        }
        // Zhun (3) reversed is Meng (4).
        let zhun = Hexagram::stable(Trigram::Kan, Trigram::Zhen);
        assert_eq!(reversed(&zhun).king_wen_number(), 4);
    }

    #[test]
    fn mutual_of_qian_is_qian() {
        let qian = Hexagram::stable(Trigram::Qian, Trigram::Qian);
        assert_eq!(mutual(&qian), qian);
        // Mutual of Zhun (3) is Bo (23).
        let zhun = Hexagram::stable(Trigram::Kan, Trigram::Zhen);
        assert_eq!(mutual(&zhun).king_wen_number(), 23);
    }
}
