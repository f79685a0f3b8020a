//! # 化学计量模式
//!
//! 选择提取哪一类化合物：
//! - `ABC`: 三元等比例（三种元素，计量数均为 1）
//! - `AB<n>`: 二元 1:n（第一种元素计量数 1，第二种为 n；`AB` 即 n = 1）
//!
//! ## 依赖关系
//! - 被 `cli/` 作为参数类型使用
//! - 被 `features/extractor.rs` 使用
//! - 使用 `models/composition.rs`

use crate::error::MatfeatError;
use crate::models::Composition;

use std::str::FromStr;

/// 是否为 `Atom<k>` 形式的原子槽位列名
pub fn is_atom_column(name: &str) -> bool {
    name.strip_prefix("Atom")
        .is_some_and(|k| !k.is_empty() && k.chars().all(|ch| ch.is_ascii_digit()))
}

/// 化学计量模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoichiometryPattern {
    /// 三元等比例 ABC
    TernaryEqual,
    /// 二元 A1Bn
    BinaryRatio(u32),
}

impl StoichiometryPattern {
    /// 原子槽位数量
    pub fn slot_count(&self) -> usize {
        match self {
            StoichiometryPattern::TernaryEqual => 3,
            StoichiometryPattern::BinaryRatio(_) => 2,
        }
    }

    /// 原子槽位列名 (Atom1, Atom2, ...)
    pub fn atom_columns(&self) -> Vec<String> {
        (1..=self.slot_count()).map(|i| format!("Atom{}", i)).collect()
    }

    /// 判断组成是否符合该模式
    ///
    /// 元素数量必须与槽位数严格相等，多余的元素不会被截断。
    /// 二元模式接受 (1, n) 和 (n, 1) 两种解析顺序，槽位仍按解析顺序分配。
    pub fn matches(&self, composition: &Composition) -> bool {
        if composition.len() != self.slot_count() {
            return false;
        }

        let amounts: Vec<f64> = composition.amounts().collect();
        match self {
            StoichiometryPattern::TernaryEqual => amounts.iter().all(|&a| a == 1.0),
            StoichiometryPattern::BinaryRatio(n) => {
                let n = *n as f64;
                (amounts[0] == 1.0 && amounts[1] == n) || (amounts[0] == n && amounts[1] == 1.0)
            }
        }
    }
}

impl FromStr for StoichiometryPattern {
    type Err = MatfeatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        if tag.eq_ignore_ascii_case("ABC") {
            return Ok(StoichiometryPattern::TernaryEqual);
        }

        let invalid = || MatfeatError::InvalidStoichiometry(s.to_string());

        let ratio = tag
            .get(..2)
            .filter(|prefix| prefix.eq_ignore_ascii_case("AB"))
            .map(|_| &tag[2..])
            .ok_or_else(invalid)?;

        if ratio.is_empty() {
            return Ok(StoichiometryPattern::BinaryRatio(1));
        }

        match ratio.parse::<u32>() {
            Ok(n) if n >= 1 => Ok(StoichiometryPattern::BinaryRatio(n)),
            _ => Err(invalid()),
        }
    }
}

impl std::fmt::Display for StoichiometryPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoichiometryPattern::TernaryEqual => write!(f, "ABC"),
            StoichiometryPattern::BinaryRatio(1) => write!(f, "AB"),
            StoichiometryPattern::BinaryRatio(n) => write!(f, "AB{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comp(entries: &[(&str, f64)]) -> Composition {
        let mut c = Composition::new();
        for (el, amount) in entries {
            c.add(el, *amount);
        }
        c
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(
            "ABC".parse::<StoichiometryPattern>().unwrap(),
            StoichiometryPattern::TernaryEqual
        );
        assert_eq!(
            "AB".parse::<StoichiometryPattern>().unwrap(),
            StoichiometryPattern::BinaryRatio(1)
        );
        assert_eq!(
            "AB2".parse::<StoichiometryPattern>().unwrap(),
            StoichiometryPattern::BinaryRatio(2)
        );
        assert_eq!(
            "ab12".parse::<StoichiometryPattern>().unwrap(),
            StoichiometryPattern::BinaryRatio(12)
        );
    }

    #[test]
    fn test_parse_invalid_tags() {
        assert!("AB0".parse::<StoichiometryPattern>().is_err());
        assert!("ABx".parse::<StoichiometryPattern>().is_err());
        assert!("XY2".parse::<StoichiometryPattern>().is_err());
        assert!("A".parse::<StoichiometryPattern>().is_err());
        assert!("".parse::<StoichiometryPattern>().is_err());
    }

    #[test]
    fn test_display_round_trips_tag() {
        assert_eq!(StoichiometryPattern::TernaryEqual.to_string(), "ABC");
        assert_eq!(StoichiometryPattern::BinaryRatio(1).to_string(), "AB");
        assert_eq!(StoichiometryPattern::BinaryRatio(3).to_string(), "AB3");
    }

    #[test]
    fn test_atom_columns() {
        assert_eq!(
            StoichiometryPattern::TernaryEqual.atom_columns(),
            vec!["Atom1", "Atom2", "Atom3"]
        );
        assert_eq!(
            StoichiometryPattern::BinaryRatio(2).atom_columns(),
            vec!["Atom1", "Atom2"]
        );
    }

    #[test]
    fn test_ternary_matching() {
        let pattern = StoichiometryPattern::TernaryEqual;
        assert!(pattern.matches(&comp(&[("Bi", 1.0), ("Te", 1.0), ("I", 1.0)])));
        assert!(!pattern.matches(&comp(&[("Bi", 1.0), ("Te", 1.0), ("I", 2.0)])));
        assert!(!pattern.matches(&comp(&[("Bi", 1.0), ("Te", 1.0)])));
        assert!(!pattern.matches(&comp(&[
            ("Bi", 1.0),
            ("Te", 1.0),
            ("I", 1.0),
            ("O", 1.0)
        ])));
    }

    #[test]
    fn test_binary_matching_either_order() {
        let pattern = StoichiometryPattern::BinaryRatio(2);
        assert!(pattern.matches(&comp(&[("Mo", 1.0), ("S", 2.0)])));
        assert!(pattern.matches(&comp(&[("S", 2.0), ("Mo", 1.0)])));
        assert!(!pattern.matches(&comp(&[("Mo", 2.0), ("S", 2.0)])));
        assert!(!pattern.matches(&comp(&[("Mo", 1.0), ("S", 3.0)])));
        assert!(!pattern.matches(&comp(&[("Mo", 1.0), ("S", 2.0), ("Se", 1.0)])));
    }

    #[test]
    fn test_binary_rejects_fractional_amounts() {
        let pattern = StoichiometryPattern::BinaryRatio(2);
        assert!(!pattern.matches(&comp(&[("Mo", 1.0), ("S", 2.5)])));
    }
}
