//! # 元素周期表
//!
//! 提供元素符号的合法性检查。
//!
//! ## 依赖关系
//! - 被 `parsers/formula.rs` 使用
//! - 纯静态数据，无外部依赖

use std::collections::HashSet;
use std::sync::LazyLock;

/// 按原子序数排列的元素符号 (H - Og)
pub const ELEMENT_SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", // 1-10
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", // 11-20
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", // 21-30
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", // 31-40
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", // 41-50
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", // 51-60
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", // 61-70
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", // 71-80
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", // 81-90
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", // 91-100
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", // 101-110
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og", // 111-118
];

static SYMBOL_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ELEMENT_SYMBOLS.iter().copied().collect());

/// 检查是否为合法元素符号（区分大小写）
pub fn is_element(symbol: &str) -> bool {
    SYMBOL_SET.contains(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_elements() {
        assert!(is_element("H"));
        assert!(is_element("Mo"));
        assert!(is_element("Og"));
        assert!(!is_element("Xx"));
        assert!(!is_element("mo"));
    }

    #[test]
    fn test_symbol_order() {
        assert_eq!(ELEMENT_SYMBOLS[0], "H");
        assert_eq!(ELEMENT_SYMBOLS[25], "Fe");
        assert_eq!(ELEMENT_SYMBOLS[117], "Og");
    }
}
