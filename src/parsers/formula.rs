//! # 化学式解析器
//!
//! 将化学式字符串解析为 [`Composition`]。
//!
//! ## 语法
//! ```text
//! formula := item*
//! item    := Element amount? | '(' formula ')' amount?
//! Element := [A-Z][a-z]?
//! amount  := 整数或小数
//! ```
//! 空白字符被忽略；重复元素累加；括号可以嵌套。
//! 元素顺序为首次出现顺序，括号基团原位展开：`Mg(OH)2` -> Mg, O, H。
//!
//! ## 依赖关系
//! - 被 `features/extractor.rs` 使用
//! - 使用 `models/composition.rs`, `models/element.rs`
//! - 使用 `regex` 进行词法切分

use crate::error::{MatfeatError, Result};
use crate::models::element;
use crate::models::Composition;

use regex::Regex;
use std::sync::LazyLock;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<el>[A-Z][a-z]?)|(?P<open>\()|(?P<close>\))|(?P<num>\d+(?:\.\d+)?|\.\d+)")
        .expect("token regex is valid")
});

/// 词法单元
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Element(String),
    Open,
    Close,
    Amount(f64),
}

/// 解析化学式
pub fn parse_formula(formula: &str) -> Result<Composition> {
    let tokens = tokenize(formula)?;

    let fail = |reason: &str| MatfeatError::FormulaError {
        formula: formula.to_string(),
        reason: reason.to_string(),
    };

    // 栈底为整体组成，每个 '(' 压入一个基团
    let mut stack: Vec<Composition> = vec![Composition::new()];
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            Token::Element(symbol) => {
                if !element::is_element(symbol) {
                    return Err(MatfeatError::UnknownElement {
                        symbol: symbol.clone(),
                        formula: formula.to_string(),
                    });
                }
                let (amount, consumed) = amount_after(&tokens, i + 1);
                if amount <= 0.0 {
                    return Err(fail(&format!("zero amount for {}", symbol)));
                }
                if let Some(top) = stack.last_mut() {
                    top.add(symbol, amount);
                }
                i += 1 + consumed;
            }
            Token::Open => {
                stack.push(Composition::new());
                i += 1;
            }
            Token::Close => {
                if stack.len() < 2 {
                    return Err(fail("unbalanced ')'"));
                }
                let group = stack.pop().unwrap_or_default();
                if group.is_empty() {
                    return Err(fail("empty group '()'"));
                }
                let (factor, consumed) = amount_after(&tokens, i + 1);
                if factor <= 0.0 {
                    return Err(fail("zero multiplier after ')'"));
                }
                if let Some(top) = stack.last_mut() {
                    top.merge_scaled(&group, factor);
                }
                i += 1 + consumed;
            }
            Token::Amount(_) => {
                return Err(fail("amount without a preceding element or group"));
            }
        }
    }

    if stack.len() != 1 {
        return Err(fail("unbalanced '('"));
    }

    let composition = stack.pop().unwrap_or_default();
    if composition.is_empty() {
        return Err(fail("no elements"));
    }

    Ok(composition)
}

/// 读取位置 `i` 处可选的计量数，返回 (数值, 消耗的词法单元数)
fn amount_after(tokens: &[Token], i: usize) -> (f64, usize) {
    match tokens.get(i) {
        Some(Token::Amount(a)) => (*a, 1),
        _ => (1.0, 0),
    }
}

/// 词法切分：忽略空白，任何无法识别的字符都是错误
fn tokenize(formula: &str) -> Result<Vec<Token>> {
    let compact: String = formula.chars().filter(|c| !c.is_whitespace()).collect();

    let mut tokens = Vec::new();
    let mut pos = 0;

    for caps in TOKEN_RE.captures_iter(&compact) {
        let Some(whole) = caps.get(0) else { continue };
        let (start, end) = (whole.start(), whole.end());

        if start != pos {
            return Err(unexpected_char(formula, &compact[pos..]));
        }

        let token = if let Some(el) = caps.name("el") {
            Token::Element(el.as_str().to_string())
        } else if caps.name("open").is_some() {
            Token::Open
        } else if caps.name("close").is_some() {
            Token::Close
        } else {
            let text = &compact[start..end];
            let amount = text.parse::<f64>().map_err(|_| MatfeatError::FormulaError {
                formula: formula.to_string(),
                reason: format!("invalid amount '{}'", text),
            })?;
            Token::Amount(amount)
        };

        tokens.push(token);
        pos = end;
    }

    if pos != compact.len() {
        return Err(unexpected_char(formula, &compact[pos..]));
    }

    Ok(tokens)
}

fn unexpected_char(formula: &str, rest: &str) -> MatfeatError {
    let c = rest.chars().next().unwrap_or(' ');
    MatfeatError::FormulaError {
        formula: formula.to_string(),
        reason: format!("unexpected character '{}'", c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(comp: &Composition) -> Vec<&str> {
        comp.elements().collect()
    }

    #[test]
    fn test_simple_binary() {
        let comp = parse_formula("MoS2").unwrap();
        assert_eq!(order(&comp), vec!["Mo", "S"]);
        assert_eq!(comp.amount("Mo"), Some(1.0));
        assert_eq!(comp.amount("S"), Some(2.0));
    }

    #[test]
    fn test_order_of_first_appearance() {
        let comp = parse_formula("S2Mo").unwrap();
        assert_eq!(order(&comp), vec!["S", "Mo"]);

        let comp = parse_formula("BiTeI").unwrap();
        assert_eq!(order(&comp), vec!["Bi", "Te", "I"]);
    }

    #[test]
    fn test_repeated_elements_are_summed() {
        let comp = parse_formula("CH3COOH").unwrap();
        assert_eq!(order(&comp), vec!["C", "H", "O"]);
        assert_eq!(comp.amount("C"), Some(2.0));
        assert_eq!(comp.amount("H"), Some(4.0));
        assert_eq!(comp.amount("O"), Some(2.0));
    }

    #[test]
    fn test_parentheses() {
        let comp = parse_formula("Mg(OH)2").unwrap();
        assert_eq!(order(&comp), vec!["Mg", "O", "H"]);
        assert_eq!(comp.amount("O"), Some(2.0));
        assert_eq!(comp.amount("H"), Some(2.0));

        let comp = parse_formula("Ca3(PO4)2").unwrap();
        assert_eq!(comp.amount("P"), Some(2.0));
        assert_eq!(comp.amount("O"), Some(8.0));
    }

    #[test]
    fn test_nested_parentheses() {
        let comp = parse_formula("K4(Fe(CN)6)").unwrap();
        assert_eq!(order(&comp), vec!["K", "Fe", "C", "N"]);
        assert_eq!(comp.amount("C"), Some(6.0));
        assert_eq!(comp.amount("N"), Some(6.0));
    }

    #[test]
    fn test_fractional_amounts_and_whitespace() {
        let comp = parse_formula("Li0.5 Co O2").unwrap();
        assert_eq!(comp.amount("Li"), Some(0.5));
        assert_eq!(comp.amount("Co"), Some(1.0));
        assert_eq!(comp.amount("O"), Some(2.0));
    }

    #[test]
    fn test_unknown_element() {
        let result = parse_formula("XxF");
        assert!(matches!(
            result,
            Err(MatfeatError::UnknownElement { symbol, .. }) if symbol == "Xx"
        ));
    }

    #[test]
    fn test_malformed_formulas() {
        for bad in ["", "   ", "2H", "mos2", "Mo-S2", "Mg(OH", "MgOH)2", "()", "Mo0S2", "Mg(OH)0"] {
            assert!(parse_formula(bad).is_err(), "expected error for {:?}", bad);
        }
    }
}
