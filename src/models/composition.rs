//! # 化学组成数据模型
//!
//! 元素 -> 化学计量数 的有序映射，由化学式解析得到。
//!
//! 元素顺序为在化学式中首次出现的顺序（括号基团原位展开），
//! 原子槽位分配和比例匹配都依赖这一顺序。
//!
//! ## 依赖关系
//! - 被 `parsers/formula.rs` 构造
//! - 被 `models/stoichiometry.rs` 和 `features/extractor.rs` 使用

/// 化学组成
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composition {
    /// (元素符号, 计量数)，按首次出现顺序
    entries: Vec<(String, f64)>,
}

impl Composition {
    pub fn new() -> Self {
        Composition::default()
    }

    /// 累加元素计量数；已存在的元素保持原位置
    pub fn add(&mut self, element: &str, amount: f64) {
        match self.entries.iter_mut().find(|(el, _)| el == element) {
            Some((_, existing)) => *existing += amount,
            None => self.entries.push((element.to_string(), amount)),
        }
    }

    /// 合并另一个组成（乘以倍数），用于括号基团展开
    pub fn merge_scaled(&mut self, other: &Composition, factor: f64) {
        for (el, amount) in &other.entries {
            self.add(el, amount * factor);
        }
    }

    /// 不同元素的数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 查询某元素的计量数
    pub fn amount(&self, element: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(el, _)| el == element)
            .map(|(_, amount)| *amount)
    }

    /// 元素符号（按解析顺序）
    pub fn elements(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(el, _)| el.as_str())
    }

    /// 计量数（按解析顺序）
    pub fn amounts(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, amount)| *amount)
    }
}

impl std::fmt::Display for Composition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (el, amount) in &self.entries {
            if (*amount - 1.0).abs() < f64::EPSILON {
                write!(f, "{}", el)?;
            } else {
                write!(f, "{}{}", el, amount)?;
            }
        }
        Ok(())
    }
}
