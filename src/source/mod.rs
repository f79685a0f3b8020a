//! # 结构数据源
//!
//! 提取器只通过 [`RowSource`] 查询数据库行，具体存储格式由实现决定：
//! - [`MemorySource`]: 内存中的行（测试、嵌入调用）
//! - [`CsvRowSource`]: 数据库导出的 CSV 文件
//!
//! ## 依赖关系
//! - 被 `features/extractor.rs` 和 `commands/` 使用
//! - 子模块: csv_source

pub mod csv_source;

pub use csv_source::CsvRowSource;

use crate::error::Result;

use std::collections::HashMap;

/// 数据库中的一行（只读）
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRow {
    /// 化学式
    pub formula: String,

    /// 空间群
    pub spacegroup: String,

    /// 是否磁性
    pub is_magnetic: bool,

    /// 其余数值性质（如 ehull）
    pub properties: HashMap<String, f64>,
}

impl SourceRow {
    pub fn new(formula: impl Into<String>, spacegroup: impl Into<String>, is_magnetic: bool) -> Self {
        SourceRow {
            formula: formula.into(),
            spacegroup: spacegroup.into(),
            is_magnetic,
            properties: HashMap::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: f64) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    /// 按名称读取数值性质
    pub fn get(&self, name: &str) -> Option<f64> {
        self.properties.get(name).copied()
    }
}

/// 行查询条件
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowQuery {
    /// None 表示不按磁性过滤
    pub is_magnetic: Option<bool>,
}

impl RowQuery {
    /// 仅非磁性条目
    pub fn non_magnetic() -> Self {
        RowQuery {
            is_magnetic: Some(false),
        }
    }

    pub fn accepts(&self, row: &SourceRow) -> bool {
        self.is_magnetic.map_or(true, |m| row.is_magnetic == m)
    }
}

/// 可查询的行数据源
pub trait RowSource {
    /// 返回满足条件的所有行，保持数据源中的顺序
    fn select(&self, query: &RowQuery) -> Result<Vec<SourceRow>>;
}

/// 内存数据源
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: Vec<SourceRow>,
}

impl MemorySource {
    pub fn new(rows: Vec<SourceRow>) -> Self {
        MemorySource { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RowSource for MemorySource {
    fn select(&self, query: &RowQuery) -> Result<Vec<SourceRow>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| query.accepts(row))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_filters_magnetic() {
        let source = MemorySource::new(vec![
            SourceRow::new("MoS2", "P-6m2", false),
            SourceRow::new("CrI3", "P-31m", true),
            SourceRow::new("WSe2", "P-6m2", false),
        ]);

        let rows = source.select(&RowQuery::non_magnetic()).unwrap();
        let formulas: Vec<&str> = rows.iter().map(|r| r.formula.as_str()).collect();
        assert_eq!(formulas, vec!["MoS2", "WSe2"]);

        let all = source.select(&RowQuery::default()).unwrap();
        assert_eq!(all.len(), source.len());
    }

    #[test]
    fn test_source_row_properties() {
        let row = SourceRow::new("MoS2", "P-6m2", false).with_property("ehull", 0.0);
        assert_eq!(row.get("ehull"), Some(0.0));
        assert_eq!(row.get("gap"), None);
    }
}
