//! # 原子性质表
//!
//! 以元素符号为键的数值性质表（`Element` 列 + 任意数值列）。
//!
//! ## 依赖关系
//! - 被 `features/aggregator.rs` 使用
//! - 使用 `models/table.rs`

use crate::error::{MatfeatError, Result};
use crate::models::table::{Table, Value};

use std::collections::HashMap;
use std::io::Read;

/// 元素键列名
pub const ELEMENT_COLUMN: &str = "Element";

/// 原子性质表
#[derive(Debug, Clone)]
pub struct PropertyTable {
    /// 性质列名（保持原表列顺序）
    properties: Vec<String>,
    /// 元素 -> 行号
    index: HashMap<String, usize>,
    /// 每行的性质值，与 `properties` 对齐；空单元格为 None
    values: Vec<Vec<Option<f64>>>,
}

impl PropertyTable {
    /// 从通用表格构建
    ///
    /// 要求存在 `Element` 列且元素唯一；其余各列的单元格必须是数值或空。
    /// NaN 和无穷大按空单元格处理。
    pub fn from_table(table: &Table) -> Result<Self> {
        let key_idx = table
            .column_index(ELEMENT_COLUMN)
            .ok_or_else(|| MatfeatError::MissingColumn(ELEMENT_COLUMN.to_string()))?;

        let property_indices: Vec<usize> =
            (0..table.columns().len()).filter(|&i| i != key_idx).collect();
        let properties: Vec<String> = property_indices
            .iter()
            .map(|&i| table.columns()[i].clone())
            .collect();

        let mut index = HashMap::new();
        let mut values = Vec::with_capacity(table.len());

        for row in table.rows() {
            let element = row[key_idx].to_string();
            if element.is_empty() {
                continue;
            }
            if index.contains_key(&element) {
                return Err(MatfeatError::DuplicateElement(element));
            }

            let mut row_values = Vec::with_capacity(property_indices.len());
            for (&col_idx, name) in property_indices.iter().zip(&properties) {
                let cell = match &row[col_idx] {
                    Value::Number(x) => Some(*x),
                    Value::Missing => None,
                    Value::Text(s) => match s.parse::<f64>() {
                        Ok(x) => Some(x),
                        Err(_) => {
                            return Err(MatfeatError::NonNumericProperty {
                                column: name.clone(),
                                element,
                                value: s.clone(),
                            })
                        }
                    },
                };
                row_values.push(cell.filter(|x| x.is_finite()));
            }

            index.insert(element, values.len());
            values.push(row_values);
        }

        Ok(PropertyTable {
            properties,
            index,
            values,
        })
    }

    /// 从 CSV 读取
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_table(&Table::from_csv_reader(reader)?)
    }

    /// 性质列名
    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    /// 元素数量
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 按列序号查询性质值；元素不存在或单元格为空时返回 None
    pub fn value_at(&self, element: &str, property_idx: usize) -> Option<f64> {
        self.index
            .get(element)
            .and_then(|&row| self.values[row].get(property_idx).copied().flatten())
    }
}
