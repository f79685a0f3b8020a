//! # 内存表格
//!
//! 提取结果、原子性质表和特征表共用的简单列式表格。
//!
//! ## 依赖关系
//! - 被 `features/`, `models/property.rs`, `commands/` 使用
//! - 使用 `csv` 读写，`serde` 序列化单元格

use crate::error::{MatfeatError, Result};

use serde::{Serialize, Serializer};
use std::io::{Read, Write};

/// 单元格值
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    /// 缺失值（CSV 中写为空单元格）
    Missing,
}

impl Value {
    /// 读入的 CSV 字段：空 -> Missing，否则原样保留为 Text
    ///
    /// 数值在使用处再解析，写回时不改变原文本。
    pub fn from_field(field: &str) -> Self {
        let field = field.trim();
        if field.is_empty() {
            Value::Missing
        } else {
            Value::Text(field.to_string())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(x) => Some(*x),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Number(x) => write!(f, "{}", x),
            Value::Missing => Ok(()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Text(s) => serializer.serialize_str(s),
            Value::Number(x) => serializer.serialize_f64(*x),
            Value::Missing => serializer.serialize_none(),
        }
    }
}

/// 行式存储的表格，列集合固定
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// 以给定列名创建空表
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 追加一行，宽度必须与列数一致
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(MatfeatError::RowWidthMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// 在右侧追加一列，长度必须等于行数
    pub fn append_column(&mut self, name: impl Into<String>, values: Vec<Value>) -> Result<()> {
        let name = name.into();
        if self.column_index(&name).is_some() {
            return Err(MatfeatError::DuplicateColumn(name));
        }
        if values.len() != self.rows.len() {
            return Err(MatfeatError::ColumnLengthMismatch {
                column: name,
                expected: self.rows.len(),
                actual: values.len(),
            });
        }

        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        self.columns.push(name);
        Ok(())
    }

    /// 前 n 行构成的新表
    pub fn head(&self, n: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// 从 CSV 读取（首行为表头）
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Table> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let columns: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
        let mut table = Table::new(columns);

        for record in rdr.records() {
            let record = record?;
            table.push_row(record.iter().map(Value::from_field).collect())?;
        }

        Ok(table)
    }

    /// 写出 CSV（缺失值写为空单元格）
    pub fn to_csv_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);

        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.serialize(row)?;
        }

        wtr.flush().map_err(|e| MatfeatError::CsvError(e.into()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(vec!["Material".to_string(), "ehull".to_string()]);
        table
            .push_row(vec![Value::Text("MoS2".to_string()), Value::Number(0.0)])
            .unwrap();
        table
            .push_row(vec![Value::Text("WSe2".to_string()), Value::Missing])
            .unwrap();
        table
    }

    #[test]
    fn test_value_from_field() {
        assert_eq!(Value::from_field("1e-3"), Value::Text("1e-3".to_string()));
        assert_eq!(Value::from_field(" -2 "), Value::Text("-2".to_string()));
        assert_eq!(Value::from_field(""), Value::Missing);
        assert_eq!(Value::from_field("P6_3/mmc"), Value::Text("P6_3/mmc".to_string()));
    }

    #[test]
    fn test_push_row_checks_width() {
        let mut table = sample();
        let result = table.push_row(vec![Value::Missing]);
        assert!(matches!(
            result,
            Err(MatfeatError::RowWidthMismatch {
                expected: 2,
                actual: 1
            })
        ));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_append_column() {
        let mut table = sample();
        table
            .append_column("gap", vec![Value::Number(1.8), Value::Number(1.5)])
            .unwrap();

        assert_eq!(table.columns(), &["Material", "ehull", "gap"]);
        assert_eq!(table.rows()[1][2], Value::Number(1.5));
    }

    #[test]
    fn test_append_column_rejects_bad_length_and_duplicates() {
        let mut table = sample();
        assert!(matches!(
            table.append_column("gap", vec![Value::Missing]),
            Err(MatfeatError::ColumnLengthMismatch { .. })
        ));
        assert!(matches!(
            table.append_column("ehull", vec![Value::Missing, Value::Missing]),
            Err(MatfeatError::DuplicateColumn(_))
        ));
    }

    #[test]
    fn test_column_index() {
        let table = sample();
        assert_eq!(table.column_index("ehull"), Some(1));
        assert_eq!(table.column_index("Atom1"), None);
    }

    #[test]
    fn test_csv_read() {
        let data = "Element,X,Y\nLi,1.0,\nF, 2.5 ,abc\n";
        let table = Table::from_csv_reader(data.as_bytes()).unwrap();

        assert_eq!(table.columns(), &["Element", "X", "Y"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0][1], Value::Text("1.0".to_string()));
        assert!(table.rows()[0][2].is_missing());
        assert_eq!(table.rows()[1][1], Value::Text("2.5".to_string()));
        assert_eq!(table.rows()[1][2], Value::Text("abc".to_string()));
    }

    #[test]
    fn test_csv_write_missing_as_empty() {
        let table = sample();
        let mut buf = Vec::new();
        table.to_csv_writer(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Material,ehull");
        assert_eq!(lines[1], "MoS2,0.0");
        assert_eq!(lines[2], "WSe2,");
    }

    #[test]
    fn test_csv_read_write_keeps_cells() {
        let data = "Material,Space_Group,ehull,Atom1,Atom2\nMoS2,187,1e-3,Mo,S\nWSe2,P-6m2,,W,Se\n";
        let table = Table::from_csv_reader(data.as_bytes()).unwrap();

        let mut buf = Vec::new();
        table.to_csv_writer(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), data);
    }

    #[test]
    fn test_csv_write_empty_table_keeps_header() {
        let table = Table::new(vec!["Material".to_string(), "ehull".to_string()]);
        let mut buf = Vec::new();
        table.to_csv_writer(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Material,ehull\n");
    }

    #[test]
    fn test_head() {
        let table = sample();
        assert_eq!(table.head(1).len(), 1);
        assert_eq!(table.head(10).len(), 2);
    }
}
