//! # CSV 数据源
//!
//! 读取结构数据库导出的 CSV 文件。
//!
//! ## 文件格式
//! ```text
//! formula,spacegroup,is_magnetic,ehull,...
//! MoS2,P-6m2,False,0.0,...
//! ```
//! - `formula`, `spacegroup`, `is_magnetic` 为必需列
//! - 其余列按数值性质读取；空单元格或非数值单元格视为该行缺少此性质
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 实现 `source::RowSource`

use super::{MemorySource, RowQuery, RowSource, SourceRow};
use crate::error::{MatfeatError, Result};

use std::fs::File;
use std::io::Read;
use std::path::Path;

const FORMULA_COLUMN: &str = "formula";
const SPACEGROUP_COLUMN: &str = "spacegroup";
const MAGNETIC_COLUMN: &str = "is_magnetic";

/// CSV 文件数据源（一次性读入内存）
#[derive(Debug, Clone)]
pub struct CsvRowSource {
    rows: MemorySource,
}

impl CsvRowSource {
    /// 打开 CSV 文件
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MatfeatError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path).map_err(|e| MatfeatError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_reader(file)
    }

    /// 从任意 reader 读取
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| MatfeatError::MissingColumn(name.to_string()))
        };

        let formula_idx = find(FORMULA_COLUMN)?;
        let spacegroup_idx = find(SPACEGROUP_COLUMN)?;
        let magnetic_idx = find(MAGNETIC_COLUMN)?;

        let mut rows = Vec::new();

        for record in rdr.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let field = |idx: usize| record.get(idx).unwrap_or("");
            let is_magnetic = parse_bool(field(magnetic_idx)).ok_or_else(|| {
                MatfeatError::InvalidBoolean {
                    column: MAGNETIC_COLUMN.to_string(),
                    value: field(magnetic_idx).to_string(),
                    line,
                }
            })?;

            let mut row = SourceRow::new(field(formula_idx), field(spacegroup_idx), is_magnetic);

            for (idx, name) in headers.iter().enumerate() {
                if idx == formula_idx || idx == spacegroup_idx || idx == magnetic_idx {
                    continue;
                }
                if let Ok(value) = field(idx).parse::<f64>() {
                    row = row.with_property(name, value);
                }
            }

            rows.push(row);
        }

        Ok(CsvRowSource {
            rows: MemorySource::new(rows),
        })
    }

    /// 总行数（不做过滤）
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RowSource for CsvRowSource {
    fn select(&self, query: &RowQuery) -> Result<Vec<SourceRow>> {
        self.rows.select(query)
    }
}

/// 解析布尔值（兼容 Python 风格的 True/False）
fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" | "True" | "TRUE" | "1" => Some(true),
        "false" | "False" | "FALSE" | "0" => Some(false),
        _ => None,
    }
}
