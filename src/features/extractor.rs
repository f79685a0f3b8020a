//! # 记录提取器
//!
//! 从结构数据源中选出非磁性条目，按化学计量模式过滤，
//! 每个匹配条目输出一行：化学式、空间群、目标性质、各原子槽位的元素。
//!
//! ## 行为
//! - 化学式解析失败或缺少目标性质的行被记录到 [`ExtractReport`] 后跳过，不中断整体提取
//! - 原子槽位按化学式中元素首次出现的顺序分配
//!
//! ## 依赖关系
//! - 被 `commands/extract.rs`, `commands/build.rs` 调用
//! - 使用 `source/`, `parsers/formula.rs`, `models/`

use crate::error::{MatfeatError, Result};
use crate::models::stoichiometry::is_atom_column;
use crate::models::{StoichiometryPattern, Table, Value};
use crate::parsers::parse_formula;
use crate::source::{RowQuery, RowSource, SourceRow};

pub const MATERIAL_COLUMN: &str = "Material";
pub const SPACE_GROUP_COLUMN: &str = "Space_Group";

/// 默认目标性质（凸包以上能量）
pub const DEFAULT_TARGET: &str = "ehull";

/// 被跳过的行
#[derive(Debug, Clone, PartialEq)]
pub struct RowFailure {
    pub formula: String,
    pub reason: String,
}

/// 提取统计
#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    /// 扫描的非磁性行数
    pub scanned: usize,
    /// 匹配模式的行数
    pub matched: usize,
    /// 失败详情
    pub failures: Vec<RowFailure>,
}

/// 提取过程中的事件，供调用方更新进度或输出日志
#[derive(Debug)]
pub enum ExtractEvent<'a> {
    /// 查询完成，共 n 行待处理
    Selected(usize),
    /// 处理完一行
    Scanned,
    /// 一行被跳过
    Failed(&'a RowFailure),
}

/// 提取结果
#[derive(Debug, Clone)]
pub struct Extraction {
    pub table: Table,
    pub report: ExtractReport,
}

/// 输出表的列名：Material, Space_Group, <target>, Atom1, Atom2[, Atom3]
///
/// 目标性质不能与固定列或 `Atom<k>` 列同名。
pub fn material_columns(pattern: StoichiometryPattern, target: &str) -> Result<Vec<String>> {
    if target == MATERIAL_COLUMN || target == SPACE_GROUP_COLUMN || is_atom_column(target) {
        return Err(MatfeatError::DuplicateColumn(target.to_string()));
    }

    let mut columns = vec![
        MATERIAL_COLUMN.to_string(),
        SPACE_GROUP_COLUMN.to_string(),
        target.to_string(),
    ];
    columns.extend(pattern.atom_columns());
    Ok(columns)
}

/// 提取匹配模式的材料
pub fn extract(
    source: &dyn RowSource,
    pattern: StoichiometryPattern,
    target: &str,
) -> Result<Extraction> {
    extract_with(source, pattern, target, |_| {})
}

/// 提取匹配模式的材料，并在每一步回调事件
pub fn extract_with<F>(
    source: &dyn RowSource,
    pattern: StoichiometryPattern,
    target: &str,
    mut on_event: F,
) -> Result<Extraction>
where
    F: FnMut(ExtractEvent<'_>),
{
    let columns = material_columns(pattern, target)?;
    let rows = source.select(&RowQuery::non_magnetic())?;
    on_event(ExtractEvent::Selected(rows.len()));

    let mut table = Table::new(columns);
    let mut report = ExtractReport::default();

    for row in &rows {
        report.scanned += 1;

        match classify_row(row, pattern, target) {
            Ok(Some(cells)) => {
                table.push_row(cells)?;
                report.matched += 1;
            }
            Ok(None) => {}
            Err(e) => {
                let failure = RowFailure {
                    formula: row.formula.clone(),
                    reason: e.to_string(),
                };
                on_event(ExtractEvent::Failed(&failure));
                report.failures.push(failure);
            }
        }

        on_event(ExtractEvent::Scanned);
    }

    Ok(Extraction { table, report })
}

/// 判断单行是否匹配；匹配时返回输出行
fn classify_row(
    row: &SourceRow,
    pattern: StoichiometryPattern,
    target: &str,
) -> Result<Option<Vec<Value>>> {
    let composition = parse_formula(&row.formula)?;

    if !pattern.matches(&composition) {
        return Ok(None);
    }

    let target_value = row.get(target).ok_or_else(|| MatfeatError::MissingProperty {
        formula: row.formula.clone(),
        property: target.to_string(),
    })?;

    let mut cells = vec![
        Value::Text(row.formula.clone()),
        Value::Text(row.spacegroup.clone()),
        Value::Number(target_value),
    ];
    cells.extend(composition.elements().map(|el| Value::Text(el.to_string())));

    Ok(Some(cells))
}
