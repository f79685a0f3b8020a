//! # 统计特征聚合
//!
//! 对原子性质表中的每一个性质 P，在每个材料所含元素上计算
//! `media_P`, `max_P`, `min_P`, `deviation_P` 四列并追加到材料表右侧。
//!
//! ## 行为
//! - 不在性质表中的元素（或该性质为空的元素）不参与该行的统计
//! - 某行没有任何可用元素时，四列均写入缺失值，输出行数始终等于输入行数
//! - 标准差为总体标准差
//! - 各性质列相互独立，使用 rayon 并行计算，输出列顺序与性质表一致
//!
//! ## 依赖关系
//! - 被 `commands/featurize.rs`, `commands/build.rs` 调用
//! - 使用 `features/statistics.rs`, `models/`

use crate::error::{MatfeatError, Result};
use crate::features::statistics::Summary;
use crate::models::stoichiometry::is_atom_column;
use crate::models::{PropertyTable, Table, Value};

use rayon::prelude::*;

/// 统计量列名前缀，按输出顺序
pub const STAT_PREFIXES: [&str; 4] = ["media", "max", "min", "deviation"];

/// 某性质的四个输出列名
pub fn feature_columns(property: &str) -> [String; 4] {
    STAT_PREFIXES.map(|prefix| format!("{}_{}", prefix, property))
}

/// 单个性质的四列统计值
struct PropertyFeatures {
    columns: [String; 4],
    values: [Vec<Value>; 4],
}

/// 计算统计特征并追加到材料表
///
/// `atom_columns` 为材料表中存放元素符号的列（如 `Atom1`, `Atom2`）。
pub fn aggregate(
    materials: &Table,
    properties: &PropertyTable,
    atom_columns: &[String],
) -> Result<Table> {
    aggregate_with(materials, properties, atom_columns, || {})
}

/// 同 [`aggregate`]，每完成一个性质回调一次
pub fn aggregate_with<F>(
    materials: &Table,
    properties: &PropertyTable,
    atom_columns: &[String],
    on_property_done: F,
) -> Result<Table>
where
    F: Fn() + Sync + Send,
{
    let slot_indices = atom_columns
        .iter()
        .map(|name| {
            materials
                .column_index(name)
                .ok_or_else(|| MatfeatError::MissingColumn(name.clone()))
        })
        .collect::<Result<Vec<usize>>>()?;

    // 每行的元素符号，空槽位跳过
    let row_elements: Vec<Vec<&str>> = materials
        .rows()
        .iter()
        .map(|row| {
            slot_indices
                .iter()
                .filter_map(|&idx| row[idx].as_text())
                .collect()
        })
        .collect();

    let features: Vec<PropertyFeatures> = properties
        .properties()
        .par_iter()
        .enumerate()
        .map(|(prop_idx, name)| {
            let features = compute_property(properties, prop_idx, name, &row_elements);
            on_property_done();
            features
        })
        .collect();

    let mut output = materials.clone();
    for feature in features {
        for (column, values) in feature.columns.into_iter().zip(feature.values) {
            output.append_column(column, values)?;
        }
    }

    Ok(output)
}

/// 计算单个性质在所有行上的统计值
fn compute_property(
    properties: &PropertyTable,
    prop_idx: usize,
    name: &str,
    row_elements: &[Vec<&str>],
) -> PropertyFeatures {
    let mut values: [Vec<Value>; 4] = std::array::from_fn(|_| Vec::with_capacity(row_elements.len()));

    for elements in row_elements {
        let collected: Vec<f64> = elements
            .iter()
            .filter_map(|el| properties.value_at(el, prop_idx))
            .collect();

        match Summary::compute(&collected) {
            Some(s) => {
                for (column, stat) in values.iter_mut().zip([s.mean, s.max, s.min, s.std_dev]) {
                    column.push(Value::Number(stat));
                }
            }
            None => {
                for column in values.iter_mut() {
                    column.push(Value::Missing);
                }
            }
        }
    }

    PropertyFeatures {
        columns: feature_columns(name),
        values,
    }
}

/// 材料表中形如 `Atom<k>` 的列，按列顺序
pub fn detect_atom_columns(materials: &Table) -> Vec<String> {
    materials
        .columns()
        .iter()
        .filter(|c| is_atom_column(c))
        .cloned()
        .collect()
}
