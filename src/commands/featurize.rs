//! # featurize 命令实现
//!
//! 读取材料表和原子性质表，计算统计特征并写出 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/featurize.rs` 定义的参数
//! - 使用 `features/aggregator.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use super::{configure_threads, read_property_table, read_table, write_table};
use crate::cli::featurize::FeaturizeArgs;
use crate::error::{MatfeatError, Result};
use crate::features::{self, aggregator};
use crate::models::{PropertyTable, Table};
use crate::utils::{output, progress};

/// 执行 featurize 命令
pub fn execute(args: FeaturizeArgs) -> Result<()> {
    output::print_header("Computing statistical features");

    configure_threads(args.jobs);

    let materials = read_table(&args.materials)?;
    let properties = read_property_table(&args.atoms)?;
    output::print_info(&format!(
        "{} materials, {} elements x {} properties",
        materials.len(),
        properties.len(),
        properties.properties().len()
    ));

    let atom_columns = match args.atom_columns {
        Some(columns) => columns,
        None => features::detect_atom_columns(&materials),
    };
    if atom_columns.is_empty() {
        return Err(MatfeatError::InvalidArgument(format!(
            "No Atom<k> columns in '{}'; pass --atom-columns",
            args.materials.display()
        )));
    }

    let table = run_aggregation(&materials, &properties, &atom_columns)?;

    write_table(&table, &args.output)?;
    output::print_preview(&table, args.preview);
    output::print_done(&format!(
        "Saved {} rows x {} columns to '{}'",
        table.len(),
        table.columns().len(),
        args.output.display()
    ));

    Ok(())
}

/// 带进度条的聚合，并报告无法解析任何元素的行
pub(super) fn run_aggregation(
    materials: &Table,
    properties: &PropertyTable,
    atom_columns: &[String],
) -> Result<Table> {
    output::print_info(&format!("Atom columns: {}", atom_columns.join(", ")));

    let pb = progress::create_progress_bar(properties.properties().len() as u64, "Aggregating");
    let table = features::aggregate_with(materials, properties, atom_columns, || pb.inc(1));
    pb.finish_and_clear();
    let table = table?;

    let unresolved = count_unresolved_rows(&table, properties)?;
    if unresolved > 0 {
        output::print_skip(&format!(
            "{} row(s) have no usable elements for at least one property; those features are left empty",
            unresolved
        ));
    }

    Ok(table)
}

/// 至少有一个 `media_*` 列为缺失值的行数
fn count_unresolved_rows(table: &Table, properties: &PropertyTable) -> Result<usize> {
    let media_indices = properties
        .properties()
        .iter()
        .map(|p| {
            let [media, ..] = aggregator::feature_columns(p);
            table
                .column_index(&media)
                .ok_or(MatfeatError::MissingColumn(media))
        })
        .collect::<Result<Vec<usize>>>()?;

    Ok(table
        .rows()
        .iter()
        .filter(|row| media_indices.iter().any(|&idx| row[idx].is_missing()))
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_unresolved_rows_checks_every_property() {
        let materials =
            Table::from_csv_reader("Material,Atom1,Atom2\nLiF,Li,F\nNaCl,Na,Cl\nXxQq,Xx,Qq\n".as_bytes())
                .unwrap();
        let properties =
            PropertyTable::from_csv_reader("Element,X,Y\nLi,1,2\nF,3,4\nNa,5,\nCl,6,\n".as_bytes())
                .unwrap();
        let atoms = vec!["Atom1".to_string(), "Atom2".to_string()];

        let table = features::aggregate(&materials, &properties, &atoms).unwrap();

        // NaCl 只缺 Y，XxQq 全部缺失
        assert_eq!(count_unresolved_rows(&table, &properties).unwrap(), 2);
    }
}
