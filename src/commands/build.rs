//! # build 命令实现
//!
//! 依次执行提取和特征聚合，中间材料表可选保存。
//!
//! ## 依赖关系
//! - 使用 `cli/build.rs` 定义的参数
//! - 复用 `commands/extract.rs`, `commands/featurize.rs` 的执行步骤

use super::extract::{load_source, run_extraction};
use super::featurize::run_aggregation;
use super::{configure_threads, read_property_table, write_table};
use crate::cli::build::BuildArgs;
use crate::error::Result;
use crate::utils::output;

/// 执行 build 命令
pub fn execute(args: BuildArgs) -> Result<()> {
    output::print_header(&format!(
        "Building {} feature table",
        args.stoichiometry
    ));

    configure_threads(args.jobs);

    // 先读性质表，避免提取完成后才发现路径错误
    let properties = read_property_table(&args.atoms)?;
    let source = load_source(&args.source)?;

    let extraction = run_extraction(&source, args.stoichiometry, &args.target)?;
    if extraction.table.is_empty() {
        output::print_warning(&format!(
            "No non-magnetic {} materials found; writing header only.",
            args.stoichiometry
        ));
    }

    if let Some(ref path) = args.materials_output {
        write_table(&extraction.table, path)?;
        output::print_success(&format!("Materials table saved to '{}'", path.display()));
    }

    let atom_columns = args.stoichiometry.atom_columns();
    let table = run_aggregation(&extraction.table, &properties, &atom_columns)?;

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
