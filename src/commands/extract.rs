//! # extract 命令实现
//!
//! 读取数据库导出，提取匹配化学计量模式的材料并写出 CSV。
//!
//! ## 依赖关系
//! - 使用 `cli/extract.rs` 定义的参数
//! - 使用 `features/extractor.rs`, `source/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use super::{print_extract_summary, write_table};
use crate::cli::extract::ExtractArgs;
use crate::error::Result;
use crate::features::{self, ExtractEvent, Extraction};
use crate::models::StoichiometryPattern;
use crate::source::{CsvRowSource, RowSource};
use crate::utils::{output, progress};

use std::path::Path;

/// 执行 extract 命令
pub fn execute(args: ExtractArgs) -> Result<()> {
    output::print_header(&format!("Extracting {} materials", args.stoichiometry));

    let source = load_source(&args.source)?;
    let extraction = run_extraction(&source, args.stoichiometry, &args.target)?;

    if extraction.table.is_empty() {
        output::print_warning(&format!(
            "No non-magnetic {} materials found; writing header only.",
            args.stoichiometry
        ));
    }

    write_table(&extraction.table, &args.output)?;
    output::print_preview(&extraction.table, args.preview);
    output::print_done(&format!(
        "Saved {} materials to '{}'",
        extraction.table.len(),
        args.output.display()
    ));

    Ok(())
}

/// 读取数据源
pub(super) fn load_source(path: &Path) -> Result<CsvRowSource> {
    let spinner = progress::create_spinner(&format!("Reading '{}'", path.display()));
    let source = CsvRowSource::open(path);
    spinner.finish_and_clear();

    let source = source?;
    output::print_info(&format!(
        "Loaded {} rows from '{}'",
        source.len(),
        path.display()
    ));
    Ok(source)
}

/// 带进度条的提取，失败行输出为警告
pub(super) fn run_extraction(
    source: &dyn RowSource,
    pattern: StoichiometryPattern,
    target: &str,
) -> Result<Extraction> {
    let pb = progress::create_progress_bar(0, "Filtering");

    let extraction = features::extract_with(source, pattern, target, |event| match event {
        ExtractEvent::Selected(n) => pb.set_length(n as u64),
        ExtractEvent::Scanned => pb.inc(1),
        ExtractEvent::Failed(failure) => pb.suspend(|| {
            output::print_warning(&format!(
                "Skipping '{}': {}",
                failure.formula, failure.reason
            ));
        }),
    });

    pb.finish_and_clear();

    let extraction = extraction?;
    print_extract_summary(&extraction.report);
    Ok(extraction)
}
