//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑，以及命令共用的表格读写。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `features/`, `models/`, `source/`, `utils/`
//! - 子模块: build, extract, featurize

pub mod build;
pub mod extract;
pub mod featurize;

use crate::cli::Commands;
use crate::error::{MatfeatError, Result};
use crate::features::ExtractReport;
use crate::models::{PropertyTable, Table};
use crate::utils::output;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Extract(args) => extract::execute(args),
        Commands::Featurize(args) => featurize::execute(args),
        Commands::Build(args) => build::execute(args),
    }
}

/// 设置 rayon 全局线程数（0 = CPU 核数）
fn configure_threads(jobs: usize) {
    let num_threads = if jobs == 0 { num_cpus::get() } else { jobs };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok();
}

fn open_file(path: &Path) -> Result<BufReader<File>> {
    if !path.exists() {
        return Err(MatfeatError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|e| MatfeatError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(BufReader::new(file))
}

/// 读取 CSV 表格
fn read_table(path: &Path) -> Result<Table> {
    Table::from_csv_reader(open_file(path)?)
}

/// 读取原子性质表
fn read_property_table(path: &Path) -> Result<PropertyTable> {
    let table = PropertyTable::from_csv_reader(open_file(path)?)?;
    if table.properties().is_empty() {
        output::print_warning(&format!(
            "'{}' has no property columns besides 'Element'",
            path.display()
        ));
    }
    Ok(table)
}

/// 写出 CSV 表格
fn write_table(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| MatfeatError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    table.to_csv_writer(BufWriter::new(file))
}

/// 打印提取统计
fn print_extract_summary(report: &ExtractReport) {
    output::print_info(&format!(
        "Scanned {} non-magnetic rows, {} matched",
        report.scanned, report.matched
    ));
    if !report.failures.is_empty() {
        output::print_warning(&format!(
            "{} row(s) skipped because of errors",
            report.failures.len()
        ));
    }
}
