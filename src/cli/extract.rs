//! # extract 子命令 CLI 定义
//!
//! 从结构数据库导出的 CSV 中提取匹配化学计量模式的非磁性材料
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/extract.rs`

use crate::models::StoichiometryPattern;

use clap::Args;
use std::path::PathBuf;

/// extract 子命令参数
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// CSV export of the structure database (formula, spacegroup, is_magnetic, ...)
    #[arg(short, long, env = "MATFEAT_SOURCE")]
    pub source: PathBuf,

    /// Stoichiometry pattern: ABC, AB or AB<n> (e.g. AB2)
    #[arg(short = 'x', long)]
    pub stoichiometry: StoichiometryPattern,

    /// Name of the target property column
    #[arg(short, long, default_value = "ehull")]
    pub target: String,

    /// Output CSV file for the materials table
    #[arg(short, long, default_value = "materials.csv")]
    pub output: PathBuf,

    /// Number of rows to preview in the terminal (0 = none)
    #[arg(long, default_value_t = 5)]
    pub preview: usize,
}
