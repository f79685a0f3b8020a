//! # build 子命令 CLI 定义
//!
//! 提取材料表并直接生成特征表
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/build.rs`

use crate::models::StoichiometryPattern;

use clap::Args;
use std::path::PathBuf;

/// build 子命令参数
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// CSV export of the structure database (formula, spacegroup, is_magnetic, ...)
    #[arg(short, long, env = "MATFEAT_SOURCE")]
    pub source: PathBuf,

    /// Stoichiometry pattern: ABC, AB or AB<n> (e.g. AB2)
    #[arg(short = 'x', long)]
    pub stoichiometry: StoichiometryPattern,

    /// Atomic property table (an 'Element' column plus numeric columns)
    #[arg(short, long, env = "MATFEAT_ATOMS")]
    pub atoms: PathBuf,

    /// Name of the target property column
    #[arg(short, long, default_value = "ehull")]
    pub target: String,

    /// Output CSV file for the feature table
    #[arg(short, long, default_value = "features.csv")]
    pub output: PathBuf,

    /// Also save the intermediate materials table
    #[arg(long)]
    pub materials_output: Option<PathBuf>,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Number of rows to preview in the terminal (0 = none)
    #[arg(long, default_value_t = 5)]
    pub preview: usize,
}
