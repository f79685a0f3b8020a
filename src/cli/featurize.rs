//! # featurize 子命令 CLI 定义
//!
//! 为材料表追加原子性质的统计特征
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/featurize.rs`

use clap::Args;
use std::path::PathBuf;

/// featurize 子命令参数
#[derive(Args, Debug)]
pub struct FeaturizeArgs {
    /// Materials table produced by 'extract'
    #[arg(short, long)]
    pub materials: PathBuf,

    /// Atomic property table (an 'Element' column plus numeric columns)
    #[arg(short, long, env = "MATFEAT_ATOMS")]
    pub atoms: PathBuf,

    /// Atom slot columns, comma separated (default: every Atom<k> column)
    #[arg(long, value_delimiter = ',')]
    pub atom_columns: Option<Vec<String>>,

    /// Output CSV file for the feature table
    #[arg(short, long, default_value = "features.csv")]
    pub output: PathBuf,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Number of rows to preview in the terminal (0 = none)
    #[arg(long, default_value_t = 5)]
    pub preview: usize,
}
