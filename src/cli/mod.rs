//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `extract`: 从结构数据库导出中提取材料表
//! - `featurize`: 为材料表追加原子性质统计特征
//! - `build`: 依次执行 extract 和 featurize
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: build, extract, featurize

pub mod build;
pub mod extract;
pub mod featurize;

use clap::{Parser, Subcommand};

/// matfeat - 材料数据集特征构建工具
#[derive(Parser)]
#[command(name = "matfeat")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Build stoichiometry-filtered materials tables with per-element statistical features",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Extract non-magnetic materials matching a stoichiometry pattern
    Extract(extract::ExtractArgs),

    /// Append mean/max/min/deviation features of atomic properties
    Featurize(featurize::FeaturizeArgs),

    /// Run extract and featurize in one pass
    Build(build::BuildArgs),
}
