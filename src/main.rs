//! # matfeat - 材料数据集特征构建工具
//!
//! 从结构数据库中提取特定化学计量的非磁性材料，
//! 并以元素物理性质的统计量（均值/最大/最小/标准差）作为机器学习特征。
//!
//! ## 子命令
//! - `extract`   - 按化学计量模式提取材料表
//! - `featurize` - 追加原子性质统计特征
//! - `build`     - extract + featurize
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── features/  (提取与聚合)
//!   │     ├── source/    (数据源)
//!   │     ├── parsers/   (化学式解析)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

use clap::Parser;
use matfeat::cli::Cli;
use matfeat::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
