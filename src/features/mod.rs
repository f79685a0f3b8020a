//! # 特征构建模块
//!
//! 两个独立的无状态步骤：
//! 1. `extractor`: 数据源 -> 材料表（按化学计量模式过滤）
//! 2. `aggregator`: 材料表 + 原子性质表 -> 特征表（均值/最大/最小/标准差）
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`, `parsers/`, `source/`
//! - 子模块: aggregator, extractor, statistics

pub mod aggregator;
pub mod extractor;
pub mod statistics;

pub use aggregator::{aggregate, aggregate_with, detect_atom_columns};
pub use extractor::{extract, extract_with, ExtractEvent, ExtractReport, Extraction};
