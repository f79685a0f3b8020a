//! # 解析器模块
//!
//! 提供化学式解析器。
//!
//! ## 依赖关系
//! - 被 `features/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: formula

pub mod formula;

pub use formula::parse_formula;
