//! # matfeat
//!
//! 材料数据集特征构建：
//! - [`features::extract`]: 数据源 -> 按化学计量模式过滤的材料表
//! - [`features::aggregate`]: 材料表 + 原子性质表 -> 统计特征表
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: cli, commands, error, features, models, parsers, source, utils

pub mod cli;
pub mod commands;
pub mod error;
pub mod features;
pub mod models;
pub mod parsers;
pub mod source;
pub mod utils;

pub use error::{MatfeatError, Result};
