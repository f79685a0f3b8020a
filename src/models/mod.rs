//! # 数据模型模块
//!
//! 定义化学组成、化学计量模式、表格和原子性质表。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `source/`, `features/` 和 `commands/` 使用
//! - 子模块: composition, element, property, stoichiometry, table

pub mod composition;
pub mod element;
pub mod property;
pub mod stoichiometry;
pub mod table;

pub use composition::Composition;
pub use property::PropertyTable;
pub use stoichiometry::StoichiometryPattern;
pub use table::{Table, Value};
