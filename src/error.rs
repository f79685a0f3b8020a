//! # 统一错误处理模块
//!
//! 定义 matfeat 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// matfeat 统一错误类型
#[derive(Error, Debug)]
pub enum MatfeatError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 化学式解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse formula '{formula}'\nReason: {reason}")]
    FormulaError { formula: String, reason: String },

    #[error("Unknown element symbol '{symbol}' in formula '{formula}'")]
    UnknownElement { symbol: String, formula: String },

    #[error("Invalid stoichiometry '{0}' (expected ABC, AB or AB<n>)")]
    InvalidStoichiometry(String),

    // ─────────────────────────────────────────────────────────────
    // 数据源错误
    // ─────────────────────────────────────────────────────────────
    #[error("Row '{formula}' has no property '{property}'")]
    MissingProperty { formula: String, property: String },

    #[error("Invalid boolean '{value}' in column '{column}' (line {line})")]
    InvalidBoolean {
        column: String,
        value: String,
        line: u64,
    },

    // ─────────────────────────────────────────────────────────────
    // 表格错误
    // ─────────────────────────────────────────────────────────────
    #[error("Column not found: {0}")]
    MissingColumn(String),

    #[error("Column already exists: {0}")]
    DuplicateColumn(String),

    #[error("Column '{column}' has {actual} values, table has {expected} rows")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Row has {actual} cells, table has {expected} columns")]
    RowWidthMismatch { expected: usize, actual: usize },

    #[error("Duplicate element '{0}' in atom property table")]
    DuplicateElement(String),

    #[error("Non-numeric value '{value}' for element '{element}' in property '{column}'")]
    NonNumericProperty {
        column: String,
        element: String,
        value: String,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MatfeatError>;
