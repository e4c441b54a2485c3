//! # 统一错误处理模块
//!
//! 定义 matools 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// matools 统一错误类型
#[derive(Error, Debug)]
pub enum MatoolsError {
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
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Cannot parse supercell dimensions, try `matools super -h` for help")]
    InvalidSupercellDim,

    #[error("Singular lattice matrix (zero cell volume)")]
    SingularLattice,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // 对称性错误
    // ─────────────────────────────────────────────────────────────
    #[error("Symmetry detection failed: {reason}")]
    SymmetryFailure { reason: String },

    // ─────────────────────────────────────────────────────────────
    // Materials Project API 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Materials Project request failed: {0}")]
    HttpError(#[from] Box<ureq::Error>),

    #[error("Failed to decode Materials Project response: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("No Materials Project entries matched query: {query}")]
    NoEntriesFound { query: String },

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, MatoolsError>;
