//! # 工具模块
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 使用

pub mod output;
pub mod progress;
