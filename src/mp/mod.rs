//! # Materials Project 模块
//!
//! 远程数据库查询、条目模型与本地数据库写入。
//!
//! ## 依赖关系
//! - 被 `commands/get.rs` 使用
//! - 子模块: client, models, db

pub mod client;
pub mod db;
pub mod models;

pub use client::MpClient;
