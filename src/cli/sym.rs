//! # sym 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/sym.rs`

use clap::Args;
use std::path::PathBuf;

/// sym 子命令参数
#[derive(Args, Debug)]
pub struct SymArgs {
    /// Path to input file
    #[arg(short, long, default_value = "POSCAR")]
    pub file: PathBuf,

    /// Symmetry tolerance
    #[arg(short, long, default_value_t = 1e-3)]
    pub tol: f64,
}
