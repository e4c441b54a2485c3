//! # conv / prim 子命令 CLI 定义
//!
//! 两个子命令共用同一组参数，区别只在保留哪种标准化晶胞。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/standardize.rs`

use clap::Args;
use std::path::PathBuf;

/// conv / prim 子命令参数
#[derive(Args, Debug)]
pub struct StandardizeArgs {
    /// Path to input file
    #[arg(short, long, default_value = "POSCAR")]
    pub file: PathBuf,

    /// Symmetry tolerance
    #[arg(short, long, default_value_t = 1e-3)]
    pub tol: f64,
}
