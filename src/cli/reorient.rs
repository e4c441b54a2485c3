//! # reorient 子命令 CLI 定义
//!
//! 原子序号与 POSCAR 中的行号一致，从 1 开始计数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/reorient.rs`

use clap::Args;
use std::path::PathBuf;

/// reorient 子命令参数
#[derive(Args, Debug)]
pub struct ReorientArgs {
    /// Path to input file
    #[arg(short, long, default_value = "POSCAR")]
    pub file: PathBuf,

    /// Index of the central atom (1-based)
    #[arg(long)]
    pub central: usize,

    /// Index of the atom to align along c (1-based)
    #[arg(long)]
    pub along_c: usize,

    /// Index of the atom to align along x (1-based)
    #[arg(long)]
    pub along_x: usize,
}
