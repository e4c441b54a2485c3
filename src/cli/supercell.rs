//! # super 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/supercell.rs`

use clap::Args;
use std::path::PathBuf;

/// super 子命令参数
#[derive(Args, Debug)]
pub struct SuperArgs {
    /// The supercell dimensions, either as 3 numbers, a full 3x3 scaling
    /// matrix, or a single scaling factor
    #[arg(required = true, num_args = 1..)]
    pub dim: Vec<String>,

    /// Path to input file
    #[arg(short, long, default_value = "POSCAR")]
    pub file: PathBuf,
}
