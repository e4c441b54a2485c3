//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `sym`: 报告空间群信息
//! - `conv` / `prim`: 标准化惯用胞 / 原胞
//! - `super`: 构建超胞
//! - `get`: 从 Materials Project 下载结构
//! - `reorient`: 键取向旋转
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: sym, standardize, supercell, get, reorient

pub mod get;
pub mod reorient;
pub mod standardize;
pub mod supercell;
pub mod sym;

use clap::{Parser, Subcommand};

/// matools - 晶体结构命令行工具箱
#[derive(Parser)]
#[command(name = "matools")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Command-line tools for manipulating crystal structure files", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Report space group and lattice type of a structure
    Sym(sym::SymArgs),

    /// Generate the standardized conventional cell
    Conv(standardize::StandardizeArgs),

    /// Generate the standardized primitive cell
    Prim(standardize::StandardizeArgs),

    /// Build a supercell from scaling dimensions
    Super(supercell::SuperArgs),

    /// Query the Materials Project database for structures
    Get(get::GetArgs),

    /// Rotate a structure to align bonds along the c and x directions
    Reorient(reorient::ReorientArgs),
}
