//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `symmetry/`, `mp/`, `utils/`
//! - 子模块: sym, standardize, supercell, get, reorient

pub mod get;
pub mod reorient;
pub mod standardize;
pub mod supercell;
pub mod sym;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Sym(args) => sym::execute(args),
        Commands::Conv(args) => standardize::execute(args, standardize::CellChoice::Conventional),
        Commands::Prim(args) => standardize::execute(args, standardize::CellChoice::Primitive),
        Commands::Super(args) => supercell::execute(args),
        Commands::Get(args) => get::execute(args),
        Commands::Reorient(args) => reorient::execute(args),
    }
}
