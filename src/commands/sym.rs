//! # sym 命令实现
//!
//! 读取结构并报告空间群编号、国际符号与晶格类型。
//!
//! ## 依赖关系
//! - 使用 `cli/sym.rs` 定义的参数
//! - 使用 `parsers/`, `symmetry/`

use crate::cli::sym::SymArgs;
use crate::error::Result;
use crate::parsers;
use crate::symmetry;

/// 执行 sym 命令
pub fn execute(args: SymArgs) -> Result<()> {
    let crystal = parsers::parse_structure_file(&args.file)?;
    let data = symmetry::analyze(&crystal, args.tol)?;

    println!("Space group number: {}", data.number);
    println!("International symbol: {}", data.international);
    println!("Lattice type: {}", data.lattice_type);

    Ok(())
}
