//! # super 命令实现
//!
//! 按 1 / 3 / 9 个整数给出的缩放构建超胞，按输入物种顺序重排后
//! 写出 `<file>_super`。
//!
//! ## 依赖关系
//! - 使用 `cli/supercell.rs` 定义的参数
//! - 使用 `parsers/`, `models/`
//! - 使用 `utils/output.rs`

use std::path::PathBuf;

use crate::cli::supercell::SuperArgs;
use crate::error::Result;
use crate::models::ScalingMatrix;
use crate::parsers::{self, poscar};
use crate::utils::output;

/// 执行 super 命令
pub fn execute(args: SuperArgs) -> Result<()> {
    let scaling = ScalingMatrix::parse(&args.dim)?;

    let crystal = parsers::parse_structure_file(&args.file)?;
    let species_order = crystal.species_order();
    let nsites = crystal.num_sites();

    let supercell = crystal
        .make_supercell(&scaling)?
        .sorted_by_species(&species_order);

    let out_path = PathBuf::from(format!("{}_super", args.file.display()));
    poscar::write_poscar_file(&supercell, &out_path)?;

    println!("Initial structure has {} atoms", nsites);
    println!("Final structure has {} atoms", supercell.num_sites());
    output::print_done(&format!("Supercell written to '{}'", out_path.display()));

    Ok(())
}
