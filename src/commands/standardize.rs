//! # conv / prim 命令实现
//!
//! 读取结构，委托 moyo 生成标准化惯用胞或原胞，按输入的物种顺序
//! 重排后写出 `<file>_conv` / `<file>_prim`。
//!
//! ## 依赖关系
//! - 使用 `cli/standardize.rs` 定义的参数
//! - 使用 `parsers/`, `symmetry/`, `models/`
//! - 使用 `utils/output.rs`

use std::path::PathBuf;

use crate::cli::standardize::StandardizeArgs;
use crate::error::Result;
use crate::parsers::{self, poscar};
use crate::symmetry;
use crate::utils::output;

/// 保留哪种标准化晶胞
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellChoice {
    Conventional,
    Primitive,
}

/// 执行 conv / prim 命令
pub fn execute(args: StandardizeArgs, choice: CellChoice) -> Result<()> {
    let crystal = parsers::parse_structure_file(&args.file)?;
    let species_order = crystal.species_order();

    let data = symmetry::analyze(&crystal, args.tol)?;

    println!("Initial structure has {} atoms", crystal.num_sites());
    output::print_kv("Space group number", &data.number.to_string());
    output::print_kv("International symbol", data.international);
    output::print_kv("Lattice type", data.lattice_type);

    let (standardized, suffix) = match choice {
        CellChoice::Conventional => (&data.conventional, "conv"),
        CellChoice::Primitive => (&data.primitive, "prim"),
    };
    let sorted = standardized.sorted_by_species(&species_order);

    let out_path = PathBuf::from(format!("{}_{}", args.file.display(), suffix));
    poscar::write_poscar_file(&sorted, &out_path)?;

    println!("Final structure has {} atoms", sorted.num_sites());

    if choice == CellChoice::Primitive {
        let m = data.conv_to_prim_matrix()?;
        println!("Conv -> Prim transformation matrix:");
        for row in &m {
            println!("\t[{:8.4} {:8.4} {:8.4}]", row[0], row[1], row[2]);
        }
    }

    output::print_done(&format!("Standardized cell written to '{}'", out_path.display()));

    Ok(())
}
