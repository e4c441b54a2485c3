//! # reorient 命令实现
//!
//! 把指定的两根键旋转到坐标轴方向后写出 `<file>_rot`。
//!
//! ## 依赖关系
//! - 使用 `cli/reorient.rs` 定义的参数
//! - 使用 `parsers/`, `geometry`
//! - 使用 `utils/output.rs`

use std::path::PathBuf;

use crate::cli::reorient::ReorientArgs;
use crate::error::{MatoolsError, Result};
use crate::geometry;
use crate::parsers::{self, poscar};
use crate::utils::output;

/// 执行 reorient 命令
pub fn execute(args: ReorientArgs) -> Result<()> {
    for (name, idx) in [
        ("central", args.central),
        ("along-c", args.along_c),
        ("along-x", args.along_x),
    ] {
        if idx == 0 {
            return Err(MatoolsError::InvalidArgument(format!(
                "Atom indices are 1-based, got 0 for --{}",
                name
            )));
        }
    }

    let mut crystal = parsers::parse_structure_file(&args.file)?;

    let report = geometry::reorient(
        &mut crystal,
        args.central - 1,
        args.along_c - 1,
        args.along_x - 1,
    )?;

    println!("Angle between atoms is {:.4} deg\n", report.initial_angle_deg);
    println!("Atom along c: {:?}", report.along_c_position);
    println!("Central atom: {:?}", report.central_position);
    println!("Atom along x: {:?}", report.along_x_position);

    let out_path = PathBuf::from(format!("{}_rot", args.file.display()));
    poscar::write_poscar_file(&crystal, &out_path)?;

    output::print_done(&format!("Saved rotated structure to '{}'", out_path.display()));

    Ok(())
}
