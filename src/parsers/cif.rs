//! # CIF 格式序列化
//!
//! 输出 P1 对称性的 CIF 块，供 `get --cif` 使用。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/structure.rs`

use std::fs;
use std::path::Path;

use crate::error::{MatoolsError, Result};
use crate::models::Crystal;

/// 转换为 CIF 格式字符串
pub fn to_cif_string(crystal: &Crystal) -> String {
    let (a, b, c, alpha, beta, gamma) = crystal.lattice.parameters();

    let mut result = String::new();
    result.push_str(&format!("data_{}\n", crystal.name.replace(' ', "_")));
    result.push_str("_symmetry_space_group_name_H-M    'P 1'\n");
    result.push_str("_symmetry_Int_Tables_number       1\n\n");

    result.push_str(&format!("_cell_length_a    {:.6}\n", a));
    result.push_str(&format!("_cell_length_b    {:.6}\n", b));
    result.push_str(&format!("_cell_length_c    {:.6}\n", c));
    result.push_str(&format!("_cell_angle_alpha {:.4}\n", alpha));
    result.push_str(&format!("_cell_angle_beta  {:.4}\n", beta));
    result.push_str(&format!("_cell_angle_gamma {:.4}\n\n", gamma));

    result.push_str("loop_\n");
    result.push_str("_atom_site_label\n");
    result.push_str("_atom_site_type_symbol\n");
    result.push_str("_atom_site_fract_x\n");
    result.push_str("_atom_site_fract_y\n");
    result.push_str("_atom_site_fract_z\n");
    result.push_str("_atom_site_occupancy\n");

    for (i, atom) in crystal.atoms.iter().enumerate() {
        result.push_str(&format!(
            "{}{} {} {:.10} {:.10} {:.10} 1.0\n",
            atom.element,
            i + 1,
            atom.element,
            atom.position[0],
            atom.position[1],
            atom.position[2]
        ));
    }

    result
}

/// 写出 CIF 文件
pub fn write_cif_file(crystal: &Crystal, path: &Path) -> Result<()> {
    fs::write(path, to_cif_string(crystal)).map_err(|e| MatoolsError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Atom, Lattice};

    #[test]
    fn test_cif_contains_cell_and_sites() {
        let lattice = Lattice::from_vectors([[4.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 4.0]]);
        let atoms = vec![
            Atom::new("Ti", [0.0, 0.0, 0.0]),
            Atom::new("O", [0.5, 0.5, 0.0]),
        ];
        let crystal = Crystal::new("TiO2", lattice, atoms);

        let cif = to_cif_string(&crystal);
        assert!(cif.starts_with("data_TiO2"));
        assert!(cif.contains("_cell_length_a    4.000000"));
        assert!(cif.contains("Ti1 Ti"));
        assert!(cif.contains("O2 O"));
    }
}
