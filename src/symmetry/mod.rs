//! # 对称性分析模块
//!
//! `moyo`（spglib 项目的 Rust 实现）的窄封装：空间群检测与标准化晶胞
//! 均委托给 moyo，本仓库不自行实现任何对称性数学。
//!
//! ## 依赖关系
//! - 被 `commands/sym.rs`, `commands/standardize.rs`, `mp/` 使用
//! - 使用 `models/`
//! - 子模块: cell, spacegroup

pub mod cell;
pub mod spacegroup;

use moyo::base::AngleTolerance;
use moyo::data::Setting;
use moyo::MoyoDataset;

use crate::error::{MatoolsError, Result};
use crate::models::Crystal;

/// 一次对称性分析的结果
pub struct SymmetryData {
    /// 空间群编号 (1-230)
    pub number: i32,

    /// Hall 编号 (1-530)
    pub hall_number: i32,

    /// 国际短符号
    pub international: &'static str,

    /// 晶格类型（小写，如 cubic / rhombohedral）
    pub lattice_type: &'static str,

    /// 标准化惯用晶胞
    pub conventional: Crystal,

    /// 标准化原胞
    pub primitive: Crystal,
}

impl SymmetryData {
    /// 惯用胞 -> 原胞的变换矩阵 M（行向量约定：L_prim = M · L_conv）
    pub fn conv_to_prim_matrix(&self) -> Result<[[f64; 3]; 3]> {
        let conv_inv = self.conventional.lattice.inverse()?;
        let lp = &self.primitive.lattice.matrix;

        let mut m = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    m[i][j] += lp[i][k] * conv_inv[k][j];
                }
            }
        }
        Ok(m)
    }
}

/// 分析晶体对称性并提取标准化晶胞
///
/// 使用 spglib 约定 (`Setting::Spglib`) 与默认角度容差。
pub fn analyze(crystal: &Crystal, symprec: f64) -> Result<SymmetryData> {
    let (moyo_cell, species) = cell::to_moyo_cell(crystal);

    let dataset = MoyoDataset::new(
        &moyo_cell,
        symprec,
        AngleTolerance::Default,
        Setting::Spglib,
    )
    .map_err(|e| MatoolsError::SymmetryFailure {
        reason: format!("{:?}", e),
    })?;

    let number = dataset.number;
    let conventional = cell::from_moyo_cell(&dataset.std_cell, &species, &crystal.name);
    let primitive = cell::from_moyo_cell(&dataset.prim_std_cell, &species, &crystal.name);

    Ok(SymmetryData {
        number,
        hall_number: dataset.hall_number,
        international: spacegroup::international_symbol(number),
        lattice_type: spacegroup::lattice_type(number),
        conventional,
        primitive,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Atom, Lattice};

    fn rocksalt_nacl() -> Crystal {
        let lattice =
            Lattice::from_vectors([[5.64, 0.0, 0.0], [0.0, 5.64, 0.0], [0.0, 0.0, 5.64]]);
        let atoms = vec![
            Atom::new("Na", [0.0, 0.0, 0.0]),
            Atom::new("Na", [0.5, 0.5, 0.0]),
            Atom::new("Na", [0.5, 0.0, 0.5]),
            Atom::new("Na", [0.0, 0.5, 0.5]),
            Atom::new("Cl", [0.5, 0.0, 0.0]),
            Atom::new("Cl", [0.0, 0.5, 0.0]),
            Atom::new("Cl", [0.0, 0.0, 0.5]),
            Atom::new("Cl", [0.5, 0.5, 0.5]),
        ];
        Crystal::new("NaCl", lattice, atoms)
    }

    fn bcc_fe() -> Crystal {
        let lattice =
            Lattice::from_vectors([[2.87, 0.0, 0.0], [0.0, 2.87, 0.0], [0.0, 0.0, 2.87]]);
        let atoms = vec![
            Atom::new("Fe", [0.0, 0.0, 0.0]),
            Atom::new("Fe", [0.5, 0.5, 0.5]),
        ];
        Crystal::new("Fe", lattice, atoms)
    }

    #[test]
    fn test_analyze_rocksalt() {
        let data = analyze(&rocksalt_nacl(), 1e-3).unwrap();
        assert_eq!(data.number, 225);
        assert_eq!(data.international, "Fm-3m");
        assert_eq!(data.lattice_type, "cubic");
        assert_eq!(data.conventional.num_sites(), 8);
        assert_eq!(data.primitive.num_sites(), 2);
    }

    #[test]
    fn test_analyze_bcc() {
        let data = analyze(&bcc_fe(), 1e-3).unwrap();
        assert_eq!(data.number, 229);
        assert_eq!(data.international, "Im-3m");
        assert_eq!(data.primitive.num_sites(), 1);
    }

    #[test]
    fn test_conventional_idempotent() {
        let first = analyze(&rocksalt_nacl(), 1e-3).unwrap();
        let second = analyze(&first.conventional, 1e-3).unwrap();
        assert_eq!(first.number, second.number);
        assert_eq!(
            first.conventional.num_sites(),
            second.conventional.num_sites()
        );
    }

    #[test]
    fn test_conv_to_prim_matrix_determinant() {
        let data = analyze(&rocksalt_nacl(), 1e-3).unwrap();
        let m = data.conv_to_prim_matrix().unwrap();
        // fcc 惯用胞含 4 个原胞
        let det = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);
        assert!((det.abs() - 0.25).abs() < 1e-6);
    }
}
