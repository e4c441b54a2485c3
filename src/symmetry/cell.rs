//! # Crystal <-> moyo Cell 转换
//!
//! moyo 的晶胞用 nalgebra 类型与 1 基物种编号表示；
//! 这里负责与本仓库的 `Crystal` 互转，物种编号按首次出现顺序分配。
//!
//! ## 依赖关系
//! - 被 `symmetry/mod.rs` 使用
//! - 使用 `models/structure.rs`

use moyo::base::{Cell, Lattice as MoyoLattice};
use nalgebra::{Matrix3, Vector3};

use crate::models::{Atom, Crystal, Lattice};

/// Crystal 转 moyo Cell，返回物种编号表（编号 i+1 对应 species[i]）
pub fn to_moyo_cell(crystal: &Crystal) -> (Cell, Vec<String>) {
    let m = crystal.lattice.matrix;
    let basis = Matrix3::new(
        m[0][0], m[0][1], m[0][2], //
        m[1][0], m[1][1], m[1][2], //
        m[2][0], m[2][1], m[2][2],
    );

    let species = crystal.species_order();
    let mut positions = Vec::with_capacity(crystal.atoms.len());
    let mut numbers = Vec::with_capacity(crystal.atoms.len());

    for atom in &crystal.atoms {
        positions.push(Vector3::new(
            atom.position[0],
            atom.position[1],
            atom.position[2],
        ));
        let id = species
            .iter()
            .position(|e| *e == atom.element)
            .unwrap_or(0) as i32;
        numbers.push(id + 1);
    }

    (Cell::new(MoyoLattice::new(basis), positions, numbers), species)
}

/// moyo Cell 转回 Crystal，物种编号查回元素符号
pub fn from_moyo_cell(cell: &Cell, species: &[String], name: &str) -> Crystal {
    let b = cell.lattice.basis;
    let matrix = [
        [b.m11, b.m12, b.m13],
        [b.m21, b.m22, b.m23],
        [b.m31, b.m32, b.m33],
    ];

    let atoms: Vec<Atom> = cell
        .positions
        .iter()
        .zip(cell.numbers.iter())
        .map(|(pos, num)| {
            let idx = (*num - 1).max(0) as usize;
            let element = species
                .get(idx)
                .cloned()
                .unwrap_or_else(|| "X".to_string());
            Atom::new(element, [pos.x, pos.y, pos.z])
        })
        .collect();

    Crystal::new(name, Lattice::from_vectors(matrix), atoms)
}
