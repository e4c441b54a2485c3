//! # 键取向旋转
//!
//! 将结构旋转至：中心原子到 along_c 原子的键沿 +z，
//! 中心原子到 along_x 原子的键落在 x-z 平面。
//!
//! 旋转同时作用于晶格与原子（分数坐标保持不变，旋转晶格行向量
//! 即等价于同时旋转所有笛卡尔坐标）。
//!
//! ## 依赖关系
//! - 被 `commands/reorient.rs` 使用
//! - 使用 `models/structure.rs`

use crate::error::{MatoolsError, Result};
use crate::models::structure::{dot, norm};
use crate::models::Crystal;

/// 对齐容差：旋转后 along_x 与中心原子的 y 偏差上限
pub const ALIGN_TOL: f64 = 1e-4;

/// 旋转报告：初始键角（度）与旋转后三个原子的笛卡尔坐标
pub struct ReorientReport {
    pub initial_angle_deg: f64,
    pub along_c_position: [f64; 3],
    pub central_position: [f64; 3],
    pub along_x_position: [f64; 3],
}

/// 执行键取向旋转，原子序号为 0 基
pub fn reorient(
    crystal: &mut Crystal,
    central: usize,
    along_c: usize,
    along_x: usize,
) -> Result<ReorientReport> {
    let n = crystal.num_sites();
    for idx in [central, along_c, along_x] {
        if idx >= n {
            return Err(MatoolsError::InvalidArgument(format!(
                "Atom index {} out of range (structure has {} atoms)",
                idx + 1,
                n
            )));
        }
    }
    if central == along_c || central == along_x || along_c == along_x {
        return Err(MatoolsError::InvalidArgument(
            "Central, along-c and along-x atoms must be distinct".to_string(),
        ));
    }

    let carts = crystal.cart_positions();
    let initial_angle_deg =
        angle_at(carts[along_c], carts[central], carts[along_x]).to_degrees();

    // 第一步：将 (along_c - central) 键旋转到 +z
    let bond_c = sub(carts[along_c], carts[central]);
    let r1 = rotation_between(bond_c, [0.0, 0.0, 1.0])?;
    rotate_lattice(crystal, &r1);

    // 第二步：绕 z 旋转，使 along_x 原子落到中心原子的 +x 方向。
    // 键角不一定恰为 90 度，因此用两个辅助点测量面内残余角：
    // 两点共享 along_x 的 x 与中心原子的 z，仅 y 不同。
    let carts = crystal.cart_positions();
    let c0 = carts[central];
    let x0 = carts[along_x];
    let p1 = [x0[0], c0[1], c0[2]];
    let p2 = [x0[0], x0[1], c0[2]];
    let mut ang = angle_at(p1, c0, p2);
    if !ang.is_finite() {
        ang = 0.0;
    }

    rotate_lattice(crystal, &rotation_about_z(ang));

    // 若 y 坐标未对齐，说明转向反了，改用补角 2π - 2·ang
    let carts = crystal.cart_positions();
    if (carts[along_x][1] - carts[central][1]).abs() > ALIGN_TOL {
        let complement = 2.0 * std::f64::consts::PI - 2.0 * ang;
        rotate_lattice(crystal, &rotation_about_z(complement));
    }

    let carts = crystal.cart_positions();
    Ok(ReorientReport {
        initial_angle_deg,
        along_c_position: carts[along_c],
        central_position: carts[central],
        along_x_position: carts[along_x],
    })
}

/// 旋转晶格行向量（分数坐标不变，笛卡尔坐标随之旋转）
pub fn rotate_lattice(crystal: &mut Crystal, r: &[[f64; 3]; 3]) {
    for row in crystal.lattice.matrix.iter_mut() {
        *row = mat_vec(r, *row);
    }
}

/// 三点夹角：顶点为 b
pub fn angle_at(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> f64 {
    let ba = sub(a, b);
    let bc = sub(c, b);
    let cos = dot(ba, bc) / (norm(ba) * norm(bc));
    cos.clamp(-1.0, 1.0).acos()
}

/// 将 v1 旋转到 v2 方向的旋转矩阵（Rodrigues 公式）
pub fn rotation_between(v1: [f64; 3], v2: [f64; 3]) -> Result<[[f64; 3]; 3]> {
    let n1 = norm(v1);
    let n2 = norm(v2);
    if n1 < 1e-10 || n2 < 1e-10 {
        return Err(MatoolsError::InvalidArgument(
            "Cannot rotate a zero-length bond vector".to_string(),
        ));
    }
    let u1 = [v1[0] / n1, v1[1] / n1, v1[2] / n1];
    let u2 = [v2[0] / n2, v2[1] / n2, v2[2] / n2];

    let c = dot(u1, u2).clamp(-1.0, 1.0);
    if c > 1.0 - 1e-12 {
        return Ok(identity());
    }
    if c < -1.0 + 1e-12 {
        // 反平行：绕任一垂直轴旋转 180 度
        let axis = perpendicular(u1);
        return Ok(rotation_about_axis(axis, std::f64::consts::PI));
    }

    let axis_raw = cross(u1, u2);
    let axis_norm = norm(axis_raw);
    let axis = [
        axis_raw[0] / axis_norm,
        axis_raw[1] / axis_norm,
        axis_raw[2] / axis_norm,
    ];
    Ok(rotation_about_axis(axis, c.acos()))
}

/// 绕单位轴旋转 angle 的矩阵
pub fn rotation_about_axis(axis: [f64; 3], angle: f64) -> [[f64; 3]; 3] {
    let (s, c) = angle.sin_cos();
    let t = 1.0 - c;
    let [x, y, z] = axis;

    [
        [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
        [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
        [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
    ]
}

/// 绕 z 轴旋转
pub fn rotation_about_z(angle: f64) -> [[f64; 3]; 3] {
    rotation_about_axis([0.0, 0.0, 1.0], angle)
}

fn identity() -> [[f64; 3]; 3] {
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// 任取一条与 v 垂直的单位向量
fn perpendicular(v: [f64; 3]) -> [f64; 3] {
    let candidate = if v[0].abs() < 0.9 {
        cross(v, [1.0, 0.0, 0.0])
    } else {
        cross(v, [0.0, 1.0, 0.0])
    };
    let n = norm(candidate);
    [candidate[0] / n, candidate[1] / n, candidate[2] / n]
}

/// 矩阵乘列向量：R·v
fn mat_vec(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Atom, Lattice};

    fn test_crystal() -> Crystal {
        // 斜晶格里放三个原子，键既不正交也不沿轴
        let lattice = Lattice::from_vectors([
            [6.0, 0.0, 0.0],
            [1.0, 6.5, 0.0],
            [0.4, 0.3, 7.0],
        ]);
        let atoms = vec![
            Atom::new("Pb", [0.30, 0.30, 0.30]),
            Atom::new("I", [0.30, 0.32, 0.58]),
            Atom::new("I", [0.55, 0.31, 0.33]),
        ];
        Crystal::new("PbI2 fragment", lattice, atoms)
    }

    #[test]
    fn test_rotation_between_aligns_vector() {
        let v = [1.3, -2.4, 0.7];
        let r = rotation_between(v, [0.0, 0.0, 1.0]).unwrap();
        let rotated = mat_vec(&r, v);
        assert!(rotated[0].abs() < 1e-10);
        assert!(rotated[1].abs() < 1e-10);
        assert!((rotated[2] - norm(v)).abs() < 1e-10);
    }

    #[test]
    fn test_rotation_between_antiparallel() {
        let r = rotation_between([0.0, 0.0, -2.0], [0.0, 0.0, 1.0]).unwrap();
        let rotated = mat_vec(&r, [0.0, 0.0, -2.0]);
        assert!((rotated[2] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_angle_at_right_angle() {
        let ang = angle_at([1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert!((ang - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_reorient_alignment_invariants() {
        let mut crystal = test_crystal();
        let report = reorient(&mut crystal, 0, 1, 2).unwrap();

        // along_c - central 平行于 z
        let bond = [
            report.along_c_position[0] - report.central_position[0],
            report.along_c_position[1] - report.central_position[1],
            report.along_c_position[2] - report.central_position[2],
        ];
        assert!(bond[0].abs() < 1e-8);
        assert!(bond[1].abs() < 1e-8);
        assert!(bond[2] > 0.0);

        // along_x 与中心原子 y 对齐
        assert!(
            (report.along_x_position[1] - report.central_position[1]).abs() < ALIGN_TOL
        );

        // 旋转不改变分数坐标与键角
        assert!((crystal.atoms[0].position[0] - 0.30).abs() < 1e-12);
        assert!(report.initial_angle_deg > 0.0);
    }

    #[test]
    fn test_reorient_preserves_bond_lengths() {
        let original = test_crystal();
        let carts0 = original.cart_positions();
        let d0 = norm([
            carts0[1][0] - carts0[0][0],
            carts0[1][1] - carts0[0][1],
            carts0[1][2] - carts0[0][2],
        ]);

        let mut crystal = test_crystal();
        reorient(&mut crystal, 0, 1, 2).unwrap();
        let carts = crystal.cart_positions();
        let d1 = norm([
            carts[1][0] - carts[0][0],
            carts[1][1] - carts[0][1],
            carts[1][2] - carts[0][2],
        ]);
        assert!((d0 - d1).abs() < 1e-10);
    }

    #[test]
    fn test_reorient_rejects_bad_indices() {
        let mut crystal = test_crystal();
        assert!(reorient(&mut crystal, 0, 0, 2).is_err());
        assert!(reorient(&mut crystal, 0, 1, 9).is_err());
    }
}
