//! # 晶体结构数据模型
//!
//! 定义统一的晶体结构表示：晶格、原子（分数坐标）、晶体。
//! 同时实现各命令共用的结构操作：物种重排序与超胞构建。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `symmetry/`, `commands/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

use crate::error::{MatoolsError, Result};

/// 晶格参数表示
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lattice {
    /// 晶格向量矩阵 (3x3)，行向量表示 a, b, c
    /// [[a1, a2, a3], [b1, b2, b3], [c1, c2, c3]]
    pub matrix: [[f64; 3]; 3],
}

impl Lattice {
    /// 从晶格向量矩阵创建
    pub fn from_vectors(matrix: [[f64; 3]; 3]) -> Self {
        Lattice { matrix }
    }

    /// 获取晶格参数 (a, b, c, alpha, beta, gamma)，角度单位：度
    pub fn parameters(&self) -> (f64, f64, f64, f64, f64, f64) {
        let a_vec = self.matrix[0];
        let b_vec = self.matrix[1];
        let c_vec = self.matrix[2];

        let a = norm(a_vec);
        let b = norm(b_vec);
        let c = norm(c_vec);

        let alpha = (dot(b_vec, c_vec) / (b * c)).acos().to_degrees();
        let beta = (dot(a_vec, c_vec) / (a * c)).acos().to_degrees();
        let gamma = (dot(a_vec, b_vec) / (a * b)).acos().to_degrees();

        (a, b, c, alpha, beta, gamma)
    }

    /// 计算晶格体积（行列式）
    pub fn volume(&self) -> f64 {
        det3(&self.matrix)
    }

    /// 晶格矩阵的逆，奇异矩阵返回错误
    pub fn inverse(&self) -> Result<[[f64; 3]; 3]> {
        inverse3(&self.matrix).ok_or(MatoolsError::SingularLattice)
    }
}

/// 原子信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Atom {
    /// 元素符号
    pub element: String,

    /// 分数坐标 [x, y, z]
    pub position: [f64; 3],
}

impl Atom {
    pub fn new(element: impl Into<String>, position: [f64; 3]) -> Self {
        Atom {
            element: element.into(),
            position,
        }
    }
}

/// 晶体结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crystal {
    /// 结构名称
    pub name: String,

    /// 晶格
    pub lattice: Lattice,

    /// 原子列表（分数坐标）
    pub atoms: Vec<Atom>,
}

impl Crystal {
    pub fn new(name: impl Into<String>, lattice: Lattice, atoms: Vec<Atom>) -> Self {
        Crystal {
            name: name.into(),
            lattice,
            atoms,
        }
    }

    /// 原子数
    pub fn num_sites(&self) -> usize {
        self.atoms.len()
    }

    /// 计算化学式
    pub fn formula(&self) -> String {
        let mut order: Vec<&str> = Vec::new();
        let mut counts: Vec<usize> = Vec::new();

        for atom in &self.atoms {
            match order.iter().position(|e| *e == atom.element.as_str()) {
                Some(i) => counts[i] += 1,
                None => {
                    order.push(atom.element.as_str());
                    counts.push(1);
                }
            }
        }

        order
            .iter()
            .zip(counts.iter())
            .map(|(el, count)| {
                if *count == 1 {
                    (*el).to_string()
                } else {
                    format!("{}{}", el, count)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// 物种首次出现顺序：元素符号 -> 序号
    ///
    /// 对应各脚本中 `species_order = {k.name: i for i, k in ...}` 的重排序键。
    pub fn species_order(&self) -> Vec<String> {
        let mut order: Vec<String> = Vec::new();
        for atom in &self.atoms {
            if !order.contains(&atom.element) {
                order.push(atom.element.clone());
            }
        }
        order
    }

    /// 按给定物种顺序重新排列原子（稳定排序，未知物种排在最前）
    pub fn sorted_by_species(&self, order: &[String]) -> Crystal {
        let mut atoms = self.atoms.clone();
        atoms.sort_by_key(|a| order.iter().position(|e| *e == a.element).unwrap_or(0));
        Crystal {
            name: self.name.clone(),
            lattice: self.lattice.clone(),
            atoms,
        }
    }

    /// 分数坐标转笛卡尔坐标
    pub fn cart_positions(&self) -> Vec<[f64; 3]> {
        self.atoms
            .iter()
            .map(|a| frac_to_cart(a.position, &self.lattice))
            .collect()
    }

    /// 构建超胞：新晶格为 S·L，原子数为 N·|det S|
    ///
    /// 通过枚举超胞包围盒内的晶格平移，保留新分数坐标落在 [0,1) 的像。
    /// 外层按原子循环使物种分组顺序在超胞中保持不变。
    pub fn make_supercell(&self, scaling: &ScalingMatrix) -> Result<Crystal> {
        let s = scaling.matrix;
        let det = det3i(&s);
        if det == 0 {
            return Err(MatoolsError::InvalidArgument(
                "Supercell scaling matrix is singular".to_string(),
            ));
        }
        let multiplicity = det.unsigned_abs() as usize;

        // 新晶格 L' = S·L（行向量约定）
        let mut new_matrix = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                for (k, row) in self.lattice.matrix.iter().enumerate() {
                    new_matrix[i][j] += s[i][k] as f64 * row[j];
                }
            }
        }
        let new_lattice = Lattice::from_vectors(new_matrix);

        let sf = [
            [s[0][0] as f64, s[0][1] as f64, s[0][2] as f64],
            [s[1][0] as f64, s[1][1] as f64, s[1][2] as f64],
            [s[2][0] as f64, s[2][1] as f64, s[2][2] as f64],
        ];
        let s_inv = inverse3(&sf).ok_or(MatoolsError::SingularLattice)?;

        // 平移包围盒：单位立方体八个角在旧分数坐标中的像
        let mut lo = [i64::MAX; 3];
        let mut hi = [i64::MIN; 3];
        for cx in 0..2 {
            for cy in 0..2 {
                for cz in 0..2 {
                    let corner = [cx as f64, cy as f64, cz as f64];
                    let mapped = row_vec_mul(corner, &sf);
                    for i in 0..3 {
                        lo[i] = lo[i].min(mapped[i].floor() as i64 - 1);
                        hi[i] = hi[i].max(mapped[i].ceil() as i64 + 1);
                    }
                }
            }
        }

        const EPS: f64 = 1e-8;
        let mut atoms = Vec::with_capacity(self.atoms.len() * multiplicity);
        for atom in &self.atoms {
            for tx in lo[0]..=hi[0] {
                for ty in lo[1]..=hi[1] {
                    for tz in lo[2]..=hi[2] {
                        let shifted = [
                            atom.position[0] + tx as f64,
                            atom.position[1] + ty as f64,
                            atom.position[2] + tz as f64,
                        ];
                        let g = row_vec_mul(shifted, &s_inv);
                        if g.iter().all(|x| (-EPS..1.0 - EPS).contains(x)) {
                            let wrapped = [g[0].max(0.0), g[1].max(0.0), g[2].max(0.0)];
                            atoms.push(Atom::new(atom.element.clone(), wrapped));
                        }
                    }
                }
            }
        }

        Ok(Crystal::new(self.name.clone(), new_lattice, atoms))
    }
}

/// 超胞缩放矩阵（整数 3x3）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalingMatrix {
    pub matrix: [[i64; 3]; 3],
}

impl ScalingMatrix {
    /// 从命令行参数解析：1 个整数 = 均匀缩放，3 个 = 逐轴缩放，9 个 = 完整矩阵
    pub fn parse(dims: &[String]) -> Result<Self> {
        let ints: Vec<i64> = dims
            .iter()
            .map(|s| s.trim().parse::<i64>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|_| MatoolsError::InvalidSupercellDim)?;

        let matrix = match ints.len() {
            1 => {
                let k = ints[0];
                [[k, 0, 0], [0, k, 0], [0, 0, k]]
            }
            3 => [[ints[0], 0, 0], [0, ints[1], 0], [0, 0, ints[2]]],
            9 => [
                [ints[0], ints[1], ints[2]],
                [ints[3], ints[4], ints[5]],
                [ints[6], ints[7], ints[8]],
            ],
            _ => return Err(MatoolsError::InvalidSupercellDim),
        };

        Ok(ScalingMatrix { matrix })
    }

    /// 缩放倍数 |det S|
    pub fn multiplicity(&self) -> usize {
        det3i(&self.matrix).unsigned_abs() as usize
    }
}

// ─────────────────────────────────────────────────────────────
// 3x3 矩阵与向量运算
// ─────────────────────────────────────────────────────────────

pub(crate) fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub(crate) fn norm(v: [f64; 3]) -> f64 {
    dot(v, v).sqrt()
}

fn det3(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

fn det3i(m: &[[i64; 3]; 3]) -> i64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

fn inverse3(m: &[[f64; 3]; 3]) -> Option<[[f64; 3]; 3]> {
    let det = det3(m);
    if det.abs() < 1e-10 {
        return None;
    }

    Some([
        [
            (m[1][1] * m[2][2] - m[1][2] * m[2][1]) / det,
            (m[0][2] * m[2][1] - m[0][1] * m[2][2]) / det,
            (m[0][1] * m[1][2] - m[0][2] * m[1][1]) / det,
        ],
        [
            (m[1][2] * m[2][0] - m[1][0] * m[2][2]) / det,
            (m[0][0] * m[2][2] - m[0][2] * m[2][0]) / det,
            (m[0][2] * m[1][0] - m[0][0] * m[1][2]) / det,
        ],
        [
            (m[1][0] * m[2][1] - m[1][1] * m[2][0]) / det,
            (m[0][1] * m[2][0] - m[0][0] * m[2][1]) / det,
            (m[0][0] * m[1][1] - m[0][1] * m[1][0]) / det,
        ],
    ])
}

/// 行向量乘矩阵：v·M
fn row_vec_mul(v: [f64; 3], m: &[[f64; 3]; 3]) -> [f64; 3] {
    [
        v[0] * m[0][0] + v[1] * m[1][0] + v[2] * m[2][0],
        v[0] * m[0][1] + v[1] * m[1][1] + v[2] * m[2][1],
        v[0] * m[0][2] + v[1] * m[1][2] + v[2] * m[2][2],
    ]
}

/// 笛卡尔坐标转分数坐标
pub fn cart_to_frac(cart: [f64; 3], lattice: &Lattice) -> [f64; 3] {
    match inverse3(&lattice.matrix) {
        Some(inv) => row_vec_mul(cart, &inv),
        None => cart,
    }
}

/// 分数坐标转笛卡尔坐标
pub fn frac_to_cart(frac: [f64; 3], lattice: &Lattice) -> [f64; 3] {
    row_vec_mul(frac, &lattice.matrix)
}
