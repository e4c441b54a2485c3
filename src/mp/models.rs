//! # Materials Project 数据模型
//!
//! summary 端点返回文档的 serde 映射，以及 pymatgen 风格结构 JSON
//! 到本仓库 `Crystal` 的转换。
//!
//! ## 依赖关系
//! - 被 `mp/client.rs`, `mp/db.rs`, `commands/get.rs` 使用
//! - 使用 `models/structure.rs`

use serde::{Deserialize, Serialize};

use crate::models::{Atom, Crystal, Lattice};

/// summary 端点响应包
#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub data: Vec<SummaryDoc>,
}

/// 单个候选条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryDoc {
    pub material_id: String,
    pub formula_pretty: String,

    #[serde(default)]
    pub energy_above_hull: Option<f64>,

    #[serde(default)]
    pub band_gap: Option<f64>,

    #[serde(default)]
    pub nsites: Option<usize>,

    #[serde(default)]
    pub volume: Option<f64>,

    /// 是否纯理论预测结构（无实验来源）
    #[serde(default)]
    pub theoretical: Option<bool>,

    #[serde(default)]
    pub symmetry: Option<SymmetryDoc>,

    #[serde(default)]
    pub structure: Option<MpStructure>,
}

impl SummaryDoc {
    /// 表格展示用的空间群符号，检测失败/缺失时为空串
    pub fn spacegroup_symbol(&self) -> String {
        self.symmetry
            .as_ref()
            .and_then(|s| s.symbol.clone())
            .unwrap_or_default()
    }
}

/// symmetry 字段
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymmetryDoc {
    #[serde(default)]
    pub symbol: Option<String>,

    #[serde(default)]
    pub number: Option<i32>,
}

/// pymatgen 序列化格式的结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MpStructure {
    pub lattice: MpLattice,
    pub sites: Vec<MpSite>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MpLattice {
    pub matrix: [[f64; 3]; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MpSite {
    pub species: Vec<MpSpecies>,

    /// 分数坐标
    pub abc: [f64; 3],

    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MpSpecies {
    pub element: String,

    #[serde(default)]
    pub occu: f64,
}

impl MpStructure {
    /// 转换为 Crystal（取每个位点占据度最高的物种）
    pub fn to_crystal(&self, name: &str) -> Crystal {
        let lattice = Lattice::from_vectors(self.lattice.matrix);
        let atoms: Vec<Atom> = self
            .sites
            .iter()
            .filter_map(|site| {
                site.species
                    .iter()
                    .max_by(|a, b| a.occu.partial_cmp(&b.occu).unwrap_or(std::cmp::Ordering::Equal))
                    .map(|sp| Atom::new(sp.element.clone(), site.abc))
            })
            .collect();
        Crystal::new(name, lattice, atoms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "data": [
            {
                "material_id": "mp-22862",
                "formula_pretty": "NaCl",
                "energy_above_hull": 0.0,
                "band_gap": 5.0,
                "nsites": 2,
                "volume": 44.6,
                "theoretical": false,
                "symmetry": {"symbol": "Fm-3m", "number": 225},
                "structure": {
                    "lattice": {"matrix": [[0.0, 2.8, 2.8], [2.8, 0.0, 2.8], [2.8, 2.8, 0.0]]},
                    "sites": [
                        {"species": [{"element": "Na", "occu": 1.0}], "abc": [0.0, 0.0, 0.0]},
                        {"species": [{"element": "Cl", "occu": 1.0}], "abc": [0.5, 0.5, 0.5]}
                    ]
                }
            }
        ]
    }"#;

    #[test]
    fn test_decode_summary_payload() {
        let response: SummaryResponse = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(response.data.len(), 1);

        let doc = &response.data[0];
        assert_eq!(doc.material_id, "mp-22862");
        assert_eq!(doc.formula_pretty, "NaCl");
        assert_eq!(doc.spacegroup_symbol(), "Fm-3m");
        assert_eq!(doc.theoretical, Some(false));
    }

    #[test]
    fn test_structure_to_crystal() {
        let response: SummaryResponse = serde_json::from_str(PAYLOAD).unwrap();
        let structure = response.data[0].structure.as_ref().unwrap();
        let crystal = structure.to_crystal("NaCl");

        assert_eq!(crystal.num_sites(), 2);
        assert_eq!(crystal.atoms[0].element, "Na");
        assert_eq!(crystal.atoms[1].element, "Cl");
        assert!((crystal.lattice.matrix[0][1] - 2.8).abs() < 1e-12);
    }

    #[test]
    fn test_missing_symmetry_renders_empty() {
        let doc: SummaryDoc = serde_json::from_str(
            r#"{"material_id": "mp-1", "formula_pretty": "X"}"#,
        )
        .unwrap();
        assert_eq!(doc.spacegroup_symbol(), "");
        assert!(doc.structure.is_none());
    }
}
