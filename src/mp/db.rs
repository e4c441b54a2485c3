//! # 本地结构数据库
//!
//! 把下载的条目以 JSON-lines 追加写入本地文件（每行一个条目），
//! 供后续用任意 JSON 工具检索。
//!
//! ## 依赖关系
//! - 被 `commands/get.rs` 使用
//! - 使用 `mp/models.rs`, `models/structure.rs`

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MatoolsError, Result};
use crate::models::Crystal;
use crate::mp::models::SummaryDoc;

/// 数据库单条记录
#[derive(Debug, Serialize, Deserialize)]
pub struct DbRecord {
    pub material_id: String,
    pub formula: String,
    pub energy_above_hull: Option<f64>,
    pub band_gap: Option<f64>,
    pub structure: Crystal,
}

impl DbRecord {
    pub fn from_entry(entry: &SummaryDoc, structure: Crystal) -> Self {
        DbRecord {
            material_id: entry.material_id.clone(),
            formula: entry.formula_pretty.clone(),
            energy_above_hull: entry.energy_above_hull,
            band_gap: entry.band_gap,
            structure,
        }
    }
}

/// 追加记录到数据库文件，文件不存在时创建
pub fn append_record(path: &Path, record: &DbRecord) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| MatoolsError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;

    let line = serde_json::to_string(record)?;
    writeln!(file, "{}", line).map_err(|e| MatoolsError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Atom, Lattice};

    fn record(id: &str) -> DbRecord {
        let lattice = Lattice::from_vectors([[3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 3.0]]);
        let crystal = Crystal::new("Po", lattice, vec![Atom::new("Po", [0.0, 0.0, 0.0])]);
        DbRecord {
            material_id: id.to_string(),
            formula: "Po".to_string(),
            energy_above_hull: Some(0.0),
            band_gap: None,
            structure: crystal,
        }
    }

    #[test]
    fn test_append_and_read_back() {
        let path = std::env::temp_dir().join(format!("matools_db_test_{}.jsonl", std::process::id()));
        let _ = std::fs::remove_file(&path);

        append_record(&path, &record("mp-1")).unwrap();
        append_record(&path, &record("mp-2")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let records: Vec<DbRecord> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].material_id, "mp-2");
        assert_eq!(records[0].structure.num_sites(), 1);

        let _ = std::fs::remove_file(&path);
    }
}
