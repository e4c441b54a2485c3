//! # Materials Project API 客户端
//!
//! 使用 `ureq` 的同步阻塞客户端访问新版 summary 端点。
//! API key 经 `X-API-KEY` 请求头传递。
//!
//! ## 依赖关系
//! - 被 `commands/get.rs` 使用
//! - 使用 `mp/models.rs`

use crate::error::Result;
use crate::mp::models::{SummaryDoc, SummaryResponse};

const API_BASE: &str = "https://api.materialsproject.org";

const SUMMARY_FIELDS: &str = "material_id,formula_pretty,energy_above_hull,band_gap,\
nsites,volume,symmetry,theoretical,structure";

/// 查询参数分类
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryKind {
    /// mp-id 查询 (mp-149)
    MaterialId(String),
    /// 化学体系查询 (Zn-O 或 Zn,O)
    Chemsys(String),
    /// 化学式查询 (ZnO)
    Formula(String),
}

impl QueryKind {
    /// 判定查询串类型：mp 前缀 -> id；含逗号或连字符 -> 化学体系；否则化学式
    pub fn classify(query: &str) -> QueryKind {
        if query.starts_with("mp-") || query.starts_with("mvc-") {
            QueryKind::MaterialId(query.to_string())
        } else if query.contains(',') || query.contains('-') {
            QueryKind::Chemsys(query.replace(',', "-"))
        } else {
            QueryKind::Formula(query.to_string())
        }
    }

    fn as_param(&self) -> (&'static str, &str) {
        match self {
            QueryKind::MaterialId(v) => ("material_ids", v),
            QueryKind::Chemsys(v) => ("chemsys", v),
            QueryKind::Formula(v) => ("formula", v),
        }
    }
}

/// MP API 客户端
pub struct MpClient {
    api_key: String,
    agent: ureq::Agent,
}

impl MpClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        MpClient {
            api_key: api_key.into(),
            agent: ureq::AgentBuilder::new()
                .timeout(std::time::Duration::from_secs(60))
                .build(),
        }
    }

    /// 查询 summary 端点，返回候选条目
    pub fn search(&self, query: &str) -> Result<Vec<SummaryDoc>> {
        let kind = QueryKind::classify(query);
        let (param, value) = kind.as_param();

        let response = self
            .agent
            .get(&format!("{}/materials/summary/", API_BASE))
            .set("X-API-KEY", &self.api_key)
            .query("_fields", SUMMARY_FIELDS)
            .query("_limit", "200")
            .query(param, value)
            .call()
            .map_err(Box::new)?;

        let parsed: SummaryResponse = serde_json::from_reader(response.into_reader())?;
        Ok(parsed.data)
    }
}

/// 稳定性过滤：保留 hull 能量不超过 tol 的条目
pub fn filter_stable(entries: Vec<SummaryDoc>, tol: f64) -> Vec<SummaryDoc> {
    entries
        .into_iter()
        .filter(|e| e.energy_above_hull.map(|h| h <= tol).unwrap_or(false))
        .collect()
}

/// 实验来源过滤：剔除纯理论条目
pub fn filter_experimental(entries: Vec<SummaryDoc>) -> Vec<SummaryDoc> {
    entries
        .into_iter()
        .filter(|e| e.theoretical == Some(false))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, hull: Option<f64>, theoretical: Option<bool>) -> SummaryDoc {
        serde_json::from_str(&format!(
            r#"{{"material_id": "{}", "formula_pretty": "X",
                "energy_above_hull": {}, "theoretical": {}}}"#,
            id,
            hull.map(|h| h.to_string()).unwrap_or("null".to_string()),
            theoretical
                .map(|t| t.to_string())
                .unwrap_or("null".to_string()),
        ))
        .unwrap()
    }

    #[test]
    fn test_classify_query() {
        assert_eq!(
            QueryKind::classify("mp-149"),
            QueryKind::MaterialId("mp-149".to_string())
        );
        assert_eq!(
            QueryKind::classify("Zn-O"),
            QueryKind::Chemsys("Zn-O".to_string())
        );
        assert_eq!(
            QueryKind::classify("Zn,O"),
            QueryKind::Chemsys("Zn-O".to_string())
        );
        assert_eq!(
            QueryKind::classify("ZnO"),
            QueryKind::Formula("ZnO".to_string())
        );
    }

    #[test]
    fn test_filter_stable() {
        let entries = vec![
            doc("mp-1", Some(0.0), None),
            doc("mp-2", Some(0.05), None),
            doc("mp-3", None, None),
        ];
        let kept = filter_stable(entries, 0.01);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].material_id, "mp-1");
    }

    #[test]
    fn test_filter_experimental() {
        let entries = vec![
            doc("mp-1", None, Some(true)),
            doc("mp-2", None, Some(false)),
            doc("mp-3", None, None),
        ];
        let kept = filter_experimental(entries);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].material_id, "mp-2");
    }
}
