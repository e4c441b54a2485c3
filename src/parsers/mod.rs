//! # 解析器模块
//!
//! 提供结构文件格式的解析与序列化。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: poscar, cif

pub mod cif;
pub mod poscar;

use std::path::Path;

use crate::error::{MatoolsError, Result};
use crate::models::Crystal;

/// 解析输入结构文件
///
/// 所有命令的输入都是 POSCAR/CONTCAR；文件不存在时给出明确错误，
/// 其余名字一律按 POSCAR 格式尝试解析。
pub fn parse_structure_file(path: &Path) -> Result<Crystal> {
    if !path.exists() {
        return Err(MatoolsError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    poscar::parse_poscar_file(path)
}
