//! # get 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/get.rs`

use clap::Args;
use std::path::PathBuf;

/// get 子命令参数
#[derive(Args, Debug)]
pub struct GetArgs {
    /// The material (e.g. ZnO), chemical system (e.g. Zn-O or Zn,O) or mp-id
    /// to search for
    pub query: String,

    /// Only include stable structures where the energy above hull is 0
    #[arg(short, long, default_value_t = false)]
    pub stable: bool,

    /// The tolerance in eV for stable structures
    #[arg(long, default_value_t = 0.0)]
    pub stol: f64,

    /// Save structures in the cif format rather than as POSCARs
    #[arg(long, default_value_t = false)]
    pub cif: bool,

    /// Use the conventional cell rather than the primitive
    #[arg(long, default_value_t = false)]
    pub conv: bool,

    /// Only show entries backed by experiment
    #[arg(long, default_value_t = false)]
    pub experimental_only: bool,

    /// Download all structures found without prompting
    #[arg(long, default_value_t = false)]
    pub save_all: bool,

    /// Append structures to a local JSON-lines database file instead of
    /// writing individual files (will be created if non-existent)
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Materials Project API key
    #[arg(long, env = "MP_API_KEY", hide_env_values = true)]
    pub api_key: String,
}
