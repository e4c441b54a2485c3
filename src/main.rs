//! # matools - 晶体结构命令行工具箱
//!
//! 把分散的晶体结构处理脚本统一成单一可执行文件。
//! 对称性数学全部委托给 `moyo`，本仓库只做参数接线与格式整理。
//!
//! ## 子命令
//! - `sym`      - 报告空间群与晶格类型
//! - `conv`     - 生成标准化惯用胞
//! - `prim`     - 生成标准化原胞
//! - `super`    - 构建超胞
//! - `get`      - 从 Materials Project 下载结构
//! - `reorient` - 键取向旋转
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (POSCAR/CIF 读写)
//!   │     ├── symmetry/  (moyo 封装)
//!   │     ├── geometry   (键取向旋转)
//!   │     ├── mp/        (Materials Project 客户端)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod geometry;
mod models;
mod mp;
mod parsers;
mod symmetry;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
