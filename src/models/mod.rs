//! # 数据模型模块
//!
//! ## 依赖关系
//! - 被 `parsers/`, `symmetry/`, `mp/`, `commands/` 使用
//! - 无外部模块依赖

pub mod structure;

pub use structure::{cart_to_frac, frac_to_cart, Atom, Crystal, Lattice, ScalingMatrix};
