//! # 空间群符号与晶格类型查表
//!
//! 按空间群编号（1-230）查国际符号与晶格类型。
//! 符号为 spglib 风格的国际短符号。
//!
//! ## 依赖关系
//! - 被 `symmetry/mod.rs` 和 `mp/` 使用

/// 国际短符号表，下标为空间群编号（0 号为空占位）
pub const SG_SYMBOLS: [&str; 231] = [
    "", // 0
    "P1", "P-1", // 1-2 triclinic
    "P2", "P2_1", "C2", "Pm", "Pc", "Cm", "Cc", "P2/m", "P2_1/m", "C2/m", "P2/c", "P2_1/c",
    "C2/c", // 3-15 monoclinic
    "P222", "P222_1", "P2_12_12", "P2_12_12_1", "C222_1", "C222", "F222", "I222", "I2_12_12_1",
    "Pmm2", "Pmc2_1", "Pcc2", "Pma2", "Pca2_1", "Pnc2", "Pmn2_1", "Pba2", "Pna2_1", "Pnn2",
    "Cmm2", "Cmc2_1", "Ccc2", "Amm2", "Aem2", "Ama2", "Aea2", "Fmm2", "Fdd2", "Imm2", "Iba2",
    "Ima2", "Pmmm", "Pnnn", "Pccm", "Pban", "Pmma", "Pnna", "Pmna", "Pcca", "Pbam", "Pccn",
    "Pbcm", "Pnnm", "Pmmn", "Pbcn", "Pbca", "Pnma", "Cmcm", "Cmce", "Cmmm", "Cccm", "Cmme",
    "Ccce", "Fmmm", "Fddd", "Immm", "Ibam", "Ibca", "Imma", // 16-74 orthorhombic
    "P4", "P4_1", "P4_2", "P4_3", "I4", "I4_1", "P-4", "I-4", "P4/m", "P4_2/m", "P4/n",
    "P4_2/n", "I4/m", "I4_1/a", "P422", "P42_12", "P4_122", "P4_12_12", "P4_222", "P4_22_12",
    "P4_322", "P4_32_12", "I422", "I4_122", "P4mm", "P4bm", "P4_2cm", "P4_2nm", "P4cc", "P4nc",
    "P4_2mc", "P4_2bc", "I4mm", "I4cm", "I4_1md", "I4_1cd", "P-42m", "P-42c", "P-42_1m",
    "P-42_1c", "P-4m2", "P-4c2", "P-4b2", "P-4n2", "I-4m2", "I-4c2", "I-42m", "I-42d",
    "P4/mmm", "P4/mcc", "P4/nbm", "P4/nnc", "P4/mbm", "P4/mnc", "P4/nmm", "P4/ncc", "P4_2/mmc",
    "P4_2/mcm", "P4_2/nbc", "P4_2/nnm", "P4_2/mbc", "P4_2/mnm", "P4_2/nmc", "P4_2/ncm",
    "I4/mmm", "I4/mcm", "I4_1/amd", "I4_1/acd", // 75-142 tetragonal
    "P3", "P3_1", "P3_2", "R3", "P-3", "R-3", "P312", "P321", "P3_112", "P3_121", "P3_212",
    "P3_221", "R32", "P3m1", "P31m", "P3c1", "P31c", "R3m", "R3c", "P-31m", "P-31c", "P-3m1",
    "P-3c1", "R-3m", "R-3c", // 143-167 trigonal
    "P6", "P6_1", "P6_5", "P6_2", "P6_4", "P6_3", "P-6", "P6/m", "P6_3/m", "P622", "P6_122",
    "P6_522", "P6_222", "P6_422", "P6_322", "P6mm", "P6cc", "P6_3cm", "P6_3mc", "P-6m2",
    "P-6c2", "P-62m", "P-62c", "P6/mmm", "P6/mcc", "P6_3/mcm", "P6_3/mmc", // 168-194 hexagonal
    "P23", "F23", "I23", "P2_13", "I2_13", "Pm-3", "Pn-3", "Fm-3", "Fd-3", "Im-3", "Pa-3",
    "Ia-3", "P432", "P4_232", "F432", "F4_132", "I432", "P4_332", "P4_132", "I4_132", "P-43m",
    "F-43m", "I-43m", "P-43n", "F-43c", "I-43d", "Pm-3m", "Pn-3n", "Pm-3n", "Pn-3m", "Fm-3m",
    "Fm-3c", "Fd-3m", "Fd-3c", "Im-3m", "Ia-3d", // 195-230 cubic
];

/// 查国际符号，编号越界返回空串
pub fn international_symbol(number: i32) -> &'static str {
    if (1..=230).contains(&number) {
        SG_SYMBOLS[number as usize]
    } else {
        ""
    }
}

/// 晶体系
pub fn crystal_system(number: i32) -> &'static str {
    match number {
        1..=2 => "triclinic",
        3..=15 => "monoclinic",
        16..=74 => "orthorhombic",
        75..=142 => "tetragonal",
        143..=167 => "trigonal",
        168..=194 => "hexagonal",
        195..=230 => "cubic",
        _ => "unknown",
    }
}

/// 晶格类型：三方晶系按符号首字母区分菱方与六方点阵
pub fn lattice_type(number: i32) -> &'static str {
    let system = crystal_system(number);
    if system != "trigonal" {
        return system;
    }
    if international_symbol(number).starts_with('R') {
        "rhombohedral"
    } else {
        "hexagonal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_known_groups() {
        assert_eq!(international_symbol(1), "P1");
        assert_eq!(international_symbol(14), "P2_1/c");
        assert_eq!(international_symbol(62), "Pnma");
        assert_eq!(international_symbol(139), "I4/mmm");
        assert_eq!(international_symbol(166), "R-3m");
        assert_eq!(international_symbol(194), "P6_3/mmc");
        assert_eq!(international_symbol(221), "Pm-3m");
        assert_eq!(international_symbol(225), "Fm-3m");
        assert_eq!(international_symbol(227), "Fd-3m");
        assert_eq!(international_symbol(229), "Im-3m");
        assert_eq!(international_symbol(230), "Ia-3d");
        assert_eq!(international_symbol(0), "");
        assert_eq!(international_symbol(231), "");
    }

    #[test]
    fn test_lattice_type() {
        assert_eq!(lattice_type(225), "cubic");
        assert_eq!(lattice_type(62), "orthorhombic");
        assert_eq!(lattice_type(166), "rhombohedral");
        assert_eq!(lattice_type(164), "hexagonal");
        assert_eq!(lattice_type(191), "hexagonal");
        assert_eq!(lattice_type(2), "triclinic");
    }
}
