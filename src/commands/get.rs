//! # get 命令实现
//!
//! 查询 Materials Project，展示候选条目表格，按用户选择下载结构。
//! 下载的结构默认取标准化原胞（`--conv` 取惯用胞），检测失败时
//! 回退为原始结构。
//!
//! ## 依赖关系
//! - 使用 `cli/get.rs` 定义的参数
//! - 使用 `mp/`, `symmetry/`, `parsers/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tabled::{Table, Tabled};

use crate::cli::get::GetArgs;
use crate::error::{MatoolsError, Result};
use crate::models::Crystal;
use crate::mp::client::{filter_experimental, filter_stable};
use crate::mp::db::{self, DbRecord};
use crate::mp::models::SummaryDoc;
use crate::mp::MpClient;
use crate::parsers::{cif, poscar};
use crate::symmetry;
use crate::utils::{output, progress};

/// 保存结构时的对称性容差（未由 `-t` 覆盖，沿用常规默认值）
const SAVE_SYMPREC: f64 = 1e-2;

/// 候选条目表格行
#[derive(Debug, Tabled)]
struct EntryRow {
    #[tabled(rename = "n")]
    n: usize,
    #[tabled(rename = "Formula")]
    formula: String,
    #[tabled(rename = "Spacegroup")]
    spacegroup: String,
    #[tabled(rename = "E above Hull")]
    e_above_hull: String,
    #[tabled(rename = "Band Gap")]
    band_gap: String,
    #[tabled(rename = "Nsites")]
    nsites: String,
    #[tabled(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Exp")]
    experimental: String,
}

/// 执行 get 命令
pub fn execute(args: GetArgs) -> Result<()> {
    output::print_header(&format!("Querying Materials Project for '{}'", args.query));

    let client = MpClient::new(&args.api_key);
    let spinner = progress::create_spinner("Searching...");
    let mut entries = client.search(&args.query)?;
    spinner.finish_and_clear();

    if args.stable {
        entries = filter_stable(entries, args.stol);
    }
    if args.experimental_only {
        entries = filter_experimental(entries);
    }

    if entries.is_empty() {
        return Err(MatoolsError::NoEntriesFound {
            query: args.query.clone(),
        });
    }

    output::print_info(&format!("Found {} candidate entries", entries.len()));
    println!("{}", Table::new(entries.iter().enumerate().map(entry_row)));

    let ids = if args.save_all {
        (1..=entries.len()).collect()
    } else {
        prompt_selection(entries.len())?
    };

    let pb = progress::create_progress_bar(ids.len() as u64, "Saving structures");
    for &i in &ids {
        if let Err(e) = save_entry(&entries[i - 1], i, &args) {
            pb.suspend(|| {
                output::print_error(&format!("{}: {}", entries[i - 1].material_id, e));
            });
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    output::print_done(&format!("Saved {} structure(s)", ids.len()));

    Ok(())
}

fn entry_row((i, entry): (usize, &SummaryDoc)) -> EntryRow {
    EntryRow {
        n: i + 1,
        formula: entry.formula_pretty.clone(),
        spacegroup: entry.spacegroup_symbol(),
        e_above_hull: entry
            .energy_above_hull
            .map(|h| format!("{:.3}", h))
            .unwrap_or_default(),
        band_gap: entry
            .band_gap
            .map(|g| format!("{:.3}", g))
            .unwrap_or_default(),
        nsites: entry.nsites.map(|n| n.to_string()).unwrap_or_default(),
        volume: entry
            .volume
            .map(|v| format!("{:.3}", v))
            .unwrap_or_default(),
        experimental: match entry.theoretical {
            Some(true) => "no".to_string(),
            Some(false) => "yes".to_string(),
            None => String::new(),
        },
    }
}

/// 读取用户选择：`all` 或空白分隔的 1 基序号
fn prompt_selection(n_entries: usize) -> Result<Vec<usize>> {
    print!("\nWhich structures do you wish to download (type all to select all structures)?\n> ");
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| MatoolsError::InvalidSelection(e.to_string()))?;
    let line = line.trim();

    if line.contains("all") {
        return Ok((1..=n_entries).collect());
    }

    let mut ids = Vec::new();
    for token in line.split_whitespace() {
        let id: usize = token
            .parse()
            .map_err(|_| MatoolsError::InvalidSelection(token.to_string()))?;
        if id == 0 || id > n_entries {
            return Err(MatoolsError::InvalidSelection(format!(
                "{} is out of range (1-{})",
                id, n_entries
            )));
        }
        ids.push(id);
    }

    if ids.is_empty() {
        return Err(MatoolsError::InvalidSelection(
            "no structures selected".to_string(),
        ));
    }

    Ok(ids)
}

/// 保存单个条目
fn save_entry(entry: &SummaryDoc, index: usize, args: &GetArgs) -> Result<()> {
    let structure = entry.structure.as_ref().ok_or_else(|| {
        MatoolsError::Other(format!("Entry {} has no structure field", entry.material_id))
    })?;
    let crystal = structure.to_crystal(&entry.formula_pretty);

    let chosen = match symmetry::analyze(&crystal, SAVE_SYMPREC) {
        Ok(data) => {
            if args.conv {
                data.conventional
            } else {
                data.primitive
            }
        }
        Err(_) => {
            output::print_warning(&format!(
                "Could not detect symmetry of {}",
                entry.formula_pretty
            ));
            crystal
        }
    };

    if let Some(db_path) = &args.db {
        db::append_record(db_path, &DbRecord::from_entry(entry, chosen))?;
        return Ok(());
    }

    let path = save_path(entry, index, args.cif);
    if args.cif {
        cif::write_cif_file(&chosen, &path)?;
    } else {
        poscar::write_poscar_file(&sorted_for_output(chosen), &path)?;
    }
    output::print_success(&format!("Saved '{}'", path.display()));

    Ok(())
}

fn save_path(entry: &SummaryDoc, index: usize, cif: bool) -> PathBuf {
    if cif {
        PathBuf::from(format!("{}_{}.cif", entry.formula_pretty, index))
    } else {
        PathBuf::from(format!("POSCAR_{}_{}", entry.formula_pretty, index))
    }
}

fn sorted_for_output(crystal: Crystal) -> Crystal {
    let order = crystal.species_order();
    crystal.sorted_by_species(&order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_path_naming() {
        let entry: SummaryDoc = serde_json::from_str(
            r#"{"material_id": "mp-2133", "formula_pretty": "ZnO"}"#,
        )
        .unwrap();
        assert_eq!(save_path(&entry, 3, false), PathBuf::from("POSCAR_ZnO_3"));
        assert_eq!(save_path(&entry, 3, true), PathBuf::from("ZnO_3.cif"));
    }

    #[test]
    fn test_entry_row_empty_fields() {
        let entry: SummaryDoc = serde_json::from_str(
            r#"{"material_id": "mp-1", "formula_pretty": "X"}"#,
        )
        .unwrap();
        let row = entry_row((0, &entry));
        assert_eq!(row.n, 1);
        assert_eq!(row.spacegroup, "");
        assert_eq!(row.e_above_hull, "");
        assert_eq!(row.experimental, "");
    }
}
