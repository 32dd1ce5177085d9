// ─────────────────────────────────────────────────────────────────────
// Biprop Performance Map — CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Sea-level performance study driver.
//!
//! Usage: `biprop-map [config.json] [--out surfaces.npz]`
//! With no config file the baseline N2O/ethanol study runs.

use biprop_chem::{IdealNozzleModel, SaturationTable};
use biprop_report::{console, write_contour_npz};
use biprop_sweep::map_performance;
use biprop_types::config::SweepConfig;
use biprop_types::error::PerfResult;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "usage: biprop-map [config.json] [--out surfaces.npz]";

struct Args {
    config_path: Option<String>,
    npz_out: Option<PathBuf>,
}

/// `Ok(None)` means usage was requested.
fn parse_args() -> Result<Option<Args>, String> {
    let mut args = Args {
        config_path: None,
        npz_out: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--out" => {
                let path = it.next().ok_or("--out needs a file path")?;
                args.npz_out = Some(PathBuf::from(path));
            }
            "--help" | "-h" => return Ok(None),
            other if args.config_path.is_none() => args.config_path = Some(other.to_string()),
            other => return Err(format!("unexpected argument: {other}")),
        }
    }
    Ok(Some(args))
}

fn run(args: &Args) -> PerfResult<()> {
    let config = match &args.config_path {
        Some(path) => SweepConfig::from_file(path)?,
        None => SweepConfig::default(),
    };

    let map = map_performance(&config, &SaturationTable::new(), &IdealNozzleModel::new())?;
    println!("{}", console::full_report(&config.oxidizer, &map));

    if let Some(path) = &args.npz_out {
        write_contour_npz(&map, path)?;
        println!("Wrote contour surfaces to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("{msg}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
