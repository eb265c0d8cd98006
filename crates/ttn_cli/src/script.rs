//! A minimal line-oriented gate script format:
//!
//! ```text
//! H 0
//! X 1
//! CNOT 0 1
//! SWAP 1 2
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use ttn_core::{Gate, OneSiteKind, Result, TtnError, TwoSiteKind};
use ttn_sim::QCircuit;

/// Parses a gate script into a sequence of [`Gate`]s.
pub fn parse_script(source: &str) -> Result<Vec<Gate>> {
    let mut gates = Vec::new();
    for (lineno, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let gate = parse_line(&tokens).map_err(|msg| {
            TtnError::simulator(format!("line {}: {}", lineno + 1, msg))
        })?;
        gates.push(gate);
    }
    Ok(gates)
}

fn parse_line(tokens: &[&str]) -> std::result::Result<Gate, String> {
    let site = |tok: &str| tok.parse::<usize>().map_err(|_| format!("'{tok}' is not a site index"));
    match tokens {
        [op, a] => {
            let a = site(a)?;
            let kind = match op.to_ascii_uppercase().as_str() {
                "ID" => OneSiteKind::Id,
                "X" => OneSiteKind::X,
                "Y" => OneSiteKind::Y,
                "Z" => OneSiteKind::Z,
                "H" => OneSiteKind::H,
                "PROJ0" => OneSiteKind::Proj0,
                "PROJ1" => OneSiteKind::Proj1,
                other => return Err(format!("unknown one-site gate '{other}'")),
            };
            Ok(Gate::OneSite(kind, a))
        }
        [op, a, b] => {
            let a = site(a)?;
            let b = site(b)?;
            let kind = match op.to_ascii_uppercase().as_str() {
                "CNOT" => TwoSiteKind::Cnot,
                "CY" => TwoSiteKind::Cy,
                "CZ" => TwoSiteKind::Cz,
                "SWAP" => TwoSiteKind::Swap,
                other => return Err(format!("unknown two-site gate '{other}'")),
            };
            Ok(Gate::TwoSite(kind, a, b))
        }
        _ => Err(format!("cannot parse gate line {:?}", tokens)),
    }
}

/// Runs a parsed gate script against a circuit, in order.
pub fn run_script(qc: &mut QCircuit, gates: &[Gate]) -> Result<()> {
    for &gate in gates {
        qc.apply(gate)?;
    }
    Ok(())
}
