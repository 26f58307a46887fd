use std::io::{self, Write};

use quat_forge::io::LatticeDescription;
use quat_forge::{Assembly, AssemblyReport};

pub fn print_summary(lattice: &LatticeDescription, report: &AssemblyReport) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let name = if lattice.structure.name.is_empty() {
        "<unnamed>"
    } else {
        &lattice.structure.name
    };
    let _ = writeln!(out, "structure {}", name);
    let _ = writeln!(
        out,
        "  {} entities, {} chains, {} operators, {} interfaces",
        lattice.structure.entity_count(),
        lattice.structure.chain_count(),
        lattice.operators.len(),
        lattice.interfaces.len()
    );
    let _ = writeln!(out, "  {} valid assemblies", report.assemblies.len());
    let _ = writeln!(out);
}

pub fn print_report(report: &AssemblyReport) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let sto_width = report
        .assemblies
        .iter()
        .map(|a| a.stoichiometry_string.len())
        .chain(["stoichiometry".len()].into_iter())
        .max()
        .unwrap_or(0);

    let _ = writeln!(
        out,
        "  {:>3}  {:>5}  {:<w$}  {:<8}  calls",
        "id",
        "size",
        "stoichiometry",
        "symmetry",
        w = sto_width
    );

    for assembly in &report.assemblies {
        let marker = if report.preferred == Some(assembly.id) {
            '*'
        } else {
            ' '
        };
        let _ = writeln!(
            out,
            "{} {:>3}  {:>5}  {:<w$}  {:<8}  {}",
            marker,
            assembly.id,
            assembly.mm_size,
            assembly.stoichiometry_string,
            assembly.point_group.to_string(),
            format_calls(assembly),
            w = sto_width
        );
    }
}

fn format_calls(assembly: &Assembly) -> String {
    if assembly.scores.is_empty() {
        return "-".to_string();
    }
    assembly
        .scores
        .iter()
        .map(|s| format!("{}={}({:.2})", s.method, s.call, s.confidence))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_error(err: &anyhow::Error) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let _ = writeln!(out, "error: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(out, "  caused by: {}", cause);
        source = cause.source();
    }
}
