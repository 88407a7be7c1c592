//! Report output: a plain-text table or JSON.

use std::io::{self, Write};
use std::time::Duration;

use maze_paths::ResultKind;
use serde::Serialize;

use crate::bench::{Record, Section};
use crate::error::Result;

fn micros(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1000.0
}

/// One table per algorithm, fastest maze first.
pub fn write_table<W: Write>(out: &mut W, sections: &[Section]) -> io::Result<()> {
    let width = sections
        .iter()
        .flat_map(|s| &s.records)
        .map(|r| r.input.len())
        .max()
        .unwrap_or(0)
        .max("input".len());

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(
            out,
            "{} ({})",
            section.algorithm,
            section.algorithm.name()
        )?;
        writeln!(
            out,
            "  {:<width$}  {:>12}  {:>12}  {:>12}  {:>5}  {:>7}",
            "input", "avg (us)", "min (us)", "max (us)", "found", "length"
        )?;
        for r in &section.records {
            writeln!(
                out,
                "  {:<width$}  {:>12.3}  {:>12.3}  {:>12.3}  {:>5}  {:>7}",
                r.input,
                micros(r.avg),
                micros(r.min),
                micros(r.max),
                if r.result.found { "yes" } else { "no" },
                r.result.len()
            )?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    algorithm: &'static str,
    input: &'a str,
    avg_us: f64,
    min_us: f64,
    max_us: f64,
    found: bool,
    kind: ResultKind,
    length: usize,
    expanded: usize,
}

impl<'a> From<&'a Record> for JsonRecord<'a> {
    fn from(r: &'a Record) -> Self {
        Self {
            algorithm: r.algorithm.label(),
            input: &r.input,
            avg_us: micros(r.avg),
            min_us: micros(r.min),
            max_us: micros(r.max),
            found: r.result.found,
            kind: r.result.kind,
            length: r.result.len(),
            expanded: r.result.expanded,
        }
    }
}

/// Every record as one JSON array, in section order.
pub fn write_json<W: Write>(out: &mut W, sections: &[Section]) -> Result<()> {
    let records: Vec<JsonRecord<'_>> = sections
        .iter()
        .flat_map(|s| &s.records)
        .map(JsonRecord::from)
        .collect();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}
