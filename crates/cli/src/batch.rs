//! CSV batch classification.
//!
//! Input: one segment pair per row, columns `ax,ay,bx,by` (S1) and `cx,cy,dx,dy` (S2).
//! Output: a JSON array of `Record`s plus a provenance sidecar next to it.

use anyhow::{Context, Result};
use polars::prelude::*;
use seg2::api::{intersect_all, tally, Intersection, SegCfg, Segment};
use serde::Serialize;
use serde_json::json;
use std::path::Path;

use crate::provenance::{write_sidecar, Payload};
use crate::Axis;

pub const COLUMNS: [&str; 8] = ["ax", "ay", "bx", "by", "cx", "cy", "dx", "dy"];

/// One classified row.
#[derive(Debug, Serialize)]
pub struct Record {
    pub row: usize,
    pub kind: &'static str,
    pub points: Vec<[f64; 2]>,
}

impl Record {
    pub fn new(row: usize, r: &Intersection) -> Self {
        Self {
            row,
            kind: r.kind().as_str(),
            points: r.points().iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}

/// Per-kind counts of a batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub rows: usize,
    pub disjoint: usize,
    pub point: usize,
    pub overlap: usize,
    pub non_finite: usize,
}

/// Read all segment pairs from `input`. Missing cells are errors.
pub fn read_pairs(input: &Path) -> Result<Vec<(Segment, Segment)>> {
    let lf = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", input.display()))?;
    let df = lf
        .select(
            COLUMNS
                .iter()
                .map(|c| col(*c).cast(DataType::Float64))
                .collect::<Vec<_>>(),
        )
        .collect()
        .with_context(|| format!("reading columns {COLUMNS:?} from {}", input.display()))?;

    let mut cols: Vec<Vec<Option<f64>>> = Vec::with_capacity(COLUMNS.len());
    for name in COLUMNS {
        let ca = df.column(name)?.f64()?;
        cols.push(ca.into_iter().collect());
    }
    let mut pairs = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let mut c = [0.0f64; 8];
        for (k, values) in cols.iter().enumerate() {
            c[k] = values[row].with_context(|| format!("row {row}: missing `{}`", COLUMNS[k]))?;
        }
        pairs.push((
            Segment::from_coords(c[0], c[1], c[2], c[3]),
            Segment::from_coords(c[4], c[5], c[6], c[7]),
        ));
    }
    Ok(pairs)
}

/// Classify every row of `input`, write records to `out` and a sidecar next to it.
pub fn run(input: &Path, out: &Path, cfg: SegCfg, axis: Axis) -> Result<Summary> {
    tracing::info!(input = %input.display(), out = %out.display(), "batch");
    let pairs = read_pairs(input)?;
    let non_finite = pairs
        .iter()
        .filter(|(s1, s2)| !(s1.is_finite() && s2.is_finite()))
        .count();
    if non_finite > 0 {
        tracing::warn!(non_finite, "rows with non-finite coordinates reported as disjoint");
    }

    let results = intersect_all(&pairs, cfg);
    let records: Vec<Record> = results
        .iter()
        .enumerate()
        .map(|(row, r)| Record::new(row, r))
        .collect();
    let (disjoint, point, overlap) = tally(&results);
    let summary = Summary {
        rows: results.len(),
        disjoint,
        point,
        overlap,
        non_finite,
    };

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&records)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(json!({
        "input": input.to_string_lossy(),
        "eps_parallel": cfg.eps_parallel,
        "axis": axis,
    }))
    .with_summary(serde_json::to_value(summary)?);
    let sidecar = write_sidecar(out, payload)?;

    tracing::info!(
        rows = summary.rows,
        disjoint,
        point,
        overlap,
        sidecar = %sidecar.display(),
        "batch_done"
    );
    Ok(summary)
}
