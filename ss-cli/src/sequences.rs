use std::collections::BTreeMap;
use std::fs::File;
use std::io::{
    BufWriter,
    Write,
};
use std::path::PathBuf;

use serde::Serialize;
use ss_core::err_impl;
use ss_core::prelude::*;

use crate::load::read_events;

err_impl! {DatasetError,
    #[error("{0} is not a numeric column")]
    UnknownFeature(String),

    #[error("sequence length must be at least 1, got {0}")]
    InvalidMaxLen(usize),
}

#[derive(clap::Args)]
pub struct Args {
    #[arg(short, long, help = "exported event table to read")]
    pub input: PathBuf,

    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["position", "popularity", "acousticness", "danceability", "energy", "tempo", "duration_sec"],
        help = "numeric columns to use as per-step features"
    )]
    pub features: Vec<String>,

    #[arg(long, default_value_t = 50, help = "steps per sequence; longer sessions are truncated")]
    pub max_len: usize,

    #[arg(long, default_value_t = 32)]
    pub batch_size: usize,

    #[arg(short, long, help = "write the collated batches to this JSON file")]
    pub output: Option<PathBuf>,
}

/// One session's feature rows and skip labels, in position order, before padding.
#[derive(Clone, Debug, PartialEq)]
struct SessionSequence {
    session_id: u32,
    features: Vec<Vec<f32>>,
    labels: Vec<u8>,
}

/// A session padded with zeros (or truncated) to exactly `max_len` steps.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SequenceSample {
    pub session_id: u32,
    pub features: Vec<Vec<f32>>,
    pub labels: Vec<u8>,
    /// Number of real (non-padding) steps.
    pub length: usize,
}

/// Samples stacked along a leading batch dimension.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SequenceBatch {
    pub session_ids: Vec<u32>,
    /// `[batch][max_len][n_features]`
    pub features: Vec<Vec<Vec<f32>>>,
    /// `[batch][max_len]`
    pub labels: Vec<Vec<u8>>,
    pub lengths: Vec<usize>,
}

/// Per-session sequences of an event table, ready to be windowed to a fixed length.
#[derive(Clone, Debug)]
pub struct SessionDataset {
    feature_cols: Vec<String>,
    max_len: usize,
    sessions: Vec<SessionSequence>,
}

impl SessionDataset {
    /// Group `records` by session (ascending id) and order each group by position.
    pub fn new(records: &[EventRecord], feature_cols: &[String], max_len: usize) -> Result<Self> {
        if max_len == 0 {
            return Err(DatasetError::invalid_max_len(&max_len));
        }
        if let Some(unknown) = feature_cols.iter().find(|c| !NUMERIC_FEATURES.contains(&c.as_str())) {
            return Err(DatasetError::unknown_feature(unknown));
        }

        let mut grouped: BTreeMap<u32, Vec<&EventRecord>> = BTreeMap::new();
        for record in records {
            grouped.entry(record.session_id).or_default().push(record);
        }

        let sessions = grouped
            .into_iter()
            .map(|(session_id, mut rows)| {
                rows.sort_by_key(|r| r.position);
                SessionSequence {
                    session_id,
                    features: rows.iter().map(|r| feature_row(r, feature_cols)).collect(),
                    labels: rows.iter().map(|r| u8::from(r.skip)).collect(),
                }
            })
            .collect();

        Ok(Self { feature_cols: feature_cols.to_vec(), max_len, sessions })
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn feature_cols(&self) -> &[String] {
        &self.feature_cols
    }

    /// The `idx`-th session, zero-padded or truncated to `max_len` steps.
    pub fn get(&self, idx: usize) -> Option<SequenceSample> {
        let session = self.sessions.get(idx)?;
        let length = session.labels.len().min(self.max_len);

        let mut features = session.features[..length].to_vec();
        features.resize(self.max_len, vec![0.0; self.feature_cols.len()]);
        let mut labels = session.labels[..length].to_vec();
        labels.resize(self.max_len, 0);

        Some(SequenceSample { session_id: session.session_id, features, labels, length })
    }

    /// Consecutive batches of up to `batch_size` samples, in session order.
    pub fn batches(&self, batch_size: usize) -> impl Iterator<Item = SequenceBatch> + '_ {
        let batch_size = batch_size.max(1);
        (0..self.len()).step_by(batch_size).map(move |start| {
            let samples: Vec<_> = (start..(start + batch_size).min(self.len())).filter_map(|i| self.get(i)).collect();
            collate(&samples)
        })
    }
}

// columns are validated against NUMERIC_FEATURES before any row is converted
#[allow(clippy::cast_possible_truncation)]
fn feature_row(record: &EventRecord, feature_cols: &[String]) -> Vec<f32> {
    feature_cols
        .iter()
        .map(|c| record.numeric_feature(c).unwrap_or_default() as f32)
        .collect()
}

/// Stack samples into one batch, keeping each sample's true length.
pub fn collate(samples: &[SequenceSample]) -> SequenceBatch {
    let mut batch = SequenceBatch::default();
    for sample in samples {
        batch.session_ids.push(sample.session_id);
        batch.features.push(sample.features.clone());
        batch.labels.push(sample.labels.clone());
        batch.lengths.push(sample.length);
    }
    batch
}

pub fn cmd(args: &Args) -> EmptyResult {
    let records = read_events(&args.input)?;
    let dataset = SessionDataset::new(&records, &args.features, args.max_len)?;
    if dataset.is_empty() {
        warn!("{} contains no events", args.input.display());
    }

    let truncated = dataset.sessions.iter().filter(|s| s.labels.len() > args.max_len).count();
    println!(
        "{} sessions, {} features per step, max_len {} ({} sessions truncated)",
        dataset.len(),
        dataset.feature_cols().len(),
        args.max_len,
        truncated,
    );

    if let Some(path) = &args.output {
        let batches: Vec<_> = dataset.batches(args.batch_size).collect();
        let file = File::create(path).with_context(|| format!("could not create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer(&mut out, &batches).with_context(|| format!("could not write {}", path.display()))?;
        out.flush().with_context(|| format!("could not write {}", path.display()))?;
        info!("wrote {} batches to {}", batches.len(), path.display());
    }
    Ok(())
}
