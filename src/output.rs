use std::fs::File;
use std::io::Write;
use std::path::Path;

use itertools::Itertools;
use tracing::info;

use crate::error::Result;
use crate::model::{AggregateDataset, Column, Value};

/// Write the dataset as CSV: a header row of canonical column names, then one
/// row per record in dataset order.
pub fn write_csv<W: Write>(dataset: &AggregateDataset, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(dataset.columns.iter().map(Column::to_string))?;
    for record in &dataset.records {
        let row = dataset
            .columns
            .iter()
            .map(|&c| record.get(c).unwrap_or(&Value::Missing))
            .collect_vec();
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_csv_file(dataset: &AggregateDataset, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_csv(dataset, File::create(path)?)?;
    info!(path = %path.display(), rows = dataset.len(), "wrote dataset");
    Ok(())
}
