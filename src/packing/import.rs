mod error;

pub use error::ImportError;

use crate::packing::Item;

use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads items from a csv file with an `id,weight` header.
pub fn import_csv(filename: &str) -> Result<Vec<Item>, ImportError> {
    if !Path::new(filename).exists() {
        return Err(ImportError::MissingFile(filename.to_string()));
    }

    let file = File::open(filename).map_err(|err| ImportError::MissingFile(err.to_string()))?;
    let items = read_items(file).map_err(|err| match err {
        ImportError::InvalidFormat(msg) => {
            ImportError::InvalidFormat(format!("{}: {}", filename, msg))
        }
        other => other,
    })?;
    debug!("imported {} items from {}", items.len(), filename);

    Ok(items)
}

/// Reads `id,weight` records from any reader, keeping their order.
pub fn read_items<R: Read>(reader: R) -> Result<Vec<Item>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut items = Vec::new();
    for (line, record) in csv_reader.deserialize::<Item>().enumerate() {
        match record {
            Ok(item) => items.push(item),
            Err(err) => {
                return Err(ImportError::InvalidFormat(format!(
                    "record {}: {}",
                    line + 1,
                    err
                )))
            }
        }
    }

    Ok(items)
}
