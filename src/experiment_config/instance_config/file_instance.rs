use serde::{Deserialize, Serialize};

/// Items read from a csv file with an `id,weight` header.
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct FileInstance {
    pub filename: String,
    pub capacity: f64,
}
