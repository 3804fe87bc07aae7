use serde::{Deserialize, Serialize};

use crate::packing::Item;

/// Items listed directly in the config.
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct InlineInstance {
    pub capacity: f64,
    pub items: Vec<Item>,
}
