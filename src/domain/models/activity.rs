//! Activity record domain model.
//!
//! An activity record is the normalized view of one issue or pull request
//! returned by a search: its number and its title. Everything else the
//! remote API reports about the item is dropped at the boundary.

use serde::{Deserialize, Serialize};

/// One issue or pull request that saw activity inside the date window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Issue or pull request number, unique within one query's results
    pub number: u64,
    /// Title as shown on the hosting platform
    pub title: String,
}

impl ActivityRecord {
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
        }
    }
}
