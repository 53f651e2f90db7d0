//! Replacement engine options.

use serde::{Deserialize, Serialize};

use crate::EditError;

/// Options for a [`Replacer`](crate::Replacer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditOptions {
    /// Move a replacement that is attached elsewhere out of its old slot.
    #[serde(default = "default_reattach")]
    pub reattach: bool,

    /// Run the integrity check after every edit.
    #[serde(default)]
    pub verify: bool,
}

fn default_reattach() -> bool {
    true
}

impl EditOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self {
            reattach: default_reattach(),
            verify: false,
        }
    }

    /// Parses options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, EditError> {
        serde_json::from_str(json)
            .map_err(|e| EditError::config(format!("Invalid edit options: {}", e)))
    }
}

impl Default for EditOptions {
    fn default() -> Self {
        Self::new()
    }
}
