//! Native stand-in for the Designer's `Module.lvcraft_layout`.
//!
//! In the browser the Designer stores the serialized layout on the `Module`
//! object and the launcher only checks that it is there.  Natively the layout
//! is a file.  It counts as present when it can be read and parses as a JSON
//! value other than `null`.  Anything else is logged and treated as "no
//! layout", which means the built-in demo runs.

use std::path::Path;

use tracing::{debug, warn};

/// `true` if `path` holds a usable layout document.
pub fn layout_file_present(path: &Path) -> bool {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("layout file {} unreadable: {e}", path.display());
            return false;
        }
    };

    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(serde_json::Value::Null) => {
            debug!("layout file {} is null", path.display());
            false
        }
        Ok(_) => true,
        Err(e) => {
            warn!("layout file {} is not valid JSON: {e}", path.display());
            false
        }
    }
}
