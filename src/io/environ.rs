use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// Load the subprocess environment from a JSON object of `NAME: value` pairs.
/// Numbers and booleans are stringified; nested values and nulls are rejected.
pub fn load_environment(path: &Path) -> Result<BTreeMap<String, String>> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
    let raw: BTreeMap<String, Value> =
        serde_json::from_str(&text).map_err(|e| Error::json(path, e))?;

    let mut environ = BTreeMap::new();
    for (name, value) in raw {
        let value = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                return Err(Error::InvalidEnvironment { name });
            }
        };
        environ.insert(name, value);
    }

    debug!(
        "Loaded {} environment variables from {}",
        environ.len(),
        path.display()
    );
    Ok(environ)
}
