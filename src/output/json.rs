// JSON Output Module

use crate::Result;

/// Render a tag list as a JSON array
///
/// serde_json writes non-ASCII characters as-is, so tags keep their UTF-8 form.
pub fn generate_json(tags: &[String], pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(tags)?)
    } else {
        Ok(serde_json::to_string(tags)?)
    }
}
