// HTML Report Generator

use handlebars::{Handlebars, RenderError};
use serde_json::json;

const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>IP Tags Report - {{address}}</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #333; padding: 20px; }
        table { border-collapse: collapse; }
        th, td { padding: 8px 12px; text-align: left; vertical-align: top; border: 1px solid #ddd; }
        th { background: #34495e; color: white; }
        td hr { border: 0; border-top: 1px solid #ddd; margin: 4px 0; }
    </style>
</head>
<body>
    <table>
        <thead><tr><th>Key</th><th>Tags</th></tr></thead>
        <tbody>
            <tr>
                <td>{{address}}</td>
                <td>{{#each tags}}{{this}}<hr>{{/each}}</td>
            </tr>
        </tbody>
    </table>
</body>
</html>
"#;

/// Generate the tags report for one address
///
/// A single data row: the address, then every tag followed by an `<hr>`
/// separator. Tag text is HTML-escaped.
pub fn generate_tags_report(address: &str, tags: &[String]) -> Result<String, RenderError> {
    let handlebars = Handlebars::new();

    let data = json!({
        "address": address,
        "tags": tags,
    });

    handlebars.render_template(HTML_TEMPLATE, &data)
}
