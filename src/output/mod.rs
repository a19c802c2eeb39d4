// Output module - Tag list rendering (JSON, HTML)

pub mod html;
pub mod json;

pub use html::generate_tags_report;
pub use json::generate_json;
