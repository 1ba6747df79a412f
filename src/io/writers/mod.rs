pub mod html;
pub mod json;
pub mod summary;
pub mod text;

pub use html::HtmlReportWriter;
pub use json::JsonWriter;
pub use summary::ChainSummaryWriter;
pub use text::TextReportWriter;

/// Shared stylesheet for the HTML report pages
pub(crate) const PAGE_STYLE: &str = r#"body {
  background-color: white;
}

h1 {
  color: black;
  text-align: left;
}

h2 {
  color: black;
  text-align: left;
  margin-bottom: 1px;
}

h3 {
  color: black;
  text-align: left;
  margin-bottom: 1px;
}

p {
  font-family: verdana;
  font-size: 20px;
  margin-top: 1px;
}

ul {
  margin-top: 1px;
}"#;
