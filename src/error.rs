use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid SVG: {0}")]
    InvalidSvg(String),

    #[error("not a number: {value:?}")]
    Format { value: String },

    #[error("points attribute has an odd number of coordinates ({count}): {points:?}")]
    MalformedPoints { points: String, count: usize },

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
