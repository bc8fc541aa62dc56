//! Content container for rows and section headers.

/// Content for a single row or section header.
///
/// Models return `ItemData` from [`SectionModel::content`] and
/// [`SectionModel::header`]. The view passes it through untouched; how the
/// content is rendered is entirely up to the host.
///
/// `ItemData::None` doubles as the neutral placeholder the view answers with
/// when no model is attached, keeping a partially configured view usable.
///
/// [`SectionModel::content`]: crate::model::SectionModel::content
/// [`SectionModel::header`]: crate::model::SectionModel::header
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ItemData {
    /// No content. Hosts typically render an empty placeholder cell.
    #[default]
    None,
    /// Text content.
    Text(String),
}

impl ItemData {
    /// Returns `true` if this is `ItemData::None`.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the text content, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::None => None,
        }
    }

    /// Consumes the data, returning the text content if any.
    pub fn into_string(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::None => None,
        }
    }
}

impl From<String> for ItemData {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for ItemData {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<&str> for ItemData {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
