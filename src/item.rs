//! Menu item value type.

use crate::error::PopupMenuError;

/// A single selectable entry of the popup menu.
///
/// Immutable after construction; build one with [`MenuItem::new`] or
/// [`MenuItem::with_image`]. The id is reported back through
/// [`MenuOutcome::Selected`](crate::MenuOutcome::Selected) when the item's
/// row is clicked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    id: String,
    label: String,
    image_uri: Option<String>,
}

impl MenuItem {
    /// Creates an item without an image. Fails with
    /// [`PopupMenuError::InvalidParameter`] if the id or label is empty.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Result<Self, PopupMenuError> {
        Self::build(id.into(), label.into(), None)
    }

    /// Like [`MenuItem::new`], with an image shown left of the label.
    ///
    /// The image is referenced by URI (`file://`, `https://`, or a
    /// `bytes://` source registered with egui); the host application must
    /// have image loaders installed for it to render, e.g. via
    /// `egui_extras::install_image_loaders`.
    pub fn with_image(
        id: impl Into<String>,
        label: impl Into<String>,
        image_uri: impl Into<String>,
    ) -> Result<Self, PopupMenuError> {
        let image_uri = image_uri.into();
        if image_uri.trim().is_empty() {
            return Err(PopupMenuError::InvalidParameter(
                "image uri must not be empty".into(),
            ));
        }
        Self::build(id.into(), label.into(), Some(image_uri))
    }

    fn build(
        id: String,
        label: String,
        image_uri: Option<String>,
    ) -> Result<Self, PopupMenuError> {
        if id.trim().is_empty() {
            return Err(PopupMenuError::InvalidParameter(
                "item id must not be empty".into(),
            ));
        }
        if label.trim().is_empty() {
            return Err(PopupMenuError::InvalidParameter(
                "item label must not be empty".into(),
            ));
        }
        Ok(Self {
            id,
            label,
            image_uri,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn image_uri(&self) -> Option<&str> {
        self.image_uri.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_item_exposes_fields() {
        let item = MenuItem::new("42", "Open").unwrap();
        assert_eq!(item.id(), "42");
        assert_eq!(item.label(), "Open");
        assert_eq!(item.image_uri(), None);

        let item = MenuItem::with_image("1", "Save", "file://save.png").unwrap();
        assert_eq!(item.image_uri(), Some("file://save.png"));
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = MenuItem::new("", "Open").unwrap_err();
        assert!(matches!(err, PopupMenuError::InvalidParameter(_)));
        assert!(MenuItem::new("   ", "Open").is_err());
    }

    #[test]
    fn empty_label_is_rejected() {
        assert!(MenuItem::new("1", "").is_err());
        assert!(MenuItem::new("1", "  ").is_err());
    }

    #[test]
    fn empty_image_uri_is_rejected() {
        assert!(MenuItem::with_image("1", "Open", "").is_err());
    }
}
