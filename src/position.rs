//! Placement of the popup menu relative to the viewport.

use egui::{Align, Align2, Pos2, Rect};

use crate::error::PopupMenuError;

/// Edge offsets anchoring the menu inside the viewport, in ui points.
///
/// Each offset is measured inward from the matching viewport edge; an unset
/// side leaves that edge unconstrained. Provide at least one horizontal and
/// one vertical offset to fully anchor the menu, or use one of the `align_*`
/// builders, which derive both from a trigger element's rect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuPosition {
    left: Option<f32>,
    top: Option<f32>,
    right: Option<f32>,
    bottom: Option<f32>,
}

impl MenuPosition {
    /// Builds a position from explicit offsets. Every provided value must be
    /// a finite, non-negative number of ui points, otherwise the call fails
    /// with [`PopupMenuError::InvalidParameter`].
    pub fn new(
        left: Option<f32>,
        top: Option<f32>,
        right: Option<f32>,
        bottom: Option<f32>,
    ) -> Result<Self, PopupMenuError> {
        for (name, value) in [
            ("left", left),
            ("top", top),
            ("right", right),
            ("bottom", bottom),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(PopupMenuError::InvalidParameter(format!(
                        "{name} offset must be a finite non-negative number, got {v}"
                    )));
                }
            }
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Menu grows upward from the trigger's top-left corner.
    pub fn align_top_left(trigger: Rect, viewport: Rect) -> Self {
        Self {
            left: Some((trigger.left() - viewport.left()).max(0.0)),
            bottom: Some((viewport.bottom() - trigger.top()).max(0.0)),
            ..Self::default()
        }
    }

    /// Menu hangs below the trigger, left edges aligned.
    pub fn align_bottom_left(trigger: Rect, viewport: Rect) -> Self {
        Self {
            left: Some((trigger.left() - viewport.left()).max(0.0)),
            top: Some((trigger.bottom() - viewport.top()).max(0.0)),
            ..Self::default()
        }
    }

    /// Menu grows upward from the trigger's top-right corner.
    pub fn align_top_right(trigger: Rect, viewport: Rect) -> Self {
        Self {
            right: Some((viewport.right() - trigger.right()).max(0.0)),
            bottom: Some((viewport.bottom() - trigger.top()).max(0.0)),
            ..Self::default()
        }
    }

    /// Menu hangs below the trigger, right edges aligned.
    pub fn align_bottom_right(trigger: Rect, viewport: Rect) -> Self {
        Self {
            right: Some((viewport.right() - trigger.right()).max(0.0)),
            top: Some((trigger.bottom() - viewport.top()).max(0.0)),
            ..Self::default()
        }
    }

    pub fn left(&self) -> Option<f32> {
        self.left
    }

    pub fn top(&self) -> Option<f32> {
        self.top
    }

    pub fn right(&self) -> Option<f32> {
        self.right
    }

    pub fn bottom(&self) -> Option<f32> {
        self.bottom
    }

    /// Converts the offsets into a pivot point and pivot alignment for an
    /// `egui::Area`. A left offset pins the menu's left edge and a right
    /// offset its right edge (left wins when both are set); same for
    /// top/bottom. An axis with no offset falls back to the viewport's min
    /// edge.
    pub(crate) fn resolve(&self, viewport: Rect) -> (Pos2, Align2) {
        let (x, h_align) = if let Some(left) = self.left {
            (viewport.left() + left, Align::Min)
        } else if let Some(right) = self.right {
            (viewport.right() - right, Align::Max)
        } else {
            (viewport.left(), Align::Min)
        };
        let (y, v_align) = if let Some(top) = self.top {
            (viewport.top() + top, Align::Min)
        } else if let Some(bottom) = self.bottom {
            (viewport.bottom() - bottom, Align::Max)
        } else {
            (viewport.top(), Align::Min)
        };
        (Pos2::new(x, y), Align2([h_align, v_align]))
    }
}
