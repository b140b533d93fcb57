//! Pending selection handle returned by `PopupMenu::show`.

use std::sync::mpsc::{Receiver, TryRecvError};

/// How a shown menu ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuOutcome {
    /// An item row was clicked; carries the item's id.
    Selected(String),
    /// The menu closed without a selection: an outside click, a viewport
    /// resize or orientation change, an explicit `close()`, or a newer
    /// `show()`.
    Dismissed,
}

/// The pending result of one `show()` call.
///
/// Settles exactly once. Poll it each frame after driving
/// [`PopupMenu::ui`](crate::PopupMenu::ui); once settled, [`Selection::poll`]
/// keeps returning the same outcome.
#[derive(Debug)]
pub struct Selection {
    rx: Receiver<MenuOutcome>,
    settled: Option<MenuOutcome>,
}

impl Selection {
    pub(crate) fn new(rx: Receiver<MenuOutcome>) -> Self {
        Self { rx, settled: None }
    }

    /// Non-blocking check for the outcome. Returns `None` while the menu is
    /// still open.
    pub fn poll(&mut self) -> Option<MenuOutcome> {
        if self.settled.is_none() {
            match self.rx.try_recv() {
                Ok(outcome) => self.settled = Some(outcome),
                Err(TryRecvError::Empty) => {}
                // Controller gone without settling first; count it as a
                // dismissal so the caller still gets an answer.
                Err(TryRecvError::Disconnected) => self.settled = Some(MenuOutcome::Dismissed),
            }
        }
        self.settled.clone()
    }
}
