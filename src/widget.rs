//! The popup menu controller.

use std::sync::mpsc;

use crate::error::PopupMenuError;
use crate::instance::{InstanceEvent, MenuInstance};
use crate::item::MenuItem;
use crate::position::MenuPosition;
use crate::selection::{MenuOutcome, Selection};
use crate::theme::PopupMenuTheme;

/// Controller owning at most one visible popup menu.
///
/// Keep one per UI layer and call [`PopupMenu::ui`] once per frame; open the
/// menu with [`PopupMenu::show`] from a trigger's click handler. See the
/// crate docs for a full example.
pub struct PopupMenu {
    id: egui::Id,
    theme: PopupMenuTheme,
    instance: Option<MenuInstance>,
    suppress_next_dismissal: bool,
}

impl Default for PopupMenu {
    fn default() -> Self {
        Self::new(PopupMenuTheme::default())
    }
}

impl PopupMenu {
    pub fn new(theme: PopupMenuTheme) -> Self {
        Self {
            id: egui::Id::new("egui_popup_menu"),
            theme,
            instance: None,
            suppress_next_dismissal: false,
        }
    }

    /// Distinguishes several controllers rendered by the same
    /// `egui::Context`.
    pub fn with_id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id = egui::Id::new("egui_popup_menu").with(salt);
        self
    }

    pub fn is_open(&self) -> bool {
        self.instance.is_some()
    }

    /// Arms one-shot suppression of the next dismissal-worthy click. A
    /// trigger calls this right before [`PopupMenu::show`] so its own click
    /// does not immediately dismiss the menu it opened. Viewport resizes and
    /// orientation changes are never suppressed.
    pub fn request_suppress_next_dismissal(&mut self) {
        self.suppress_next_dismissal = true;
    }

    /// Opens the menu, force-closing any previous instance first (its
    /// pending selection settles with [`MenuOutcome::Dismissed`]). Returns
    /// the handle that will settle exactly once, with the clicked item's id
    /// or with `Dismissed`.
    ///
    /// Fails with [`PopupMenuError::InvalidParameter`] on an empty item
    /// list, before any side effect; a previously opened menu stays visible
    /// in that case.
    pub fn show(
        &mut self,
        items: Vec<MenuItem>,
        position: MenuPosition,
    ) -> Result<Selection, PopupMenuError> {
        if items.is_empty() {
            return Err(PopupMenuError::InvalidParameter(
                "items must be a non-empty list of menu items".into(),
            ));
        }
        self.close();

        log::debug!("popup menu: showing {} items", items.len());
        let (resolver, rx) = mpsc::channel();
        self.instance = Some(MenuInstance::new(items, position, resolver));
        Ok(Selection::new(rx))
    }

    /// Closes the visible menu, if any. A still-pending selection settles
    /// with [`MenuOutcome::Dismissed`]. Never fails: teardown is best-effort
    /// and idempotent, and internal delivery problems are only logged.
    pub fn close(&mut self) {
        self.settle_and_drop(MenuOutcome::Dismissed);
    }

    fn settle_and_drop(&mut self, outcome: MenuOutcome) {
        if let Some(mut instance) = self.instance.take() {
            instance.settle(outcome);
        }
    }

    /// Drives the menu for one frame: renders the visible instance and runs
    /// the dismissal protocol. A no-op while no menu is open.
    pub fn ui(&mut self, ctx: &egui::Context) {
        let Some(instance) = self.instance.as_mut() else {
            return;
        };
        match instance.ui(ctx, &self.theme, self.id) {
            InstanceEvent::None => {}
            InstanceEvent::RowClicked(id) => {
                log::debug!("popup menu: item {id:?} selected");
                self.settle_and_drop(MenuOutcome::Selected(id));
            }
            InstanceEvent::ClickedOutside => {
                if self.suppress_next_dismissal {
                    self.suppress_next_dismissal = false;
                } else {
                    log::debug!("popup menu: dismissed by outside click");
                    self.close();
                }
            }
            InstanceEvent::Resized => {
                log::debug!("popup menu: dismissed by viewport resize");
                self.close();
            }
            InstanceEvent::OrientationChanged => {
                log::debug!("popup menu: dismissed by orientation change");
                self.close();
            }
        }
    }
}
