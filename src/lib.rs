//! Standalone egui-based popup menu widget.
//!
//! Displays a list of selectable items anchored near a trigger element and
//! reports the selection through a pending [`Selection`] handle. A
//! [`PopupMenu`] controller owns at most one visible menu at a time: opening
//! a new menu force-closes the previous one, and a visible menu is dismissed
//! by clicks outside of it, viewport resizes, and orientation changes. A
//! trigger suppresses its own opening click with
//! [`PopupMenu::request_suppress_next_dismissal`].
//!
//! Example of usage:
//!
//! ```no_run
//! use egui_popup_menu::{MenuItem, MenuOutcome, MenuPosition, PopupMenu, Selection};
//!
//! # fn demo(
//! #     ctx: &egui::Context,
//! #     trigger_rect: egui::Rect,
//! #     menu: &mut PopupMenu,
//! #     pending: &mut Option<Selection>,
//! # ) -> Result<(), egui_popup_menu::PopupMenuError> {
//! // In the trigger's click handler: display the menu under the trigger.
//! let items = vec![
//!     MenuItem::new("1", "Menu item 1")?,
//!     MenuItem::new("2", "Menu item 2")?,
//!     MenuItem::new("3", "Menu item 3")?,
//! ];
//! let viewport = ctx.input(|i| i.screen_rect());
//! let position = MenuPosition::align_bottom_left(trigger_rect, viewport);
//! menu.request_suppress_next_dismissal();
//! *pending = Some(menu.show(items, position)?);
//!
//! // Once per frame: drive the menu, then poll the pending selection.
//! menu.ui(ctx);
//! if let Some(selection) = pending {
//!     if let Some(outcome) = selection.poll() {
//!         match outcome {
//!             MenuOutcome::Selected(id) => println!("selected {id}"),
//!             MenuOutcome::Dismissed => println!("dismissed"),
//!         }
//!         *pending = None;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
mod instance;
pub mod item;
pub mod position;
pub mod selection;
pub mod theme;
pub mod widget;

pub use error::PopupMenuError;
pub use item::MenuItem;
pub use position::MenuPosition;
pub use selection::{MenuOutcome, Selection};
pub use theme::PopupMenuTheme;
pub use widget::PopupMenu;
