//! The live menu instance. Constructed only by `PopupMenu::show`; module
//! privacy keeps any other construction path out of the public API.

use std::sync::mpsc::Sender;

use egui::{FontId, Pos2, Rect, RichText, Sense, Vec2};

use crate::item::MenuItem;
use crate::position::MenuPosition;
use crate::selection::MenuOutcome;
use crate::theme::PopupMenuTheme;

/// What happened to the instance during one frame. The controller decides
/// how to react; in particular, suppression only applies to outside clicks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum InstanceEvent {
    None,
    RowClicked(String),
    ClickedOutside,
    Resized,
    OrientationChanged,
}

/// One visible popup menu: the item list, its placement, the resolver half
/// of the pending selection channel, and the viewport captured on the first
/// rendered frame (the baseline for resize and orientation dismissal).
pub(crate) struct MenuInstance {
    items: Vec<MenuItem>,
    position: MenuPosition,
    resolver: Option<Sender<MenuOutcome>>,
    baseline_viewport: Option<Rect>,
}

impl MenuInstance {
    pub(crate) fn new(
        items: Vec<MenuItem>,
        position: MenuPosition,
        resolver: Sender<MenuOutcome>,
    ) -> Self {
        Self {
            items,
            position,
            resolver: Some(resolver),
            baseline_viewport: None,
        }
    }

    /// Settles the pending selection. Only the first call sends; later calls
    /// are no-ops, so teardown stays idempotent.
    pub(crate) fn settle(&mut self, outcome: MenuOutcome) {
        if let Some(resolver) = self.resolver.take() {
            if resolver.send(outcome).is_err() {
                // The caller dropped its Selection handle; there is nobody
                // left to deliver the outcome to.
                log::warn!("popup menu: selection receiver dropped before settlement");
            }
        }
    }

    /// Compares the viewport against the baseline captured on the first
    /// rendered frame. A size change dismisses the menu; an aspect flip is
    /// reported as an orientation change.
    fn viewport_event(&mut self, viewport: Rect) -> Option<InstanceEvent> {
        let Some(baseline) = self.baseline_viewport else {
            self.baseline_viewport = Some(viewport);
            return None;
        };
        if baseline.size() == viewport.size() {
            return None;
        }
        let was_landscape = baseline.width() > baseline.height();
        let is_landscape = viewport.width() > viewport.height();
        Some(if was_landscape != is_landscape {
            InstanceEvent::OrientationChanged
        } else {
            InstanceEvent::Resized
        })
    }

    /// Renders the menu for one frame and reports what happened to it.
    pub(crate) fn ui(
        &mut self,
        ctx: &egui::Context,
        theme: &PopupMenuTheme,
        id: egui::Id,
    ) -> InstanceEvent {
        let viewport = ctx.input(|i| i.screen_rect());
        if let Some(event) = self.viewport_event(viewport) {
            return event;
        }

        let (pivot_pos, pivot) = self.position.resolve(viewport);
        let mut clicked: Option<String> = None;

        let area = egui::Area::new(id)
            .order(egui::Order::Foreground)
            .pivot(pivot)
            .fixed_pos(pivot_pos)
            .show(ctx, |ui| {
                egui::Frame::menu(ui.style()).show(ui, |ui| {
                    ui.spacing_mut().item_spacing.y = 0.0;
                    let row_width = row_width(ui, theme, &self.items);
                    ui.add_space(theme.vertical_padding);
                    for item in &self.items {
                        if row(ui, theme, item, row_width).clicked() {
                            clicked = Some(item.id().to_owned());
                        }
                    }
                    ui.add_space(theme.vertical_padding);
                });
            });

        if let Some(id) = clicked {
            return InstanceEvent::RowClicked(id);
        }
        if area.response.clicked_elsewhere() {
            return InstanceEvent::ClickedOutside;
        }
        InstanceEvent::None
    }
}

impl Drop for MenuInstance {
    fn drop(&mut self) {
        // A still-pending selection settles as a dismissal no matter how the
        // instance goes away.
        self.settle(MenuOutcome::Dismissed);
    }
}

/// Width shared by all rows: wide enough for the widest label plus its image
/// slot and margins, capped at the theme's maximum.
fn row_width(ui: &mut egui::Ui, theme: &PopupMenuTheme, items: &[MenuItem]) -> f32 {
    let font = FontId::proportional(theme.text_size);
    let mut widest: f32 = 0.0;
    for item in items {
        let label_width = ui.fonts_mut(|fonts| {
            fonts
                .layout_no_wrap(item.label().to_owned(), font.clone(), theme.text_color)
                .size()
                .x
        });
        let image_width = if item.image_uri().is_some() {
            theme.image_size
        } else {
            0.0
        };
        widest = widest.max(image_width + label_width + 2.0 * theme.label_margin);
    }
    widest.min(theme.max_width)
}

/// One item row: hover fill, optional image, label truncated with an
/// ellipsis at the row's width.
fn row(ui: &mut egui::Ui, theme: &PopupMenuTheme, item: &MenuItem, width: f32) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(Vec2::new(width, theme.row_height), Sense::click());
    if ui.is_rect_visible(rect) {
        if response.hovered() {
            ui.painter().rect_filled(rect, 0.0, theme.hover_color);
        }

        let mut label_left = rect.left();
        if let Some(uri) = item.image_uri() {
            let image_rect = Rect::from_center_size(
                Pos2::new(rect.left() + theme.image_size * 0.5, rect.center().y),
                Vec2::splat(theme.image_size),
            );
            egui::Image::new(uri).paint_at(ui, image_rect);
            label_left += theme.image_size;
        }
        label_left += theme.label_margin;

        let label_rect = Rect::from_min_max(
            Pos2::new(label_left, rect.top()),
            Pos2::new((rect.right() - theme.label_margin).max(label_left), rect.bottom()),
        );
        let text = RichText::new(item.label())
            .size(theme.text_size)
            .color(theme.text_color);
        ui.put(
            label_rect,
            egui::Label::new(text).truncate().selectable(false),
        );
    }
    response
}
