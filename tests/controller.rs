//! Integration tests driving the popup menu controller against a headless
//! egui context with synthetic input.

use egui::{Pos2, Rect, Vec2, pos2, vec2};
use egui_popup_menu::{MenuItem, MenuOutcome, MenuPosition, PopupMenu, Selection};

const LANDSCAPE: Vec2 = vec2(800.0, 600.0);
const PORTRAIT: Vec2 = vec2(600.0, 800.0);

fn items() -> Vec<MenuItem> {
    vec![
        MenuItem::new("1", "A").unwrap(),
        MenuItem::new("2", "B").unwrap(),
        MenuItem::new("3", "C").unwrap(),
    ]
}

fn position() -> MenuPosition {
    MenuPosition::new(Some(10.0), Some(50.0), None, None).unwrap()
}

fn run_frame(ctx: &egui::Context, menu: &mut PopupMenu, screen: Vec2, events: Vec<egui::Event>) {
    let input = egui::RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, screen)),
        events,
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| menu.ui(ctx));
}

fn click_at(pos: Pos2) -> Vec<egui::Event> {
    vec![
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::default(),
        },
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::default(),
        },
    ]
}

fn show(menu: &mut PopupMenu) -> Selection {
    menu.show(items(), position()).unwrap()
}

/// Center of the item row at `index`, read back from the rendered area.
fn row_center(ctx: &egui::Context, index: usize) -> Pos2 {
    let area_rect = ctx
        .memory(|mem| mem.area_rect(egui::Id::new("egui_popup_menu")))
        .expect("menu area was rendered");
    let margin_top = f32::from(ctx.style().spacing.menu_margin.top);
    let vertical_padding = 5.0;
    let row_height = 32.0;
    pos2(
        area_rect.center().x,
        area_rect.top() + margin_top + vertical_padding + row_height * (index as f32 + 0.5),
    )
}

#[test]
fn menu_survives_quiet_frames() {
    let ctx = egui::Context::default();
    let mut menu = PopupMenu::default();
    let mut selection = show(&mut menu);

    for _ in 0..3 {
        run_frame(&ctx, &mut menu, LANDSCAPE, vec![]);
    }
    assert!(menu.is_open());
    assert_eq!(selection.poll(), None);
}

#[test]
fn clicking_a_row_selects_its_item() {
    let ctx = egui::Context::default();
    let mut menu = PopupMenu::default();
    let mut selection = show(&mut menu);

    // Lay the menu out once, then click the second row.
    run_frame(&ctx, &mut menu, LANDSCAPE, vec![]);
    let target = row_center(&ctx, 1);
    run_frame(&ctx, &mut menu, LANDSCAPE, click_at(target));

    assert!(!menu.is_open());
    assert_eq!(selection.poll(), Some(MenuOutcome::Selected("2".into())));
}

#[test]
fn outside_click_dismisses() {
    let ctx = egui::Context::default();
    let mut menu = PopupMenu::default();
    let mut selection = show(&mut menu);

    run_frame(&ctx, &mut menu, LANDSCAPE, vec![]);
    run_frame(&ctx, &mut menu, LANDSCAPE, click_at(pos2(700.0, 500.0)));

    assert!(!menu.is_open());
    assert_eq!(selection.poll(), Some(MenuOutcome::Dismissed));
}

#[test]
fn suppression_ignores_exactly_one_click() {
    let ctx = egui::Context::default();
    let mut menu = PopupMenu::default();
    menu.request_suppress_next_dismissal();
    let mut selection = show(&mut menu);

    run_frame(&ctx, &mut menu, LANDSCAPE, vec![]);

    // The suppressed click leaves the menu open.
    run_frame(&ctx, &mut menu, LANDSCAPE, click_at(pos2(700.0, 500.0)));
    assert!(menu.is_open());
    assert_eq!(selection.poll(), None);

    // The next one dismisses as usual.
    run_frame(&ctx, &mut menu, LANDSCAPE, click_at(pos2(700.0, 500.0)));
    assert!(!menu.is_open());
    assert_eq!(selection.poll(), Some(MenuOutcome::Dismissed));
}

#[test]
fn viewport_resize_dismisses() {
    let ctx = egui::Context::default();
    let mut menu = PopupMenu::default();
    let mut selection = show(&mut menu);

    run_frame(&ctx, &mut menu, LANDSCAPE, vec![]);
    run_frame(&ctx, &mut menu, vec2(820.0, 600.0), vec![]);

    assert!(!menu.is_open());
    assert_eq!(selection.poll(), Some(MenuOutcome::Dismissed));
}

#[test]
fn orientation_change_dismisses() {
    let ctx = egui::Context::default();
    let mut menu = PopupMenu::default();
    let mut selection = show(&mut menu);

    run_frame(&ctx, &mut menu, LANDSCAPE, vec![]);
    run_frame(&ctx, &mut menu, PORTRAIT, vec![]);

    assert!(!menu.is_open());
    assert_eq!(selection.poll(), Some(MenuOutcome::Dismissed));
}

#[test]
fn resize_dismissal_is_not_suppressible() {
    let ctx = egui::Context::default();
    let mut menu = PopupMenu::default();
    menu.request_suppress_next_dismissal();
    let mut selection = show(&mut menu);

    run_frame(&ctx, &mut menu, LANDSCAPE, vec![]);
    run_frame(&ctx, &mut menu, vec2(820.0, 600.0), vec![]);

    assert!(!menu.is_open());
    assert_eq!(selection.poll(), Some(MenuOutcome::Dismissed));
}

#[test]
fn second_show_replaces_the_visible_menu() {
    let ctx = egui::Context::default();
    let mut menu = PopupMenu::default();
    let mut first = show(&mut menu);

    run_frame(&ctx, &mut menu, LANDSCAPE, vec![]);
    // The first selection settles before the replacement menu exists.
    let mut second = menu.show(items(), position()).unwrap();
    assert_eq!(first.poll(), Some(MenuOutcome::Dismissed));

    // The replacement renders and resolves normally.
    run_frame(&ctx, &mut menu, LANDSCAPE, vec![]);
    let target = row_center(&ctx, 2);
    run_frame(&ctx, &mut menu, LANDSCAPE, click_at(target));
    assert_eq!(second.poll(), Some(MenuOutcome::Selected("3".into())));
}

#[test]
fn selection_outcome_is_stable_after_settling() {
    let ctx = egui::Context::default();
    let mut menu = PopupMenu::default();
    let mut selection = show(&mut menu);

    run_frame(&ctx, &mut menu, LANDSCAPE, vec![]);
    let target = row_center(&ctx, 0);
    run_frame(&ctx, &mut menu, LANDSCAPE, click_at(target));

    let settled = selection.poll();
    assert_eq!(settled, Some(MenuOutcome::Selected("1".into())));
    assert_eq!(selection.poll(), settled);
}
