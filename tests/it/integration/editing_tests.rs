//! Text editing session through clicks, focus and the keyboard.

use crate::helpers::{TestCanvasBuilder, click_at, drag, empty_canvas, event, world_to_screen};
use embodi_canvas::types::{Modifiers, ToolType};
use embodi_canvas::Key;

#[test]
fn test_only_newest_box_is_editing() {
    let mut app = empty_canvas();
    app.set_tool(ToolType::Text);

    let (from, to) = (world_to_screen(&app, 0.0, 0.0), world_to_screen(&app, 150.0, 100.0));
    let a = drag(&mut app, from, to, Modifiers::NONE).unwrap();
    let (from, to) = (world_to_screen(&app, 300.0, 0.0), world_to_screen(&app, 450.0, 100.0));
    let b = drag(&mut app, from, to, Modifiers::NONE).unwrap();

    assert_eq!(app.board().editing_ids(), vec![b]);
    assert!(!app.board().get(a).unwrap().editing);
    assert_eq!(app.selection().sorted(), vec![b]);
}

#[test]
fn test_text_tool_click_opens_existing_box() {
    let (mut app, ids) = TestCanvasBuilder::new()
        .with_box(0.0, 0.0, 120.0, 80.0)
        .with_tool(ToolType::Text)
        .build();

    let on_box = world_to_screen(&app, 30.0, 30.0);
    click_at(&mut app, on_box, Modifiers::NONE);

    assert_eq!(app.board().len(), 1);
    assert_eq!(app.editing(), Some(ids[0]));
}

#[test]
fn test_double_click_edits_with_select_tool_only() {
    let (mut app, ids) = TestCanvasBuilder::new().with_box(0.0, 0.0, 120.0, 80.0).build();
    let on_box = event(world_to_screen(&app, 30.0, 30.0), Modifiers::NONE);

    assert!(app.on_double_click(on_box));
    assert_eq!(app.editing(), Some(ids[0]));

    app.end_all_editing();
    app.set_tool(ToolType::Eraser);
    assert!(!app.on_double_click(on_box));
    assert_eq!(app.editing(), None);
}

#[test]
fn test_empty_canvas_click_ends_all_edits() {
    let (mut app, ids) = TestCanvasBuilder::new().with_box(0.0, 0.0, 120.0, 80.0).build();
    app.begin_editing(ids[0]);
    app.on_click(event(world_to_screen(&app, 500.0, 500.0), Modifiers::NONE));
    assert!(app.board().editing_ids().is_empty());
    assert_eq!(app.editing(), None);
}

#[test]
fn test_focus_loss_outside_select_clears_selection() {
    let mut app = empty_canvas();
    app.set_tool(ToolType::Text);
    let (from, to) = (world_to_screen(&app, 0.0, 0.0), world_to_screen(&app, 200.0, 100.0));
    let id = drag(&mut app, from, to, Modifiers::NONE).unwrap();
    assert!(app.set_text(id, "a red fox"));

    app.end_editing();
    assert!(app.selection().is_empty());
    assert!(!app.board().get(id).unwrap().editing);
    assert_eq!(app.board().get(id).unwrap().text(), "a red fox");
}

#[test]
fn test_focus_loss_with_select_keeps_selection() {
    let (mut app, ids) = TestCanvasBuilder::new().with_box(0.0, 0.0, 120.0, 80.0).build();
    app.select_only(ids[0]);
    app.begin_editing(ids[0]);
    app.end_editing();
    assert!(app.selection().contains(ids[0]));
}

#[test]
fn test_delete_key_removes_selection() {
    let (mut app, ids) = TestCanvasBuilder::new()
        .with_box(0.0, 0.0, 120.0, 80.0)
        .with_box(200.0, 0.0, 120.0, 80.0)
        .with_box(400.0, 0.0, 120.0, 80.0)
        .build();
    let from = world_to_screen(&app, -10.0, -10.0);
    let to = world_to_screen(&app, 250.0, 50.0);
    drag(&mut app, from, to, Modifiers::NONE);

    assert!(app.on_key_down(Key::Delete));
    assert_eq!(app.board().len(), 1);
    assert!(app.board().contains(ids[2]));
    assert!(app.selection().is_empty());

    // Nothing selected: nothing to do
    assert!(!app.on_key_down(Key::Delete));
}

#[test]
fn test_ids_not_reused_after_delete() {
    let (mut app, ids) = TestCanvasBuilder::new().with_box(0.0, 0.0, 120.0, 80.0).build();
    app.delete_objects(&ids);
    app.set_tool(ToolType::Text);
    let (from, to) = (world_to_screen(&app, 0.0, 0.0), world_to_screen(&app, 120.0, 80.0));
    let fresh = drag(&mut app, from, to, Modifiers::NONE).unwrap();
    assert!(fresh > ids[0]);
}
