use super::*;

fn collect_with_key(key: egui::Key, modifiers: egui::Modifiers) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    raw_input.modifiers = modifiers;
    raw_input.events.push(egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    });

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        events = collect_keyboard_intents(ctx, Path::new("projekt.json"));
    });

    events
}

#[test]
fn ctrl_z_emits_undo_and_ctrl_y_redo() {
    let undo = collect_with_key(egui::Key::Z, egui::Modifiers::COMMAND);
    assert!(matches!(undo[..], [AppIntent::UndoRequested]));

    let redo = collect_with_key(egui::Key::Y, egui::Modifiers::COMMAND);
    assert!(matches!(redo[..], [AppIntent::RedoRequested]));
}

#[test]
fn shift_ctrl_z_emits_redo_only() {
    let events = collect_with_key(
        egui::Key::Z,
        egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
    );
    assert!(matches!(events[..], [AppIntent::RedoRequested]));
}

#[test]
fn r_rotates_and_delete_removes_selection() {
    let rotate = collect_with_key(egui::Key::R, egui::Modifiers::NONE);
    assert!(matches!(rotate[..], [AppIntent::RotateSelectedRequested]));

    let delete = collect_with_key(egui::Key::Delete, egui::Modifiers::NONE);
    assert!(matches!(delete[..], [AppIntent::DeleteSelectedRequested]));
}

#[test]
fn e_exports_png_and_shift_e_jpeg() {
    let png = collect_with_key(egui::Key::E, egui::Modifiers::NONE);
    assert!(matches!(
        png[..],
        [AppIntent::ExportRequested {
            format: ExportFormat::Png
        }]
    ));

    let jpeg = collect_with_key(egui::Key::E, egui::Modifiers::SHIFT);
    assert!(matches!(
        jpeg[..],
        [AppIntent::ExportRequested {
            format: ExportFormat::Jpeg
        }]
    ));
}

#[test]
fn ctrl_s_saves_to_project_path() {
    let events = collect_with_key(egui::Key::S, egui::Modifiers::COMMAND);
    assert!(matches!(
        &events[..],
        [AppIntent::SaveProjectRequested { path }] if path == Path::new("projekt.json")
    ));
}

#[test]
fn escape_emits_escape_intent() {
    let events = collect_with_key(egui::Key::Escape, egui::Modifiers::NONE);
    assert!(matches!(events[..], [AppIntent::EscapePressed]));
}
