use glam::Vec2;
use pcb_layout_editor::app::StatusKind;
use pcb_layout_editor::core::{ComponentTemplate, LayerMode, PinKind, PinRef, PinTemplate};
use pcb_layout_editor::{AppController, AppIntent, AppState, EditorOptions, ExportFormat};
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis anlegen");
    dir
}

fn led_template() -> ComponentTemplate {
    ComponentTemplate {
        name: "LED1".into(),
        component_type: "Diode".into(),
        pins: vec![
            PinTemplate {
                label: "A".into(),
                kind: PinKind::Power,
            },
            PinTemplate {
                label: "K".into(),
                kind: PinKind::Ground,
            },
        ],
    }
}

fn populated(options: EditorOptions) -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::with_options(options);
    for pos in [Vec2::new(-100.0, 0.0), Vec2::new(100.0, 0.0)] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::PlaceComponentRequested {
                    template: led_template(),
                    world_pos: Some(pos),
                },
            )
            .expect("Platzieren");
    }
    let ids: Vec<String> = state.board.components().map(|c| c.id.clone()).collect();
    for pin in [PinRef::new(&ids[0], "pin_1"), PinRef::new(&ids[1], "pin_0")] {
        controller
            .handle_intent(&mut state, AppIntent::PinClicked { pin })
            .expect("Pin-Klick");
    }
    (controller, state)
}

#[test]
fn export_writes_png_file_into_configured_directory() {
    let dir = scratch_dir("pcb_layout_editor_export");
    let options = EditorOptions {
        export_size_px: 64,
        export_directory: dir.to_string_lossy().into_owned(),
        ..EditorOptions::default()
    };
    let (mut controller, mut state) = populated(options);

    // Ohne Zeichenfläche: stiller Abbruch
    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportRequested {
                format: ExportFormat::Png,
            },
        )
        .expect("Export ohne Fläche");
    assert!(state.ui.last_export_path.is_none());
    assert_eq!(std::fs::read_dir(&dir).map(|d| d.count()).unwrap_or(0), 0);

    controller
        .handle_intent(&mut state, AppIntent::CanvasResized { size: [800.0, 600.0] })
        .expect("Resize");
    controller
        .handle_intent(&mut state, AppIntent::ToggleFlipRequested)
        .expect("Flip");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ExportRequested {
                format: ExportFormat::Png,
            },
        )
        .expect("Export");

    let path = state.ui.last_export_path.clone().expect("Exportpfad gesetzt");
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    assert!(file_name.starts_with("PCB_Print_TOP_Flipped_"), "{}", file_name);
    assert!(file_name.ends_with(".png"));

    let image = image::open(&path).expect("PNG lesbar").to_rgba8();
    assert_eq!(image.dimensions(), (64, 64));
    assert_eq!(
        state.ui.status.as_ref().map(|s| s.kind),
        Some(StatusKind::Success)
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn project_round_trip_restores_board_and_layer_mode() {
    let dir = scratch_dir("pcb_layout_editor_project");
    let path = dir.join("board.json");
    let (mut controller, mut state) = populated(EditorOptions::default());
    controller
        .handle_intent(&mut state, AppIntent::ToggleLayerModeRequested)
        .expect("Lagenmodus");
    assert_eq!(state.view.layer_mode, LayerMode::Single);
    let saved_board = state.board.clone();

    controller
        .handle_intent(&mut state, AppIntent::SaveProjectRequested { path: path.clone() })
        .expect("Speichern");
    assert!(path.exists());

    let mut fresh = AppState::new();
    controller
        .handle_intent(&mut fresh, AppIntent::LoadProjectRequested { path: path.clone() })
        .expect("Laden");

    assert_eq!(fresh.view.layer_mode, LayerMode::Single);
    assert_eq!(fresh.component_count(), saved_board.component_count());
    assert_eq!(fresh.route_count(), 1);
    let route = &fresh.board.routes()[0];
    let original = &saved_board.routes()[0];
    assert_eq!(route.from, original.from);
    assert_eq!(route.to, original.to);
    assert_eq!(route.layer, original.layer);

    // Laden ist rückgängig machbar
    controller
        .handle_intent(&mut fresh, AppIntent::UndoRequested)
        .expect("Undo");
    assert!(fresh.board.is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn loading_a_missing_file_reports_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let result = controller.handle_intent(
        &mut state,
        AppIntent::LoadProjectRequested {
            path: std::env::temp_dir().join("pcb_layout_editor_does_not_exist.json"),
        },
    );
    assert!(result.is_err());
    assert!(state.board.is_empty());
    assert!(!state.can_undo());
}
