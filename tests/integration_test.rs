use anyhow::Result;
use rlens::{
    commit_preview, generate_demo_profile, grip_drag, parse_profile, pixel_to_time, Command,
    ContentRect, GestureContext, Grip, ModifierKeys, PointerEvent, PreviewSelection, ProfileWriter,
    SelectionGesture, TimeRange,
};
use std::env;
use std::fs;

#[test]
fn test_write_and_read_basic_profile() -> Result<()> {
    let test_file = env::temp_dir().join("test_profile.lprof");
    let test_file = test_file.to_str().unwrap();

    // Clean up any existing file
    let _ = fs::remove_file(test_file);

    // Write a profile
    {
        let mut writer = ProfileWriter::new(test_file)?;

        writer.write_header(
            "1.0",
            serde_json::json!({
                "product": "Test Capture",
                "start_time": 50.0
            }),
        )?;

        writer.write_track(1, "Main Thread")?;
        writer.write_track(2, "Compositor")?;

        writer.write_span(1, 100.0, 250.0, "reflow", "layout")?;
        writer.write_span(1, 260.0, 400.0, "run_script", "script")?;
        writer.write_span(2, 120.0, 180.0, "composite", "paint")?;

        writer.finish()?;
    }

    // Read it back
    let data = parse_profile(test_file.as_ref())?;
    assert_eq!(data.metadata.version, "1.0");
    assert_eq!(data.metadata.product(), Some("Test Capture"));
    assert_eq!(data.metadata.start_time(), 50.0);
    assert_eq!(data.tracks.len(), 2);
    assert_eq!(data.span_count(), 3);
    assert_eq!(data.extent(), TimeRange::new(100.0, 400.0));
    assert_eq!(data.metadata.total_tracks, Some(2));
    assert_eq!(data.metadata.total_spans, Some(3));

    let _ = fs::remove_file(test_file);
    Ok(())
}

#[test]
fn test_write_and_read_brotli_profile() -> Result<()> {
    let test_file = env::temp_dir().join("test_profile.lprof.br");
    let test_file = test_file.to_str().unwrap();
    let _ = fs::remove_file(test_file);

    {
        let mut writer = ProfileWriter::new(test_file)?;
        writer.write_header("1.0", serde_json::json!({"start_time": 0.0}))?;
        writer.write_track(1, "Main Thread")?;
        for i in 0..200 {
            let start = i as f64 * 10.0;
            writer.write_span(1, start, start + 5.0, "tick", "other")?;
        }
        writer.finish()?;
    }

    let data = parse_profile(test_file.as_ref())?;
    assert_eq!(data.span_count(), 200);
    assert_eq!(data.extent(), TimeRange::new(0.0, 1995.0));

    let _ = fs::remove_file(test_file);
    Ok(())
}

#[test]
fn test_generated_profile_round_trips() -> Result<()> {
    let test_file = env::temp_dir().join("test_generated.lprof");
    let test_file = test_file.to_str().unwrap();
    let _ = fs::remove_file(test_file);

    let original = generate_demo_profile(7, 30);
    {
        let mut writer = ProfileWriter::new(test_file)?;
        writer.write_header(
            &original.metadata.version,
            original.metadata.header_data().clone(),
        )?;
        for track in &original.tracks {
            writer.write_track(track.id, &track.name)?;
        }
        for track in &original.tracks {
            for span in &track.spans {
                writer.write_span(track.id, span.start, span.end, &span.name, &span.category)?;
            }
        }
        writer.finish()?;
    }

    let reread = parse_profile(test_file.as_ref())?;
    assert_eq!(reread.extent(), original.extent());
    assert_eq!(reread.span_count(), original.span_count());
    assert_eq!(reread.metadata.start_time(), original.metadata.start_time());
    for (a, b) in reread.tracks.iter().zip(&original.tracks) {
        assert_eq!(a.spans, b.spans);
    }

    let _ = fs::remove_file(test_file);
    Ok(())
}

/// Drives a full press-drag-release over a 500 px canvas mapped onto
/// [0, 1000] ms and checks every command the machine emits along the way.
#[test]
fn test_full_drag_selection_lifecycle() {
    let rect = ContentRect::new(0.0, 500.0, 0.0, 24.0);
    let committed = TimeRange::new(0.0, 1000.0);
    let mut gesture = SelectionGesture::new();
    let mut preview = PreviewSelection::None;

    let ctx = |existing| GestureContext {
        rect,
        committed,
        existing,
    };

    // Press at 100 px
    let commands = gesture.handle_event(
        PointerEvent::Down {
            x: 100.0,
            y: 10.0,
            is_primary: true,
            is_main_button: true,
            modifiers: ModifierKeys::default(),
        },
        ctx(preview),
    );
    assert_eq!(commands, vec![Command::InstallListeners]);

    // Move to 160 px: selection [200, 320] publishes as in-progress
    let commands = gesture.handle_event(
        PointerEvent::Move {
            x: 160.0,
            is_primary: true,
            is_main_button_down: true,
        },
        ctx(preview),
    );
    assert_eq!(commands.len(), 1);
    if let Command::Publish(p) = commands[0] {
        preview = p;
    }
    assert_eq!(
        preview,
        PreviewSelection::Active {
            start: 200.0,
            end: 320.0,
            is_modifying: true,
        }
    );

    // Release at 160 px: finalized selection, propagation suppressed
    let commands = gesture.handle_event(
        PointerEvent::Up {
            x: 160.0,
            is_primary: true,
        },
        ctx(preview),
    );
    assert_eq!(
        commands,
        vec![
            Command::Publish(PreviewSelection::Active {
                start: 200.0,
                end: 320.0,
                is_modifying: false,
            }),
            Command::StopPropagation,
            Command::UninstallListeners,
        ]
    );
    if let Command::Publish(p) = commands[0] {
        preview = p;
    }

    // Zoom commit with a shared origin of 50 ms yields relative bounds
    let commands = commit_preview(preview, 50.0);
    assert_eq!(
        commands,
        vec![
            Command::Commit {
                start: 150.0,
                end: 270.0,
            },
            Command::StopPropagation,
        ]
    );
}

/// Adjusts a finalized selection with each grip and verifies the bounds
/// stay inside the committed range throughout.
#[test]
fn test_grip_adjustment_after_drag() {
    let rect = ContentRect::new(0.0, 500.0, 0.0, 24.0);
    let committed = TimeRange::new(0.0, 1000.0);

    // The selection a drag from 100 px to 160 px produces
    let down = pixel_to_time(100.0, rect, committed);
    let up = pixel_to_time(160.0, rect, committed);
    let selection = TimeRange::new(down, up);
    assert_eq!(selection, TimeRange::new(200.0, 320.0));

    let widened = grip_drag(selection, committed, Grip::End, 100.0);
    assert_eq!(widened, TimeRange::new(200.0, 420.0));

    let shifted = grip_drag(widened, committed, Grip::Move, 600.0);
    assert_eq!(shifted, TimeRange::new(800.0, 1000.0));

    let narrowed = grip_drag(shifted, committed, Grip::Start, 250.0);
    assert_eq!(narrowed, TimeRange::new(1000.0, 1000.0));
}

/// A click that lands outside an existing selection clears it and keeps
/// the click away from other targets; a click inside leaves it alone.
#[test]
fn test_click_semantics_with_existing_selection() {
    let rect = ContentRect::new(0.0, 500.0, 0.0, 24.0);
    let committed = TimeRange::new(0.0, 1000.0);
    let existing = PreviewSelection::Active {
        start: 400.0,
        end: 600.0,
        is_modifying: false,
    };
    let ctx = GestureContext {
        rect,
        committed,
        existing,
    };

    // Click at 100 px (t=200, outside [400, 600)) clears
    let mut gesture = SelectionGesture::new();
    gesture.handle_event(
        PointerEvent::Down {
            x: 100.0,
            y: 10.0,
            is_primary: true,
            is_main_button: true,
            modifiers: ModifierKeys::default(),
        },
        ctx,
    );
    let commands = gesture.handle_event(
        PointerEvent::Up {
            x: 100.0,
            is_primary: true,
        },
        ctx,
    );
    assert!(commands.contains(&Command::Publish(PreviewSelection::None)));
    assert!(commands.contains(&Command::StopPropagation));

    // Click at 250 px (t=500, inside) propagates untouched
    let mut gesture = SelectionGesture::new();
    gesture.handle_event(
        PointerEvent::Down {
            x: 250.0,
            y: 10.0,
            is_primary: true,
            is_main_button: true,
            modifiers: ModifierKeys::default(),
        },
        ctx,
    );
    let commands = gesture.handle_event(
        PointerEvent::Up {
            x: 250.0,
            is_primary: true,
        },
        ctx,
    );
    assert_eq!(commands, vec![Command::UninstallListeners]);
}
