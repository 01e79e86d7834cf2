//! Timeline input handling for range selection, grip drags, and hover.
//!
//! Bridges egui's per-frame pointer input to the pure gesture machine:
//! press/move/release become [`PointerEvent`]s, and the commands the machine
//! returns are applied to the store. Move and release events are delivered
//! only while the machine's listener handle is installed, mirroring global
//! listeners that exist only for the duration of a gesture.

use crate::app::ApplicationCoordinator;
use crate::app::AppState;
use crate::rendering::selection_overlay::OverlayLayout;
use crate::utils::content_rect;
use eframe::egui;
use rlens::{
    commit_preview, grip_drag, pixel_delta_to_time, pixel_to_time, ContentRect, GestureContext,
    Grip, ModifierKeys, PointerEvent, PreviewSelection, TimeRange,
};

/// Result of timeline input handling.
pub enum TimelineInputResult {
    /// No interaction reached downstream targets
    None,
    /// A plain click was not suppressed by the gesture and may select a
    /// track row
    ClickPropagated { pos: egui::Pos2 },
}

/// Handles all pointer input for the timeline lane area.
///
/// # Arguments
/// * `ctx` - The egui context for input access
/// * `lane_rect` - The lane area (ruler plus track rows, gutter excluded)
/// * `overlay` - Overlay geometry from the previous frame, if a selection
///   is showing
/// * `state` - Mutable reference to application state
pub fn handle_timeline_input(
    ctx: &egui::Context,
    lane_rect: egui::Rect,
    overlay: Option<OverlayLayout>,
    state: &mut AppState,
) -> TimelineInputResult {
    let committed = state.range.committed();
    let rect = content_rect(lane_rect);

    let (primary_pressed, primary_down, primary_released, press_origin, latest_pos, hover_pos, pointer_delta, raw_modifiers) =
        ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.press_origin(),
                i.pointer.latest_pos(),
                i.pointer.hover_pos(),
                i.pointer.delta(),
                i.modifiers,
            )
        });

    let mut result = TimelineInputResult::None;

    // An in-progress grip drag owns the pointer until release.
    if state.interaction.grip_drag().is_some() {
        if primary_down && !primary_released {
            if let Some(drag) = state.interaction.advance_grip_drag(pointer_delta.x) {
                let time_delta = pixel_delta_to_time(drag.accumulated_px, rect, committed);
                let adjusted = grip_drag(drag.original, committed, drag.grip, time_delta);
                state.selection.update_preview(PreviewSelection::Active {
                    start: adjusted.start,
                    end: adjusted.end,
                    is_modifying: true,
                });
            }
        } else if let Some(drag) = state.interaction.end_grip_drag() {
            let time_delta = pixel_delta_to_time(drag.accumulated_px, rect, committed);
            let adjusted = grip_drag(drag.original, committed, drag.grip, time_delta);
            state.selection.update_preview(PreviewSelection::Active {
                start: adjusted.start,
                end: adjusted.end,
                is_modifying: false,
            });
        }
        update_hover(state, lane_rect, rect, committed, hover_pos);
        return result;
    }

    if primary_pressed {
        if let Some(pos) = press_origin {
            // The zoom control and the grips sit above the canvas; a press
            // on them never reaches the gesture machine.
            if let Some(layout) = overlay {
                if layout.zoom_button.is_some_and(|r| r.contains(pos)) {
                    let commands =
                        commit_preview(state.selection.preview(), state.range.zero_at());
                    ApplicationCoordinator::apply_gesture_commands(state, &commands);
                    update_hover(state, lane_rect, rect, committed, hover_pos);
                    return result;
                }

                if let PreviewSelection::Active { start, end, .. } = state.selection.preview() {
                    let grip = if layout.start_grip.contains(pos) {
                        Some(Grip::Start)
                    } else if layout.end_grip.contains(pos) {
                        Some(Grip::End)
                    } else if layout.move_grip.contains(pos) {
                        Some(Grip::Move)
                    } else {
                        None
                    };
                    if let Some(grip) = grip {
                        state
                            .interaction
                            .begin_grip_drag(grip, TimeRange::new(start, end));
                        update_hover(state, lane_rect, rect, committed, hover_pos);
                        return result;
                    }
                }
            }

            let event = PointerEvent::Down {
                x: pos.x,
                y: pos.y,
                is_primary: true,
                is_main_button: true,
                modifiers: ModifierKeys {
                    alt: raw_modifiers.alt,
                    ctrl: raw_modifiers.ctrl,
                    meta: raw_modifiers.mac_cmd,
                    shift: raw_modifiers.shift,
                },
            };
            feed_gesture(state, event, rect, committed);
        }
    } else if state.interaction.listeners_installed() {
        if primary_released {
            if let Some(pos) = latest_pos {
                let event = PointerEvent::Up {
                    x: pos.x,
                    is_primary: true,
                };
                let suppressed = feed_gesture(state, event, rect, committed);
                if !suppressed && lane_rect.contains(pos) {
                    result = TimelineInputResult::ClickPropagated { pos };
                }
            }
        } else if let Some(pos) = latest_pos {
            // Button state comes from the platform bitmask; the machine
            // uses it to recover from a missed release.
            let event = PointerEvent::Move {
                x: pos.x,
                is_primary: true,
                is_main_button_down: primary_down,
            };
            feed_gesture(state, event, rect, committed);
        }
    } else if primary_released {
        // No gesture in flight; plain clicks inside the lane still reach
        // the track rows.
        if let Some(pos) = latest_pos {
            if lane_rect.contains(pos) {
                result = TimelineInputResult::ClickPropagated { pos };
            }
        }
    }

    update_hover(state, lane_rect, rect, committed, hover_pos);
    result
}

/// Feeds one event through the gesture machine and applies the resulting
/// commands. Returns true if propagation was suppressed.
fn feed_gesture(
    state: &mut AppState,
    event: PointerEvent,
    rect: ContentRect,
    committed: TimeRange,
) -> bool {
    let gesture_ctx = GestureContext {
        rect,
        committed,
        existing: state.selection.preview(),
    };
    let commands = state.interaction.gesture_mut().handle_event(event, gesture_ctx);
    ApplicationCoordinator::apply_gesture_commands(state, &commands)
}

/// Tracks the hover position for the vertical cursor line.
///
/// The lane rect is checked directly rather than via widget hover, which
/// child widgets would block.
fn update_hover(
    state: &mut AppState,
    lane_rect: egui::Rect,
    rect: ContentRect,
    committed: TimeRange,
    hover_pos: Option<egui::Pos2>,
) {
    match hover_pos {
        Some(pos) if lane_rect.contains(pos) && committed.duration() > 0.0 => {
            let time = pixel_to_time(pos.x, rect, committed);
            state.selection.set_hover(Some(pos), Some(time));
        }
        _ => state.selection.set_hover(None, None),
    }
}
