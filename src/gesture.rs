//! Range-selection gesture state machine for the timeline ruler.
//!
//! Translates a pointer drag over the timeline into an in-progress or
//! finalized preview selection, and decides when a plain click should clear
//! an existing selection instead.
//!
//! The machine is pure: it consumes explicit [`PointerEvent`]s plus a
//! [`GestureContext`] snapshot of the surrounding state, and returns a list
//! of [`Command`]s for the caller to apply (publish a selection, commit a
//! range, install or uninstall the global pointer listeners, suppress click
//! propagation). No UI types appear here, so the full drag lifecycle is
//! testable without a live event loop.

use crate::coords::{pixel_to_time, ContentRect};
use crate::range::TimeRange;

/// Minimum horizontal distance in pixels before a press-and-move is treated
/// as a range selection rather than a click.
pub const DRAG_THRESHOLD_PX: f32 = 3.0;

/// The preview selection owned by the store: either nothing, or a sub-range
/// of the committed range, possibly still being adjusted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreviewSelection {
    /// No selection is active.
    None,
    /// A selection covering `[start, end]`, with `is_modifying` true while a
    /// drag or grip adjustment is still in progress.
    Active {
        start: f64,
        end: f64,
        is_modifying: bool,
    },
}

/// Modifier keys held during a pointer press.
///
/// Any held modifier disqualifies the press from starting a selection, so
/// modified clicks stay available to other shortcuts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierKeys {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl ModifierKeys {
    /// Returns true if any modifier is held.
    pub fn any(&self) -> bool {
        self.alt || self.ctrl || self.meta || self.shift
    }
}

/// A pointer event delivered to the gesture machine.
///
/// `is_primary` identifies the first/main contact in a multi-touch stream;
/// secondary contacts are ignored by every handler so simultaneous touches
/// cannot cross-talk.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    /// Pointer pressed at `(x, y)`.
    Down {
        x: f32,
        y: f32,
        is_primary: bool,
        /// True for the main (left/touch/pen) button.
        is_main_button: bool,
        modifiers: ModifierKeys,
    },
    /// Pointer moved to `x` while listeners are installed.
    Move {
        x: f32,
        is_primary: bool,
        /// Current state of the main button, from the platform's button
        /// bitmask. False here means the release event was missed.
        is_main_button_down: bool,
    },
    /// Pointer released at `x`.
    Up { x: f32, is_primary: bool },
}

/// Side effects requested by a transition, applied by the caller in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Replace the preview selection in the store.
    Publish(PreviewSelection),
    /// Permanently commit a range (bounds are origin-relative).
    Commit { start: f64, end: f64 },
    /// Register global move/release listeners for the current gesture.
    InstallListeners,
    /// Remove the global listeners. A no-op if none are installed.
    UninstallListeners,
    /// Stop the triggering event from reaching downstream click targets.
    StopPropagation,
}

/// Snapshot of external state a transition needs.
#[derive(Debug, Clone, Copy)]
pub struct GestureContext {
    /// Content rectangle of the timeline canvas.
    pub rect: ContentRect,
    /// The committed time range currently displayed.
    pub committed: TimeRange,
    /// The preview selection currently held by the store.
    pub existing: PreviewSelection,
}

/// Drag-local state, created on pointer-down and dropped when the gesture
/// ends. Never shared across gestures.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    /// Canvas rect captured at press time, used for the whole gesture.
    rect: ContentRect,
    /// Press X position in pixels.
    down_x: f32,
    /// Time value under the press position.
    down_time: f64,
    /// Latched once the drag threshold is crossed; stays set for the rest
    /// of the gesture.
    is_range_selecting: bool,
}

#[derive(Debug, Clone, Copy, Default)]
enum GestureState {
    #[default]
    Idle,
    Selecting(DragSession),
}

/// The range-selection gesture machine.
///
/// Owns the drag lifecycle (idle -> selecting -> idle) and nothing else;
/// selection state lives in the store and listener registration is the
/// caller's job, driven by the returned commands.
#[derive(Debug, Default)]
pub struct SelectionGesture {
    state: GestureState,
}

impl SelectionGesture {
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
        }
    }

    /// Returns true if a drag session is in progress.
    pub fn is_selecting(&self) -> bool {
        matches!(self.state, GestureState::Selecting(_))
    }

    /// Returns true if the in-progress session has crossed the drag
    /// threshold and is publishing selections.
    pub fn is_range_selecting(&self) -> bool {
        matches!(
            self.state,
            GestureState::Selecting(DragSession {
                is_range_selecting: true,
                ..
            })
        )
    }

    /// Forcibly abandons any in-progress session.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Feeds one pointer event through the machine and returns the side
    /// effects to apply.
    pub fn handle_event(&mut self, event: PointerEvent, ctx: GestureContext) -> Vec<Command> {
        match event {
            PointerEvent::Down {
                x,
                y,
                is_primary,
                is_main_button,
                modifiers,
            } => self.on_down(x, y, is_primary, is_main_button, modifiers, ctx),
            PointerEvent::Move {
                x,
                is_primary,
                is_main_button_down,
            } => self.on_move(x, is_primary, is_main_button_down, ctx),
            PointerEvent::Up { x, is_primary } => self.on_up(x, is_primary, ctx),
        }
    }

    fn on_down(
        &mut self,
        x: f32,
        y: f32,
        is_primary: bool,
        is_main_button: bool,
        modifiers: ModifierKeys,
        ctx: GestureContext,
    ) -> Vec<Command> {
        let mut commands = Vec::new();

        // Only an unmodified main-button press of the primary contact inside
        // the canvas starts a session; everything else is silently ignored.
        if !is_primary || !is_main_button || modifiers.any() {
            return commands;
        }
        if !ctx.rect.contains(x, y) {
            return commands;
        }

        // Re-entrancy guard: a prior session that never saw its release
        // (e.g. focus loss mid-drag) still holds listeners. Tear them down
        // before starting over.
        if self.is_selecting() {
            commands.push(Command::UninstallListeners);
        }

        let down_time = pixel_to_time(x, ctx.rect, ctx.committed);
        self.state = GestureState::Selecting(DragSession {
            rect: ctx.rect,
            down_x: x,
            down_time,
            is_range_selecting: false,
        });
        commands.push(Command::InstallListeners);
        commands
    }

    fn on_move(
        &mut self,
        x: f32,
        is_primary: bool,
        is_main_button_down: bool,
        ctx: GestureContext,
    ) -> Vec<Command> {
        let GestureState::Selecting(mut session) = self.state else {
            return Vec::new();
        };
        if !is_primary {
            return Vec::new();
        }

        let mut commands = Vec::new();

        // Missed-release recovery: some platforms drop the release event in
        // certain modifier-key contexts. If the button bitmask says the main
        // button is up while our listeners are still installed, treat this
        // move as the release. Finalizes from the preview currently in the
        // store rather than recomputing bounds from this move's position.
        if !is_main_button_down {
            if let PreviewSelection::Active { start, end, .. } = ctx.existing {
                commands.push(Command::Publish(PreviewSelection::Active {
                    start,
                    end,
                    is_modifying: false,
                }));
            }
            commands.push(Command::UninstallListeners);
            self.state = GestureState::Idle;
            return commands;
        }

        // Below the threshold the gesture is still a potential click and
        // nothing is published.
        if !session.is_range_selecting && (x - session.down_x).abs() < DRAG_THRESHOLD_PX {
            return commands;
        }
        session.is_range_selecting = true;

        let current = pixel_to_time(x, session.rect, ctx.committed);
        let (start, end) = ordered_bounds(session.down_time, current, ctx.committed);
        commands.push(Command::Publish(PreviewSelection::Active {
            start,
            end,
            is_modifying: true,
        }));

        self.state = GestureState::Selecting(session);
        commands
    }

    fn on_up(&mut self, x: f32, is_primary: bool, ctx: GestureContext) -> Vec<Command> {
        let GestureState::Selecting(session) = self.state else {
            return Vec::new();
        };
        if !is_primary {
            return Vec::new();
        }

        let mut commands = Vec::new();

        if session.is_range_selecting {
            // Drag recognized: finalize and keep the release away from
            // downstream click targets.
            let current = pixel_to_time(x, session.rect, ctx.committed);
            let (start, end) = ordered_bounds(session.down_time, current, ctx.committed);
            commands.push(Command::Publish(PreviewSelection::Active {
                start,
                end,
                is_modifying: false,
            }));
            commands.push(Command::StopPropagation);
        } else {
            // Plain click. Clicking outside an existing selection clears it;
            // clicking inside it (or with nothing selected) lets the click
            // propagate untouched.
            let click_time = pixel_to_time(x, session.rect, ctx.committed);
            if let PreviewSelection::Active { start, end, .. } = ctx.existing {
                if click_time < start || click_time >= end {
                    commands.push(Command::Publish(PreviewSelection::None));
                    commands.push(Command::StopPropagation);
                }
            }
        }

        commands.push(Command::UninstallListeners);
        self.state = GestureState::Idle;
        commands
    }
}

/// Orders two time values and clamps both into the committed range.
fn ordered_bounds(a: f64, b: f64, committed: TimeRange) -> (f64, f64) {
    let start = committed.clamp(a.min(b));
    let end = committed.clamp(a.max(b));
    (start, end)
}

/// Commits the current preview selection as the new committed range.
///
/// Both bounds are shifted by the shared time origin `zero_at` before the
/// commit, and the triggering click is suppressed so it is not also
/// interpreted as a canvas click.
pub fn commit_preview(existing: PreviewSelection, zero_at: f64) -> Vec<Command> {
    match existing {
        PreviewSelection::Active { start, end, .. } => vec![
            Command::Commit {
                start: start - zero_at,
                end: end - zero_at,
            },
            Command::StopPropagation,
        ],
        PreviewSelection::None => Vec::new(),
    }
}
