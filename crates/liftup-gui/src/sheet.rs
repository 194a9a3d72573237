//! Bottom-sheet presentation state machine.
//!
//! Models the sheet's slide-in/slide-out lifecycle independently of
//! rendering. The app feeds it visibility toggles, drag input and
//! clock ticks; it exposes a (state, offset) pair to draw from.
//! Offset 0 is the resting position; `travel` is fully offscreen.
//!
//! Dismissal (drag past the threshold, backdrop press, close button)
//! reports `SheetEvent::Dismissed` exactly once when the outgoing
//! slide completes. An owner-driven hide plays the same slide but
//! reports nothing.

use std::time::{Duration, Instant};

/// Slide duration for enter, snap-back and dismiss.
pub const SLIDE_DURATION: Duration = Duration::from_millis(300);

/// Drag displacement beyond which a released drag dismisses the sheet.
pub const DISMISS_THRESHOLD: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetState {
    Hidden,
    Entering,
    Visible,
    Dragging,
    Dismissing,
}

/// Emitted by `tick` when a dismiss sequence completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetEvent {
    Dismissed,
}

/// A linear slide from one offset to another.
#[derive(Debug, Clone, Copy)]
struct Slide {
    from: f32,
    to: f32,
    started: Instant,
}

impl Slide {
    fn offset_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= SLIDE_DURATION {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / SLIDE_DURATION.as_secs_f32();
        self.from + (self.to - self.from) * progress
    }

    fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= SLIDE_DURATION
    }
}

#[derive(Debug)]
pub struct Sheet {
    state: SheetState,
    offset: f32,
    travel: f32,
    slide: Option<Slide>,
    /// Whether the active outgoing slide is a dismissal (reports
    /// `Dismissed`) rather than an owner hide (reports nothing).
    notify_on_hidden: bool,
}

impl Sheet {
    /// A hidden sheet whose offscreen position is `travel` units below
    /// rest.
    pub fn new(travel: f32) -> Self {
        Self {
            state: SheetState::Hidden,
            offset: travel,
            travel,
            slide: None,
            notify_on_hidden: false,
        }
    }

    pub fn state(&self) -> SheetState {
        self.state
    }

    /// Current offset below the resting position.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }

    /// Owner visibility toggle. Rapid toggles coalesce: a new target
    /// overrides whatever slide is in flight, and overriding a
    /// dismissal cancels its pending callback.
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        self.settle(now);
        if visible {
            match self.state {
                SheetState::Hidden | SheetState::Dismissing => {
                    self.state = SheetState::Entering;
                    self.notify_on_hidden = false;
                    self.begin_slide(0.0, now);
                }
                SheetState::Entering | SheetState::Visible | SheetState::Dragging => {}
            }
        } else {
            match self.state {
                SheetState::Entering | SheetState::Visible | SheetState::Dragging => {
                    self.state = SheetState::Dismissing;
                    self.notify_on_hidden = false;
                    self.begin_slide(self.travel, now);
                }
                SheetState::Hidden | SheetState::Dismissing => {}
            }
        }
    }

    /// Track an active drag: offset follows positive (downward)
    /// displacement 1:1; upward displacement clamps at rest. A drag
    /// during the entering slide takes over from the animation;
    /// anything else is ignored.
    pub fn drag_to(&mut self, displacement: f32) {
        match self.state {
            SheetState::Entering | SheetState::Visible | SheetState::Dragging => {
                self.state = SheetState::Dragging;
                self.slide = None;
                self.offset = displacement.max(0.0);
            }
            _ => {}
        }
    }

    /// End the active drag: past the threshold the sheet dismisses,
    /// otherwise it snaps back to rest.
    pub fn end_drag(&mut self, now: Instant) {
        if self.state != SheetState::Dragging {
            return;
        }
        if self.offset > DISMISS_THRESHOLD {
            self.state = SheetState::Dismissing;
            self.notify_on_hidden = true;
            self.begin_slide(self.travel, now);
        } else {
            self.state = SheetState::Visible;
            self.begin_slide(0.0, now);
        }
    }

    /// Explicit close (backdrop press or close button). A close while
    /// still entering dismisses from the current offset. Ignored once
    /// a dismissal is already in flight, so the callback stays
    /// exactly-once.
    pub fn request_close(&mut self, now: Instant) {
        self.settle(now);
        match self.state {
            SheetState::Entering | SheetState::Visible | SheetState::Dragging => {
                self.state = SheetState::Dismissing;
                self.notify_on_hidden = true;
                self.begin_slide(self.travel, now);
            }
            SheetState::Hidden | SheetState::Dismissing => {}
        }
    }

    /// Advance the active slide. Returns `Some(Dismissed)` on the tick
    /// that completes a dismissal.
    pub fn tick(&mut self, now: Instant) -> Option<SheetEvent> {
        let slide = self.slide?;
        self.offset = slide.offset_at(now);
        if !slide.finished(now) {
            return None;
        }
        self.slide = None;
        match self.state {
            SheetState::Entering => {
                self.state = SheetState::Visible;
                None
            }
            SheetState::Dismissing => {
                self.state = SheetState::Hidden;
                if std::mem::take(&mut self.notify_on_hidden) {
                    Some(SheetEvent::Dismissed)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn begin_slide(&mut self, to: f32, now: Instant) {
        self.slide = Some(Slide {
            from: self.offset,
            to,
            started: now,
        });
    }

    /// Bring `offset` up to date mid-slide so transitions branch from
    /// the position the user actually sees.
    fn settle(&mut self, now: Instant) {
        if let Some(slide) = self.slide {
            self.offset = slide.offset_at(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRAVEL: f32 = 360.0;

    fn shown(t0: Instant) -> Sheet {
        let mut sheet = Sheet::new(TRAVEL);
        sheet.set_visible(true, t0);
        finish_slide(&mut sheet, t0);
        sheet
    }

    fn finish_slide(sheet: &mut Sheet, from: Instant) -> Option<SheetEvent> {
        sheet.tick(from + SLIDE_DURATION)
    }

    #[test]
    fn enters_to_rest_when_shown() {
        let t0 = Instant::now();
        let mut sheet = Sheet::new(TRAVEL);
        assert_eq!(sheet.state(), SheetState::Hidden);

        sheet.set_visible(true, t0);
        assert_eq!(sheet.state(), SheetState::Entering);

        sheet.tick(t0 + SLIDE_DURATION / 2);
        assert!(sheet.offset() > 0.0 && sheet.offset() < TRAVEL);

        assert_eq!(finish_slide(&mut sheet, t0), None);
        assert_eq!(sheet.state(), SheetState::Visible);
        assert_eq!(sheet.offset(), 0.0);
    }

    #[test]
    fn owner_hide_completes_without_a_dismissed_event() {
        let t0 = Instant::now();
        let mut sheet = shown(t0);

        let t1 = t0 + SLIDE_DURATION * 2;
        sheet.set_visible(false, t1);
        assert_eq!(sheet.state(), SheetState::Dismissing);
        assert_eq!(finish_slide(&mut sheet, t1), None);
        assert_eq!(sheet.state(), SheetState::Hidden);
        assert_eq!(sheet.offset(), TRAVEL);
    }

    #[test]
    fn drag_tracks_downward_and_clamps_upward() {
        let t0 = Instant::now();
        let mut sheet = shown(t0);

        sheet.drag_to(40.0);
        assert_eq!(sheet.state(), SheetState::Dragging);
        assert_eq!(sheet.offset(), 40.0);

        sheet.drag_to(-25.0);
        assert_eq!(sheet.offset(), 0.0);
    }

    #[test]
    fn drag_past_threshold_dismisses_exactly_once() {
        let t0 = Instant::now();
        let mut sheet = shown(t0);

        sheet.drag_to(101.0);
        let t1 = t0 + SLIDE_DURATION * 2;
        sheet.end_drag(t1);
        assert_eq!(sheet.state(), SheetState::Dismissing);

        assert_eq!(finish_slide(&mut sheet, t1), Some(SheetEvent::Dismissed));
        assert_eq!(sheet.state(), SheetState::Hidden);

        // Further ticks never repeat the event.
        assert_eq!(sheet.tick(t1 + SLIDE_DURATION * 2), None);
    }

    #[test]
    fn drag_at_or_below_threshold_snaps_back() {
        let t0 = Instant::now();
        for displacement in [99.0, 100.0] {
            let mut sheet = shown(t0);
            sheet.drag_to(displacement);
            let t1 = t0 + SLIDE_DURATION * 2;
            sheet.end_drag(t1);
            assert_eq!(sheet.state(), SheetState::Visible);

            assert_eq!(finish_slide(&mut sheet, t1), None);
            assert_eq!(sheet.state(), SheetState::Visible);
            assert_eq!(sheet.offset(), 0.0);
        }
    }

    #[test]
    fn explicit_close_dismisses_with_event() {
        let t0 = Instant::now();
        let mut sheet = shown(t0);

        let t1 = t0 + SLIDE_DURATION * 2;
        sheet.request_close(t1);
        assert_eq!(sheet.state(), SheetState::Dismissing);
        assert_eq!(finish_slide(&mut sheet, t1), Some(SheetEvent::Dismissed));
    }

    #[test]
    fn close_during_enter_dismisses_from_the_current_offset() {
        let t0 = Instant::now();
        let mut sheet = Sheet::new(TRAVEL);
        sheet.set_visible(true, t0);

        let halfway = t0 + SLIDE_DURATION / 2;
        sheet.request_close(halfway);
        assert_eq!(sheet.state(), SheetState::Dismissing);
        // Branches from mid-slide, not from rest.
        assert!(sheet.offset() > 0.0 && sheet.offset() < TRAVEL);

        assert_eq!(finish_slide(&mut sheet, halfway), Some(SheetEvent::Dismissed));
    }

    #[test]
    fn drag_during_enter_takes_over_and_can_dismiss() {
        let t0 = Instant::now();
        let mut sheet = Sheet::new(TRAVEL);
        sheet.set_visible(true, t0);
        sheet.tick(t0 + SLIDE_DURATION / 2);

        sheet.drag_to(120.0);
        assert_eq!(sheet.state(), SheetState::Dragging);
        assert_eq!(sheet.offset(), 120.0);
        assert!(!sheet.is_animating());

        let t1 = t0 + SLIDE_DURATION;
        sheet.end_drag(t1);
        assert_eq!(sheet.state(), SheetState::Dismissing);
        assert_eq!(finish_slide(&mut sheet, t1), Some(SheetEvent::Dismissed));
    }

    #[test]
    fn short_drag_during_enter_snaps_to_rest() {
        let t0 = Instant::now();
        let mut sheet = Sheet::new(TRAVEL);
        sheet.set_visible(true, t0);
        sheet.tick(t0 + SLIDE_DURATION / 2);

        sheet.drag_to(30.0);
        let t1 = t0 + SLIDE_DURATION;
        sheet.end_drag(t1);
        assert_eq!(sheet.state(), SheetState::Visible);
        assert_eq!(finish_slide(&mut sheet, t1), None);
        assert_eq!(sheet.offset(), 0.0);
    }

    #[test]
    fn rapid_toggles_coalesce_to_the_latest_target() {
        let t0 = Instant::now();
        let mut sheet = shown(t0);

        // Hide, then re-show before the slide completes.
        let t1 = t0 + SLIDE_DURATION * 2;
        sheet.set_visible(false, t1);
        let halfway = t1 + SLIDE_DURATION / 2;
        sheet.set_visible(true, halfway);
        assert_eq!(sheet.state(), SheetState::Entering);

        assert_eq!(finish_slide(&mut sheet, halfway), None);
        assert_eq!(sheet.state(), SheetState::Visible);
        assert_eq!(sheet.offset(), 0.0);
    }

    #[test]
    fn reshow_during_drag_dismissal_cancels_the_callback() {
        let t0 = Instant::now();
        let mut sheet = shown(t0);

        sheet.drag_to(200.0);
        let t1 = t0 + SLIDE_DURATION * 2;
        sheet.end_drag(t1);
        assert_eq!(sheet.state(), SheetState::Dismissing);

        // Owner flips visible back on mid-dismiss; the dismissal never
        // completes, so its callback must never fire.
        let halfway = t1 + SLIDE_DURATION / 2;
        sheet.set_visible(true, halfway);
        assert_eq!(sheet.state(), SheetState::Entering);
        assert_eq!(finish_slide(&mut sheet, halfway), None);
        assert_eq!(sheet.state(), SheetState::Visible);
    }

    #[test]
    fn close_while_already_dismissing_is_ignored() {
        let t0 = Instant::now();
        let mut sheet = shown(t0);

        let t1 = t0 + SLIDE_DURATION * 2;
        sheet.request_close(t1);
        sheet.request_close(t1 + SLIDE_DURATION / 4);

        assert_eq!(finish_slide(&mut sheet, t1), Some(SheetEvent::Dismissed));
        assert_eq!(sheet.tick(t1 + SLIDE_DURATION * 3), None);
    }
}
