//! Scroll-driven presentation: the navbar background switch and the stacked
//! project cards.

/// Past this many pixels the navbar gets a solid background.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Sticky offset between consecutive stacked cards.
pub const CARD_OFFSET_PX: f64 = 28.0;

const CARD_SCALE_STEP: f64 = 0.05;
const CARD_DIM_STEP: f64 = 0.08;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// How far the viewport has travelled through a section, in `[0, 1]`.
///
/// `top` is the section's bounding-rect top relative to the viewport. Progress
/// is 0 while the section's top is below the viewport top and 1 once its
/// bottom reaches the viewport bottom.
pub fn scroll_progress(top: f64, height: f64, viewport: f64) -> f64 {
    let travel = height - viewport;
    if !travel.is_finite() || travel <= 0.0 {
        return if top <= 0.0 { 1.0 } else { 0.0 };
    }
    (-top / travel).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFrame {
    pub scale: f64,
    pub offset_px: f64,
    pub brightness: f64,
}

impl CardFrame {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset_px: 0.0,
        brightness: 1.0,
    };

    pub fn style(&self) -> String {
        format!(
            "top: calc(6rem + {:.0}px); transform: scale({:.4}); filter: brightness({:.3}); transform-origin: top center",
            self.offset_px, self.scale, self.brightness
        )
    }
}

/// Frame for card `index` of `count` at the given section progress.
///
/// Each card owns an equal slice of the progress range. Once the scroll moves
/// past the start of its slice it shrinks towards a resting scale that gets
/// smaller the deeper the card sits in the stack, so later cards appear
/// stacked on top of earlier ones.
pub fn card_frame(index: usize, count: usize, progress: f64) -> CardFrame {
    if count == 0 || index >= count {
        return CardFrame::IDENTITY;
    }
    let depth = (count - 1 - index) as f64;
    let rest_scale = 1.0 - depth * CARD_SCALE_STEP;
    let rest_brightness = 1.0 - depth * CARD_DIM_STEP;

    let slice = 1.0 / count as f64;
    let local = ((progress.clamp(0.0, 1.0) - index as f64 * slice) / slice).clamp(0.0, 1.0);

    CardFrame {
        scale: 1.0 - local * (1.0 - rest_scale),
        offset_px: index as f64 * CARD_OFFSET_PX,
        brightness: 1.0 - local * (1.0 - rest_brightness),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_is_scrolled() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn test_scroll_progress() {
        // section 3000px tall, viewport 1000px: 2000px of travel
        assert_eq!(scroll_progress(200.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert!(close(scroll_progress(-500.0, 3000.0, 1000.0), 0.25));
        assert_eq!(scroll_progress(-2500.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn test_scroll_progress_short_section() {
        assert_eq!(scroll_progress(100.0, 400.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(-1.0, 400.0, 1000.0), 1.0);
    }

    #[test]
    fn test_card_frames_before_scroll() {
        for i in 0..3 {
            let frame = card_frame(i, 3, 0.0);
            // first card starts shrinking at 0 but hasn't moved yet
            assert!(close(frame.scale, 1.0));
            assert!(close(frame.offset_px, i as f64 * CARD_OFFSET_PX));
        }
    }

    #[test]
    fn test_card_frames_at_rest() {
        let frames = (0..3).map(|i| card_frame(i, 3, 1.0)).collect::<Vec<_>>();
        assert!(close(frames[0].scale, 0.90));
        assert!(close(frames[1].scale, 0.95));
        assert!(close(frames[2].scale, 1.0));
        assert!(frames[0].brightness < frames[1].brightness);
        assert!(close(frames[2].brightness, 1.0));
    }

    #[test]
    fn test_card_frame_midway() {
        // card 0 of 2 owns [0, 0.5]; halfway through its slice
        let frame = card_frame(0, 2, 0.25);
        assert!(close(frame.scale, 0.975));
        // card 1 hasn't started
        assert!(close(card_frame(1, 2, 0.25).scale, 1.0));
    }

    #[test]
    fn test_card_frame_out_of_range() {
        assert_eq!(card_frame(0, 0, 0.5), CardFrame::IDENTITY);
        assert_eq!(card_frame(4, 2, 0.5), CardFrame::IDENTITY);
        assert_eq!(card_frame(0, 1, 7.0).scale, 1.0);
    }
}
