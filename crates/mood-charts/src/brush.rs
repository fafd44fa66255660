//! Brush selection over the context panel.
//!
//! Pure state machine over timestamps; the view layer converts pointer
//! positions to times before calling in. The focus panel's x-domain is
//! wholly derived from this: the selected span when a brush is held, the
//! full context domain otherwise.

/// Current phase of the brush interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushState {
    /// No selection. The focus chart shows everything.
    Idle,
    /// Pointer is down and moving.
    Dragging { anchor: i64, current: i64 },
    /// Pointer released over a non-empty span.
    Held { start: i64, end: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    state: BrushState,
}

impl Brush {
    pub fn new() -> Self {
        Self { state: BrushState::Idle }
    }

    pub fn state(&self) -> BrushState {
        self.state
    }

    pub fn is_empty(&self) -> bool {
        self.selection().is_none()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, BrushState::Dragging { .. })
    }

    /// The ordered selected span, if any.
    pub fn selection(&self) -> Option<(i64, i64)> {
        match self.state {
            BrushState::Idle => None,
            BrushState::Dragging { anchor, current } => {
                if anchor == current {
                    None
                } else {
                    Some((anchor.min(current), anchor.max(current)))
                }
            }
            BrushState::Held { start, end } => Some((start, end)),
        }
    }

    pub fn begin(&mut self, at: i64) {
        self.state = BrushState::Dragging { anchor: at, current: at };
    }

    pub fn drag_to(&mut self, at: i64) {
        if let BrushState::Dragging { anchor, .. } = self.state {
            self.state = BrushState::Dragging { anchor, current: at };
        }
    }

    /// End the drag. A zero-width drag counts as a click and clears.
    pub fn finish(&mut self) {
        self.state = match self.selection() {
            Some((start, end)) => BrushState::Held { start, end },
            None => BrushState::Idle,
        };
    }

    /// The focus x-domain implied by this brush.
    pub fn focus_domain(&self, context_domain: (i64, i64)) -> (i64, i64) {
        self.selection().unwrap_or(context_domain)
    }

    /// Reconcile a held selection with a changed context domain.
    ///
    /// Adding or removing a line can shift the overall date range, leaving
    /// the selection partially or entirely outside it. Entirely outside
    /// clears the brush; an overhanging edge is pulled back to the domain
    /// boundary.
    pub fn retarget(&mut self, context_domain: (i64, i64)) {
        let (d_min, d_max) = context_domain;
        let Some((start, end)) = self.selection() else {
            return;
        };

        if start > d_max || end < d_min {
            self.state = BrushState::Idle;
        } else if start < d_min || end > d_max {
            self.state = BrushState::Held {
                start: start.max(d_min),
                end: end.min(d_max),
            };
        }
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: (i64, i64) = (1_000, 9_000);

    fn held(start: i64, end: i64) -> Brush {
        let mut brush = Brush::new();
        brush.begin(start);
        brush.drag_to(end);
        brush.finish();
        brush
    }

    #[test]
    fn empty_brush_shows_full_domain() {
        let brush = Brush::new();
        assert!(brush.is_empty());
        assert_eq!(brush.focus_domain(DOMAIN), DOMAIN);
    }

    #[test]
    fn drag_selects_and_narrows_focus() {
        let mut brush = Brush::new();
        brush.begin(3_000);
        brush.drag_to(6_000);
        assert_eq!(brush.selection(), Some((3_000, 6_000)));

        brush.finish();
        assert_eq!(brush.state(), BrushState::Held { start: 3_000, end: 6_000 });
        assert_eq!(brush.focus_domain(DOMAIN), (3_000, 6_000));
    }

    #[test]
    fn backwards_drag_normalizes() {
        let brush = held(6_000, 3_000);
        assert_eq!(brush.selection(), Some((3_000, 6_000)));
    }

    #[test]
    fn click_without_drag_clears() {
        let mut brush = held(3_000, 6_000);
        brush.begin(4_000);
        brush.finish();
        assert!(brush.is_empty());
        assert_eq!(brush.focus_domain(DOMAIN), DOMAIN);
    }

    #[test]
    fn retarget_clamps_right_overhang() {
        let mut brush = held(5_000, 12_000);
        brush.retarget(DOMAIN);
        assert_eq!(brush.selection(), Some((5_000, 9_000)));
    }

    #[test]
    fn retarget_clamps_left_overhang() {
        let mut brush = held(-2_000, 4_000);
        brush.retarget(DOMAIN);
        assert_eq!(brush.selection(), Some((1_000, 4_000)));
    }

    #[test]
    fn retarget_keeps_an_interior_selection() {
        let mut brush = held(3_000, 6_000);
        brush.retarget(DOMAIN);
        assert_eq!(brush.selection(), Some((3_000, 6_000)));

        // The domain growing around the selection changes nothing either.
        brush.retarget((0, 20_000));
        assert_eq!(brush.selection(), Some((3_000, 6_000)));
        assert_eq!(brush.state(), BrushState::Held { start: 3_000, end: 6_000 });
    }

    #[test]
    fn retarget_clears_fully_external_selection() {
        let mut brush = held(10_000, 14_000);
        brush.retarget(DOMAIN);
        assert!(brush.is_empty());

        let mut brush = held(-5_000, -1_000);
        brush.retarget(DOMAIN);
        assert!(brush.is_empty());
    }

    #[test]
    fn focus_domain_stays_inside_context() {
        let mut brush = held(2_000, 20_000);
        brush.retarget(DOMAIN);
        let (f0, f1) = brush.focus_domain(DOMAIN);
        assert!(f0 >= DOMAIN.0 && f1 <= DOMAIN.1);
    }
}
