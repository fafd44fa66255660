//! Stacked focus/context layout geometry.
//!
//! The top, main chart is the `focus`; the bottom, brush chart is the
//! `context`. Both share one outer SVG and one left axis gutter.

/// Chart margin configuration
#[derive(Debug, Clone, Copy)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::new(10.0, 10.0, 20.0, 30.0)
    }
}

/// The full layout of the stacked pair, derived from the outer size and
/// margins. The focus panel reserves 100px below itself for the context
/// panel and the gap between them.
#[derive(Debug, Clone, Copy)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

/// Vertical space under the focus panel holding the gap, the context panel
/// and the bottom axis.
const FOCUS_RESERVED_BELOW: f64 = 100.0;
/// Gap between the bottom of the focus panel and the top of the context.
const PANEL_GAP: f64 = 40.0;

impl ChartLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin::default(),
        }
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Width of either plotting area, excluding the axis gutters.
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    pub fn focus_height(&self) -> f64 {
        (self.height - self.margin.top - FOCUS_RESERVED_BELOW).max(0.0)
    }

    /// Distance from the top of the SVG to the top of the context panel.
    pub fn context_top(&self) -> f64 {
        self.focus_height() + PANEL_GAP
    }

    pub fn context_height(&self) -> f64 {
        (self.height - self.context_top() - self.margin.bottom).max(0.0)
    }

    pub fn focus_transform(&self) -> String {
        format!("translate({},{})", self.margin.left, self.margin.top)
    }

    pub fn context_transform(&self) -> String {
        format!("translate({},{})", self.margin.left, self.context_top())
    }

    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::new(960.0, 350.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_expected_geometry() {
        let layout = ChartLayout::default();

        assert_eq!(layout.inner_width(), 920.0);
        assert_eq!(layout.focus_height(), 240.0);
        assert_eq!(layout.context_top(), 280.0);
        assert_eq!(layout.context_height(), 50.0);
    }

    #[test]
    fn panels_never_overlap() {
        let layout = ChartLayout::new(600.0, 300.0);
        assert!(layout.context_top() >= layout.focus_height());
        assert!(layout.context_top() + layout.context_height() <= layout.height);
    }

    #[test]
    fn degenerate_sizes_clamp_to_zero() {
        let layout = ChartLayout::new(10.0, 20.0);
        assert!(layout.inner_width() >= 0.0);
        assert!(layout.focus_height() >= 0.0);
        assert!(layout.context_height() >= 0.0);
    }
}
