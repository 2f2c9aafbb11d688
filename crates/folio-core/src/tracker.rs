//! Scroll-spy: which section owns the threshold line, and whether the page has
//! scrolled far enough to collapse the header.
//!
//! The tracker never touches the DOM itself. Geometry comes in through a
//! [`ViewportProbe`] and changes go out as a [`ViewportChange`] that the caller
//! applies to its header and nav.

use crate::constants::{
    MOBILE_BREAKPOINT_PX, SCROLLED_THRESHOLD_PX, SPY_THRESHOLD_DESKTOP_PX,
    SPY_THRESHOLD_MOBILE_PX,
};
use crate::error::Result;
use crate::section::{SectionId, ViewportProbe};

#[derive(Clone, Debug)]
pub struct TrackerConfig {
    pub threshold_desktop_px: f64,
    pub threshold_mobile_px: f64,
    pub mobile_breakpoint_px: f64,
    pub scrolled_threshold_px: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            threshold_desktop_px: SPY_THRESHOLD_DESKTOP_PX,
            threshold_mobile_px: SPY_THRESHOLD_MOBILE_PX,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            scrolled_threshold_px: SCROLLED_THRESHOLD_PX,
        }
    }
}

impl TrackerConfig {
    #[inline]
    pub fn is_mobile(&self, viewport_width: f64) -> bool {
        viewport_width < self.mobile_breakpoint_px
    }

    /// Threshold line offset from the viewport top for the given width.
    #[inline]
    pub fn threshold_for(&self, viewport_width: f64) -> f64 {
        if self.is_mobile(viewport_width) {
            self.threshold_mobile_px
        } else {
            self.threshold_desktop_px
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportState {
    pub scroll_y: f64,
    pub scrolled_past_threshold: bool,
    pub active_section: SectionId,
}

/// What changed on a scroll tick. Only produced when at least one field is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportChange {
    pub active_section: Option<SectionId>,
    pub scrolled: Option<bool>,
}

impl ViewportChange {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active_section.is_none() && self.scrolled.is_none()
    }
}

#[derive(Debug, Default)]
pub struct ViewportSectionTracker {
    config: TrackerConfig,
    state: ViewportState,
}

impl ViewportSectionTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            state: ViewportState::default(),
        }
    }

    #[inline]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    #[inline]
    pub fn active_section(&self) -> SectionId {
        self.state.active_section
    }

    #[inline]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Handle one scroll event.
    pub fn on_scroll(&mut self, probe: &impl ViewportProbe) -> Option<ViewportChange> {
        let scroll_y = probe.scroll_y();
        self.state.scroll_y = scroll_y;

        let mut change = ViewportChange::default();

        let scrolled = scroll_y > self.config.scrolled_threshold_px;
        if scrolled != self.state.scrolled_past_threshold {
            self.state.scrolled_past_threshold = scrolled;
            change.scrolled = Some(scrolled);
        }

        if let Some(found) = self.section_at_threshold(probe) {
            if found != self.state.active_section {
                log::debug!(
                    "[spy] active {} -> {} at scroll_y={:.0}",
                    self.state.active_section,
                    found,
                    scroll_y
                );
                self.state.active_section = found;
                change.active_section = Some(found);
            }
        }

        (!change.is_empty()).then_some(change)
    }

    /// First section in document order whose rect straddles the threshold line.
    /// Unmounted sections are skipped.
    pub fn section_at_threshold(&self, probe: &impl ViewportProbe) -> Option<SectionId> {
        let threshold = self.config.threshold_for(probe.viewport_width());
        SectionId::ALL.into_iter().find(|&id| {
            probe
                .section_rect(id)
                .is_some_and(|rect| rect.straddles(threshold))
        })
    }
}

/// Document scroll offset that puts the top of `id` just below the fixed
/// header, using the header's height as rendered right now.
pub fn scroll_target(probe: &impl ViewportProbe, id: SectionId) -> Option<f64> {
    let rect = probe.section_rect(id)?;
    Some(rect.top + probe.scroll_y() - probe.header_height())
}

/// String entry point used by nav buttons carrying a `data-section` id.
/// `Ok(None)` means the id is known but its element is not mounted.
pub fn scroll_to_section(probe: &impl ViewportProbe, id: &str) -> Result<Option<f64>> {
    let id: SectionId = id.parse()?;
    Ok(scroll_target(probe, id))
}
