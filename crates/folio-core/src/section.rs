//! Page sections and the geometry the scroll-spy reads from them.

use crate::error::FolioError;
use std::fmt;
use std::str::FromStr;

pub const SECTION_COUNT: usize = 6;

/// One navigable section of the page, in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Hero,
    About,
    Education,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    /// Every section in document order.
    pub const ALL: [SectionId; SECTION_COUNT] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Education,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// DOM element id of the section.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Education => "education",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Nav label shown for the section.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Education => "Education",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| FolioError::UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a section relative to the viewport top, in CSS px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    #[inline]
    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }

    /// True when the horizontal line at `y` lies within the rect (inclusive).
    #[inline]
    pub fn straddles(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }

    /// Height of the part of the rect inside `[0, viewport_height]`.
    #[inline]
    pub fn visible_height(&self, viewport_height: f64) -> f64 {
        let top = self.top.max(0.0);
        let bottom = self.bottom.min(viewport_height);
        (bottom - top).max(0.0)
    }
}

/// Live geometry source. Implemented over the DOM by the web front-end and by
/// fakes in tests. Values are read fresh on every call.
pub trait ViewportProbe {
    /// Vertical scroll offset of the document.
    fn scroll_y(&self) -> f64;
    fn viewport_width(&self) -> f64;
    fn viewport_height(&self) -> f64;
    /// Current rect of the section, or `None` while its element is not mounted.
    fn section_rect(&self, id: SectionId) -> Option<SectionRect>;
    /// Rendered height of the fixed header right now.
    fn header_height(&self) -> f64;
}
