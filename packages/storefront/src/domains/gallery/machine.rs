//! Image gallery state machine
//!
//! Pure decision logic - no IO, no timers. A transition returns the cosmetic
//! follow-up (if any) for the caller to schedule after the state commits;
//! replaying a transition without its effect leaves the machine in the same
//! state. The same machine drives both the compact card gallery and the wide
//! detail-page gallery.

/// Thumbnails shown per strip page.
pub const THUMB_PAGE: usize = 6;

/// Navigation input for one listing's image gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryEvent {
    /// Jump to a specific image (thumbnail click).
    Select(usize),
    Next,
    Prev,
    /// Enter the full-screen viewer at the current image.
    OpenViewer,
    /// Leave the full-screen viewer.
    CloseViewer,
}

/// Cosmetic follow-up the caller performs after a transition commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryEffect {
    /// Bring the active thumbnail into view (same strip page).
    ScrollThumbIntoView { index: usize },
    /// The active thumbnail crossed a page boundary; jump the strip.
    JumpThumbStrip { page: usize },
}

/// Gallery state for one listing view.
///
/// The browsing index is the single source of truth; the thumb page is
/// always derived from it, never the reverse. The full-screen viewer keeps
/// its own index while open and writes it back on close, so the strip lands
/// on the last-viewed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryMachine {
    image_count: usize,
    index: usize,
    viewer_index: Option<usize>,
}

impl GalleryMachine {
    pub fn new(image_count: usize) -> Self {
        Self {
            image_count,
            index: 0,
            viewer_index: None,
        }
    }

    pub fn image_count(&self) -> usize {
        self.image_count
    }

    /// Browsing (thumbnail strip) index.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_viewing(&self) -> bool {
        self.viewer_index.is_some()
    }

    /// Index shown on screen right now: the viewer's while it is open,
    /// the browsing index otherwise.
    pub fn current(&self) -> usize {
        self.viewer_index.unwrap_or(self.index)
    }

    /// Derived: which strip page the active thumbnail lives on.
    pub fn thumb_page(&self) -> usize {
        self.index / THUMB_PAGE
    }

    /// Process one event. Total over its domain: an empty gallery accepts
    /// no navigation, out-of-range selects wrap, nothing panics.
    pub fn apply(&mut self, event: GalleryEvent) -> Option<GalleryEffect> {
        if self.image_count == 0 {
            // Placeholder only - there is nothing to navigate or view.
            return None;
        }
        match event {
            GalleryEvent::Select(i) => self.jump_to(i % self.image_count),
            GalleryEvent::Next => self.step(true),
            GalleryEvent::Prev => self.step(false),
            GalleryEvent::OpenViewer => {
                if self.viewer_index.is_none() {
                    self.viewer_index = Some(self.index);
                }
                None
            }
            GalleryEvent::CloseViewer => match self.viewer_index.take() {
                Some(last_viewed) => self.set_browsing(last_viewed),
                None => None,
            },
        }
    }

    fn step(&mut self, forward: bool) -> Option<GalleryEffect> {
        let n = self.image_count;
        if n <= 1 {
            return None;
        }
        let advance = |i: usize| if forward { (i + 1) % n } else { (i + n - 1) % n };
        match self.viewer_index {
            Some(i) => {
                // The viewer diverges freely; the strip catches up on close.
                self.viewer_index = Some(advance(i));
                None
            }
            None => self.set_browsing(advance(self.index)),
        }
    }

    fn jump_to(&mut self, index: usize) -> Option<GalleryEffect> {
        if self.viewer_index.is_some() {
            self.viewer_index = Some(index);
            return None;
        }
        self.set_browsing(index)
    }

    fn set_browsing(&mut self, index: usize) -> Option<GalleryEffect> {
        let previous_page = self.thumb_page();
        self.index = index;
        let page = self.thumb_page();
        if page != previous_page {
            Some(GalleryEffect::JumpThumbStrip { page })
        } else {
            Some(GalleryEffect::ScrollThumbIntoView { index })
        }
    }
}
