use std::fmt;

use crate::domain::slide::Slide;

/// A structural problem in the slide content.
/// Defects are reported to the viewer, never corrected: the deck still renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideDefect {
    /// The deck has no slides at all
    EmptyDeck,
    /// 1-based slide position with an empty title
    MissingTitle(usize),
    /// 1-based slide position with no bullets
    MissingContent(usize),
    /// 1-based slide position without an icon
    MissingIcon(usize),
}

impl fmt::Display for SlideDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideDefect::EmptyDeck => write!(f, "slides vacío o inválido"),
            SlideDefect::MissingTitle(n) => write!(f, "Slide {} sin título", n),
            SlideDefect::MissingContent(n) => write!(f, "Slide {} sin contenido", n),
            SlideDefect::MissingIcon(n) => write!(f, "Slide {} sin icono", n),
        }
    }
}

/// Scans the slides in order and lists every violated invariant.
/// Within one slide the order is title, content, icon.
pub fn find_defects(slides: &[Slide]) -> Vec<SlideDefect> {
    let mut defects = Vec::new();
    if slides.is_empty() {
        defects.push(SlideDefect::EmptyDeck);
    }

    for (i, slide) in slides.iter().enumerate() {
        let position = i + 1;
        if slide.title.is_empty() {
            defects.push(SlideDefect::MissingTitle(position));
        }
        if slide.content.is_empty() {
            defects.push(SlideDefect::MissingContent(position));
        }
        if slide.icon.is_none() {
            defects.push(SlideDefect::MissingIcon(position));
        }
    }
    defects
}

/// Human-readable defect messages; empty when the slides are complete.
pub fn validate_slides(slides: &[Slide]) -> Vec<String> {
    find_defects(slides)
        .iter()
        .map(|defect| defect.to_string())
        .collect()
}
