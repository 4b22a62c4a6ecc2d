//! Section registry and scroll-position tracking for the single-page layout.
//!
//! Which section is active is a pure function of the scroll offset and the
//! anchor offsets a [`SectionMetrics`] provider reports, so the logic is
//! testable without a DOM.

/// A registered page section: the anchor element id and the menu label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Ordered registry shared by the page layout and the navigation menu.
///
/// The layout renders one anchor per entry, in this order, and the tracker
/// scans the same list. Adding a section means adding it here.
pub const SECTIONS: &[Section] = &[
    Section { id: "about", label: "About" },
    Section { id: "education", label: "Education" },
    Section { id: "skills", label: "Developer Arsenal" },
    Section { id: "projects", label: "Projects" },
    Section { id: "experience", label: "Experience" },
    Section { id: "contact", label: "Contact" },
];

/// Pixels of lead-in added to the raw scroll offset before matching, so a
/// section lights up slightly before its anchor reaches the viewport top.
pub const SCROLL_LEAD_IN: f64 = 100.0;

/// Where section anchors currently sit in the document.
///
/// Implemented over the live DOM in the browser and over fixed tables in
/// tests. `None` means the anchor is not rendered; the resolver skips it.
pub trait SectionMetrics {
    fn anchor_top(&self, id: &str) -> Option<f64>;
}

/// Resolves the active section for a scroll offset.
///
/// Scans `sections` from last to first and returns the first entry whose
/// anchor top is at or above `scroll_y + SCROLL_LEAD_IN`. Returns `None` when
/// the offset sits above every anchor; callers keep their previous value.
pub fn resolve_active(
    metrics: &impl SectionMetrics,
    sections: &[Section],
    scroll_y: f64,
) -> Option<&'static str> {
    let probe = scroll_y + SCROLL_LEAD_IN;
    sections
        .iter()
        .rev()
        .find(|section| {
            metrics
                .anchor_top(section.id)
                .is_some_and(|top| top <= probe)
        })
        .map(|section| section.id)
}

/// Fallback stops for ids without a gradient entry of their own.
pub const DEFAULT_GRADIENT: &str = "from-purple-400 to-pink-400";

/// Tailwind gradient stops for the viewport-top indicator line.
pub fn section_gradient(id: &str) -> &'static str {
    match id {
        "about" => "from-purple-400 to-pink-400",
        "education" => "from-blue-400 to-cyan-400",
        "skills" => "from-orange-400 to-red-400",
        "projects" => "from-pink-400 to-purple-400",
        "experience" => "from-indigo-400 to-purple-400",
        "contact" => "from-yellow-400 to-yellow-600",
        "resume" => "from-purple-400 to-pink-400",
        _ => DEFAULT_GRADIENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedAnchors(HashMap<&'static str, f64>);

    impl SectionMetrics for FixedAnchors {
        fn anchor_top(&self, id: &str) -> Option<f64> {
            self.0.get(id).copied()
        }
    }

    fn three_sections() -> (&'static [Section], FixedAnchors) {
        const THREE: &[Section] = &[
            Section { id: "about", label: "About" },
            Section { id: "education", label: "Education" },
            Section { id: "skills", label: "Skills" },
        ];
        let anchors = FixedAnchors(HashMap::from([
            ("about", 800.0),
            ("education", 1600.0),
            ("skills", 2400.0),
        ]));
        (THREE, anchors)
    }

    #[test]
    fn test_scroll_above_first_anchor_resolves_nothing() {
        let (sections, anchors) = three_sections();
        assert_eq!(resolve_active(&anchors, sections, 0.0), None);
        assert_eq!(resolve_active(&anchors, sections, 50.0), None);
    }

    #[test]
    fn test_lead_in_activates_section_early() {
        let (sections, anchors) = three_sections();
        // 750 + 100 reaches the anchor at 800
        assert_eq!(resolve_active(&anchors, sections, 750.0), Some("about"));
        assert_eq!(resolve_active(&anchors, sections, 699.0), None);
    }

    #[test]
    fn test_last_matching_section_wins() {
        let (sections, anchors) = three_sections();
        assert_eq!(
            resolve_active(&anchors, sections, 1550.0),
            Some("education")
        );
        assert_eq!(resolve_active(&anchors, sections, 2399.0), Some("skills"));
        assert_eq!(resolve_active(&anchors, sections, 99_999.0), Some("skills"));
    }

    #[test]
    fn test_anchor_boundary_is_inclusive() {
        let (sections, anchors) = three_sections();
        assert_eq!(resolve_active(&anchors, sections, 700.0), Some("about"));
        assert_eq!(
            resolve_active(&anchors, sections, 1500.0),
            Some("education")
        );
    }

    #[test]
    fn test_missing_anchor_is_skipped() {
        let (sections, _) = three_sections();
        let anchors = FixedAnchors(HashMap::from([("about", 800.0), ("skills", 2400.0)]));
        // education has no anchor, so its range falls through to about
        assert_eq!(resolve_active(&anchors, sections, 1550.0), Some("about"));
        assert_eq!(resolve_active(&anchors, sections, 2400.0), Some("skills"));
    }

    #[test]
    fn test_no_anchors_resolves_nothing() {
        let (sections, _) = three_sections();
        let anchors = FixedAnchors(HashMap::new());
        assert_eq!(resolve_active(&anchors, sections, 5_000.0), None);
    }

    #[test]
    fn test_registry_ids_are_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            for b in &SECTIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_every_registered_section_has_gradient_stops() {
        for section in SECTIONS {
            assert!(section_gradient(section.id).starts_with("from-"));
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_default_gradient() {
        assert_eq!(section_gradient("guestbook"), DEFAULT_GRADIENT);
    }
}
