//! Content and rotation logic for the About section's slide presenter.

/// Which glyph a slide's tab shows. Mapped to an SVG at the component layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideIcon {
    Code,
    Sparkles,
    Users,
    Lightbulb,
}

/// A run of slide body text, plain or rendered as a highlight chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    Plain(&'static str),
    /// Cyan chip, used for tools and craft words.
    Accent(&'static str),
    /// Emerald chip, used for people and values words.
    Strong(&'static str),
}

pub struct Slide {
    pub label: &'static str,
    pub icon: SlideIcon,
    pub body: &'static [Fragment],
    pub motto: [&'static str; 3],
    /// Gradient classes for the accent panel.
    pub panel: &'static str,
}

/// Milliseconds between automatic slide advances.
pub const ROTATION_INTERVAL_MS: u64 = 2000;

pub const SLIDES: &[Slide] = &[
    Slide {
        label: "Developer Journey",
        icon: SlideIcon::Code,
        body: &[
            Fragment::Plain(
                "My passion for technology started early, evolving from curiosity into a drive to ",
            ),
            Fragment::Accent("build"),
            Fragment::Plain(" and "),
            Fragment::Accent("create"),
            Fragment::Plain(
                ". From coding my first website to architecting scalable systems, I thrive on solving real-world problems and bringing ideas to life through ",
            ),
            Fragment::Strong("full-stack development"),
            Fragment::Plain("."),
        ],
        motto: ["BUILD,", "SOLVE,", "GROW."],
        panel: "bg-gradient-to-br from-[#7b2ff2] via-[#f357a8] to-[#5f5fdc]",
    },
    Slide {
        label: "Tech Stack & Skills",
        icon: SlideIcon::Sparkles,
        body: &[
            Fragment::Plain("I specialize in "),
            Fragment::Accent("React"),
            Fragment::Plain(", "),
            Fragment::Accent("Node.js"),
            Fragment::Plain(", "),
            Fragment::Accent("TypeScript"),
            Fragment::Plain(", and "),
            Fragment::Accent("Python"),
            Fragment::Plain(
                ". My toolkit includes cloud platforms, databases, and modern frameworks, enabling me to deliver ",
            ),
            Fragment::Strong("robust"),
            Fragment::Plain(" and "),
            Fragment::Strong("scalable"),
            Fragment::Plain(" solutions."),
        ],
        motto: ["CODE,", "DEPLOY,", "OPTIMIZE."],
        panel: "bg-gradient-to-br from-[#43cea2] via-[#185a9d] to-[#43cea2]",
    },
    Slide {
        label: "Leadership & Impact",
        icon: SlideIcon::Users,
        body: &[
            Fragment::Plain("As a "),
            Fragment::Accent("student leader"),
            Fragment::Plain(
                " and collaborator, I've led tech clubs, organized hackathons, and mentored peers. I believe in ",
            ),
            Fragment::Strong("teamwork"),
            Fragment::Plain(" and "),
            Fragment::Strong("community"),
            Fragment::Plain(" to drive innovation and growth."),
        ],
        motto: ["LEAD,", "INSPIRE,", "CONNECT."],
        panel: "bg-gradient-to-br from-[#f7971e] via-[#ffd200] to-[#f7971e]",
    },
    Slide {
        label: "Vision & Values",
        icon: SlideIcon::Lightbulb,
        body: &[
            Fragment::Plain("I value "),
            Fragment::Accent("curiosity"),
            Fragment::Plain(", "),
            Fragment::Accent("integrity"),
            Fragment::Plain(", and "),
            Fragment::Accent("resilience"),
            Fragment::Plain(
                ". My vision is to leverage technology for positive change, building solutions that are ",
            ),
            Fragment::Strong("inclusive"),
            Fragment::Plain(" and "),
            Fragment::Strong("impactful"),
            Fragment::Plain("."),
        ],
        motto: ["DREAM,", "INNOVATE,", "IMPACT."],
        panel: "bg-gradient-to-br from-[#ff5858] via-[#f09819] to-[#ff5858]",
    },
];

/// Next slide index, wrapping past the end. `count` must be nonzero.
pub fn advance(index: usize, count: usize) -> usize {
    (index + 1) % count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_visits_every_slide_in_order() {
        let count = SLIDES.len();
        let mut index = 0;
        let mut seen = Vec::new();
        for _ in 0..count {
            seen.push(index);
            index = advance(index, count);
        }
        assert_eq!(seen, vec![0, 1, 2, 3]);
        // a full cycle returns to the start
        assert_eq!(index, 0);
    }

    #[test]
    fn test_rotation_wraps_from_any_start() {
        let count = SLIDES.len();
        assert_eq!(advance(count - 1, count), 0);
        assert_eq!(advance(1, count), 2);
    }

    #[test]
    fn test_single_slide_never_moves() {
        assert_eq!(advance(0, 1), 0);
    }

    #[test]
    fn test_slides_are_well_formed() {
        assert_eq!(SLIDES.len(), 4);
        for slide in SLIDES {
            assert!(!slide.label.is_empty());
            assert!(!slide.body.is_empty());
            assert!(slide.motto.iter().all(|line| !line.is_empty()));
            assert!(slide.panel.contains("bg-gradient-to-br"));
        }
    }

    #[test]
    fn test_slide_labels_are_unique() {
        for (i, a) in SLIDES.iter().enumerate() {
            for b in &SLIDES[i + 1..] {
                assert_ne!(a.label, b.label);
            }
        }
    }
}
