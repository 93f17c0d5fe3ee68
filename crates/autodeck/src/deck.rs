use std::time::Duration;

use crate::sequencer::{Phase, PhaseEffect, PhaseSequence, Terminal};

pub const SLIDE_COUNT: usize = 9;
pub const FIRST_SLIDE: usize = 1;

/// Normalize a route parameter to a valid 1-based slide number.
/// Anything unparsable or out of range lands on the first slide.
pub fn resolve(param: &str) -> usize {
    match param.trim().parse::<usize>() {
        Ok(n) if (FIRST_SLIDE..=SLIDE_COUNT).contains(&n) => n,
        _ => FIRST_SLIDE,
    }
}

/// One entry per slide; the table is static and immutable.
pub struct SlideDescriptor {
    pub number: usize,
    pub title: &'static str,
    pub dark: bool,
    /// Gated slides hold their timeline until playback has started.
    pub gated: bool,
    pub script: PhaseSequence,
}

impl SlideDescriptor {
    /// Time from mount to auto-advance, `None` for the terminal slide.
    pub fn auto_advance_after(&self) -> Option<Duration> {
        match self.script.terminal {
            Terminal::Advance => Some(self.script.total_duration()),
            Terminal::Hold => None,
        }
    }
}

pub fn descriptor(slide: usize) -> &'static SlideDescriptor {
    let desc = &DECK[slide.clamp(FIRST_SLIDE, SLIDE_COUNT) - 1];
    debug_assert_eq!(desc.number, slide.clamp(FIRST_SLIDE, SLIDE_COUNT));
    desc
}

pub fn is_dark(slide: usize) -> bool {
    descriptor(slide).dark
}

// Phase timings are the deck's choreography contract: each slide's total is
// the sum of its entrance animations plus the scripted hold, and the advance
// deadline falls exactly at that total.

const TITLE: &[Phase] = &[
    Phase::new("typing", 1920), // 24 characters at 80 ms each
    Phase::new("settle", 1000),
    Phase::new("holding", 1000),
    Phase::new("fading-rest", 2500),
    Phase::new("fading-value", 1000),
    Phase::new("done", 1000),
];

const CREDO: &[Phase] = &[
    Phase::new("enter", 300),
    Phase::new("build", 6500),
    Phase::new("period-expand", 2500),
];

const MOSAIC: &[Phase] = &[
    Phase::new("enter", 300),
    Phase::new("mosaic", 1700),
    Phase::new("captions", 3500),
];

const CLOCK: &[Phase] = &[
    Phase::new("mosaic", 2000),
    Phase::new("morph", 1500),
    Phase::new("captions", 5500),
];

const BARS: &[Phase] = &[
    Phase::new("enter", 300),
    Phase::new("build", 6800),
    Phase::new("hold", 20700), // narration plays over the finished chart
];

const QUESTION: &[Phase] = &[
    Phase::new("lines", 6600),
    Phase::new("dot-expand", 2500),
];

const TICKER: &[Phase] = &[
    Phase::new("enter", 300),
    Phase::new("strips", 1000),
    Phase::new("waves", 6700),
];

const MARQUEE: &[Phase] = &[
    Phase::new("enter", 300),
    Phase::new("ticker", 10700),
    Phase::new("hold", 1000),
];

const VALUATION: &[Phase] = &[
    Phase::new("enter", 300),
    Phase::new("pills", 4200),
    Phase::new("chart", 2500),
    // Narration fades out once the chart has landed; the deck stays here.
    Phase::with_effect("epilogue", 3_600_000, PhaseEffect::FadeAudio),
];

const fn advancing(phases: &'static [Phase]) -> PhaseSequence {
    PhaseSequence {
        phases,
        terminal: Terminal::Advance,
    }
}

static DECK: [SlideDescriptor; SLIDE_COUNT] = [
    SlideDescriptor {
        number: 1,
        title: "The Value of a Volunteer",
        dark: false,
        gated: true,
        script: advancing(TITLE),
    },
    SlideDescriptor {
        number: 2,
        title: "Voluntary Service",
        dark: false,
        gated: false,
        script: advancing(CREDO),
    },
    SlideDescriptor {
        number: 3,
        title: "United by Purpose",
        dark: true,
        gated: false,
        script: advancing(MOSAIC),
    },
    SlideDescriptor {
        number: 4,
        title: "Acts of Service",
        dark: true,
        gated: false,
        script: advancing(CLOCK),
    },
    SlideDescriptor {
        number: 5,
        title: "Volunteers Over Time",
        dark: false,
        gated: false,
        script: advancing(BARS),
    },
    SlideDescriptor {
        number: 6,
        title: "How Might We",
        dark: false,
        gated: false,
        script: advancing(QUESTION),
    },
    SlideDescriptor {
        number: 7,
        title: "A Trillion-Dollar Support System",
        dark: true,
        gated: false,
        script: advancing(TICKER),
    },
    SlideDescriptor {
        number: 8,
        title: "The Question",
        dark: true,
        gated: false,
        script: advancing(MARQUEE),
    },
    SlideDescriptor {
        number: 9,
        title: "Volunteer Valuation",
        dark: true,
        gated: false,
        script: PhaseSequence {
            phases: VALUATION,
            terminal: Terminal::Hold,
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_accepts_in_range_numbers() {
        assert_eq!(resolve("1"), 1);
        assert_eq!(resolve("5"), 5);
        assert_eq!(resolve("9"), 9);
        assert_eq!(resolve(" 3 "), 3);
    }

    #[test]
    fn resolve_normalizes_bad_input_to_first_slide() {
        assert_eq!(resolve("0"), 1);
        assert_eq!(resolve("10"), 1);
        assert_eq!(resolve("abc"), 1);
        assert_eq!(resolve(""), 1);
        assert_eq!(resolve("-2"), 1);
        assert_eq!(resolve("4.5"), 1);
    }

    #[test]
    fn every_resolved_route_is_in_range() {
        for param in ["0", "1", "9", "10", "99999999999999999999", "x", ""] {
            let n = resolve(param);
            assert!((FIRST_SLIDE..=SLIDE_COUNT).contains(&n));
        }
    }

    #[test]
    fn only_the_first_slide_is_gated() {
        for n in FIRST_SLIDE..=SLIDE_COUNT {
            assert_eq!(descriptor(n).gated, n == 1, "slide {n}");
        }
    }

    #[test]
    fn only_the_last_slide_holds() {
        for n in FIRST_SLIDE..=SLIDE_COUNT {
            let auto = descriptor(n).auto_advance_after();
            if n == SLIDE_COUNT {
                assert!(auto.is_none());
            } else {
                assert!(auto.is_some(), "slide {n} must auto-advance");
            }
        }
    }

    #[test]
    fn dark_slides_match_the_deck_design() {
        let dark: Vec<usize> = (FIRST_SLIDE..=SLIDE_COUNT).filter(|&n| is_dark(n)).collect();
        assert_eq!(dark, vec![3, 4, 7, 8, 9]);
    }

    #[test]
    fn scripted_totals_follow_the_choreography() {
        let ms = |n: usize| descriptor(n).script.total_duration().as_millis();
        assert_eq!(ms(1), 8420);
        assert_eq!(ms(2), 9300);
        assert_eq!(ms(3), 5500);
        assert_eq!(ms(4), 9000);
        assert_eq!(ms(5), 27800);
        assert_eq!(ms(6), 9100);
        assert_eq!(ms(7), 8000);
        assert_eq!(ms(8), 12000);
    }
}
