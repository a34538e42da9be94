// SPDX-License-Identifier: PMPL-1.0-or-later
//! Motion rule - WCAG 2.3.3 Animation from Interactions (Level AAA)

use crate::issue::wcag::ANIMATION_FROM_INTERACTIONS;
use crate::issue::{Issue, Severity};
use crate::rules::{numbered_lines, Rule};

/// Animation keywords that suggest continuous or large motion
const MOTION_KEYWORDS: &[&str] = &["infinite", "spin", "bounce"];

const REDUCED_MOTION_FIX: &str =
    "@media (prefers-reduced-motion: no-preference) {\n  .animate { animation: spin 1s infinite; }\n}";

/// Flags animations not gated on `prefers-reduced-motion`
pub struct MotionRule;

impl Rule for MotionRule {
    fn id(&self) -> &'static str {
        "motion-warnings"
    }

    fn name(&self) -> &'static str {
        "Motion/Animation Warnings"
    }

    fn description(&self) -> &'static str {
        "Checks for looping animations without a reduced-motion guard (WCAG 2.3.3)"
    }

    fn check(&self, text: &str) -> Vec<Issue> {
        numbered_lines(text)
            .filter(|(_, line)| is_uncontrolled_animation(line))
            .map(|(line_num, line)| {
                Issue::new(
                    "Uncontrolled Animation",
                    Severity::Enhancement,
                    "Animation may cause issues for users with vestibular disorders",
                )
                .at_line(line_num)
                .with_snippet(line)
                .with_recommendation("Wrap animations in a prefers-reduced-motion media query")
                .with_fix_example(REDUCED_MOTION_FIX)
                .with_wcag(&ANIMATION_FROM_INTERACTIONS)
            })
            .collect()
    }
}

fn is_uncontrolled_animation(line: &str) -> bool {
    line.contains("animation")
        && !line.contains("prefers-reduced-motion")
        && MOTION_KEYWORDS.iter().any(|kw| line.contains(kw))
}
