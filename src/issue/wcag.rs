// SPDX-License-Identifier: PMPL-1.0-or-later
//! WCAG 2.1 success criteria cited by the built-in rules.

use serde::{Deserialize, Serialize};

/// WCAG conformance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    /// Level A - minimum conformance
    A,
    /// Level AA - standard conformance
    AA,
    /// Level AAA - enhanced conformance
    AAA,
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WcagLevel::A => write!(f, "A"),
            WcagLevel::AA => write!(f, "AA"),
            WcagLevel::AAA => write!(f, "AAA"),
        }
    }
}

/// A single success criterion, e.g. 1.1.1 Non-text Content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    pub number: &'static str,
    pub title: &'static str,
    pub level: WcagLevel,
    /// Page name under the W3C "Understanding WCAG 2.1" documents
    slug: &'static str,
}

const UNDERSTANDING_BASE: &str = "https://www.w3.org/WAI/WCAG21/Understanding";

impl Criterion {
    const fn new(number: &'static str, title: &'static str, level: WcagLevel, slug: &'static str) -> Self {
        Self { number, title, level, slug }
    }

    /// Citation label, e.g. `1.1.1 Non-text Content (Level A)`
    pub fn label(&self) -> String {
        format!("{} {} (Level {})", self.number, self.title, self.level)
    }

    /// Link to the W3C explanation of this criterion
    pub fn link(&self) -> String {
        format!("{}/{}.html", UNDERSTANDING_BASE, self.slug)
    }
}

pub const NON_TEXT_CONTENT: Criterion =
    Criterion::new("1.1.1", "Non-text Content", WcagLevel::A, "non-text-content");

pub const INFO_AND_RELATIONSHIPS: Criterion =
    Criterion::new("1.3.1", "Info and Relationships", WcagLevel::A, "info-and-relationships");

pub const CONTRAST_MINIMUM: Criterion =
    Criterion::new("1.4.3", "Contrast (Minimum)", WcagLevel::AA, "contrast-minimum");

pub const NO_KEYBOARD_TRAP: Criterion =
    Criterion::new("2.1.2", "No Keyboard Trap", WcagLevel::A, "no-keyboard-trap");

pub const ANIMATION_FROM_INTERACTIONS: Criterion = Criterion::new(
    "2.3.3",
    "Animation from Interactions",
    WcagLevel::AAA,
    "animation-from-interactions",
);

pub const FOCUS_ORDER: Criterion =
    Criterion::new("2.4.3", "Focus Order", WcagLevel::A, "focus-order");

pub const LANGUAGE_OF_PAGE: Criterion =
    Criterion::new("3.1.1", "Language of Page", WcagLevel::A, "language-of-page");

pub const NAME_ROLE_VALUE: Criterion =
    Criterion::new("4.1.2", "Name, Role, Value", WcagLevel::A, "name-role-value");
