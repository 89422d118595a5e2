//! Controlled vocabularies offered by the form.
//!
//! Every value serializes to (and parses from) its display label, which is
//! also what the generation prompt and the rendered document show.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {vocabulary} value '{label}'")]
pub struct UnknownLabel {
    pub vocabulary: &'static str,
    pub label: String,
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( #[serde(rename = $label)] $variant, )+
        }

        impl $name {
            /// All values in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| value.label() == s)
                    .ok_or_else(|| UnknownLabel {
                        vocabulary: stringify!($name),
                        label: s.to_string(),
                    })
            }
        }
    };
}

vocabulary! {
    /// School level (jenjang). Determines which classes can be picked.
    pub enum EducationLevel {
        Sd => "SD",
        Smp => "SMP",
        Sma => "SMA",
    }
}

vocabulary! {
    /// Teaching model assigned to a single meeting.
    pub enum Pedagogy {
        InquiryDiscovery => "Inkuiri-Discovery Learning",
        ProjectBased => "Project Based Learning (PjBL)",
        ProblemBased => "Problem Based Learning / Problem Solving",
        GameBased => "Game Based Learning",
        StationLearning => "Station Learning",
    }
}

vocabulary! {
    /// Dimensi Profil Lulusan.
    pub enum GraduateDimension {
        Faith => "Keimanan & Ketakwaan",
        Citizenship => "Kewargaan",
        CriticalReasoning => "Penalaran Kritis",
        Creativity => "Kreativitas",
        Collaboration => "Kolaborasi",
        Independence => "Kemandirian",
        Health => "Kesehatan",
        Communication => "Komunikasi",
    }
}

vocabulary! {
    /// Panca Cinta values from the Kemenag RI character framework.
    pub enum PancaCinta {
        LoveOfGod => "Cinta Allah dan Rasul-Nya",
        LoveOfKnowledge => "Cinta Ilmu",
        LoveOfSelfAndOthers => "Cinta Diri dan Sesama",
        LoveOfEnvironment => "Cinta Lingkungan",
        LoveOfHomeland => "Cinta Tanah Air",
    }
}

impl Default for EducationLevel {
    fn default() -> Self {
        EducationLevel::Sd
    }
}

impl Default for Pedagogy {
    fn default() -> Self {
        Pedagogy::InquiryDiscovery
    }
}

impl EducationLevel {
    /// Class numbers that belong to this level.
    pub fn class_options(self) -> &'static [&'static str] {
        match self {
            EducationLevel::Sd => &["1", "2", "3", "4", "5", "6"],
            EducationLevel::Smp => &["7", "8", "9"],
            EducationLevel::Sma => &["10", "11", "12"],
        }
    }

    pub fn has_class(self, class: &str) -> bool {
        self.class_options().contains(&class.trim())
    }
}

/// Joins labels with `", "`, or returns `"-"` for an empty selection.
pub fn join_labels<T: fmt::Display>(values: &[T]) -> String {
    if values.is_empty() {
        return "-".to_string();
    }
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
