//! # Musical Keys
//!
//! Parses free-form key strings ("C Major", "Am", "F# minor", "Bbmaj") into a
//! [`MusicalKey`] and places each key on the circle of fifths.
//!
//! ## Grammar
//! ```text
//! key      := letter accidental? ws* mode?
//! letter   := 'A'..'G'            (uppercase only)
//! accidental := '#' | 'b'
//! mode     := major | minor | maj | min | m   (case-insensitive)
//! ```
//! - No mode token means major.
//! - A bare `m` directly after the note ("Am", "F#m") is the inline minor marker.
//! - Empty input and the literal sentinel `"Unknown"` never parse.
//!
//! ## Canonical Identity
//! Roots are stored as pitch classes, so enharmonic spellings collapse: "Db" and
//! "C#" are the same key. The identity string uses sharps and appends `m` for
//! minor keys: `C`, `Am`, `C#m`.
//!
//! ## Circle of Fifths
//! ```text
//! position:  0   1   2   3   4   5   6   7   8   9   10  11
//! major:     C   G   D   A   E   B   F#  C#  G#  D#  A#  F
//! minor:     Am  Em  Bm  F#m C#m G#m D#m A#m Fm  Cm  Gm  Dm
//! ```
//! One clockwise step (a perfect fifth) adds 1 mod 12. A major key and its
//! relative minor share a position.

use serde::Serialize;
use std::fmt;

/// Reserved value upstream metadata sources use for "no key detected".
pub const UNKNOWN_SENTINEL: &str = "Unknown";

/// Sharp spelling of each pitch class, C = 0.
const ROOT_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Circle position of the major key on each pitch class.
const MAJOR_POSITIONS: [u8; 12] = [0, 7, 2, 9, 4, 11, 6, 1, 8, 3, 10, 5];

/// Circle position of the minor key on each pitch class (shared with its relative major).
const MINOR_POSITIONS: [u8; 12] = [9, 4, 11, 6, 1, 8, 3, 10, 5, 0, 7, 2];

/// Note names A through G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }

    /// Semitone offset from C
    fn semitone(self) -> i8 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }
}

/// Accidentals: sharp, flat, or none
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    fn offset(self) -> i8 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }
}

/// Key mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Major,
    Minor,
}

impl Mode {
    /// Resolve a mode token. An empty token means major.
    fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "" | "major" | "maj" => Some(Mode::Major),
            "minor" | "min" | "m" => Some(Mode::Minor),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Mode::Major => Mode::Minor,
            Mode::Minor => Mode::Major,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Major => write!(f, "Major"),
            Mode::Minor => write!(f, "Minor"),
        }
    }
}

/// A parsed, valid musical key.
///
/// Invalid input has no `MusicalKey`; [`MusicalKey::parse`] returns `None` and the
/// classifiers turn that into an `unknown` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MusicalKey {
    pitch_class: u8,
    mode: Mode,
}

impl MusicalKey {
    /// Build a key from a pitch class (taken mod 12) and mode.
    pub fn new(pitch_class: u8, mode: Mode) -> Self {
        Self {
            pitch_class: pitch_class % 12,
            mode,
        }
    }

    /// Parse a free-form key string.
    ///
    /// # Examples
    /// ```
    /// use keymix::{MusicalKey, Mode};
    ///
    /// let key = MusicalKey::parse("F# minor").unwrap();
    /// assert_eq!(key.root(), "F#");
    /// assert_eq!(key.mode(), Mode::Minor);
    /// assert_eq!(key.to_string(), "F#m");
    ///
    /// assert_eq!(MusicalKey::parse("Bbm"), MusicalKey::parse("A# Minor"));
    /// assert!(MusicalKey::parse("Unknown").is_none());
    /// assert!(MusicalKey::parse("H major").is_none());
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed == UNKNOWN_SENTINEL {
            return None;
        }

        let mut chars = trimmed.chars();
        let name = NoteName::from_char(chars.next()?)?;
        let mut rest = chars.as_str();

        let accidental = if let Some(after) = rest.strip_prefix('#') {
            rest = after;
            Accidental::Sharp
        } else if let Some(after) = rest.strip_prefix('b') {
            rest = after;
            Accidental::Flat
        } else {
            Accidental::Natural
        };

        // Whatever follows the note is either nothing, the inline `m`, or a
        // mode token after optional whitespace. All three go through the same table.
        let mode = Mode::from_token(rest.trim_start())?;

        let pitch_class = (name.semitone() + accidental.offset()).rem_euclid(12) as u8;
        Some(Self { pitch_class, mode })
    }

    /// Pitch class of the root, C = 0.
    pub fn pitch_class(&self) -> u8 {
        self.pitch_class
    }

    /// Root note in canonical sharp spelling.
    pub fn root(&self) -> &'static str {
        ROOT_NAMES[self.pitch_class as usize]
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Canonical identity, e.g. `"C"`, `"Am"`, `"C#m"`. Same as `to_string()`.
    pub fn identity(&self) -> String {
        self.to_string()
    }

    /// Display name, e.g. `"C# Minor"`.
    pub fn long_name(&self) -> String {
        format!("{} {}", self.root(), self.mode)
    }

    /// Position on the circle of fifths (0-11). Relative keys share a position.
    pub fn circle_position(&self) -> u8 {
        match self.mode {
            Mode::Major => MAJOR_POSITIONS[self.pitch_class as usize],
            Mode::Minor => MINOR_POSITIONS[self.pitch_class as usize],
        }
    }

    /// Camelot wheel code: `8B` is C major, `8A` is A minor.
    pub fn camelot(&self) -> String {
        let number = (self.circle_position() + 7) % 12 + 1;
        let letter = match self.mode {
            Mode::Major => 'B',
            Mode::Minor => 'A',
        };
        format!("{}{}", number, letter)
    }

    /// The key sharing this key's circle position in the opposite mode.
    pub fn relative(&self) -> Self {
        match self.mode {
            Mode::Major => Self::new(self.pitch_class + 9, Mode::Minor),
            Mode::Minor => Self::new(self.pitch_class + 3, Mode::Major),
        }
    }

    /// The key on the same root in the opposite mode.
    pub fn parallel(&self) -> Self {
        Self::new(self.pitch_class, self.mode.opposite())
    }

    pub fn is_relative_of(&self, other: &MusicalKey) -> bool {
        self.mode != other.mode && self.circle_position() == other.circle_position()
    }

    pub fn is_parallel_of(&self, other: &MusicalKey) -> bool {
        self.mode != other.mode && self.pitch_class == other.pitch_class
    }

    /// Shortest distance around the circle, 0-6.
    pub fn circle_distance(&self, other: &MusicalKey) -> u8 {
        let diff = self.circle_position().abs_diff(other.circle_position());
        diff.min(12 - diff)
    }

    /// All 24 keys: majors in circle order, then minors in circle order.
    pub fn all() -> impl Iterator<Item = MusicalKey> {
        [Mode::Major, Mode::Minor].into_iter().flat_map(|mode| {
            (0..12u8).filter_map(move |position| Self::at_position(position, mode))
        })
    }

    /// The key of the given mode sitting at a circle position.
    pub fn at_position(position: u8, mode: Mode) -> Option<Self> {
        let table = match mode {
            Mode::Major => &MAJOR_POSITIONS,
            Mode::Minor => &MINOR_POSITIONS,
        };
        table
            .iter()
            .position(|&p| p == position)
            .map(|pitch_class| Self::new(pitch_class as u8, mode))
    }
}

impl fmt::Display for MusicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            Mode::Major => write!(f, "{}", self.root()),
            Mode::Minor => write!(f, "{}m", self.root()),
        }
    }
}

impl Serialize for MusicalKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
