//! Note records and note label decomposition.
//!
//! A note label is a pitch letter, an optional accidental marker and a
//! single octave digit, e.g. `A4`, `C#4` or `Db4`. Only the first and last
//! characters are inspected for pitch and octave, so multi-digit octaves are
//! not supported: `C#10` reads as octave 0.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LabelError;

/// Pitch letter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pitch {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Pitch {
    /// Parses an uppercase letter A-G.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Pitch::A),
            'B' => Some(Pitch::B),
            'C' => Some(Pitch::C),
            'D' => Some(Pitch::D),
            'E' => Some(Pitch::E),
            'F' => Some(Pitch::F),
            'G' => Some(Pitch::G),
            _ => None,
        }
    }

    /// Returns the letter for this pitch.
    pub fn as_char(self) -> char {
        match self {
            Pitch::A => 'A',
            Pitch::B => 'B',
            Pitch::C => 'C',
            Pitch::D => 'D',
            Pitch::E => 'E',
            Pitch::F => 'F',
            Pitch::G => 'G',
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Accidental attached to a pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    /// Classifies a label by substring: `#` wins over `b`, otherwise natural.
    pub fn from_label(label: &str) -> Self {
        if label.contains('#') {
            Accidental::Sharp
        } else if label.contains('b') {
            Accidental::Flat
        } else {
            Accidental::Natural
        }
    }

    /// Returns the marker used in labels (`#`, `b`, or nothing).
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Structured fields derived from a note label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLabel {
    pub pitch: Pitch,
    pub accidental: Accidental,
    pub octave: u8,
}

/// Decomposes a single (non-compound) note label.
pub fn parse_label(label: &str) -> Result<ParsedLabel, LabelError> {
    let mut chars = label.chars();
    let first = chars.next().ok_or(LabelError::Empty)?;
    let last = chars.next_back().unwrap_or(first);

    let pitch = Pitch::from_char(first).ok_or(LabelError::UnknownPitch(first))?;
    let octave = last
        .to_digit(10)
        .ok_or(LabelError::InvalidOctave(last))? as u8;

    Ok(ParsedLabel {
        pitch,
        accidental: Accidental::from_label(label),
        octave,
    })
}

/// One note of the output table.
///
/// Field order is the key order of the serialized JSON objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Label exactly as it appeared in the source row.
    pub note_label: String,
    pub pitch: Pitch,
    pub accidental: Accidental,
    pub octave: u8,
    /// Frequency in Hz.
    pub frequency: f64,
    /// Wavelength, in the unit of the source table.
    pub wavelength: f64,
}

impl NoteRecord {
    /// Builds a record from one label and its acoustic values.
    pub fn from_label(
        label: &str,
        frequency: f64,
        wavelength: f64,
    ) -> Result<Self, LabelError> {
        let ParsedLabel {
            pitch,
            accidental,
            octave,
        } = parse_label(label)?;

        Ok(Self {
            note_label: label.to_string(),
            pitch,
            accidental,
            octave,
            frequency,
            wavelength,
        })
    }
}

impl fmt::Display for NoteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.pitch, self.accidental, self.octave)
    }
}
