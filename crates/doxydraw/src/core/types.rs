//! Core type definitions for class extraction
//!
//! This module contains the fundamental types shared by both pipeline
//! stages: the access level taxonomy and the extracted class model.

use std::fmt;

/// Access level of a class member
///
/// Encoded in formatted member lines as a single leading glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Access {
    /// `+`: public member
    Public,
    /// `#`: protected member
    Protected,
    /// `-`: private or default access
    #[default]
    Private,
    /// `?`: fallback for anything the classifier cannot place
    Unknown,
}

impl Access {
    /// Parse an access glyph
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '+' => Some(Access::Public),
            '#' => Some(Access::Protected),
            '-' => Some(Access::Private),
            '?' => Some(Access::Unknown),
            _ => None,
        }
    }

    /// The glyph used in formatted member lines
    pub fn glyph(self) -> char {
        match self {
            Access::Public => '+',
            Access::Protected => '#',
            Access::Private => '-',
            Access::Unknown => '?',
        }
    }

    /// Sort rank: public < protected < private/unknown
    pub fn rank(self) -> u8 {
        match self {
            Access::Public => 1,
            Access::Protected => 2,
            Access::Private | Access::Unknown => 3,
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Sort rank of an already formatted member line, keyed on its glyph.
///
/// Lines that somehow lack a known glyph sort last, like private members.
fn line_rank(line: &str) -> u8 {
    line.chars()
        .next()
        .and_then(Access::from_glyph)
        .map(Access::rank)
        .unwrap_or(3)
}

/// Extracted class metadata, the contract between the two pipeline stages
///
/// `functions` and `variables` hold fully formatted member lines of the
/// shape `<glyph> <signature>[ : <type>]`. The model is what the textual
/// description format serializes and what the diagram builder consumes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassModel {
    /// Class identifier; `None` when the source document had no
    /// `compoundname` element.
    pub name: Option<String>,
    /// Formatted member-function lines
    pub functions: Vec<String>,
    /// Formatted member-variable lines
    pub variables: Vec<String>,
}

impl ClassModel {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            functions: Vec::new(),
            variables: Vec::new(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Some(name.into()))
    }

    pub fn add_function(&mut self, line: impl Into<String>) {
        self.functions.push(line.into());
    }

    pub fn add_variable(&mut self, line: impl Into<String>) {
        self.variables.push(line.into());
    }

    /// Number of member rows the diagram will hold (excluding the separator)
    pub fn member_count(&self) -> usize {
        self.functions.len() + self.variables.len()
    }

    /// Sort both member groups by `(access rank, lexical order)`.
    ///
    /// This establishes the canonical ordering invariant: access rank is
    /// non-decreasing, and lines of equal rank are in lexical order.
    pub fn sort_members(&mut self) {
        self.functions
            .sort_by(|a, b| (line_rank(a), a.as_str()).cmp(&(line_rank(b), b.as_str())));
        self.variables
            .sort_by(|a, b| (line_rank(a), a.as_str()).cmp(&(line_rank(b), b.as_str())));
    }
}
