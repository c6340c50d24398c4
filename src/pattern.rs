//! Wildcard query patterns.
//!
//! A raw query is checked against the pattern alphabet (letters, digits,
//! `?` and `*`), then lower-cased and has every run of `*` collapsed to a
//! single `*` before being tokenized into [`Element`]s.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use nom::branch::alt;
use nom::character::complete::{char, satisfy};
use nom::combinator::{map, value};
use nom::multi::many1;
use nom::IResult;

use crate::alphabet::{is_pattern_char, is_wildcard, normalize, ANY_MANY, ANY_ONE};
use crate::error::PatternError;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Element {
    Literal(char),
    /// `?`, exactly one character.
    AnyOne,
    /// `*`, zero or more characters.
    AnyMany,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Pattern {
    pub(crate) elements: Vec<Element>,
}

/// Checks that `s` is non-empty and only uses pattern characters.
pub fn validate(s: &str) -> Result<(), PatternError> {
    if s.is_empty() {
        return Err(PatternError::Empty);
    }
    match s.chars().enumerate().find(|(_, c)| !is_pattern_char(*c)) {
        Some((position, character)) => Err(PatternError::InvalidCharacter { character, position }),
        None => Ok(()),
    }
}

/// Replaces every run of two or more `*` with a single `*`.
pub fn collapse_asterisks(s: &str) -> String {
    let mut collapsed = String::with_capacity(s.len());
    let mut previous = None;
    for c in s.chars() {
        if c == ANY_MANY && previous == Some(ANY_MANY) {
            continue;
        }
        collapsed.push(c);
        previous = Some(c);
    }
    collapsed
}

// anything a validated letter or digit folds into, combining marks included
fn literal(input: &str) -> IResult<&str, Element> {
    map(satisfy(|c| !is_wildcard(c)), Element::Literal)(input)
}

fn any_one(input: &str) -> IResult<&str, Element> {
    value(Element::AnyOne, char(ANY_ONE))(input)
}

fn any_many(input: &str) -> IResult<&str, Element> {
    value(Element::AnyMany, char(ANY_MANY))(input)
}

fn element(input: &str) -> IResult<&str, Element> {
    alt((any_many, any_one, literal))(input)
}

fn elements(input: &str) -> IResult<&str, Vec<Element>> {
    many1(element)(input)
}

impl Pattern {
    /// Normalizes and tokenizes a raw query.
    pub fn parse(raw: &str) -> Result<Pattern, PatternError> {
        validate(raw)?;
        let collapsed = collapse_asterisks(&normalize(raw));

        match elements(&collapsed) {
            Ok(("", elements)) => Ok(Pattern { elements }),
            Ok((rest, _)) => Err(Self::invalid_at(&collapsed, rest)),
            Err(_) => Err(Self::invalid_at(&collapsed, &collapsed)),
        }
    }

    fn invalid_at(input: &str, rest: &str) -> PatternError {
        match rest.chars().next() {
            Some(character) => PatternError::InvalidCharacter {
                character,
                position: input.chars().count() - rest.chars().count(),
            },
            None => PatternError::Empty,
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Shortest word length the pattern can match.
    pub fn min_len(&self) -> usize {
        self.elements.iter().filter(|x| **x != Element::AnyMany).count()
    }

    pub fn is_exact(&self) -> bool {
        self.elements.iter().all(|x| matches!(x, Element::Literal(_)))
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::parse(s)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for element in &self.elements {
            match element {
                Element::Literal(c) => write!(f, "{}", c)?,
                Element::AnyOne => write!(f, "{}", ANY_ONE)?,
                Element::AnyMany => write!(f, "{}", ANY_MANY)?,
            }
        }
        Ok(())
    }
}
