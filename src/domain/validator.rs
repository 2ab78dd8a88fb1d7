//! Fully-qualified type validation.
//!
//! Recursive-descent check of
//!
//! ```text
//! type := head [ '<' type ( ',' type )* '>' ]
//! head := address '::' module '::' struct
//! ```
//!
//! over the input with all whitespace removed. A head is the run of
//! characters up to the next `<`, `>` or `,`. The address segment is judged
//! by an [`AddressPredicate`]; module and struct only need to be non-empty.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::adapters::hex::HexAddress;
use crate::ports::address::AddressPredicate;

/// Deepest generic nesting accepted before a type is rejected.
///
/// Bounds the parser's recursion; well-formed types nested deeper than
/// this are rejected with [`TypeError::TooDeep`].
pub const MAX_GENERIC_DEPTH: usize = 128;

/// Options forwarded to the address predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ValidationOptions {
    /// Require the `0x`-prefixed address form.
    #[serde(default = "default_leading_zero")]
    pub leading_zero: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self { leading_zero: true }
    }
}

fn default_leading_zero() -> bool {
    true
}

/// Why a type string was rejected.
///
/// Offsets are byte offsets into the input after whitespace removal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("unbalanced brackets: {open} '<' against {close} '>'")]
    UnbalancedBrackets { open: usize, close: usize },

    #[error("unexpected '{found}' at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },

    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("empty generic argument list at offset {offset}")]
    EmptyGenerics { offset: usize },

    #[error("expected 3 '::'-separated segments in '{head}', found {found}")]
    SegmentCount { head: String, found: usize },

    #[error("invalid address '{address}'")]
    InvalidAddress { address: String },

    #[error("empty module name in '{head}'")]
    EmptyModule { head: String },

    #[error("empty struct name in '{head}'")]
    EmptyStruct { head: String },

    /// Nesting exceeds [`MAX_GENERIC_DEPTH`], an intentional cap on recursion.
    #[error("generic arguments nested deeper than {max}")]
    TooDeep { max: usize },
}

/// Validate `type_str`, reporting the first problem found.
///
/// # Errors
/// Returns the [`TypeError`] describing why the string is not a
/// well-formed fully-qualified type.
pub fn validate_type(
    type_str: &str,
    options: ValidationOptions,
    predicate: &dyn AddressPredicate,
) -> Result<(), TypeError> {
    let stripped: String = type_str.chars().filter(|c| !c.is_whitespace()).collect();

    let open = stripped.matches('<').count();
    let close = stripped.matches('>').count();
    if open != close {
        return Err(TypeError::UnbalancedBrackets { open, close });
    }

    let mut parser = Parser {
        input: &stripped,
        pos: 0,
        options,
        predicate,
    };
    parser.parse_type(0)?;

    if parser.pos < stripped.len() {
        return Err(parser.unexpected());
    }
    Ok(())
}

/// Whether `type_str` is a well-formed type under the default hex
/// address rules.
pub fn check_aptos_type(type_str: &str, options: ValidationOptions) -> bool {
    check_aptos_type_with(type_str, options, &HexAddress)
}

/// Whether `type_str` is a well-formed type, judging addresses with
/// `predicate`.
pub fn check_aptos_type_with(
    type_str: &str,
    options: ValidationOptions,
    predicate: &dyn AddressPredicate,
) -> bool {
    match validate_type(type_str, options, predicate) {
        Ok(()) => true,
        Err(reason) => {
            debug!(type_str, %reason, "Rejected type");
            false
        }
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    options: ValidationOptions,
    predicate: &'a dyn AddressPredicate,
}

impl Parser<'_> {
    fn parse_type(&mut self, depth: usize) -> Result<(), TypeError> {
        if depth > MAX_GENERIC_DEPTH {
            return Err(TypeError::TooDeep {
                max: MAX_GENERIC_DEPTH,
            });
        }

        let input = self.input;
        let rest = &input[self.pos..];
        let head_len = rest
            .find(|c: char| matches!(c, '<' | '>' | ','))
            .unwrap_or(rest.len());
        let head = &rest[..head_len];
        self.pos += head_len;
        self.check_head(head)?;

        if self.peek() != Some(b'<') {
            return Ok(());
        }
        let open_at = self.pos;
        self.pos += 1;
        if self.peek() == Some(b'>') {
            return Err(TypeError::EmptyGenerics { offset: open_at });
        }

        loop {
            self.parse_type(depth + 1)?;
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'>') => {
                    self.pos += 1;
                    return Ok(());
                }
                Some(_) => return Err(self.unexpected()),
                None => return Err(TypeError::UnexpectedEnd { offset: self.pos }),
            }
        }
    }

    fn check_head(&self, head: &str) -> Result<(), TypeError> {
        let segments: Vec<&str> = head.split("::").collect();
        let [address, module, name] = segments[..] else {
            return Err(TypeError::SegmentCount {
                head: head.to_string(),
                found: segments.len(),
            });
        };

        if !self.predicate.is_valid_address(address, self.options) {
            return Err(TypeError::InvalidAddress {
                address: address.to_string(),
            });
        }
        if module.is_empty() {
            return Err(TypeError::EmptyModule {
                head: head.to_string(),
            });
        }
        if name.is_empty() {
            return Err(TypeError::EmptyStruct {
                head: head.to_string(),
            });
        }
        Ok(())
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn unexpected(&self) -> TypeError {
        match self.input[self.pos..].chars().next() {
            Some(found) => TypeError::UnexpectedChar {
                found,
                offset: self.pos,
            },
            None => TypeError::UnexpectedEnd { offset: self.pos },
        }
    }
}
