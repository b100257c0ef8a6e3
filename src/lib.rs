//! A URL path template compiler and matcher.
//!
//! A pattern string mixes literal text, named parameters and wildcards:
//!
//! ```text
//! /alfa/{param}/tango*
//! ```
//!
//! [`PathPattern`] compiles such a string once, then answers three questions
//! any number of times, from any number of threads:
//!
//! - does a concrete URL match the pattern?
//! - which values did the named parameters capture?
//! - what URL results from substituting a set of parameter values?
//!
//! ```
//! use path_pattern::PathPattern;
//!
//! let pattern = PathPattern::parse("/alfa/{param}/tango").unwrap();
//! assert!(pattern.matches("/alfa/abc/tango"));
//!
//! let params = pattern.extract_parameters("/alfa/abc/tango").unwrap();
//! assert_eq!(params.get("param"), Some(&"abc"));
//! ```
//!
//! Patterns operate on already-decoded path strings. Percent-decoding, query
//! strings and route-table precedence belong to the caller.

#![deny(unsafe_code)]

mod pattern;

pub use crate::pattern::{CreateUrlError, InvalidPatternError, NoMatchError, PathPattern};
