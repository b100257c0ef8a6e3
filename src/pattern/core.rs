use super::error::{CreateUrlError, InvalidPatternError, NoMatchError};
use super::token::{tokenize, Token};
use super::PathPattern;

use std::collections::HashMap;
use std::mem;

use regex::Regex;

const SLASH: char = '/';
const COLON: char = ':';
const WILDCARD: char = '*';

impl PathPattern {
    /// Compiles a pattern string.
    ///
    /// Validation is eager: a malformed pattern fails here, never later on
    /// first match. Parsing the same text always produces an identical
    /// matcher.
    pub fn parse(text: &str) -> Result<Self, InvalidPatternError> {
        if !text.starts_with(SLASH) {
            return Err(InvalidPatternError::MissingLeadingSlash {
                pattern: text.to_owned(),
            });
        }
        if let Some(fragment) = text.split(SLASH).find(|part| part.contains(COLON)) {
            return Err(InvalidPatternError::ColonInPattern {
                fragment: fragment.to_owned(),
            });
        }

        let tokens = tokenize(text)?;

        let mut segments: Vec<String> = Vec::new();
        let mut parameter_index: Vec<Box<str>> = Vec::new();
        let mut source = String::with_capacity(text.len() + 8);
        let mut current = String::new();
        let mut has_parameters = false;

        for token in &tokens {
            match *token {
                Token::Literal(lit) => {
                    current.push_str(lit);
                    source.push_str(&regex::escape(lit));
                }
                Token::Parameter(name) => {
                    segments.push(mem::take(&mut current));
                    parameter_index.push(name.into());
                    source.push_str("(.+?)");
                    has_parameters = true;
                }
                Token::Wildcard => {
                    // not a segment boundary: the star stays in the fragment
                    current.push(WILDCARD);
                    parameter_index.push("".into());
                    source.push_str("(.*?)");
                }
            }
        }
        segments.push(current);

        let has_wildcards = text.contains(WILDCARD);

        let regex = if has_parameters || has_wildcards {
            source.push('$');
            Some(Regex::new(&source).expect("generated pattern source always compiles"))
        } else {
            None
        };

        Ok(Self {
            pattern: text.into(),
            regex,
            parameter_index,
            segments,
            has_parameters,
            has_wildcards,
        })
    }

    /// Tests whether a URL satisfies the pattern.
    ///
    /// A literal pattern requires exact string equality. A compiled pattern
    /// is anchored at the end but not at the start, so a URL with an
    /// unrelated leading prefix still matches when the remainder lines up.
    /// That drift is established behavior and kept as is.
    pub fn matches(&self, url: &str) -> bool {
        match &self.regex {
            Some(regex) => regex.is_match(url),
            None => url == &*self.pattern,
        }
    }

    /// Extracts the named-parameter values captured from a matching URL.
    ///
    /// Wildcard groups are matched but never reported. If the same name
    /// occurs more than once in the pattern, the last capture wins.
    pub fn extract_parameters<'s, 'u>(
        &'s self,
        url: &'u str,
    ) -> Result<HashMap<&'s str, &'u str>, NoMatchError> {
        let regex = match &self.regex {
            Some(regex) => regex,
            None => {
                return if url == &*self.pattern {
                    Ok(HashMap::new())
                } else {
                    Err(self.no_match(url))
                };
            }
        };

        let captures = match regex.captures(url) {
            Some(captures) => captures,
            None => return Err(self.no_match(url)),
        };

        let mut parameters = HashMap::new();
        for (name, group) in self.parameter_index.iter().zip(captures.iter().skip(1)) {
            if name.is_empty() {
                continue;
            }
            if let Some(m) = group {
                parameters.insert(&**name, m.as_str());
            }
        }
        Ok(parameters)
    }

    /// Synthesizes a concrete URL by substituting `values` into the pattern.
    ///
    /// Wildcarded patterns are rejected outright: there is nothing to
    /// substitute for a `*`.
    pub fn create(&self, values: &HashMap<&str, &str>) -> Result<String, CreateUrlError> {
        if self.has_wildcards {
            return Err(CreateUrlError::Wildcard {
                pattern: self.pattern.to_string(),
            });
        }

        let mut url = String::with_capacity(self.pattern.len());
        let mut names = self.parameter_index.iter();
        for segment in &self.segments {
            url.push_str(segment);
            if let Some(name) = names.next() {
                match values.get(&**name) {
                    Some(value) => url.push_str(value),
                    None => {
                        return Err(CreateUrlError::MissingParameter {
                            name: name.to_string(),
                            pattern: self.pattern.to_string(),
                        })
                    }
                }
            }
        }
        Ok(url)
    }

    fn no_match(&self, url: &str) -> NoMatchError {
        NoMatchError {
            url: url.to_owned(),
            pattern: self.pattern.to_string(),
        }
    }
}
