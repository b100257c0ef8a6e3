use super::error::InvalidPatternError;

use smallvec::SmallVec;

/// A pattern element. Placeholders and wildcards interleave with literal
/// text in declaration order.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Token<'a> {
    Literal(&'a str),
    Parameter(&'a str),
    Wildcard,
}

pub(super) type TokenBuffer<'a> = SmallVec<[Token<'a>; 8]>;

/// Splits a pattern into tokens in a single left-to-right scan.
///
/// A placeholder is a maximal `{` .. `}` span. Every literal `*` is a
/// wildcard token; there is no escaping mechanism. Stray `}` characters
/// outside a placeholder are plain literal text.
pub(super) fn tokenize(pattern: &str) -> Result<TokenBuffer<'_>, InvalidPatternError> {
    let mut tokens = TokenBuffer::new();
    let bytes = pattern.as_bytes();

    let mut lit_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                if lit_start < i {
                    tokens.push(Token::Literal(&pattern[lit_start..i]));
                }
                let name_start = i + 1;
                let close = match pattern[name_start..].find('}') {
                    Some(offset) => name_start + offset,
                    None => {
                        return Err(InvalidPatternError::UnterminatedPlaceholder {
                            pattern: pattern.to_owned(),
                        })
                    }
                };
                let name = &pattern[name_start..close];
                if name.is_empty() {
                    return Err(InvalidPatternError::EmptyPlaceholder {
                        pattern: pattern.to_owned(),
                    });
                }
                if name.contains(&['/', '{'][..]) {
                    return Err(InvalidPatternError::InvalidParameterName {
                        name: name.to_owned(),
                        pattern: pattern.to_owned(),
                    });
                }
                tokens.push(Token::Parameter(name));
                i = close + 1;
                lit_start = i;
            }
            b'*' => {
                if lit_start < i {
                    tokens.push(Token::Literal(&pattern[lit_start..i]));
                }
                tokens.push(Token::Wildcard);
                i += 1;
                lit_start = i;
            }
            _ => i += 1,
        }
    }
    if lit_start < bytes.len() {
        tokens.push(Token::Literal(&pattern[lit_start..]));
    }

    Ok(tokens)
}
