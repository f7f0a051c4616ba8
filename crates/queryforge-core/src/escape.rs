//! Lexical encoding of values for the query language of the search index.
//!
//! Engine-reserved characters and whitespace are escaped with a backslash.
//! Textual values keep their whitespace and are quoted instead. Wildcard
//! terms keep `*` and `?` unescaped unless the caller escaped them already.

use crate::value::{IndexDataType, IndexValue};

const RESERVED: &[char] = &[
    '\\', '+', '-', '&', '|', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*', '?', ':',
    '/',
];

fn is_reserved(c: char) -> bool {
    RESERVED.contains(&c)
}

/// Escapes all reserved characters and whitespace of the query language.
///
/// # Example
///
/// ```
/// use queryforge_core::escape_term;
///
/// assert_eq!(escape_term("a:b"), "a\\:b");
/// assert_eq!(escape_term("C++"), "C\\+\\+");
/// assert_eq!(escape_term("my field"), "my\\ field");
/// ```
pub fn escape_term(value: &str) -> String {
    escape_reserved(value, true)
}

fn escape_reserved(value: &str, whitespace: bool) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if is_reserved(c) || (whitespace && c.is_whitespace()) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Appends a `^boost` suffix if a boost is given.
///
/// ```
/// use queryforge_core::append_boost;
///
/// assert_eq!(append_boost("x".to_string(), Some(2.0)), "x^2");
/// assert_eq!(append_boost("x".to_string(), None), "x");
/// ```
pub fn append_boost(mut encoded: String, boost: Option<f64>) -> String {
    if let Some(boost) = boost {
        encoded.push('^');
        encoded.push_str(&boost.to_string());
    }
    encoded
}

/// Escapes reserved characters except the wildcards `*` and `?`.
///
/// Wildcards already escaped in the input (`\*`, `\?`) stay literal.
///
/// # Example
///
/// ```
/// use queryforge_core::escape_wildcard_term;
///
/// assert_eq!(escape_wildcard_term("te?t*"), "te?t*");
/// assert_eq!(escape_wildcard_term("a\\*b:c"), "a\\*b\\:c");
/// ```
pub fn escape_wildcard_term(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if matches!(chars.peek(), Some('*') | Some('?')) => {
                out.push('\\');
                if let Some(w) = chars.next() {
                    out.push(w);
                }
            }
            '*' | '?' => out.push(c),
            _ => {
                if is_reserved(c) {
                    out.push('\\');
                }
                out.push(c);
            }
        }
    }
    out
}

/// Returns true if the escaped term contains an unescaped `*` or `?`.
pub(crate) fn has_unescaped_wildcard(term: &str) -> bool {
    let mut backslashes = 0usize;
    for c in term.chars() {
        match c {
            '\\' => backslashes += 1,
            '*' | '?' if backslashes % 2 == 0 => return true,
            _ => backslashes = 0,
        }
    }
    false
}

/// An escaped term of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerm {
    /// Escaped term, without quotes.
    pub term: String,
    /// Contains an unescaped wildcard.
    pub has_wildcard: bool,
    /// Must be quoted when written.
    pub needs_quotes: bool,
    /// Originates from a `Txt` or `Str` value.
    pub is_text: bool,
}

impl QueryTerm {
    fn new(term: String, has_wildcard: bool, needs_quotes: bool, is_text: bool) -> Self {
        Self {
            term,
            has_wildcard,
            needs_quotes,
            is_text,
        }
    }

    /// Encodes a value for an exact match.
    ///
    /// Textual values are quoted when they contain whitespace; whitespace of
    /// other values is escaped.
    ///
    /// # Example
    ///
    /// ```
    /// use queryforge_core::{IndexValue, QueryTerm};
    ///
    /// assert_eq!(QueryTerm::exact(&IndexValue::text("red car", None)).encode(), "\"red car\"");
    /// assert_eq!(QueryTerm::exact(&IndexValue::string("red")).encode(), "red");
    /// ```
    pub fn exact(value: &IndexValue) -> Self {
        if value.data_type().is_textual() {
            let term = escape_reserved(value.lexical_form(), false);
            let needs_quotes = term.chars().any(char::is_whitespace);
            QueryTerm::new(term, false, needs_quotes, true)
        } else {
            QueryTerm::new(escape_term(value.lexical_form()), false, false, false)
        }
    }

    /// Splits a value into wildcard and plain terms.
    ///
    /// Words containing a wildcard become unquoted terms (lower-cased for
    /// `Str` values); runs of plain words are kept together as one quoted
    /// term. Non-textual values yield a single unquoted term.
    ///
    /// # Example
    ///
    /// ```
    /// use queryforge_core::{IndexValue, QueryTerm};
    ///
    /// let terms = QueryTerm::wildcard(&IndexValue::text("This is a te?t for multi*", None));
    /// let encoded: Vec<String> = terms.iter().map(QueryTerm::encode).collect();
    /// assert_eq!(encoded, vec!["\"This is a\"", "te?t", "for", "multi*"]);
    /// ```
    pub fn wildcard(value: &IndexValue) -> Vec<Self> {
        let escaped = escape_wildcard_term(value.lexical_form());
        if !value.data_type().is_textual() {
            let has_wildcard = has_unescaped_wildcard(&escaped);
            return vec![QueryTerm::new(escaped, has_wildcard, false, false)];
        }
        if !has_unescaped_wildcard(&escaped) {
            return vec![QueryTerm::new(escaped, false, true, true)];
        }
        let lowercase = value.data_type() == IndexDataType::Str;
        let mut terms = Vec::new();
        let mut plain: Vec<&str> = Vec::new();
        for word in escaped.split_whitespace() {
            if has_unescaped_wildcard(word) {
                if !plain.is_empty() {
                    terms.push(Self::plain_run(&plain));
                    plain.clear();
                }
                let word = if lowercase {
                    word.to_lowercase()
                } else {
                    word.to_string()
                };
                terms.push(QueryTerm::new(word, true, false, true));
            } else {
                plain.push(word);
            }
        }
        if !plain.is_empty() {
            terms.push(Self::plain_run(&plain));
        }
        terms
    }

    fn plain_run(words: &[&str]) -> Self {
        QueryTerm::new(words.join(" "), false, words.len() > 1, true)
    }

    /// Writes the term, quoting it if needed.
    pub fn encode(&self) -> String {
        if self.needs_quotes {
            format!("\"{}\"", self.term)
        } else {
            self.term.clone()
        }
    }

    /// Writes the term followed by a `^boost` suffix if a boost is given.
    pub fn encode_boosted(&self, boost: Option<f64>) -> String {
        append_boost(self.encode(), boost)
    }
}

/// Creates a quoted phrase over the given terms, with optional proximity slop.
///
/// # Example
///
/// ```
/// use queryforge_core::encode_phrase;
///
/// assert_eq!(encode_phrase(["red", "car"], None), "\"red car\"");
/// assert_eq!(encode_phrase(["red", "car"], Some(11)), "\"red car\"~11");
/// ```
pub fn encode_phrase<'a>(terms: impl IntoIterator<Item = &'a str>, slop: Option<u32>) -> String {
    let mut phrase = String::from("\"");
    for (i, term) in terms.into_iter().enumerate() {
        if i > 0 {
            phrase.push(' ');
        }
        phrase.push_str(term);
    }
    phrase.push('"');
    if let Some(slop) = slop {
        phrase.push('~');
        phrase.push_str(&slop.to_string());
    }
    phrase
}
