//! Dispatch table for "if the peek word is one of these, run the matching
//! handler; otherwise run a default handler". The shape every
//! keyword-prefixed alternative in this grammar (class members, type
//! expressions, property clauses) repeats. Grounded in the original
//! implementation's `procSelector`/`namedProc` pair: a list of
//! `(name, handler)` tried in order, first match wins, falling through to a
//! default closure when nothing matches.

use crate::error::ParseResult;

use super::Parser;

pub(crate) struct Selector<'p, T> {
    candidates: Vec<(&'static str, Box<dyn FnOnce(&mut Parser) -> ParseResult<T> + 'p>)>,
}

impl<'p, T> Selector<'p, T> {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
        }
    }

    pub fn on(mut self, word: &'static str, handler: impl FnOnce(&mut Parser) -> ParseResult<T> + 'p) -> Self {
        self.candidates.push((word, Box::new(handler)));
        self
    }

    /// Try each candidate word in order against `parser`'s peeked word; run
    /// the first one that matches. If none match, run `default`.
    pub fn dispatch(
        self,
        parser: &mut Parser,
        default: impl FnOnce(&mut Parser) -> ParseResult<T>,
    ) -> ParseResult<T> {
        for (word, handler) in self.candidates {
            if parser.stream.sees_word(word) {
                return handler(parser);
            }
        }
        default(parser)
    }
}
