//! The set of all tokens in one build, and value resolution across it.

use crate::flatten::FlattenedToken;
use crate::loader::TokenSource;
use crate::partition::Scheme;
use crate::value::{css_var, normalize_name, resolve_reference, ReferenceMode, TokenValue};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// A token as it is written out: its variable name, rendered value and description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedToken {
    pub name: String,
    pub value: String,
    pub comment: Option<String>,
}

/// Every flattened token of a build, in source order and then traversal order.
///
/// Unlike a [`crate::TokenMap`], the dictionary keeps tokens with colliding names (a light and a
/// dark `color-bg` are both needed); uniqueness is only enforced per output bucket.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    tokens: Vec<FlattenedToken>,
    by_name: HashMap<(String, Scheme), usize>,
    by_name_any: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sources(sources: &[TokenSource]) -> Self {
        let mut dictionary = Self::new();
        for source in sources {
            dictionary.extend(source.flatten().into_values());
        }
        dictionary
    }

    pub fn from_tokens<I: IntoIterator<Item = FlattenedToken>>(tokens: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(tokens);
        dictionary
    }

    pub fn push(&mut self, token: FlattenedToken) {
        let index = self.tokens.len();
        self.by_name
            .insert((token.name.clone(), token.scheme()), index);
        self.by_name_any.insert(token.name.clone(), index);
        self.tokens.push(token);
    }

    pub fn all_tokens(&self) -> &[FlattenedToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Find the token a name refers to, preferring one from the same scheme.
    ///
    /// Later tokens shadow earlier ones with the same name.
    pub fn lookup(&self, name: &str, scheme: Scheme) -> Option<&FlattenedToken> {
        self.by_name
            .get(&(name.to_string(), scheme))
            .or_else(|| self.by_name_any.get(name))
            .map(|&index| &self.tokens[index])
    }

    /// Render a token's value for output.
    ///
    /// Bare and wrapped modes rewrite references in place. Value mode follows references through
    /// the dictionary until it reaches a literal or dimension; a reference to an unknown token or
    /// a cycle falls back to the wrapped rewrite and is logged.
    pub fn resolve(&self, token: &FlattenedToken, mode: ReferenceMode) -> String {
        if mode != ReferenceMode::Value {
            return resolve_reference(&token.value, mode);
        }

        let scheme = token.scheme();
        let mut seen = HashSet::from([token.name.clone()]);
        let mut current = &token.value;
        loop {
            let TokenValue::Reference(path) = current else {
                return resolve_reference(current, mode);
            };
            let target = normalize_name(path);
            let Some(next) = self.lookup(&target, scheme) else {
                warn!(token = %token.name, reference = %path, "unresolved reference");
                return css_var(&target);
            };
            if !seen.insert(next.name.clone()) {
                warn!(token = %token.name, reference = %path, "circular reference");
                return css_var(&target);
            }
            current = &next.value;
        }
    }
}

impl Dictionary {
    /// Every token with its value rendered in `mode`, in dictionary order.
    pub fn resolved(&self, mode: ReferenceMode) -> Vec<ResolvedToken> {
        self.tokens
            .iter()
            .map(|token| ResolvedToken {
                name: token.name.clone(),
                value: self.resolve(token, mode),
                comment: token.comment.clone(),
            })
            .collect()
    }
}

impl Extend<FlattenedToken> for Dictionary {
    fn extend<I: IntoIterator<Item = FlattenedToken>>(&mut self, iter: I) {
        for token in iter {
            self.push(token);
        }
    }
}
