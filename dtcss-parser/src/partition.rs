//! Light/dark and base/semantic classification
//!
//! Classification looks only at the path of the file a token was read from: a path containing
//! `dark` is dark, a path containing `base` is base. Directory and file naming is the whole
//! contract, so `tokens/base/dark.json` is base+dark and `tokens/semantic/colors.json` is
//! semantic+light.

use crate::flatten::{FlattenedToken, TokenMap};
use std::path::Path;

const DARK_MARKER: &str = "dark";
const BASE_MARKER: &str = "base";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Base,
    Semantic,
}

/// Which buckets a source path falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub scheme: Scheme,
    pub tier: Tier,
}

pub fn classify(source: &Path) -> Classification {
    let path = source.to_string_lossy();
    let scheme = if path.contains(DARK_MARKER) {
        Scheme::Dark
    } else {
        Scheme::Light
    };
    let tier = if path.contains(BASE_MARKER) {
        Tier::Base
    } else {
        Tier::Semantic
    };
    Classification { scheme, tier }
}

impl FlattenedToken {
    pub fn classification(&self) -> Classification {
        classify(&self.source)
    }

    pub fn scheme(&self) -> Scheme {
        self.classification().scheme
    }

    pub fn tier(&self) -> Tier {
        self.classification().tier
    }
}

/// Tokens split into the light and dark maps of one output.
///
/// Each side is its own [`TokenMap`]: a name can appear once per side, and within a side the
/// last token with a given name wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub light: TokenMap,
    pub dark: TokenMap,
}

impl Partition {
    pub fn is_empty(&self) -> bool {
        self.light.is_empty() && self.dark.is_empty()
    }

    pub fn len(&self) -> usize {
        self.light.len() + self.dark.len()
    }

    pub fn side(&self, scheme: Scheme) -> &TokenMap {
        match scheme {
            Scheme::Light => &self.light,
            Scheme::Dark => &self.dark,
        }
    }
}

/// Split tokens by scheme, keeping only those of `tier` when one is given.
pub fn partition<'a, I>(tokens: I, tier: Option<Tier>) -> Partition
where
    I: IntoIterator<Item = &'a FlattenedToken>,
{
    let mut out = Partition::default();
    for token in tokens {
        let class = token.classification();
        if tier.is_some_and(|wanted| wanted != class.tier) {
            continue;
        }
        let side = match class.scheme {
            Scheme::Light => &mut out.light,
            Scheme::Dark => &mut out.dark,
        };
        side.insert(token.name.clone(), token.clone());
    }
    out
}
