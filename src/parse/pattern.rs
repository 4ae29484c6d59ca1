use std::sync::OnceLock;

use regex::Regex;
use scraper::Selector;

/// A selector or regex compiled on first use from a `'static` source string.
///
/// Patterns are literals checked by the tests, so a failure to compile is a
/// programming error and panics.
#[derive(Debug)]
pub struct LazyPattern<T> {
    cell: OnceLock<T>,
    source: &'static str,
    compile: fn(&'static str) -> T,
}

impl<T> LazyPattern<T> {
    pub const fn new(source: &'static str, compile: fn(&'static str) -> T) -> Self {
        Self {
            cell: OnceLock::new(),
            source,
            compile,
        }
    }
}

impl<T> core::ops::Deref for LazyPattern<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.cell.get_or_init(|| (self.compile)(self.source))
    }
}

pub fn compile_selector(source: &'static str) -> Selector {
    Selector::parse(source)
        .unwrap_or_else(|e| panic!("Error parsing static selector {source}: {e:?}"))
}

pub fn compile_regex(source: &'static str) -> Regex {
    Regex::new(source).unwrap_or_else(|e| panic!("Error parsing static regex {source}: {e}"))
}

#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::parse::pattern::LazyPattern<scraper::Selector> =
            $crate::parse::pattern::LazyPattern::new($sel, $crate::parse::pattern::compile_selector);
    };
}

#[macro_export]
macro_rules! static_regex {
    ($x: ident <- $re: literal) => {
        static $x: $crate::parse::pattern::LazyPattern<regex::Regex> =
            $crate::parse::pattern::LazyPattern::new($re, $crate::parse::pattern::compile_regex);
    };
}
