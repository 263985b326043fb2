/*!
The resolver's output model: signed source-filter rules and preprocessor
defines, in PlatformIO's `src_filter` / `CPPDEFINES` syntax.
*/

use std::fmt;

use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    #[display("+")]
    Include,
    #[display("-")]
    Exclude,
}

/// A signed path pattern, rendered as `+<pattern>` or `-<pattern>`.
///
/// Rules are handed to the downstream filtering engine in the order given;
/// precedence between overlapping rules is that engine's business
/// (last-matching-rule-wins for PlatformIO's `src_filter`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRule {
    pub sign: Sign,
    pub pattern: String,
}

impl FilterRule {
    pub fn include<P: Into<String>>(pattern: P) -> Self {
        FilterRule {
            sign: Sign::Include,
            pattern: pattern.into(),
        }
    }

    pub fn exclude<P: Into<String>>(pattern: P) -> Self {
        FilterRule {
            sign: Sign::Exclude,
            pattern: pattern.into(),
        }
    }
}

impl fmt::Display for FilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}>", self.sign, self.pattern)
    }
}

/// A preprocessor symbol, optionally carrying a value (`SYM` or `SYM=VAL`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    pub symbol: String,
    pub value: Option<String>,
}

impl Define {
    pub fn flag<S: Into<String>>(symbol: S) -> Self {
        Define {
            symbol: symbol.into(),
            value: None,
        }
    }

    pub fn value<S: Into<String>, V: Into<String>>(symbol: S, value: V) -> Self {
        Define {
            symbol: symbol.into(),
            value: Some(value.into()),
        }
    }
}

impl fmt::Display for Define {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.symbol, value),
            None => write!(f, "{}", self.symbol),
        }
    }
}

/// The pair the resolver produces for one build invocation.
///
/// Both sequences are order-preserving: filter rules because the downstream
/// engine evaluates them in sequence, defines because some build backends are
/// sensitive to definition order. Never persisted; built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedConfig {
    pub src_filter: Vec<FilterRule>,
    pub defines: Vec<Define>,
}

impl ResolvedConfig {
    /// The "no override" result: the build tool's own defaults apply.
    pub fn empty() -> Self {
        ResolvedConfig::default()
    }

    pub fn is_empty(&self) -> bool {
        self.src_filter.is_empty() && self.defines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rule_rendering() {
        assert_eq!(FilterRule::include("*").to_string(), "+<*>");
        assert_eq!(FilterRule::exclude("tests/").to_string(), "-<tests/>");
        assert_eq!(
            FilterRule::exclude("system/arduino/opencr").to_string(),
            "-<system/arduino/opencr>"
        );
    }

    #[test]
    fn define_rendering() {
        assert_eq!(Define::flag("ZENOH_ZEPHYR").to_string(), "ZENOH_ZEPHYR");
        assert_eq!(
            Define::value("ZENOH_C_STANDARD", "99").to_string(),
            "ZENOH_C_STANDARD=99"
        );
    }

    #[test]
    fn empty_config() {
        assert!(ResolvedConfig::empty().is_empty());
        let config = ResolvedConfig {
            src_filter: vec![FilterRule::include("*")],
            defines: vec![],
        };
        assert!(!config.is_empty());
    }
}
