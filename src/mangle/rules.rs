//! Special-case tables consulted by [`NameMangler`](super::NameMangler)
//!
//! Tables are checked in declaration order and the first match wins.

/// How a fixed target recognizes an upstream name
#[derive(Debug, Clone, Copy)]
pub(super) enum Matcher {
    Exact(&'static str),
    Contains(&'static str),
}

/// Upstream names that always map to one distribution package
#[derive(Debug)]
pub(super) struct FixedTarget {
    pub matcher: Matcher,
    /// Package name placed after the language prefix
    pub package: &'static str,
}

impl FixedTarget {
    pub fn matches(&self, name: &str) -> bool {
        match self.matcher {
            Matcher::Exact(expected) => name == expected,
            Matcher::Contains(needle) => name.contains(needle),
        }
    }
}

// `asn1-modules` must stay ahead of `asn1`, which matches a superset.
pub(super) static FIXED_TARGETS: &[FixedTarget] = &[
    FixedTarget {
        matcher: Matcher::Exact("dnspython"),
        package: "dns",
    },
    FixedTarget {
        matcher: Matcher::Contains("asn1-modules"),
        package: "pyasn1-modules",
    },
    FixedTarget {
        matcher: Matcher::Contains("asn1"),
        package: "pyasn1",
    },
];

/// Exact names whose casing the distribution drops
pub(super) static CASE_FOLDS: &[(&str, &str)] = &[
    ("BeautifulSoup4", "beautifulsoup4"),
    ("Jinja2", "jinja2"),
    ("Werkzeug", "werkzeug"),
    ("Babel", "babel"),
];

/// A prefix rule: predicate on the (case-folded) name plus the rendering
pub(super) struct Rule {
    pub label: &'static str,
    pub applies: fn(&str) -> bool,
    pub render: fn(&str, &str) -> String,
}

// `py` strips the prefix, so it must come after every rule that keeps it.
pub(super) static RULES: &[Rule] = &[
    Rule {
        label: "already-prefixed",
        applies: already_prefixed,
        render: keep,
    },
    Rule {
        label: "pytz",
        applies: is_pytz,
        render: prefixed,
    },
    Rule {
        label: "lowercase",
        applies: is_lowercased_package,
        render: prefixed_lowercase,
    },
    Rule {
        label: "strip-py",
        applies: has_py_prefix,
        render: prefixed_without_py,
    },
];

fn already_prefixed(name: &str) -> bool {
    name.starts_with("python")
}

fn is_pytz(name: &str) -> bool {
    name.starts_with("pytz")
}

fn is_lowercased_package(name: &str) -> bool {
    name.starts_with("PySocks") || name.starts_with("pyaes")
}

fn has_py_prefix(name: &str) -> bool {
    name.starts_with("py")
}

fn keep(_prefix: &str, name: &str) -> String {
    name.to_string()
}

fn prefixed(prefix: &str, name: &str) -> String {
    format!("{}-{}", prefix, name)
}

fn prefixed_lowercase(prefix: &str, name: &str) -> String {
    format!("{}-{}", prefix, name.to_lowercase())
}

fn prefixed_without_py(prefix: &str, name: &str) -> String {
    format!("{}-{}", prefix, name.strip_prefix("py").unwrap_or(name))
}
