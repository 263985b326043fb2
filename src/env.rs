/*!
Stand-ins for the build tool's construction environments, and the propagation
step that writes a resolved configuration into them.
*/

use indexmap::IndexMap;

use crate::config::{Define, FilterRule, ResolvedConfig};

/// The seam to the build tool: a write-only append target that also carries
/// construction variables.
pub trait BuildEnv {
    /// Reads a construction variable, if the environment defines it.
    fn var(&self, key: &str) -> Option<&str>;

    /// Appends preprocessor defines. Every environment supports these.
    fn append_defines(&mut self, defines: &[Define]);

    /// Appends source-filter rules. Only environments that carry a source
    /// filter override this; the default drops the rules.
    fn append_src_filter(&mut self, rules: &[FilterRule]) {
        let _ = rules;
    }
}

/// The per-library build environment: the only handle with a source filter.
#[derive(Debug, Clone, Default)]
pub struct LibraryEnv {
    vars: IndexMap<String, String>,
    pub src_filter: Vec<String>,
    pub cppdefines: Vec<String>,
}

impl LibraryEnv {
    pub fn new() -> Self {
        LibraryEnv::default()
    }

    pub fn set_var<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.vars.insert(key.into(), value.into());
    }
}

impl BuildEnv for LibraryEnv {
    fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    fn append_defines(&mut self, defines: &[Define]) {
        self.cppdefines
            .extend(defines.iter().map(ToString::to_string));
    }

    fn append_src_filter(&mut self, rules: &[FilterRule]) {
        self.src_filter.extend(rules.iter().map(ToString::to_string));
    }
}

/// A defines-only handle: the top-level project environment and the default
/// environment shared across all libraries both look like this.
#[derive(Debug, Clone, Default)]
pub struct ProjectEnv {
    vars: IndexMap<String, String>,
    pub cppdefines: Vec<String>,
}

impl ProjectEnv {
    pub fn new() -> Self {
        ProjectEnv::default()
    }

    pub fn set_var<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.vars.insert(key.into(), value.into());
    }
}

impl BuildEnv for ProjectEnv {
    fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    fn append_defines(&mut self, defines: &[Define]) {
        self.cppdefines
            .extend(defines.iter().map(ToString::to_string));
    }
}

/// Writes the resolved configuration into each handle, in order: filter
/// rules first (a no-op for handles without a source filter), then defines.
///
/// The handle list is explicit; no process-global environment is touched
/// behind the caller's back. Appends are not deduplicated, so this runs
/// exactly once per build invocation.
pub fn propagate(config: &ResolvedConfig, envs: &mut [&mut dyn BuildEnv]) {
    for env in envs.iter_mut() {
        env.append_src_filter(&config.src_filter);
        env.append_defines(&config.defines);
    }

    tracing::trace!(handles = envs.len(), "propagated build configuration");
}
