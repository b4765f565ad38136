//! Environment lookup as an injected capability.
//!
//! The composer never reads `std::env` directly; it takes an `EnvSource` so
//! tests can supply deterministic values without mutating process state.

/// A source of environment variable values.
pub trait EnvSource {
    /// Look up a variable, `None` if unset or not valid unicode.
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed map of variables for tests.
#[cfg(test)]
pub struct MapEnv(pub std::collections::HashMap<String, String>);

#[cfg(test)]
impl MapEnv {
    pub fn empty() -> Self {
        Self(std::collections::HashMap::new())
    }

    pub fn with(name: &str, value: &str) -> Self {
        let mut vars = std::collections::HashMap::new();
        vars.insert(name.to_string(), value.to_string());
        Self(vars)
    }
}

#[cfg(test)]
impl EnvSource for MapEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}
