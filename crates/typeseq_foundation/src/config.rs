//! Configuration for type-name resolution.

/// Controls how a [`crate::TypeRegistry`] matches type names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Match scalar, class, and interface names ignoring ASCII case.
    pub case_insensitive: bool,

    /// Accept short scalar aliases (`int`, `bool`, `str`, `nil`).
    pub accept_aliases: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            accept_aliases: true,
        }
    }
}

impl RegistryConfig {
    /// Creates a configuration that only accepts exact canonical names.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            case_insensitive: false,
            accept_aliases: false,
        }
    }

    /// Builder method to set case sensitivity.
    #[must_use]
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Builder method to enable or disable scalar aliases.
    #[must_use]
    pub fn with_aliases(mut self, accept_aliases: bool) -> Self {
        self.accept_aliases = accept_aliases;
        self
    }
}
