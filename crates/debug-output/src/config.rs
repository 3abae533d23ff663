//! crates/debug-output/src/config.rs
//! Plain-text echo configuration read once from the process environment.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Variable selecting verbose or silent echo.
pub const DEBUG_ENV: &str = "GLDEBUG";

/// Variable naming the file that receives echo output instead of stderr.
pub const LOG_FILE_ENV: &str = "GLDEBUG_LOG_FILE";

/// Whether errors, warnings, and debug notes are echoed as text, and where.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EchoConfig {
    /// Echo is printed when `true`.
    pub verbose: bool,
    /// Target file; stderr when `None` or when the file cannot be created.
    pub log_file: Option<PathBuf>,
}

impl EchoConfig {
    /// Configuration that never prints.
    #[must_use]
    pub const fn silent() -> Self {
        Self {
            verbose: false,
            log_file: None,
        }
    }

    /// Configuration that prints to stderr.
    #[must_use]
    pub const fn verbose() -> Self {
        Self {
            verbose: true,
            log_file: None,
        }
    }

    /// Same configuration writing to `path`.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Target file, if one was named.
    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Reads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Builds the configuration from an arbitrary variable lookup, using the
    /// rules of the current build profile.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        Self::from_lookup_with_build(lookup, cfg!(debug_assertions))
    }

    /// Builds the configuration from a lookup with explicit profile rules.
    ///
    /// Debug builds echo unless [`DEBUG_ENV`] contains `silent`. Release
    /// builds echo only when [`DEBUG_ENV`] is set at all.
    pub fn from_lookup_with_build<F>(lookup: F, debug_build: bool) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let flags = lookup(DEBUG_ENV);
        let verbose = if debug_build {
            !flags
                .as_ref()
                .is_some_and(|value| value.to_string_lossy().contains("silent"))
        } else {
            flags.is_some()
        };
        let log_file = lookup(LOG_FILE_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self { verbose, log_file }
    }

    /// Process-wide configuration, read from the environment on first use.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<EchoConfig> = OnceLock::new();
        GLOBAL.get_or_init(Self::from_env)
    }
}
