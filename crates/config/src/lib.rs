//! User configuration for moveit.
//!
//! The configuration is an optional RON file. Every field has a default, so
//! an absent file, an empty file and `()` all mean "defaults":
//!
//! ```ron
//! (
//!     split: 60,
//!     focus_margin: 35,
//!     struts: intersecting,
//!     unreadable_windows: skip,
//! )
//! ```

use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use moveit_core::{FocusOptions, ScanPolicy, StrutPolicy, focus::DEFAULT_MARGIN};
use serde::Deserialize;
use tracing::debug;

mod error;

#[cfg(test)]
mod test_parse;

pub use error::Error;

/// Default percentage of the head width given to the western side.
pub const DEFAULT_SPLIT: u32 = 60;

/// How panel struts shrink heads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrutMode {
    /// Only heads the strut's reserved band touches.
    #[default]
    Intersecting,
    /// Every head, against the desktop edge the strut is on.
    DesktopWide,
}

impl From<StrutMode> for StrutPolicy {
    fn from(mode: StrutMode) -> Self {
        match mode {
            StrutMode::Intersecting => Self::Intersecting,
            StrutMode::DesktopWide => Self::DesktopWide,
        }
    }
}

/// What a window with unreadable metadata does to a focus scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// Leave the window out and keep scanning.
    #[default]
    Skip,
    /// Fail the command.
    Abort,
}

impl From<ScanMode> for ScanPolicy {
    fn from(mode: ScanMode) -> Self {
        match mode {
            ScanMode::Skip => Self::Skip,
            ScanMode::Abort => Self::Abort,
        }
    }
}

/// Parsed user configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Percentage of the head width given to the western side (`0..=100`).
    pub split: u32,
    /// Pixels shaved off every edge of a focus target.
    pub focus_margin: u32,
    /// Strut policy.
    pub struts: StrutMode,
    /// Handling of unreadable windows during focus scans.
    pub unreadable_windows: ScanMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            split: DEFAULT_SPLIT,
            focus_margin: DEFAULT_MARGIN,
            struts: StrutMode::default(),
            unreadable_windows: ScanMode::default(),
        }
    }
}

impl Config {
    /// Check value ranges that the type system does not.
    pub fn validate(&self) -> Result<(), Error> {
        if self.split > 100 {
            return Err(Error::Validation {
                path: None,
                message: format!("split must be within 0..=100, got {}", self.split),
            });
        }
        Ok(())
    }

    /// Strut policy for head discovery.
    pub fn strut_policy(&self) -> StrutPolicy {
        self.struts.into()
    }

    /// Focus options with an optional margin override.
    pub fn focus_options(&self, margin: Option<u32>) -> FocusOptions {
        FocusOptions {
            margin: margin.unwrap_or(self.focus_margin),
            scan: self.unreadable_windows.into(),
        }
    }
}

/// Parse and validate a configuration from RON source. Blank input yields defaults.
pub fn load_from_str(source: &str) -> Result<Config, Error> {
    if source.trim().is_empty() {
        return Ok(Config::default());
    }
    let cfg: Config = ron::from_str(source).map_err(|e| Error::Parse {
        path: None,
        message: e.to_string(),
    })?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load a configuration file from `path`.
pub fn load_from_path(path: &Path) -> Result<Config, Error> {
    let source = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    load_from_str(&source).map_err(|e| e.with_path(path))
}

/// Config path under `xdg` (`$XDG_CONFIG_HOME`), else under `home` (`$HOME/.config`).
fn config_path_from(xdg: Option<OsString>, home: Option<OsString>) -> PathBuf {
    let mut p = match xdg.filter(|v| !v.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => {
            let mut p = PathBuf::from(home.unwrap_or_default());
            p.push(".config");
            p
        }
    };
    p.push("moveit");
    p.push("config.ron");
    p
}

/// Determine the preferred user config path (`$XDG_CONFIG_HOME/moveit/config.ron`).
pub fn default_config_path() -> PathBuf {
    config_path_from(env::var_os("XDG_CONFIG_HOME"), env::var_os("HOME"))
}

/// Resolve the effective config path using the default policy.
///
/// Policy:
/// 1) Use `explicit` when provided.
/// 2) Else use the default path when it exists.
/// 3) Else `None`: run with defaults.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let preferred = default_config_path();
    preferred.exists().then_some(preferred)
}

/// Load the effective configuration. A missing explicit file is an error; a
/// missing default file means defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config, Error> {
    match resolve_config_path(explicit) {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_from_path(&path)
        }
        None => {
            debug!("no config file, using defaults");
            Ok(Config::default())
        }
    }
}
