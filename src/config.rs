use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

/// Location of the optional user overlay.
const USER_CONFIG_PATH: &str = "~/.config/shoutout-guard/config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

// ── Final (merged) config types ──

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub heuristics: Heuristics,
    #[serde(default)]
    pub submission: SubmissionConfig,
    #[serde(default)]
    pub lexicons: Vec<Lexicon>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Verdict log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

/// Thresholds for the statistical checks.
///
/// Each check applies only when its minimum is exceeded, and fires only when
/// its ratio is strictly exceeded (or its run length reached).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Heuristics {
    pub caps_ratio: f64,
    pub caps_min_letters: usize,
    pub punctuation_ratio: f64,
    pub punctuation_min_length: usize,
    pub repeat_run: usize,
    pub repeat_min_length: usize,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            caps_ratio: 0.7,
            caps_min_letters: 10,
            punctuation_ratio: 0.3,
            punctuation_min_length: 15,
            repeat_run: 5,
            repeat_min_length: 5,
        }
    }
}

/// Limits applied to a whole shoutout before it is moderated.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubmissionConfig {
    pub max_message_chars: usize,
    pub default_sender: String,
    /// Frame ids a shoutout may be displayed in. The first is the default.
    pub frames: Vec<String>,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            max_message_chars: 200,
            default_sender: "Anonymous".into(),
            frames: vec!["heart".into(), "code".into(), "circuit".into()],
        }
    }
}

/// Blocking and warning terms for one locale.
///
/// Terms containing whitespace are phrases; all others are single words.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Lexicon {
    pub locale: String,
    #[serde(default)]
    pub block: Vec<String>,
    #[serde(default)]
    pub warn: Vec<String>,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    heuristics: HeuristicsOverlay,
    #[serde(default)]
    submission: SubmissionOverlay,
    /// Keyed by locale: `[lexicons.en]`.
    #[serde(default)]
    lexicons: BTreeMap<String, LexiconOverlay>,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    log_level: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct HeuristicsOverlay {
    caps_ratio: Option<f64>,
    caps_min_letters: Option<usize>,
    punctuation_ratio: Option<f64>,
    punctuation_min_length: Option<usize>,
    repeat_run: Option<usize>,
    repeat_min_length: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
struct SubmissionOverlay {
    #[serde(default)]
    replace: bool,
    max_message_chars: Option<usize>,
    default_sender: Option<String>,
    #[serde(default)]
    frames: Vec<String>,
    #[serde(default)]
    remove_frames: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
struct LexiconOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    block: Vec<String>,
    #[serde(default)]
    warn: Vec<String>,
    #[serde(default)]
    remove_block: Vec<String>,
    #[serde(default)]
    remove_warn: Vec<String>,
}

// ── Merge logic ──

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Path of the user overlay, with `~` expanded.
    pub fn user_config_path() -> PathBuf {
        PathBuf::from(shellexpand::tilde(USER_CONFIG_PATH).into_owned())
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/shoutout-guard/config.toml (if exists)
    ///
    /// User config merges with defaults: lists extend, scalars override.
    /// Set `replace = true` in a section to replace its defaults entirely.
    /// Use `remove_<field>` lists to subtract specific items from defaults.
    ///
    /// A broken overlay is logged and ignored; the defaults are always usable.
    pub fn load() -> Self {
        Self::load_or_default(Self::user_config_path())
    }

    /// Best-effort load of the overlay at `path`: a missing file is silent,
    /// an unreadable, malformed or invalid one is logged and ignored.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default_config();
        }
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default configuration");
                Self::default_config()
            }
        }
    }

    /// Load defaults merged with the overlay at `path` (tilde-expanded).
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = path.as_ref().to_string_lossy();
        let path = PathBuf::from(shellexpand::tilde(&raw).into_owned());
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let overlay: ConfigOverlay =
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;
        let mut config = Self::default_config();
        config.apply_overlay(overlay);
        config.validate()?;
        log::debug!("loaded configuration overlay from {}", path.display());
        Ok(config)
    }

    /// Reject thresholds and limits that cannot produce sensible verdicts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let h = &self.heuristics;
        for (name, ratio) in [
            ("caps_ratio", h.caps_ratio),
            ("punctuation_ratio", h.punctuation_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ConfigError::Invalid(format!(
                    "heuristics.{name} must be between 0 and 1, got {ratio}"
                )));
            }
        }
        if h.repeat_run < 2 {
            return Err(ConfigError::Invalid(format!(
                "heuristics.repeat_run must be at least 2, got {}",
                h.repeat_run
            )));
        }
        if self.submission.max_message_chars == 0 {
            return Err(ConfigError::Invalid(
                "submission.max_message_chars must be at least 1".into(),
            ));
        }
        if self.submission.frames.is_empty() {
            return Err(ConfigError::Invalid(
                "submission.frames must list at least one frame".into(),
            ));
        }
        Ok(())
    }

    /// Render the merged configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        // Settings: scalar overrides
        if let Some(v) = overlay.settings.log_level {
            self.settings.log_level = v;
        }

        // Heuristics: scalar overrides
        let h = overlay.heuristics;
        if let Some(v) = h.caps_ratio {
            self.heuristics.caps_ratio = v;
        }
        if let Some(v) = h.caps_min_letters {
            self.heuristics.caps_min_letters = v;
        }
        if let Some(v) = h.punctuation_ratio {
            self.heuristics.punctuation_ratio = v;
        }
        if let Some(v) = h.punctuation_min_length {
            self.heuristics.punctuation_min_length = v;
        }
        if let Some(v) = h.repeat_run {
            self.heuristics.repeat_run = v;
        }
        if let Some(v) = h.repeat_min_length {
            self.heuristics.repeat_min_length = v;
        }

        // Submission
        let s = overlay.submission;
        if let Some(v) = s.max_message_chars {
            self.submission.max_message_chars = v;
        }
        if let Some(v) = s.default_sender {
            self.submission.default_sender = v;
        }
        merge_list(
            &mut self.submission.frames,
            s.frames,
            &s.remove_frames,
            s.replace,
        );

        // Lexicons: merge into the matching locale, or append a new one
        for (locale, l) in overlay.lexicons {
            let index = match self.lexicons.iter().position(|x| x.locale == locale) {
                Some(i) => i,
                None => {
                    self.lexicons.push(Lexicon {
                        locale,
                        block: Vec::new(),
                        warn: Vec::new(),
                    });
                    self.lexicons.len() - 1
                }
            };
            let lexicon = &mut self.lexicons[index];
            merge_list(&mut lexicon.block, l.block, &l.remove_block, l.replace);
            merge_list(&mut lexicon.warn, l.warn, &l.remove_warn, l.replace);
        }
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }

    #[cfg(test)]
    fn lexicon(&self, locale: &str) -> &Lexicon {
        self.lexicons.iter().find(|l| l.locale == locale).unwrap()
    }
}
