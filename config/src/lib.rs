//! Configuration loading for GymMatch.
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//!
//! [swipe]
//! threshold_px = 100
//! delay_ms = 200
//! animation_ms = 300
//!
//! [roster]
//! path = "athletes.toml"
//! ```

use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

use gymmatch_types::ui::{DEFAULT_CARD_ANIMATION, UiOptions};
use gymmatch_types::{Profile, RosterError, SWIPE_THRESHOLD_PX, validate_roster};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "GYMMATCH_CONFIG";

/// Delay between a swipe and the deck advancing, leaving room for the exit motion.
pub const DEFAULT_SWIPE_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Default, Deserialize)]
pub struct GymMatchConfig {
    pub app: Option<AppConfig>,
    pub swipe: Option<SwipeConfig>,
    pub roster: Option<RosterConfig>,
    /// File this config was read from. Relative roster paths resolve
    /// against its directory.
    #[serde(skip)]
    origin: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid roster {}: {source}", path.display())]
    Roster { path: PathBuf, source: RosterError },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Roster { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and borders.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable card motion effects.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct SwipeConfig {
    /// Release offset a drag must exceed to swipe. Default: 100.
    pub threshold_px: Option<f32>,
    /// Delay before the deck advances after a swipe. Default: 200.
    pub delay_ms: Option<u64>,
    /// Duration of the enter/exit/snap-back motion. Default: 300.
    pub animation_ms: Option<u64>,
    /// Override the pixel width of a terminal column. Defaults to the
    /// terminal's reported size, or 8 when it reports none.
    pub px_per_cell: Option<f32>,
}

/// Where the profiles come from.
///
/// ```toml
/// [roster]
/// path = "~/athletes.toml"
///
/// [[roster.profiles]]
/// id = 4
/// name = "Deniz"
/// age = 31
/// distance = "1 km"
/// specialty = "Calisthenics"
/// stats = [{ key = "pullups", value = "25" }]
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct RosterConfig {
    pub path: Option<String>,
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

/// Shape of a standalone roster file.
#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    profiles: Vec<Profile>,
}

/// Resolved swipe tuning, with invalid values replaced by defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeSettings {
    pub threshold_px: f32,
    pub delay: Duration,
    pub animation: Duration,
    pub px_per_cell: Option<f32>,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            threshold_px: SWIPE_THRESHOLD_PX,
            delay: DEFAULT_SWIPE_DELAY,
            animation: DEFAULT_CARD_ANIMATION,
            px_per_cell: None,
        }
    }
}

impl GymMatchConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| {
            tracing::warn!("Failed to read config at {:?}: {}", path, source);
            ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|source| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, source);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        config.origin = Some(path.to_path_buf());
        Ok(config)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn swipe_settings(&self) -> SwipeSettings {
        let mut settings = SwipeSettings::default();
        let Some(swipe) = self.swipe.as_ref() else {
            return settings;
        };

        match swipe.threshold_px {
            Some(px) if px.is_finite() && px > 0.0 => settings.threshold_px = px,
            Some(px) => tracing::warn!(
                "Ignoring swipe.threshold_px = {px}; using {}",
                SWIPE_THRESHOLD_PX
            ),
            None => {}
        }
        if let Some(ms) = swipe.delay_ms {
            settings.delay = Duration::from_millis(ms);
        }
        if let Some(ms) = swipe.animation_ms {
            settings.animation = Duration::from_millis(ms);
        }
        match swipe.px_per_cell {
            Some(px) if px.is_finite() && px > 0.0 => settings.px_per_cell = Some(px),
            Some(px) => tracing::warn!("Ignoring swipe.px_per_cell = {px}"),
            None => {}
        }
        settings
    }

    /// Profiles for the deck.
    ///
    /// A roster file listed under `[roster] path` comes first, followed by
    /// inline `[[roster.profiles]]`. Without either, the built-in demo roster
    /// is used.
    pub fn profiles(&self) -> Result<Vec<Profile>, ConfigError> {
        let Some(roster) = self.roster.as_ref() else {
            return Ok(Profile::builtin_roster());
        };
        if roster.path.is_none() && roster.profiles.is_empty() {
            return Ok(Profile::builtin_roster());
        }

        let mut profiles = Vec::new();
        let mut roster_path = self.origin.clone().unwrap_or_default();
        if let Some(raw) = roster.path.as_deref() {
            let path = self.resolve_roster_path(raw);
            profiles.extend(load_roster_file(&path)?);
            roster_path = path;
        }
        profiles.extend(roster.profiles.iter().cloned());

        if let Err(source) = validate_roster(&profiles) {
            return Err(ConfigError::Roster {
                path: roster_path,
                source,
            });
        }
        if profiles.is_empty() {
            tracing::warn!("Roster at {:?} has no profiles", roster_path);
        }
        Ok(profiles)
    }

    fn resolve_roster_path(&self, raw: &str) -> PathBuf {
        let expanded = expand_env_vars(raw);
        let path = match expanded.strip_prefix("~/") {
            Some(rest) => dirs::home_dir()
                .map_or_else(|| PathBuf::from(&expanded), |home| home.join(rest)),
            None => PathBuf::from(&expanded),
        };
        if path.is_relative()
            && let Some(base) = self.origin.as_deref().and_then(Path::parent)
        {
            return base.join(path);
        }
        path
    }
}

fn load_roster_file(path: &Path) -> Result<Vec<Profile>, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: RosterFile = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = file.profiles.len(), "Loaded roster file");
    Ok(file.profiles)
}

pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let var = &after[..end];
                if !var.is_empty() {
                    out.push_str(&env::var(var).unwrap_or_default());
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".gymmatch").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("create file");
        file.write_all(body.as_bytes()).expect("write file");
        path
    }

    #[test]
    fn expand_env_vars_no_vars() {
        assert_eq!(expand_env_vars("hello world"), "hello world");
    }

    #[test]
    fn expand_env_vars_single_var() {
        unsafe {
            std::env::set_var("GYMMATCH_TEST_ROSTER_DIR", "/data");
        }
        assert_eq!(
            expand_env_vars("${GYMMATCH_TEST_ROSTER_DIR}/athletes.toml"),
            "/data/athletes.toml"
        );
        unsafe {
            std::env::remove_var("GYMMATCH_TEST_ROSTER_DIR");
        }
    }

    #[test]
    fn config_path_honors_env_override() {
        unsafe {
            std::env::set_var(CONFIG_ENV_VAR, "/tmp/gymmatch-alt.toml");
        }
        assert_eq!(config_path(), Some(PathBuf::from("/tmp/gymmatch-alt.toml")));

        unsafe {
            std::env::set_var(CONFIG_ENV_VAR, "");
        }
        let fallback = dirs::home_dir().map(|home| home.join(".gymmatch").join("config.toml"));
        assert_eq!(config_path(), fallback);

        unsafe {
            std::env::remove_var(CONFIG_ENV_VAR);
        }
    }

    #[test]
    fn expand_env_vars_unterminated_kept() {
        assert_eq!(expand_env_vars("a ${oops"), "a ${oops");
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: GymMatchConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config.ui_options(), UiOptions::default());
        assert_eq!(config.swipe_settings(), SwipeSettings::default());
        let profiles = config.profiles().expect("builtin roster");
        assert_eq!(profiles.len(), 3);
    }

    #[test]
    fn app_section_maps_to_ui_options() {
        let config: GymMatchConfig =
            toml::from_str("[app]\nascii_only = true\nreduced_motion = true\n").expect("parses");
        let options = config.ui_options();
        assert!(options.ascii_only);
        assert!(options.reduced_motion);
        assert!(!options.high_contrast);
    }

    #[test]
    fn swipe_section_overrides_defaults() {
        let config: GymMatchConfig = toml::from_str(
            "[swipe]\nthreshold_px = 60.0\ndelay_ms = 0\nanimation_ms = 120\npx_per_cell = 9.5\n",
        )
        .expect("parses");
        let settings = config.swipe_settings();
        assert!((settings.threshold_px - 60.0).abs() < f32::EPSILON);
        assert_eq!(settings.delay, Duration::ZERO);
        assert_eq!(settings.animation, Duration::from_millis(120));
        assert_eq!(settings.px_per_cell, Some(9.5));
    }

    #[test]
    fn invalid_threshold_falls_back() {
        let config: GymMatchConfig =
            toml::from_str("[swipe]\nthreshold_px = -5.0\npx_per_cell = 0.0\n").expect("parses");
        let settings = config.swipe_settings();
        assert!((settings.threshold_px - SWIPE_THRESHOLD_PX).abs() < f32::EPSILON);
        assert_eq!(settings.px_per_cell, None);
    }

    #[test]
    fn inline_roster_replaces_builtin() {
        let config: GymMatchConfig = toml::from_str(
            r#"
            [[roster.profiles]]
            id = 10
            name = "Deniz"
            age = 31
            distance = "1 km"
            specialty = "Calisthenics"
            "#,
        )
        .expect("parses");
        let profiles = config.profiles().expect("valid roster");
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name.as_str(), "Deniz");
    }

    #[test]
    fn roster_file_resolves_relative_to_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_config(
            dir.path(),
            "athletes.toml",
            r#"
            [[profiles]]
            id = 1
            name = "Ece"
            age = 27
            distance = "3 km"
            specialty = "Olympic lifting"
            stats = [{ key = "snatch", value = "70kg" }]
            "#,
        );
        let config_file = write_config(
            dir.path(),
            "config.toml",
            "[roster]\npath = \"athletes.toml\"\n",
        );

        let config = GymMatchConfig::load_from(&config_file).expect("config loads");
        let profiles = config.profiles().expect("roster loads");
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].headline(), "Ece, 27");
    }

    #[test]
    fn missing_roster_file_is_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config_file = write_config(
            dir.path(),
            "config.toml",
            "[roster]\npath = \"nope.toml\"\n",
        );
        let config = GymMatchConfig::load_from(&config_file).expect("config loads");
        let err = config.profiles().expect_err("missing roster");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.path().ends_with("nope.toml"));
    }

    #[test]
    fn duplicate_ids_across_sources_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_config(
            dir.path(),
            "athletes.toml",
            "[[profiles]]\nid = 1\nname = \"Ece\"\nage = 27\ndistance = \"3 km\"\nspecialty = \"Yoga\"\n",
        );
        let config_file = write_config(
            dir.path(),
            "config.toml",
            "[roster]\npath = \"athletes.toml\"\n\n[[roster.profiles]]\nid = 1\nname = \"Ali\"\nage = 30\ndistance = \"1 km\"\nspecialty = \"Boxing\"\n",
        );
        let config = GymMatchConfig::load_from(&config_file).expect("config loads");
        assert!(matches!(
            config.profiles(),
            Err(ConfigError::Roster {
                source: RosterError::DuplicateId(1),
                ..
            })
        ));
    }

    #[test]
    fn malformed_config_is_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config_file = write_config(dir.path(), "config.toml", "[app\nascii_only = ");
        assert!(matches!(
            GymMatchConfig::load_from(&config_file),
            Err(ConfigError::Parse { .. })
        ));
    }
}
