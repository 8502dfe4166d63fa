//! Machine descriptions loaded from TOML.
//!
//! ```toml
//! plugboard = { pairs = "AM FI NV PS TU WZ" }
//! reflector = { preset = "B" }
//! rotors = [
//!     { preset = "III" },                               # fastest
//!     { wiring = "AJDKSIRUXBLHWTMCQGZNPYFVOE:E" },
//!     { file = "rotors/rotor_i.txt" },                  # slowest
//! ]
//! positions = "AAA"
//! ```
//!
//! Each stage names exactly one wiring source. Relative `file` paths are
//! resolved against the directory holding the config file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigurationError;
use crate::machine::EnigmaMachine;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::utils::alphabet::parse_positions;

/// Where a stage's wiring comes from. Exactly one field must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WiringSource {
    /// Name of a built-in rotor or reflector.
    pub preset: Option<String>,
    /// Inline wiring text (rotors include separator and notch).
    pub wiring: Option<String>,
    /// Path to a wiring file.
    pub file: Option<PathBuf>,
    /// Letter pairs (plugboard and reflector only).
    pub pairs: Option<String>,
}

enum Source<'a> {
    Preset(&'a str),
    Wiring(&'a str),
    File(&'a Path),
    Pairs(&'a str),
}

impl WiringSource {
    pub fn preset(name: impl Into<String>) -> Self {
        WiringSource {
            preset: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn wiring(text: impl Into<String>) -> Self {
        WiringSource {
            wiring: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        WiringSource {
            file: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn pairs(pairs: impl Into<String>) -> Self {
        WiringSource {
            pairs: Some(pairs.into()),
            ..Default::default()
        }
    }

    fn resolve(&self) -> Result<Source<'_>, ConfigurationError> {
        let mut found = Vec::with_capacity(1);
        if let Some(name) = &self.preset {
            found.push(Source::Preset(name));
        }
        if let Some(text) = &self.wiring {
            found.push(Source::Wiring(text));
        }
        if let Some(path) = &self.file {
            found.push(Source::File(path));
        }
        if let Some(pairs) = &self.pairs {
            found.push(Source::Pairs(pairs));
        }
        match found.len() {
            1 => Ok(found.remove(0)),
            _ => Err(ConfigurationError::MissingWiring),
        }
    }
}

/// A complete machine description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MachineConfig {
    /// Plugboard wiring; no cables when absent.
    pub plugboard: Option<WiringSource>,
    /// Reflector wiring; required.
    pub reflector: Option<WiringSource>,
    /// Rotors, fastest first.
    #[serde(default)]
    pub rotors: Vec<WiringSource>,
    /// Initial positions, letters or numbers, fastest first; all `A` when absent.
    pub positions: Option<String>,
    #[serde(skip)]
    base_dir: PathBuf,
}

impl MachineConfig {
    /// Enigma I with rotors I-II-III (window order), reflector B, no plugs.
    pub fn historical_default() -> Self {
        MachineConfig {
            plugboard: None,
            reflector: Some(WiringSource::preset("B")),
            rotors: ["III", "II", "I"]
                .into_iter()
                .map(WiringSource::preset)
                .collect(),
            positions: None,
            base_dir: PathBuf::new(),
        }
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    /// - [`ConfigurationError::Io`] if the file cannot be read.
    /// - [`ConfigurationError::Parse`] if it is not a valid description.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigurationError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let mut config: MachineConfig =
            toml::from_str(&contents).map_err(|e| ConfigurationError::Parse {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        tracing::debug!(
            path = %path.display(),
            rotors = config.rotors.len(),
            "machine config loaded"
        );
        Ok(config)
    }

    /// Parses a TOML description held in memory.
    ///
    /// # Parameters
    /// - `text`: The TOML document.
    /// - `base_dir`: Directory against which relative `file` paths resolve.
    ///
    /// # Errors
    /// [`ConfigurationError::Parse`] if `text` is not a valid description.
    pub fn from_toml_str(text: &str, base_dir: impl Into<PathBuf>) -> Result<Self, ConfigurationError> {
        let mut config: MachineConfig = toml::from_str(text).map_err(|e| ConfigurationError::Parse {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })?;
        config.base_dir = base_dir.into();
        Ok(config)
    }

    /// Initial positions, fastest first.
    ///
    /// # Errors
    /// As [`parse_positions`].
    pub fn initial_positions(&self) -> Result<Vec<u8>, ConfigurationError> {
        match &self.positions {
            Some(settings) => parse_positions(settings),
            None => Ok(vec![0; self.rotors.len()]),
        }
    }

    /// Builds the machine and applies the initial positions.
    ///
    /// Either every stage is built and the machine returned, or the first
    /// failure is returned and nothing is built.
    ///
    /// # Errors
    /// - [`ConfigurationError::MissingWiring`] if the reflector is absent or a
    ///   stage names zero or several sources.
    /// - Any error of the stage constructors, or of
    ///   [`EnigmaMachine::set_positions`].
    pub fn build(&self) -> Result<EnigmaMachine, ConfigurationError> {
        let plugboard = match &self.plugboard {
            None => Plugboard::identity(),
            Some(source) => match source.resolve()? {
                Source::Preset(name) => {
                    return Err(ConfigurationError::UnknownPreset {
                        name: name.to_string(),
                    })
                }
                Source::Wiring(text) => Plugboard::parse(text)?,
                Source::File(path) => Plugboard::from_file(self.base_dir.join(path))?,
                Source::Pairs(pairs) => Plugboard::from_pairs(pairs)?,
            },
        };

        let reflector = match self.reflector.as_ref().map(WiringSource::resolve).transpose()? {
            None => return Err(ConfigurationError::MissingWiring),
            Some(Source::Preset(name)) => Reflector::preset(name)?,
            Some(Source::Wiring(text)) => Reflector::parse(text)?,
            Some(Source::File(path)) => Reflector::from_file(self.base_dir.join(path))?,
            Some(Source::Pairs(pairs)) => Reflector::from_pairs(pairs)?,
        };

        let rotors = self
            .rotors
            .iter()
            .map(|source| match source.resolve()? {
                Source::Preset(name) => Rotor::preset(name),
                Source::Wiring(text) => Rotor::parse(text),
                Source::File(path) => Rotor::from_file(self.base_dir.join(path)),
                Source::Pairs(_) => Err(ConfigurationError::MissingNotch),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut machine = EnigmaMachine::new(plugboard, rotors, reflector);
        machine.set_positions(&self.initial_positions()?)?;
        Ok(machine)
    }
}
