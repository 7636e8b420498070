//! Japanese text transliteration.
//!
//! `Kanada` pairs a [`Config`] with an optional kanji dictionary and exposes
//! the fail-soft [`Kanada::process`] boundary: a conversion either succeeds
//! or hands back the input untouched.

pub mod trace_init;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, info_span, warn};

pub use kanada_core::config::{Annotation, Config, ConfigError, Preset, Target};
pub use kanada_core::dict::{DictError, Dictionary, KanwaBuilder, KanwaDictionary};
pub use kanada_core::romaji::{KanaTrie, RomanizationSystem};
pub use kanada_core::segment::Segmenter;
pub use kanada_core::{config, dict, remap, romaji, segment, unicode};

#[derive(Debug, thiserror::Error)]
pub enum KanadaError {
    #[error("dictionary error: {0}")]
    Dict(#[from] DictError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct Kanada {
    config: Config,
    dict: Option<Arc<dyn Dictionary>>,
}

impl Kanada {
    /// A converter without a dictionary: kana and symbols are remapped,
    /// kanji pass through.
    pub fn new(config: Config) -> Self {
        Self { config, dict: None }
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self::new(Config::preset(preset))
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, KanadaError> {
        Ok(Self::new(Config::from_toml(toml_str)?))
    }

    pub fn with_dictionary(mut self, dict: Arc<dyn Dictionary>) -> Self {
        self.dict = Some(dict);
        self
    }

    /// Open `path`, building it from `sources` first if it does not exist.
    ///
    /// On failure the dictionary is left unset, so kanji degrade to
    /// pass-through instead of failing every call.
    pub fn with_dictionary_files(mut self, path: &Path, sources: &[PathBuf]) -> Self {
        let _span = info_span!("dictionary", path = %path.display(), sources = sources.len())
            .entered();
        match KanwaDictionary::open_or_build(path, sources) {
            Ok(dict) => {
                info!(keys = dict.stats().indexed_keys, "dictionary ready");
                self.dict = Some(Arc::new(dict));
            }
            Err(e) => {
                warn!(error = %e, "dictionary unavailable, kanji will pass through");
                self.dict = None;
            }
        }
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn has_dictionary(&self) -> bool {
        self.dict.is_some()
    }

    /// Transliterate `text`. `None` stays `None`.
    pub fn process(&self, text: Option<&str>) -> Option<String> {
        text.map(|t| self.process_str(t))
    }

    /// Transliterate `text`, returning it unchanged if conversion fails.
    pub fn process_str(&self, text: &str) -> String {
        match self.try_process(text) {
            Ok(out) => out,
            Err(e) => {
                warn!(error = %e, len = text.len(), "conversion failed, returning input");
                text.to_string()
            }
        }
    }

    pub fn try_process(&self, text: &str) -> Result<String, KanadaError> {
        let segmenter = Segmenter::new(self.dict.as_deref(), &self.config);
        Ok(segmenter.parse(text)?)
    }

    /// Transliterate `reader` line by line into `writer`.
    ///
    /// Line terminators (`\n` or `\r\n`) are copied through as read. Each
    /// line is fail-soft like [`Kanada::process_str`]; only I/O errors are
    /// returned.
    pub fn process_reader(
        &self,
        mut reader: impl BufRead,
        mut writer: impl Write,
    ) -> Result<(), KanadaError> {
        let mut line = String::new();
        let mut lines = 0usize;
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            let content = line
                .strip_suffix("\r\n")
                .or_else(|| line.strip_suffix('\n'))
                .unwrap_or(&line);
            let terminator = &line[content.len()..];
            writer.write_all(self.process_str(content).as_bytes())?;
            writer.write_all(terminator.as_bytes())?;
            lines += 1;
        }
        writer.flush()?;
        debug!(lines, "stream converted");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
