// std imports
use std::path::PathBuf;

// third-party imports
use config::{Config, Environment, File, FileFormat};

// local imports
use crate::{error::Result, settings::DEFAULT_SETTINGS, settings::Options};

// ---

pub const APP_NAME: &str = "tiny-logger";
pub const ENV_PREFIX: &str = "TINY_LOGGER";
pub const CONFIG_ENV: &str = "TINY_LOGGER_CONFIG";

/// Loads options from the embedded defaults, the user configuration file
/// and `TINY_LOGGER_*` environment variables, in that order.
///
/// The user configuration file is taken from `TINY_LOGGER_CONFIG` if set,
/// otherwise `config.yaml` in the platform configuration directory is used
/// when it exists.
pub fn load() -> Result<Options> {
    let mut loader = Loader::default();

    match std::env::var_os(CONFIG_ENV) {
        Some(path) => loader.paths.push(path.into()),
        None => {
            if let Some(dir) = dirs::config_dir() {
                loader.optional.push(dir.join(APP_NAME).join("config.yaml"));
            }
        }
    }

    loader.load()
}

/// Returns a loader reading the given configuration files in order,
/// each of them must exist.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    Loader {
        paths: paths.into_iter().map(|path| path.into()).collect(),
        ..Default::default()
    }
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    optional: Vec<PathBuf>,
    no_default: bool,
    env: Option<Environment>,
}

impl Loader {
    /// Skips the embedded defaults, fields missing in every source fall
    /// back to [`Options::default`].
    pub fn no_default(self, val: bool) -> Self {
        Self { no_default: val, ..self }
    }

    /// Replaces the environment source, `None` disables it.
    pub fn env(self, env: Option<Environment>) -> Self {
        Self { env, ..self }
    }

    pub fn load(self) -> Result<Options> {
        let mut builder = Config::builder();

        if !self.no_default {
            builder = builder.add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        }

        for path in self.optional {
            log::debug!("loading optional configuration file {}", path.display());
            builder = builder.add_source(File::from(path).required(false));
        }

        for path in self.paths {
            log::debug!("loading configuration file {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        if let Some(env) = self.env {
            builder = builder.add_source(env);
        }

        let options: Options = builder.build()?.try_deserialize()?;
        log::debug!("loaded {:?}", options);

        Ok(options)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            optional: Vec::new(),
            no_default: false,
            env: Some(Environment::with_prefix(ENV_PREFIX)),
        }
    }
}
