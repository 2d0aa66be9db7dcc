use std::path::PathBuf;

use crate::{errors::errors::{Error, ErrorImpl}, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Repl,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    /// Stop at the first illegal character instead of printing it as a token.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::Repl,
            strict: false,
        }
    }
}

impl Config {
    /// Builds a config from command-line arguments, excluding the program name.
    ///
    /// Usage: `monkey [--strict] [FILE]`
    pub fn from_args<I>(args: I) -> Result<Config, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut positional = vec![];

        for arg in args {
            if arg == "--strict" {
                config.strict = true;
            } else if arg.starts_with("--") {
                return Err(Error::new(
                    ErrorImpl::UnknownFlag { flag: arg },
                    Position::null(),
                ));
            } else {
                positional.push(arg);
            }
        }

        if positional.len() > 1 {
            return Err(Error::new(
                ErrorImpl::UnexpectedArguments { expected: 1, received: positional.len() },
                Position::null(),
            ));
        }

        if let Some(file) = positional.pop() {
            config.mode = Mode::File(PathBuf::from(file));
        }

        Ok(config)
    }
}
