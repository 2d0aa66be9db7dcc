use std::{env, fs::read_to_string, io, process::ExitCode};

use monkey::{
    config::config::{Config, Mode},
    errors::errors::Error,
    lexer::{lexer::{tokenize, Lexer}, tokens::TokenKind},
    render_error, repl,
};

fn main() -> ExitCode {
    init_tracing();

    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
            eprintln!("usage: monkey [--strict] [FILE]");
            return ExitCode::FAILURE;
        }
    };

    match run(config) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<ExitCode, Error> {
    let path = match config.mode {
        Mode::Repl => {
            let stdin = io::stdin().lock();
            let mut stdout = io::stdout().lock();
            repl::repl::start(stdin, &mut stdout)?;
            return Ok(ExitCode::SUCCESS);
        }
        Mode::File(path) => path,
    };

    let file_contents = read_to_string(&path)?;
    tracing::info!(path = %path.display(), strict = config.strict, "tokenizing file");

    if config.strict {
        match tokenize(file_contents.clone(), Some(path.display().to_string())) {
            Ok(tokens) => tokens.iter().for_each(|token| println!("{}", token)),
            Err(error) => {
                eprint!("{}", render_error(&error, &file_contents));
                return Ok(ExitCode::FAILURE);
            }
        }
    } else {
        for token in Lexer::new(&file_contents).into_tokens() {
            if token.kind == TokenKind::Illegal {
                tracing::warn!(literal = %token.literal, "illegal character");
            }
            println!("{}", token);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(io::stderr))
            .with(filter)
            .init();
    }
}
