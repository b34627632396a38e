use std::{env, process::ExitCode, rc::Rc, sync::Once, time::Instant};

use decaf_frontend::{
    config::{Config, USAGE},
    lexer::lexer::tokenize,
    parser::parser::parse,
    read_source, render_error,
};
use tracing::debug;

static TRACING_INIT: Once = Once::new();

/// Installs a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

fn main() -> ExitCode {
    init_tracing();

    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{}", error);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    let source = match read_source(&config.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{}", error);
            return ExitCode::FAILURE;
        }
    };

    let file_name = config.file_name();
    let start = Instant::now();
    let scan = tokenize(&source, Some(file_name.clone()));
    debug!(elapsed = ?start.elapsed(), "tokenized");

    if !config.quiet {
        for token in &scan.tokens {
            println!("{}", token);
        }
    }

    for diagnostic in &scan.diagnostics {
        eprint!("{}", render_error(diagnostic, &source));
    }

    let mut failed = scan.has_errors();

    if config.check_grammar {
        let parse_start = Instant::now();
        let (_, result) = parse(scan.tokens, Rc::new(file_name));
        debug!(elapsed = ?parse_start.elapsed(), "recognized");

        match result {
            Ok(_) => println!("syntax ok"),
            Err(error) => {
                eprint!("{}", render_error(&error, &source));
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
