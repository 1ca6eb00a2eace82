use std::process;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use numeral::{Config, NumberConverter, TracingDiagnostics};

fn main() {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let request = match config.request() {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let converter = NumberConverter::new().with_diagnostics(Arc::new(TracingDiagnostics));

    // Tabla completa de casos
    if config.table {
        match converter.declension_table(request.number, request.gender) {
            Ok(rows) => {
                for (case, text) in rows {
                    println!("{}\t{}", case, text);
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    match converter.convert(request.number, request.gender, request.case) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
