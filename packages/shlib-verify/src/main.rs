mod exports;

use std::fs::File;
use std::path::PathBuf;
use std::process::exit;

use clap::error::ErrorKind;
use clap::Parser;

use shlib_lib::SharedLibrary;
use verify_lib::export::{table_len, ExportCheck};
use verify_lib::run::RunOutcome;
use verify_lib::{all_skipped, Verify, SKIP_SENTINEL};

use crate::exports::{CRYPTO_EXPORT_TABLE, SSL_EXPORT_TABLE};

const EXIT_USAGE: i32 = 126;

#[derive(Parser, Debug)]
struct Args {
    #[arg(help = "Path to the crypto shared library, or '-' to skip it")]
    crypto: String,
    #[arg(help = "Path to the ssl shared library, or '-' to skip it")]
    ssl: String,
    #[arg(short, long, help = "Write a JSON report to this file")]
    output: Option<PathBuf>,
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let _ = error.print();
            match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit(0),
                _ => exit(EXIT_USAGE),
            }
        }
    };
    if args.crypto.is_empty() {
        println!("ERROR: crypto shlib path is not given as first argument of command line.");
        exit(EXIT_USAGE);
    }
    if args.ssl.is_empty() {
        println!("ERROR: ssl shlib path is not given as second argument of command line.");
        exit(EXIT_USAGE);
    }
    if all_skipped([args.crypto.as_str(), args.ssl.as_str()]) {
        println!("ERROR: all libraries are skipped, nothing to verify.");
        exit(EXIT_USAGE);
    }

    let mut outcome = RunOutcome::default();
    check_library(&args.crypto, CRYPTO_EXPORT_TABLE, args.debug, &mut outcome);
    check_library(&args.ssl, SSL_EXPORT_TABLE, args.debug, &mut outcome);

    if let Some(output) = &args.output {
        serde_json::to_writer_pretty(&mut File::create(output).unwrap(), &outcome).unwrap();
    }
    exit(outcome.exit_code());
}

fn check_library(path: &str, expected: &[&str], debug: u8, outcome: &mut RunOutcome) {
    if path == SKIP_SENTINEL {
        return;
    }
    let library = match SharedLibrary::open(path) {
        Ok(library) => library,
        Err(error) => {
            println!("ERROR: {error}");
            outcome.record_load_failure(error.into());
            return;
        }
    };
    println!("INFO: loaded library: '{path}'");
    if debug > 0 {
        eprintln!("Checking {} symbols in '{path}'", table_len(expected));
    }
    let result = ExportCheck { path, expected }.verify(&|name| {
        return library
            .resolve(name)
            .map(|_| ())
            .map_err(|error| error.diagnostic);
    });
    for missing in &result.missing {
        println!(
            "    BAD SYMBOL: '{}', dlerror: {}",
            missing.name, missing.diagnostic
        );
    }
    println!(
        "SYMBOLS: good / bad / total --- {} / {} / {}",
        result.good, result.bad, result.checked
    );
    outcome.record_result(result);
    library.close().ok();
}
