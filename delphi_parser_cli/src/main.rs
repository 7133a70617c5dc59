//! Command-line front end for `delphi_parser`.
//!
//! Usage:
//!   delphi-parse <input.pas>
//!   delphi-parse --version

use std::env;
use std::fs;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn usage() -> String {
    "Usage: delphi-parse <input.pas>\n       delphi-parse --version".to_string()
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut input_file = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", usage());
                return;
            }
            "-v" | "--version" => {
                println!("delphi-parse {VERSION}");
                return;
            }
            path => {
                if input_file.is_some() {
                    eprintln!("Unexpected argument: {path}");
                    eprintln!("{}", usage());
                    process::exit(1);
                }
                input_file = Some(path.to_string());
            }
        }
    }

    let Some(input_file) = input_file else {
        eprintln!("{}", usage());
        process::exit(1);
    };

    let source = match fs::read_to_string(&input_file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{input_file}: {err}");
            process::exit(1);
        }
    };

    match delphi_parser::parse(&source) {
        Ok(file) => {
            let json = serde_json::to_string_pretty(&file)
                .expect("AST serialization is infallible for this type");
            println!("{json}");
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
