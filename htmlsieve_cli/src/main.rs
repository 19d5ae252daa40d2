extern crate env_logger;

pub mod options;

use clap::{CommandFactory, Parser};
use htmlsieve::{process_html, SieveConfig};
use options::Cli;
use std::error::Error;
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        use env_logger::Env;
        let env = Env::default()
            .filter_or("RUST_LOG", "info")
            .write_style_or("RUST_LOG_STYLE", "always");

        env_logger::init_from_env(env);
    }

    // nothing piped in and no file given
    if cli.input.is_none() && io::stdin().is_terminal() {
        let mut command = Cli::command();

        if command.print_help().is_err() {
            return ExitCode::FAILURE;
        }

        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let input_html = read_input(cli.input.as_deref())?;

    log::info!("read {} bytes of input", input_html.len());

    let config = SieveConfig {
        keep_whitespace: cli.keep_whitespace,
    };
    let output_html = process_html(&input_html, &config)?;

    log::info!("writing {} bytes of output", output_html.len());

    write_output(cli.output.as_deref(), &output_html)?;

    Ok(())
}

fn read_input(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut data = String::new();
            io::stdin().read_to_string(&mut data)?;
            Ok(data)
        }
    }
}

fn write_output(output: Option<&Path>, content: &str) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, content),
        None => io::stdout().write_all(content.as_bytes()),
    }
}
