use std::fs;
use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use bestnode::cli::Cli;
use bestnode::generate::{generate, split_lines};
use bestnode::provider::Provider;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let raw_nodes = if cli.nodes.to_str() == Some("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| e.to_string())?;
        buf
    } else {
        read_file(&cli.nodes)?
    };
    let links = split_lines(&raw_nodes);

    let addresses = match &cli.ips {
        Some(path) => split_lines(&read_file(path)?),
        None => cli
            .provider
            .unwrap_or(Provider::Cloudflare)
            .addresses()
            .iter()
            .map(|s| s.to_string())
            .collect(),
    };

    let generated = generate(&links, &addresses).map_err(|e| e.to_string())?;

    let body = if cli.base64 {
        generated.to_subscription()
    } else {
        generated.to_text()
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, body.as_bytes()).map_err(|e| format!("{}: {}", path.display(), e))?;
        }
        None => println!("{body}"),
    }

    log::info!("generated {} nodes", generated.count());
    Ok(())
}

fn read_file(path: &std::path::Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))
}
