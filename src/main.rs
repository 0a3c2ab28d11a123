//! Homedeck CLI
//!
//! Usage:
//!   homedeck [OPTIONS] [CONFIG]
//!
//! Options:
//!   -o, --output <FILE>  Write the document to a file instead of stdout
//!   -t, --title <TITLE>  Override the page title
//!   --fragment           Emit the page fragment without the document shell
//!   --sample             Print a sample configuration and exit
//!   -h, --help           Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use homedeck::{config, render_with_options, DashboardConfig, RenderOptions};

#[derive(Parser)]
#[command(name = "homedeck")]
#[command(about = "Static service-dashboard generator")]
struct Cli {
    /// Config file in TOML format (reads from stdin if not provided)
    config: Option<PathBuf>,

    /// Write the document to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the page title
    #[arg(short, long)]
    title: Option<String>,

    /// Emit the page fragment without the document shell
    #[arg(long)]
    fragment: bool,

    /// Debug mode: print per-service icon decisions to stderr
    #[arg(short, long)]
    debug: bool,

    /// Print a sample configuration and exit
    #[arg(long)]
    sample: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.sample {
        println!("{}", config::sample());
        return;
    }

    // If no config file and stdin is a terminal (interactive), show intro help
    if cli.config.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load configuration
    let mut dashboard = match &cli.config {
        Some(path) => match DashboardConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
            match DashboardConfig::from_str(&buffer) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error parsing config: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    if let Some(title) = cli.title {
        dashboard.page.title = Some(title);
    }

    let options = RenderOptions::new()
        .with_fragment(cli.fragment)
        .with_debug(cli.debug);
    let html = render_with_options(&dashboard, options);

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &html) {
                eprintln!("Error writing '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => println!("{}", html),
    }
}

fn print_intro() {
    println!(
        r#"Homedeck - Static service-dashboard generator

USAGE:
    homedeck [OPTIONS] [CONFIG]
    homedeck --sample | homedeck

OPTIONS:
    -o, --output <FILE>   Write the document to a file instead of stdout
    -t, --title <TITLE>   Override the page title
    --fragment            Emit the page fragment without the document shell
    --sample              Print a sample configuration
    -d, --debug           Print per-service icon decisions to stderr
    -h, --help            Print help

QUICK START:
    homedeck --sample > home.toml
    homedeck home.toml -o index.html

Edit home.toml to list your own catalogs and services. A service icon can
be an image URL, an mdi- name (Material Design Icons), or a dashboard-icons
catalog name like "plex.png"; services without an icon get a colored
placeholder block."#
    );
}
