//! Command-line tooling for the portal's catalog config.
//!
//! Examples:
//!   spotportal-cli list
//!   spotportal-cli --config portal.json validate
//!   spotportal-cli jsonld
//!   spotportal-cli session select 2 reload back
//!
//! Without `--config` the bundled catalog is used.

use std::error::Error;
use std::process;

use spotportal::prelude::*;
use tracing::{error, info};

mod session;

fn usage() -> ! {
    eprintln!("spotportal-cli (uses the bundled catalog unless --config is given)");
    eprintln!("Usage: spotportal-cli [--config path.json] <command> [args]\n");
    eprintln!("Commands:");
    eprintln!("  list                        Show the main game and the other games");
    eprintln!("  validate                    Check the catalog; exit 1 on error");
    eprintln!("  jsonld                      Print the JSON-LD site metadata");
    eprintln!("  session <step>...           Run steps against a fresh controller");
    eprintln!("                               steps: select <id> | back | reload");
    process::exit(1);
}

fn parse_args() -> (Option<String>, Vec<String>) {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        usage();
    }

    let mut config = None;
    if args.len() >= 2 && args[0] == "--config" {
        config = Some(args[1].clone());
        args.drain(0..2);
    }

    if args.is_empty() {
        usage();
    }

    (config, args)
}

fn load_config(path: Option<&str>) -> Result<PortalConfig, ConfigError> {
    match path {
        Some(p) => {
            info!(path = p, "loading config");
            PortalConfig::from_path(p)
        }
        None => Ok(PortalConfig::builtin()),
    }
}

fn print_game(role: &str, game: &Game) {
    println!(
        "{role:<6} {:<5} {:<32} {:<12} {:<7} {}",
        game.id.to_string(),
        game.title,
        game.category,
        game.difficulty,
        game.content_source
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so `jsonld` output stays pipeable.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let (config_path, args) = parse_args();
    let cmd = args[0].as_str();

    match cmd {
        "list" => {
            let catalog = load_config(config_path.as_deref())?.into_catalog()?;
            print_game("main", catalog.main());
            for game in catalog.others() {
                print_game("other", game);
            }
        }
        "validate" => {
            let result = load_config(config_path.as_deref()).and_then(PortalConfig::into_catalog);
            match result {
                Ok(catalog) => println!("ok: {} games", catalog.len()),
                Err(e) => {
                    error!("validation failed: {e}");
                    eprintln!("invalid: {e}");
                    process::exit(1);
                }
            }
        }
        "jsonld" => {
            let cfg = load_config(config_path.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&cfg.site.to_json_ld())?);
        }
        "session" => {
            let steps = session::parse_steps(&args[1..])?;
            let catalog = load_config(config_path.as_deref())?.into_catalog()?;
            let mut view = ViewController::new(catalog);
            println!(
                "{:<12} {:<14} gen={:<3} {}",
                "start",
                session::describe_selection(view.selection()),
                view.frame().generation,
                view.rendered_source()
            );
            for step in steps {
                println!("{}", session::run_step(&mut view, step));
            }
        }
        _ => {
            eprintln!("Unknown command: {cmd}");
            usage();
        }
    }

    Ok(())
}
