//! Cart CLI - command line interface for the cart widget core.
//!
//! Prints JSON envelopes so a widget shell can drive the core over stdio.

use cart_core::{catalog, ApiResponse, CartController, Error, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "cart")]
#[command(about = "Cart CLI - catalog lookups and interactive cart sessions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Catalog commands
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Run an interactive cart session (state lives for the process only)
    Session,
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List all catalog products
    List,
    /// Get a product by id
    Get {
        /// Product id
        #[arg(short, long)]
        id: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog { action } => println!("{}", handle_catalog(action)),
        Commands::Session => {
            if let Err(e) = run_session() {
                eprintln!("session error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn handle_catalog(action: CatalogAction) -> String {
    match action {
        CatalogAction::List => serde_json::to_string_pretty(&ApiResponse::ok(json!({
            "products": catalog::list_products(),
        })))
        .unwrap(),
        CatalogAction::Get { id } => match catalog::require_product(id) {
            Ok(product) => serde_json::to_string_pretty(&ApiResponse::ok(product)).unwrap(),
            Err(e) => serde_json::to_string_pretty(&ApiResponse::<()>::err(e.to_string())).unwrap(),
        },
    }
}

/// Line loop driving one in-memory controller until `quit` or EOF.
fn run_session() -> Result<()> {
    let mut controller = CartController::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        writeln!(stdout, "{}", execute(&mut controller, line))?;
    }

    Ok(())
}

fn execute(controller: &mut CartController, line: &str) -> String {
    match run_command(controller, line) {
        Ok(output) => output,
        Err(e) => serde_json::to_string_pretty(&ApiResponse::<()>::err(e.to_string())).unwrap(),
    }
}

fn run_command(controller: &mut CartController, line: &str) -> Result<String> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();

    let output = match command {
        "add" => {
            let product = catalog::require_product(parse_id(parts.next())?)?;
            let (item, was_increment) = controller.add_product(&product);
            serde_json::to_string_pretty(&ApiResponse::ok(json!({
                "item": item,
                "action": if was_increment { "incremented" } else { "added" },
            })))?
        }
        "inc" | "dec" => {
            let id = parse_id(parts.next())?;
            let delta = if command == "inc" { 1 } else { -1 };
            match controller.change_quantity(id, delta) {
                Some(item) => serde_json::to_string_pretty(&ApiResponse::ok(json!({
                    "item": item,
                })))?,
                None => serde_json::to_string_pretty(&ApiResponse::ok(json!({
                    "removed": id,
                })))?,
            }
        }
        "remove" => {
            let id = parse_id(parts.next())?;
            match controller.remove_item(id) {
                Some(item) => serde_json::to_string_pretty(&ApiResponse::ok(json!({
                    "removed": item,
                })))?,
                None => serde_json::to_string_pretty(&ApiResponse::ok(json!({
                    "noop": id,
                })))?,
            }
        }
        "items" => serde_json::to_string_pretty(&ApiResponse::ok(json!({
            "items": controller.items(),
        })))?,
        "lines" => serde_json::to_string_pretty(&ApiResponse::ok(json!({
            "lines": controller.display_lines(),
        })))?,
        "summary" => {
            let summary = controller.summary();
            let message = summary.gift_message();
            serde_json::to_string_pretty(&ApiResponse::ok(json!({
                "summary": summary,
                "message": message,
            })))?
        }
        "clear" => {
            controller.clear();
            serde_json::to_string_pretty(&ApiResponse::ok(json!({
                "cleared": true,
            })))?
        }
        "help" => serde_json::to_string_pretty(&ApiResponse::ok(json!({
            "commands": [
                "add <id>", "inc <id>", "dec <id>", "remove <id>",
                "items", "lines", "summary", "clear", "help", "quit",
            ],
        })))?,
        other => {
            return Err(Error::InvalidCommand(other.to_string()));
        }
    };

    Ok(output)
}

fn parse_id(arg: Option<&str>) -> Result<u32> {
    let arg = arg.ok_or_else(|| Error::InvalidCommand("missing product id".to_string()))?;
    arg.parse()
        .map_err(|_| Error::InvalidCommand(format!("invalid product id: {}", arg)))
}
