//! `tienda` — drive the inventory UI handlers against a live server.
//!
//! Each command seeds the view state a page would render, emits the same
//! requests the page's controls emit, and prints the resulting state.

mod commands;
mod config;

use clap::{Parser, Subcommand};

/// Tienda inventory CLI.
#[derive(Parser, Debug)]
#[command(name = "tienda", about = "Tienda inventory CLI")]
struct Cli {
    /// Path to client config file (default: ~/.tienda/config.toml).
    #[arg(long = "config", global = true)]
    config: Option<String>,

    /// Server URL; overrides the config file.
    #[arg(long, global = true)]
    server: Option<String>,

    /// Message locale; overrides the config file.
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Output format: table or json.
    #[arg(long = "output", short = 'o', global = true, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show or edit the client config.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Look a barcode up and fill the product form.
    Lookup {
        /// Barcode.
        codigo: String,
        /// Location selected on the form.
        #[arg(long)]
        ubicacion: Option<String>,
    },

    /// Check whether a product has inventory at a location.
    Presence {
        #[arg(long)]
        producto: String,
        #[arg(long)]
        ubicacion: String,
    },

    /// List parent categories and their subcategories.
    Categorias,

    /// Move stock between two locations.
    Transfer {
        #[arg(long)]
        producto: String,
        #[arg(long)]
        origen: String,
        #[arg(long)]
        destino: String,
        #[arg(long)]
        cantidad: String,
        /// Extra form fields, `key=value`.
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },

    /// Fetch a product's barcode label.
    Etiqueta {
        #[arg(long)]
        producto: String,
        #[arg(long, default_value = "0")]
        ubicacion: String,
        /// Write the PNG here (default: the download name).
        #[arg(long)]
        out: Option<String>,
    },

    /// Show version.
    Version,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective config.
    Show,
    /// Set config values.
    Set {
        #[arg(long)]
        server: Option<String>,
        #[arg(long)]
        cookie: Option<String>,
        #[arg(long)]
        csrf: Option<String>,
        #[arg(long)]
        locale: Option<String>,
    },
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got \"{}\"", s))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = cli
        .config
        .map(std::path::PathBuf::from)
        .unwrap_or_else(config::ClientConfig::default_path);
    let json_output = cli.output == "json";

    let mut client_config = config::ClientConfig::load(&config_path)?;
    if let Some(server) = cli.server {
        client_config.server = server;
    }
    if let Some(locale) = cli.locale {
        client_config.locale = locale;
    }

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::show(&client_config, json_output)?;
            }
            ConfigAction::Set {
                server,
                cookie,
                csrf,
                locale,
            } => {
                commands::config::set(
                    &config_path,
                    commands::config::Changes {
                        server,
                        cookie,
                        csrf_token: csrf,
                        locale,
                    },
                )?;
            }
        },

        Commands::Lookup { codigo, ubicacion } => {
            let page = commands::Page::connect(&client_config)?;
            commands::inventario::lookup(&page, &codigo, ubicacion, json_output).await?;
        }

        Commands::Presence {
            producto,
            ubicacion,
        } => {
            let page = commands::Page::connect(&client_config)?;
            commands::inventario::presence(&page, &producto, &ubicacion, json_output).await?;
        }

        Commands::Categorias => {
            let page = commands::Page::connect(&client_config)?;
            commands::inventario::categorias(&page, json_output).await?;
        }

        Commands::Transfer {
            producto,
            origen,
            destino,
            cantidad,
            fields,
        } => {
            let page = commands::Page::connect(&client_config)?;
            commands::inventario::transfer(
                &page,
                commands::inventario::TransferArgs {
                    producto,
                    origen,
                    destino,
                    cantidad,
                    extra: fields,
                },
                json_output,
            )
            .await?;
        }

        Commands::Etiqueta {
            producto,
            ubicacion,
            out,
        } => {
            let page = commands::Page::connect(&client_config)?;
            commands::inventario::etiqueta(&page, &producto, &ubicacion, out, json_output)
                .await?;
        }

        Commands::Version => {
            println!("tienda cli v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
