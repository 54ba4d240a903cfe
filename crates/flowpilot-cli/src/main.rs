//! Command-line interface for the Flow Pilot tool service

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use flowpilot_core::{CallerIdentity, InvocationContext};
use flowpilot_service::FlowPilotService;
use flowpilot_tools::ToolInfo;
use flowpilot_utils::ServiceConfig;
use serde_json::Value;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "flowpilot")]
#[command(about = "Inspect and invoke the Flow Pilot tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the registered tools
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show service metadata and example queries
    Info,
    /// Invoke a tool once and print its result envelope
    Invoke {
        /// Tool identifier, e.g. add-to-notion
        tool: String,
        /// Tool input as a JSON document
        #[arg(short, long, default_value = "{}")]
        input: String,
        /// Caller identifier
        #[arg(short, long, default_value = "cli")]
        caller: String,
    },
}

fn catalog_table(catalog: &[ToolInfo]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Description", "Price"]);
    for tool in catalog {
        table.add_row(vec![
            tool.id.clone(),
            tool.name.clone(),
            tool.description.clone(),
            format!("{} {}", tool.pricing.price_per_use, tool.pricing.currency),
        ]);
    }
    table
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    flowpilot_utils::init_tracing("info");

    let cli = Cli::parse();
    let config = ServiceConfig::from_env().context("Failed to load configuration")?;
    let service = FlowPilotService::from_config(&config).context("Failed to build service")?;

    match cli.command {
        Commands::List { json } => {
            let catalog = service.catalog();
            if json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                println!("{}", catalog_table(&catalog));
            }
        }
        Commands::Info => {
            let metadata = service.metadata();
            println!("{} v{} by {}", metadata.title, metadata.version, metadata.author);
            println!("{}", metadata.description);
            println!("Tags: {}", metadata.tags.join(", "));
            println!("Port: {}", config.port());
            for group in service.example_queries() {
                println!();
                println!("{}:", group.category);
                for query in &group.queries {
                    println!("  - {query}");
                }
            }
        }
        Commands::Invoke {
            tool,
            input,
            caller,
        } => {
            let input: Value =
                serde_json::from_str(&input).context("--input must be a JSON document")?;
            let context = InvocationContext::new().with_origin("cli");
            info!("Invoking {} (trace {})", tool, context.trace_id());

            let envelope = service
                .invoke(&tool, input, &CallerIdentity::new(caller), &context)
                .await
                .with_context(|| format!("Invocation of '{tool}' failed"))?;
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
    }

    Ok(())
}
