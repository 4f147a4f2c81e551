mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use registro_sdk::{render, BlockForm, Controller, LedgerClient, ResyncOutcome, Screen, Synchronizer, ViewModel};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "registro")]
#[command(about = "Registro - terminal client for the identity ledger", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Node API URL
    #[arg(long, global = true, default_value = "http://localhost:5000")]
    node_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new identity record on the ledger
    Add {
        /// CPF identifier
        cpf: String,

        /// Full name
        nome: String,

        /// Place of origin
        naturalidade: String,

        /// Date of birth (sent as-is, the node decides what to accept)
        data_nascimento: String,
    },

    /// Fetch and display the current chain
    Chain,

    /// Keep the display in step with the chain
    Watch {
        /// Seconds between refreshes
        #[arg(short, long, default_value_t = 5)]
        interval: u64,
    },

    /// Check node reachability and chain height
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = LedgerClient::new(cli.node_url.clone());

    match cli.command {
        Commands::Add {
            cpf,
            nome,
            naturalidade,
            data_nascimento,
        } => {
            let controller = Controller::new(client);
            let mut form = BlockForm::filled(cpf, nome, naturalidade, data_nascimento);

            println!("{}", "📤 Submitting record...".cyan());
            match controller.submit(&mut form).await {
                Ok(submission) => {
                    println!("{}", "✅ Record registered successfully!".green().bold());

                    match submission.resync {
                        ResyncOutcome::Applied(view) => {
                            let mut screen = Screen::new();
                            screen.replace(render(&view));
                            output::print_screen(&screen);
                        }
                        ResyncOutcome::Superseded => {
                            println!("{}", "A newer refresh already updated the view".bright_black());
                        }
                        ResyncOutcome::Skipped => {
                            println!(
                                "{}",
                                "Node echoed its bootstrap record; display not refreshed".yellow()
                            );
                        }
                        ResyncOutcome::Failed(e) => {
                            println!("{}", format!("❌ Failed to refresh the chain: {}", e).red());
                            println!(
                                "{}",
                                "The record was stored; run `registro chain` to view it".yellow()
                            );
                        }
                    }
                }
                Err(e) => {
                    println!("{}", format!("❌ Failed to register record: {}", e).red());
                    println!("{}", "Make sure the node is running and accessible".yellow());
                }
            }
        }

        Commands::Chain => {
            let synchronizer = Synchronizer::new(client);
            println!("{}", "🔄 Fetching chain...".cyan());

            match synchronizer.sync().await {
                Ok(Some(view)) => {
                    let mut screen = Screen::new();
                    screen.replace(render(&view));
                    output::print_screen(&screen);
                }
                // a lone sync cannot be superseded
                Ok(None) => {}
                Err(e) => {
                    println!("{}", format!("❌ Failed to fetch the chain: {}", e).red());
                    println!("{}", "Make sure the node is running and accessible".yellow());
                }
            }
        }

        Commands::Watch { interval } => {
            let synchronizer = Synchronizer::new(client);
            let mut screen = Screen::new();
            let mut ticker = tokio::time::interval(Duration::from_secs(interval.max(1)));

            println!(
                "{}",
                format!("👀 Watching the chain (every {}s, Ctrl-C to stop)", interval.max(1)).cyan()
            );

            loop {
                ticker.tick().await;

                match synchronizer.sync().await {
                    Ok(Some(view)) => {
                        let surface = render(&view);
                        if screen.surface() != Some(&surface) {
                            screen.replace(surface);
                            println!(
                                "\n{}",
                                format!("[{}] chain updated", chrono::Local::now().format("%H:%M:%S"))
                                    .bright_black()
                            );
                            output::print_screen(&screen);
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        println!("{}", format!("❌ Refresh failed: {}", e).red());
                        if screen.surface().is_some() {
                            println!("{}", "Last rendering still stands".yellow());
                        }
                    }
                }
            }
        }

        Commands::Status => {
            println!("{}", "🔍 Checking node...".cyan());

            match client.chain().await {
                Ok(chain) => {
                    let view = ViewModel::from_chain(&chain);
                    println!("{}", "✅ Node is online".green());
                    println!(
                        "{}: {}",
                        "Chain height".bright_white(),
                        chain.len().to_string().cyan()
                    );
                    println!(
                        "{}: {}",
                        "Records on display".bright_white(),
                        view.len().to_string().cyan()
                    );
                }
                Err(e) => {
                    println!("{}", "❌ Node is offline or unreachable".red());
                    println!("{}", format!("Trying to connect to: {}", cli.node_url).yellow());
                    println!("{}", format!("({})", e).bright_black());
                }
            }
        }
    }

    Ok(())
}
