//! Cotacao CLI
//!
//! Asks the local cotacao server for the current bid and writes it to
//! `cotacao.txt`. Exits non-zero on any failure.

mod config;

use anyhow::Result;
use clap::Parser;

use cotacao_client::CotacaoClient;
use cotacao_types::Deadline;

use config::ClientConfig;

#[derive(Parser)]
#[command(name = "cotacao")]
#[command(author, version, about = "Saves the current USD-BRL bid to cotacao.txt", long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = Cli::parse();

    let config = ClientConfig::default();
    let client = CotacaoClient::new(config.endpoint);

    client
        .fetch_and_save(Deadline::after(config.timeout), &config.output)
        .await?;

    println!("Cotação salva com sucesso!");
    Ok(())
}
