use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use gas_check_proxy::gas::GasCheckResponse;

#[derive(Parser)]
#[command(name = "gas-cli")]
#[command(about = "Command-line client for the gas-check proxy", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080", env = "GAS_PROXY_URL")]
    url: String,

    /// Print the raw JSON instead of a summary
    #[arg(long)]
    raw: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full gas report for a username
    Report { username: String },
    /// Quick check for a username
    Quick { username: String },
    /// Proxy liveness
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Report { username } => {
            let res = client
                .get(format!("{}/api/gas", base))
                .query(&[("username", username.as_str())])
                .send()
                .await?;
            let (ok, body) = read(res).await?;
            if ok && !cli.raw {
                match serde_json::from_value::<GasCheckResponse>(body.clone()) {
                    Ok(report) => print_report(&report),
                    Err(_) => print_json(&body)?,
                }
            } else {
                print_json(&body)?;
            }
        }
        Commands::Quick { username } => {
            let res = client
                .post(format!("{}/api/gas", base))
                .json(&json!({ "username": username }))
                .send()
                .await?;
            let (_, body) = read(res).await?;
            print_json(&body)?;
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", base)).send().await?;
            let (_, body) = read(res).await?;
            print_json(&body)?;
        }
    }

    Ok(())
}

async fn read(res: reqwest::Response) -> Result<(bool, Value), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: proxy returned status {}", status);
    }
    let body: Value = res.json().await?;
    Ok((status.is_success(), body))
}

fn print_json(body: &Value) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(body)?);
    Ok(())
}

fn print_report(report: &GasCheckResponse) {
    let name = report.display_name.as_deref().unwrap_or(&report.username);
    println!("{} (@{})", name, report.username);
    if let Some(fid) = report.fid {
        println!("  fid:              {}", fid);
    }
    let primary = report
        .primary()
        .map(|w| w.address.as_str())
        .or(report.primary_wallet.as_deref());
    if let Some(wallet) = primary {
        println!("  primary wallet:   {}", wallet);
    }
    println!("  gas used (ETH):   {:.6}", report.total_gas_used_eth);
    println!("  gas used (Base):  {:.6}", report.total_gas_used_base);
    println!("  gas spent (USD):  {:.2}", report.total_gas_usd);
    for wallet in &report.wallets {
        println!(
            "  {} {} eth_tx={} base_tx={} balance={:.4} ETH",
            if Some(wallet.address.as_str()) == primary { "*" } else { " " },
            wallet.address,
            wallet.eth_tx_count,
            wallet.base_tx_count,
            wallet.eth_balance
        );
    }
}
