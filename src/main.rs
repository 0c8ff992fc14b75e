use clap::{Parser, Subcommand};
use dotenv::dotenv;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate an expression and print the result
    Eval {
        /// The expression to evaluate, e.g. "(2+3)*4"
        #[arg(short, long)]
        expression: String,
    },
    /// Start the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Eval { expression } => {
            let value = calc_rs::expr::evaluate(&expression)?;
            println!("{}", value);
        }
        Commands::Serve { port } => {
            calc_rs::server::serve(port).await?;
        }
    }

    Ok(())
}
