use clap::{Args, Parser, Subcommand};

use ssy::core::{Inputs, WithdrawalPlan, run_projection};
use ssy::report::render_report;

#[derive(Parser, Debug)]
#[command(
    name = "ssy",
    about = "Sukanya Samriddhi Yojana maturity calculator (fixed deposit schedule, 8.2% yearly compounding, optional partial withdrawal)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the web calculator and JSON API.
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Print the year-by-year projection for one set of inputs.
    Project(ProjectArgs),
}

#[derive(Args, Debug)]
struct ProjectArgs {
    #[arg(long, default_value_t = 4000.0, help = "Monthly deposit in rupees")]
    monthly_investment: f64,
    #[arg(
        long,
        default_value_t = 1.0,
        help = "Girl's age when the account is opened"
    )]
    girl_age: f64,
    #[arg(long, help = "Age at which a one-time partial withdrawal is taken")]
    withdrawal_age: Option<f64>,
    #[arg(long, help = "Amount withdrawn at --withdrawal-age")]
    withdrawal_amount: Option<f64>,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Serve { port } => {
            if let Err(e) = ssy::api::run_http_server(port).await {
                eprintln!("Server error: {e}");
                std::process::exit(1);
            }
        }
        Command::Project(args) => {
            let withdrawal = match (args.withdrawal_age, args.withdrawal_amount) {
                (Some(age), Some(amount)) => Some(WithdrawalPlan { age, amount }),
                (None, None) => None,
                _ => {
                    eprintln!(
                        "--withdrawal-age and --withdrawal-amount must be given together"
                    );
                    std::process::exit(2);
                }
            };
            let inputs = Inputs {
                monthly_investment: args.monthly_investment,
                girl_age: args.girl_age,
                withdrawal,
            };
            match run_projection(&inputs) {
                Ok(result) => print!("{}", render_report(&result)),
                Err(errors) => {
                    for (field, error) in errors.iter() {
                        eprintln!("{field}: {error}");
                    }
                    std::process::exit(1);
                }
            }
        }
    }
}
