//! # Sello CLI
//!
//! Command-line interface for previewing certificate templates.
//!
//! ## Usage
//!
//! ```bash
//! # Render a sample certificate from a (possibly partial) template record
//! sello preview --template north.json --recipient "Somchai R." --out cert.html
//!
//! # Render the built-in default template to stdout
//! sello preview
//!
//! # Evaluate a serial format string
//! sello serial --format "{activityId}-{year}-{run:4}" --counter 7 --activity ACT01
//! ```

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use sello::{
    SelloError,
    render::{self, RecipientSample},
    serial::{self, SerialVars},
    template::TemplateStore,
};

/// Sello - certificate document utility
#[derive(Parser, Debug)]
#[command(name = "sello")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a sample certificate to HTML
    Preview {
        /// Template record (JSON, partial fields allowed)
        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,

        /// Context key the template applies to
        #[arg(long, default_value = "area")]
        context: String,

        /// Recipient name shown on the certificate
        #[arg(long, default_value = "")]
        recipient: String,

        /// Activity identifier for the serial number
        #[arg(long, default_value = "")]
        activity: String,

        /// Team identifier for the serial number
        #[arg(long, default_value = "")]
        team: String,

        /// Award phrase rendered with the highlight style
        #[arg(long)]
        award: Option<String>,

        /// Serial counter value
        #[arg(long, default_value = "1")]
        counter: u32,

        /// Fixed Gregorian year (defaults to the wall clock)
        #[arg(long)]
        year: Option<i32>,

        /// Output file (stdout when omitted)
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Evaluate a serial format string
    Serial {
        /// Format string, e.g. "{activityId}-{year}-{run:4}"
        #[arg(long)]
        format: String,

        /// Counter value
        #[arg(long, default_value = "1")]
        counter: u32,

        /// Activity identifier
        #[arg(long, default_value = "")]
        activity: String,

        /// Team identifier
        #[arg(long, default_value = "")]
        team: String,

        /// Fixed Gregorian year (defaults to the wall clock)
        #[arg(long)]
        year: Option<i32>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sello=info".into()),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SelloError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Preview {
            template,
            context,
            recipient,
            activity,
            team,
            award,
            counter,
            year,
            out,
        } => {
            let mut store = TemplateStore::default();
            if let Some(path) = template {
                let record = serde_json::from_str(&fs::read_to_string(path)?)?;
                store.load_record(&context, record)?;
            }
            let resolved = store.resolve(&context);

            let sample = RecipientSample {
                name: recipient,
                team_id: team,
                activity_id: activity,
                award,
                verify_image_url: None,
                year,
            };
            let doc = render::render(&resolved, &sample, counter);

            match out {
                Some(path) => {
                    fs::write(&path, &doc.html)?;
                    println!(
                        "Wrote {} ({}x{} mm)",
                        path.display(),
                        doc.page.width_mm,
                        doc.page.height_mm
                    );
                }
                None => println!("{}", doc.html),
            }
        }
        Commands::Serial {
            format,
            counter,
            activity,
            team,
            year,
        } => {
            let vars = SerialVars {
                activity_id: activity,
                team_id: team,
                year,
            };
            println!("{}", serial::render(&format, counter, &vars));
        }
    }

    Ok(())
}
