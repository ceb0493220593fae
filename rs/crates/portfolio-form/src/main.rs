use anyhow::{bail, Context, Result};
use clap::Parser;
use portfolio_form::{reduce, snapshot, Action, ContactForm, Field, HttpTransport};
use tracing_subscriber::EnvFilter;

/// Send one contact-form submission to a running endpoint.
#[derive(Parser, Debug)]
#[command(name = "portfolio-contact", version)]
struct Args {
    /// Submission endpoint URL
    #[arg(long, default_value = "http://localhost:3000/api/contact")]
    endpoint: String,

    #[arg(long, default_value = "")]
    name: String,

    #[arg(long, default_value = "")]
    email: String,

    #[arg(long, default_value = "")]
    message: String,

    /// Print the final form view as a JSON snapshot
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let transport = HttpTransport::new(&args.endpoint).context("failed to build HTTP client")?;

    let mut form = ContactForm::new();
    for (field, value) in [
        (Field::Name, args.name),
        (Field::Email, args.email),
        (Field::Message, args.message),
    ] {
        reduce(&mut form, Action::Input { field, value });
    }

    let result = form.submit(&transport).await;

    if args.json {
        println!("{}", snapshot(&form).to_json()?);
    } else if let Some(n) = form.notification() {
        println!("{}: {}", n.title, n.description);
    }

    match result {
        Ok(ack) => {
            if !args.json {
                println!("{}", ack.message);
            }
            Ok(())
        }
        Err(e) => bail!("submission to {} failed: {}", transport.endpoint(), e),
    }
}
