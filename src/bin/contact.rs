#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::todo)]
#![warn(clippy::panic)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(unreachable_pub)]
#![warn(missing_debug_implementations)]
#![warn(unused_qualifications)]
#![deny(unused_must_use)]
#![allow(clippy::print_stdout)]

use clap::Parser;
use postbox_server::client::driver::FormDriver;
use postbox_server::client::form::{Msg, NoticeKind};
use postbox_server::client::relay::RelayClient;
use postbox_server::domain::Field;
use tracing_subscriber::EnvFilter;

/// Sends one contact-form submission through a running relay.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the relay
    #[arg(long, env = "POSTBOX_RELAY_URL", default_value = "http://localhost:5000")]
    relay_url: String,

    /// Your name
    #[arg(long)]
    name: String,

    /// Your email address
    #[arg(long)]
    email: String,

    /// The message to send
    #[arg(long)]
    message: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let mut driver = FormDriver::new(RelayClient::new(&cli.relay_url));
    driver.dispatch(Msg::Edited(Field::Name, cli.name));
    driver.dispatch(Msg::Edited(Field::Email, cli.email));
    driver.dispatch(Msg::Edited(Field::Message, cli.message));
    driver.dispatch(Msg::SubmitPressed);

    let Some(notice) = driver.run_until_notice().await else {
        anyhow::bail!("form driver stopped without an outcome");
    };

    match notice.kind {
        NoticeKind::Success => {
            println!("{}", notice.text);
            Ok(())
        }
        NoticeKind::Error => Err(anyhow::anyhow!(notice.text)),
    }
}
