//! `rsvp`: command-line client for the RSVP API.
//!
//! Every subcommand makes one request and prints the JSON response to stdout.
//!
//! ```sh
//! rsvp verify "Jane Doe" jane@example.com
//! rsvp submit --name "Jane Doe" --email jane@example.com --attending \
//!     --guest "Jane Doe" --guest "John Doe" --diet vegetarian
//! rsvp avatars save --email jane@example.com --select "Jane Doe=cat:see you there"
//! rsvp avatars list
//! RSVP_API_BASE=https://example.com/api rsvp health
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rsvp_client::{ClientConfig, ClientError, RsvpClient};
use rsvp_core::{AvatarSelection, RsvpRequest, SaveAvatarsRequest, VerifyOutcome};

/// rsvp: RSVP API client
#[derive(Parser)]
#[command(name = "rsvp", version, about, long_about = None)]
struct Cli {
    /// Base URL including the `/api` prefix. Overrides RSVP_API_BASE.
    #[arg(long, global = true, value_name = "URL")]
    api_base: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a name is on the guest list.
    ///
    /// Exits 1 when the guest is not found.
    Verify {
        name: String,
        email: String,
    },

    /// Submit an RSVP.
    Submit {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Accept the invitation. Omit to decline.
        #[arg(long)]
        attending: bool,

        /// A guest who will attend. Repeat for each guest, in order.
        #[arg(long = "guest", value_name = "NAME")]
        guests: Vec<String>,

        /// Dietary requirements.
        #[arg(long, value_name = "TEXT")]
        diet: Option<String>,
    },

    /// Save or list avatar selections.
    Avatars {
        #[command(subcommand)]
        command: AvatarsCommand,
    },

    /// Check that the backend is up.
    Health,
}

#[derive(Subcommand)]
enum AvatarsCommand {
    /// List the avatars chosen by attending guests.
    List,

    /// Save avatar selections for the guests on an RSVP.
    Save {
        #[arg(long)]
        email: String,

        /// GUEST=AVATAR or GUEST=AVATAR:MESSAGE. Repeat for each guest.
        #[arg(long = "select", value_name = "GUEST=AVATAR[:MESSAGE]", value_parser = parse_selection, required = true)]
        selections: Vec<AvatarSelection>,
    },
}

/// Parse `GUEST=AVATAR[:MESSAGE]`. Only the first `:` splits, so messages may
/// contain colons.
fn parse_selection(s: &str) -> Result<AvatarSelection, String> {
    let (guest, rest) = s
        .split_once('=')
        .ok_or_else(|| format!("expected GUEST=AVATAR[:MESSAGE], got `{s}`"))?;
    let (avatar, message) = rest.split_once(':').unwrap_or((rest, ""));
    if guest.trim().is_empty() || avatar.trim().is_empty() {
        return Err(format!("guest and avatar must be non-empty in `{s}`"));
    }
    Ok(AvatarSelection {
        guest_name: guest.trim().to_string(),
        avatar: avatar.trim().to_string(),
        message: message.to_string(),
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("error: could not render response: {e}"),
    }
}

async fn run(client: &RsvpClient, command: Command) -> Result<ExitCode, ClientError> {
    match command {
        Command::Verify { name, email } => {
            let outcome = client.verify_name(&name, &email).await?;
            print_json(outcome.response());
            Ok(match outcome {
                VerifyOutcome::Found(_) => ExitCode::SUCCESS,
                VerifyOutcome::NotFound(_) => ExitCode::FAILURE,
            })
        }
        Command::Submit {
            name,
            email,
            attending,
            guests,
            diet,
        } => {
            let input = RsvpRequest {
                name,
                email,
                is_attending: attending,
                attending_guests: guests,
                diet,
            };
            print_json(&client.submit_rsvp(&input).await?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Avatars {
            command: AvatarsCommand::List,
        } => {
            print_json(&client.get_avatars().await?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Avatars {
            command: AvatarsCommand::Save { email, selections },
        } => {
            let input = SaveAvatarsRequest {
                email,
                avatars: selections,
            };
            print_json(&client.save_avatars(&input).await?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Health => {
            print_json(&client.health_check().await?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rsvp_client=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = match cli.api_base {
        Some(base) => ClientConfig::new(base),
        None => ClientConfig::from_env(),
    };
    let client = RsvpClient::new(&config);
    tracing::debug!(api_base = client.base_url(), "client configured");

    match run(&client, cli.command).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
