//! Fetch and print the box call log.
//!
//! Usage: fbxcall [LIMIT]
//!
//! Run with debug: RUST_LOG=fbxcall=debug fbxcall

use tracing_subscriber::EnvFilter;

use fbxcall::auth::AuthOutcome;
use fbxcall::{auth, calls, report, Config, Transport};

const DEFAULT_LIMIT: usize = 15;

/// Exit code of the deliberate post-registration halt; the run stops so the
/// operator can approve the pairing on the box and persist the credentials.
const EXIT_REGISTRATION_PENDING: i32 = 1;

/// Exit code for usage and fatal errors, distinct from the halt above.
const EXIT_FAILURE: i32 = 2;

#[tokio::main]
async fn main() {
    // Initialize tracing from RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let limit = match parse_limit() {
        Ok(limit) => limit,
        Err(arg) => {
            eprintln!("Usage: fbxcall [LIMIT]");
            eprintln!("invalid limit: {arg}");
            std::process::exit(EXIT_FAILURE);
        }
    };

    if let Err(e) = run(limit).await {
        eprintln!("Error: {e}");
        std::process::exit(EXIT_FAILURE);
    }
}

fn parse_limit() -> Result<usize, String> {
    match std::env::args().nth(1) {
        None => Ok(DEFAULT_LIMIT),
        Some(arg) => arg.parse().map_err(|_| arg),
    }
}

async fn run(limit: usize) -> fbxcall::Result<()> {
    let config = Config::default();
    let transport = Transport::new(&config)?;

    let token = match auth::run_handshake(&transport, &config).await? {
        AuthOutcome::Pending(pending) => {
            println!(
                "Update credential file: {}, with the tokens below",
                config.credential_file.display()
            );
            println!("TRACK_ID={}", pending.track_id);
            println!("APP_TOKEN={}", pending.app_token);
            std::process::exit(EXIT_REGISTRATION_PENDING);
        }
        AuthOutcome::Session(token) => token,
    };

    let entries = calls::fetch_call_log(&transport, &token).await?;
    print!("{}", report::render(&entries, limit));
    Ok(())
}
