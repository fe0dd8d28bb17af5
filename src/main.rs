//! Policy AMA - plain-language insurance policy explainer
//!
//! A terminal chat assistant that answers policy questions by trying a
//! prioritized list of models until one replies, and prints the attempt
//! trace after each answer.

mod chat;
mod config;
mod llm;
mod resolver;
mod session;
mod system_prompt;

use config::Config;
use llm::PerplexityClient;
use session::{SessionController, TransitionError};
use std::io::{BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "policy_ama=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let backend = PerplexityClient::new(config.api_key, &config.base_url);
    let mut session = SessionController::new(backend);

    println!("Policy AMA. Ask about your insurance policy in plain language.");
    println!("Commands: /clear starts over, /quit exits.");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();

    loop {
        print!("> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "/quit" => break,
            "/clear" => {
                session.clear();
                println!("Conversation cleared.");
            }
            input => match session.submit(input).await {
                Ok(reply) => {
                    println!("\n{reply}");
                    if !session.diagnostics().is_empty() {
                        println!();
                        for entry in session.diagnostics().entries() {
                            println!("    {entry}");
                        }
                    }
                    println!();
                }
                Err(TransitionError::EmptyInput) => {}
                Err(err) => eprintln!("{err}"),
            },
        }
    }

    Ok(())
}
