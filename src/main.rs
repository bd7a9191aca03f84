use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use serde_json::json;
use std::time::Duration;
use tabby_checkout::application::checkout::{CheckoutAttempt, CheckoutEffect};
use tabby_checkout::application::eligibility::EligibilityService;
use tabby_checkout::config::{
    ApiSettings, DEFAULT_TIMEOUT_SECS, ENV_API_BASE_URL, ENV_API_TIMEOUT_SECS, ENV_LANGUAGE,
    ENV_MERCHANT_CODE, Settings,
};
use tabby_checkout::domain::message::Language;
use tabby_checkout::domain::order::OrderId;
use tabby_checkout::domain::outcome::CheckoutOutcome;
use tabby_checkout::domain::payment_option::PaymentOptions;
use tabby_checkout::infrastructure::http::HttpSessionGateway;
use tabby_checkout::interfaces::messages::MessageCatalog;
use tabby_checkout::observability::{LogFormat, init_logging};
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Merchant code registered with the provider
    #[arg(long, env = ENV_MERCHANT_CODE)]
    merchant_code: String,

    /// Display language for the hosted checkout and messages (en or ar)
    #[arg(long, env = ENV_LANGUAGE, default_value = "en")]
    language: Language,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a session for an order and print which payment options it allows
    Eligibility {
        order_id: String,

        /// Base URL of the merchant backend exposing `create-session`
        #[arg(long, env = ENV_API_BASE_URL)]
        base_url: String,

        #[arg(long, env = ENV_API_TIMEOUT_SECS, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,
    },
    /// Interpret the outcome reported by the hosted checkout. Omit it when the
    /// user backed out without one.
    Outcome {
        order_id: String,
        outcome: Option<CheckoutOutcome>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(LogFormat::from_env());
    let cli = Cli::parse();

    let settings = Settings::new(cli.merchant_code, cli.language).into_diagnostic()?;
    let catalog = MessageCatalog::new(settings.language);

    match cli.command {
        Command::Eligibility {
            order_id,
            base_url,
            timeout_secs,
        } => {
            let order_id = OrderId::new(order_id).into_diagnostic()?;
            let api = ApiSettings::new(&base_url, Duration::from_secs(timeout_secs))
                .into_diagnostic()?;
            let gateway = HttpSessionGateway::new(&api).into_diagnostic()?;
            let service = EligibilityService::new(Box::new(gateway));

            // Ctrl-C plays the part of the screen going away mid-request.
            let cancel = CancellationToken::new();
            let on_interrupt = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    on_interrupt.cancel();
                }
            });

            let Some(update) = service
                .check_until_cancelled(&order_id, &PaymentOptions::default(), &cancel)
                .await
            else {
                return Ok(());
            };

            let report = json!({
                "order_id": order_id,
                "installments": update.state.installments,
                "message": update.state.message.map(|key| catalog.lookup(key)),
                "available": update.options.available(),
            });
            println!("{report}");
        }
        Command::Outcome { order_id, outcome } => {
            let order_id = OrderId::new(order_id).into_diagnostic()?;
            let attempt = CheckoutAttempt::begin(&settings, order_id);

            let report = match attempt.finish(outcome) {
                CheckoutEffect::Success { order_id } => {
                    json!({ "effect": "success", "order_id": order_id })
                }
                CheckoutEffect::Notice { message } => {
                    json!({ "effect": "notice", "message": catalog.lookup(message) })
                }
                CheckoutEffect::Dismissed => json!({ "effect": "dismissed" }),
            };
            println!("{report}");
        }
    }

    Ok(())
}
