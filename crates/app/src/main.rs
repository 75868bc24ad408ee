use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, Clock, ConfigError, GenerationConfig, QuizLoopService, WebhookConfig};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidUrl {
        flag: &'static str,
        source: ConfigError,
    },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidUrl { flag, source } => write!(f, "invalid {flag} value: {source}"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::InvalidUrl { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        self.services.quiz_loop()
    }

    fn model(&self) -> String {
        self.services.model().to_string()
    }

    fn result_logging(&self) -> bool {
        self.services.result_logging()
    }
}

/// Command-line overrides; anything left unset falls back to `QUIZ_*` variables.
#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    model: Option<String>,
    base_url: Option<String>,
    webhook: Option<String>,
    no_submit: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--model <name>] [--base-url <url>] [--webhook <url>] [--no-submit]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --model gpt-4o-mini");
    eprintln!("  --base-url https://api.openai.com/v1");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_AI_API_KEY, QUIZ_AI_BASE_URL, QUIZ_AI_MODEL, QUIZ_RESULTS_WEBHOOK_URL");
    eprintln!("  RUST_LOG (default: info)");
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Parsed, ArgsError> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--model" => parsed.model = Some(require_value(&mut args, "--model")?),
                "--base-url" => parsed.base_url = Some(require_value(&mut args, "--base-url")?),
                "--webhook" => parsed.webhook = Some(require_value(&mut args, "--webhook")?),
                "--no-submit" => parsed.no_submit = true,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(parsed))
    }

    fn generation_config(&self) -> Result<GenerationConfig, Box<dyn std::error::Error>> {
        let mut config = GenerationConfig::from_env()?;
        if let Some(model) = self
            .model
            .as_deref()
            .map(str::trim)
            .filter(|model| !model.is_empty())
        {
            config.model = model.to_string();
        }
        if let Some(raw) = self.base_url.as_deref() {
            config
                .set_base_url(raw)
                .map_err(|source| ArgsError::InvalidUrl {
                    flag: "--base-url",
                    source,
                })?;
        }
        Ok(config)
    }

    fn webhook_config(&self) -> Result<Option<WebhookConfig>, Box<dyn std::error::Error>> {
        if self.no_submit {
            return Ok(None);
        }
        match self.webhook.as_deref() {
            Some(raw) => {
                let config = WebhookConfig::parse(raw).map_err(|source| ArgsError::InvalidUrl {
                    flag: "--webhook",
                    source,
                })?;
                Ok(Some(config))
            }
            None => Ok(WebhookConfig::from_env()?),
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = match Args::parse(std::env::args().skip(1))? {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    let generation = args.generation_config()?;
    let webhook = args.webhook_config()?;

    // The API key is never logged.
    log::info!(
        "question source: model {} at {}",
        generation.model,
        generation.base_url
    );
    match &webhook {
        Some(config) => log::info!(
            "result logging to {}",
            config.url.host_str().unwrap_or("<no host>")
        ),
        None => log::info!("result logging disabled"),
    }

    let services = AppServices::new(generation, webhook, Clock::default_clock());
    if !services.generation_configured() {
        log::warn!("QUIZ_AI_API_KEY is not set; quiz generation will fail until it is");
    }
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("QuizMaster AI")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

// Desktop launch owns its own async runtime, so `main` stays synchronous.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        if wants_usage(err.as_ref()) {
            print_usage();
        }
        std::process::exit(2);
    }
}

/// Bad command lines get the usage text after the error.
fn wants_usage(err: &(dyn std::error::Error + 'static)) -> bool {
    err.is::<ArgsError>()
}
