use std::fmt;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use mathpath_core::model::GameSettings;
use tracing_subscriber::EnvFilter;
use ui::{App, build_app_context};
use ui::i18n::Language;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLang { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLang { raw } => write!(f, "invalid --lang value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct Args {
    language: Language,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--lang <en|sv>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --lang sv");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MATHPATH_LANG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut language = std::env::var("MATHPATH_LANG")
            .ok()
            .and_then(|value| Language::from_code(&value))
            .unwrap_or_default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--lang" => {
                    let value = require_value(args, "--lang")?;
                    language = Language::from_code(&value)
                        .ok_or(ArgsError::InvalidLang { raw: value })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { language })
    }
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // try_init fails when a subscriber is already set; keep that one.
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();
    tracing::info!(lang = parsed.language.code(), "starting math kids");

    let context = build_app_context(parsed.language, GameSettings::default());

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Math Kids")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        Args::parse(&mut args.iter().map(ToString::to_string))
    }

    #[test]
    fn lang_flag_overrides_the_default() {
        let parsed = parse(&["--lang", "en"]).unwrap();
        assert_eq!(parsed.language, Language::En);
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(matches!(parse(&["--frobnicate"]), Err(ArgsError::UnknownArg(_))));
        assert!(matches!(
            parse(&["--lang"]),
            Err(ArgsError::MissingValue { flag: "--lang" })
        ));
        assert!(matches!(
            parse(&["--lang", "klingon"]),
            Err(ArgsError::InvalidLang { .. })
        ));
    }
}
