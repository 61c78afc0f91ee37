use std::fmt;
use std::io;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{
    Catalog, DEFAULT_QUESTIONS_PER_SESSION, DEFAULT_REVEAL_DELAY_MS, QuizSettings,
};
use services::{QuizService, ShuffledRounds, TracingObserver};
use ui::{App, UiApp, build_app_context};

mod play;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidNumber { flag: &'static str, raw: String },
    InvalidConfig(quiz_core::Error),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidConfig(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<quiz_core::Error> for ArgsError {
    fn from(err: quiz_core::Error) -> Self {
        ArgsError::InvalidConfig(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number<T: std::str::FromStr>(flag: &'static str, raw: String) -> Result<T, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [options]   # desktop window (default)");
    eprintln!("  cargo run -p app -- play [options]   # play in the terminal");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --seed <u64>              fixed seed for reproducible rounds");
    eprintln!("  --questions <n>           questions per session (default {DEFAULT_QUESTIONS_PER_SESSION})");
    eprintln!("  --reveal-delay-ms <ms>    pause before showing a result (default {DEFAULT_REVEAL_DELAY_MS})");
    eprintln!("  --countries <a,b,c,...>   comma-separated catalog (default: built-in 11 countries)");
    eprintln!("  --flags-dir <path>        where <Country>.png flag images live (default: flags)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FLAGS_SEED, FLAGS_QUESTIONS, FLAGS_REVEAL_DELAY_MS, FLAGS_COUNTRIES, FLAGS_ASSETS_DIR");
    eprintln!("  RUST_LOG (default: info)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Play,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "play" => Some(Self::Play),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    seed: Option<u64>,
    questions: u32,
    reveal_delay_ms: u32,
    countries: Option<Vec<String>>,
    flags_dir: String,
}

fn split_countries(raw: &str) -> Vec<String> {
    raw.split(',').map(|name| name.trim().to_string()).collect()
}

impl Args {
    /// Flags win over environment values, which win over defaults.
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut seed = env("FLAGS_SEED")
            .map(|raw| parse_number("FLAGS_SEED", raw))
            .transpose()?;
        let mut questions = env("FLAGS_QUESTIONS")
            .map(|raw| parse_number("FLAGS_QUESTIONS", raw))
            .transpose()?
            .unwrap_or(DEFAULT_QUESTIONS_PER_SESSION);
        let mut reveal_delay_ms = env("FLAGS_REVEAL_DELAY_MS")
            .map(|raw| parse_number("FLAGS_REVEAL_DELAY_MS", raw))
            .transpose()?
            .unwrap_or(DEFAULT_REVEAL_DELAY_MS);
        let mut countries = env("FLAGS_COUNTRIES").map(|raw| split_countries(&raw));
        let mut flags_dir = env("FLAGS_ASSETS_DIR").unwrap_or_else(|| "flags".to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    seed = Some(parse_number("--seed", require_value(args, "--seed")?)?);
                }
                "--questions" => {
                    questions = parse_number("--questions", require_value(args, "--questions")?)?;
                }
                "--reveal-delay-ms" => {
                    reveal_delay_ms = parse_number(
                        "--reveal-delay-ms",
                        require_value(args, "--reveal-delay-ms")?,
                    )?;
                }
                "--countries" => {
                    countries = Some(split_countries(&require_value(args, "--countries")?));
                }
                "--flags-dir" => {
                    flags_dir = require_value(args, "--flags-dir")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            seed,
            questions,
            reveal_delay_ms,
            countries,
            flags_dir,
        })
    }

    fn catalog(&self) -> Result<Catalog, ArgsError> {
        match &self.countries {
            Some(names) => Catalog::new(names.iter().cloned())
                .map_err(|err| quiz_core::Error::from(err).into()),
            None => Ok(Catalog::sample()),
        }
    }

    fn settings(&self) -> Result<QuizSettings, ArgsError> {
        QuizSettings::new(self.questions, self.reveal_delay_ms)
            .map_err(|err| quiz_core::Error::from(err).into())
    }

    /// Parses and validates everything the game needs from flags and environment.
    fn resolve(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<(Self, Catalog, QuizSettings), ArgsError> {
        let parsed = Self::parse(args, env)?;
        let catalog = parsed.catalog()?;
        let settings = parsed.settings()?;
        Ok((parsed, catalog, settings))
    }
}

struct DesktopApp {
    catalog: Catalog,
    settings: QuizSettings,
    seed: Option<u64>,
    flags_dir: String,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }

    fn round_seed(&self) -> Option<u64> {
        self.seed
    }

    fn flags_dir(&self) -> String {
        self.flags_dir.clone()
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            io::Error::new(io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let (parsed, catalog, settings) =
        Args::resolve(&mut argv.into_iter(), |key| std::env::var(key).ok()).map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    tracing::info!(
        command = ?cmd,
        countries = catalog.len(),
        questions = settings.questions_per_session(),
        seed = ?parsed.seed,
        "starting guess the flag"
    );

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                catalog,
                settings,
                seed: parsed.seed,
                flags_dir: parsed.flags_dir,
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Guess the Flag")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Play => {
            let source = match parsed.seed {
                Some(seed) => ShuffledRounds::seeded(seed),
                None => ShuffledRounds::from_entropy(),
            };
            let mut quiz = QuizService::with_source(catalog, settings, Box::new(source));
            quiz.subscribe(Arc::new(TracingObserver));

            let stdin = io::stdin();
            play::run(&mut quiz, stdin.lock(), io::stdout(), settings.reveal_delay())?;
            Ok(())
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, |key| env.get(key).cloned())
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let args = parse(&[], &[]).unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.questions, 8);
        assert_eq!(args.reveal_delay_ms, 600);
        assert_eq!(args.countries, None);
        assert_eq!(args.flags_dir, "flags");
        assert_eq!(args.catalog().unwrap(), Catalog::sample());
    }

    #[test]
    fn flags_override_environment() {
        let args = parse(
            &["--seed", "7", "--questions", "3"],
            &[("FLAGS_SEED", "1"), ("FLAGS_QUESTIONS", "5"), ("FLAGS_REVEAL_DELAY_MS", "0")],
        )
        .unwrap();
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.questions, 3);
        assert_eq!(args.reveal_delay_ms, 0);
    }

    #[test]
    fn countries_are_split_and_validated() {
        let args = parse(&["--countries", "France, Spain ,Italy"], &[]).unwrap();
        let catalog = args.catalog().unwrap();
        let names: Vec<&str> = catalog.countries().iter().map(|c| c.as_str()).collect();
        assert_eq!(names, ["France", "Spain", "Italy"]);

        let args = parse(&[], &[("FLAGS_COUNTRIES", "France,Spain")]).unwrap();
        assert!(args.catalog().is_err());
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert!(matches!(
            parse(&["--seed"], &[]),
            Err(ArgsError::MissingValue { flag: "--seed" })
        ));
        assert!(matches!(
            parse(&["--questions", "many"], &[]),
            Err(ArgsError::InvalidNumber { flag: "--questions", .. })
        ));
        assert!(matches!(
            parse(&["--verbose"], &[]),
            Err(ArgsError::UnknownArg(arg)) if arg == "--verbose"
        ));
        let args = parse(&["--questions", "0"], &[]).unwrap();
        assert!(args.settings().is_err());
    }

    fn resolve(args: &[&str]) -> Result<(Args, Catalog, QuizSettings), ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::resolve(&mut iter, |_| None)
    }

    #[test]
    fn out_of_range_values_are_argument_errors() {
        assert!(matches!(
            resolve(&["--questions", "0"]),
            Err(ArgsError::InvalidConfig(quiz_core::Error::Settings(_)))
        ));
        assert!(matches!(
            resolve(&["--reveal-delay-ms", "10001"]),
            Err(ArgsError::InvalidConfig(quiz_core::Error::Settings(_)))
        ));
        assert!(matches!(
            resolve(&["--countries", "France,France,Spain"]),
            Err(ArgsError::InvalidConfig(quiz_core::Error::Catalog(_)))
        ));

        let (args, catalog, settings) = resolve(&["--questions", "3"]).unwrap();
        assert_eq!(args.questions, 3);
        assert_eq!(catalog, Catalog::sample());
        assert_eq!(settings.questions_per_session(), 3);
    }
}
