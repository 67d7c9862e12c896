//! Natal CLI - Age and zodiac profile from a birthdate
//!
//! Terminal front-end for the natal profile model.

mod config;
mod presenter;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;
use natal::{
    parse_date, Clock, FixedClock, Greeting, ObservableEntity, Profile, ProfileViewModel,
    SystemClock, ZodiacLookup, ZodiacSign,
};
use serde::Serialize;
use std::io::IsTerminal;
use std::rc::Rc;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use config::Config;
use presenter::TerminalPresenter;

#[derive(Parser)]
#[command(name = "natal")]
#[command(about = "Natal CLI - Age, zodiac signs and birthday greetings", long_about = None)]
#[command(version)]
struct Cli {
    /// Evaluate as if today were this date (configured date format)
    #[arg(long, global = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show age and zodiac signs for a birth date
    Show {
        /// Birth date (configured date format, default YYYY-MM-DD)
        date: String,
        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },

    /// Enter birth dates one after another
    Interactive,

    /// Describe a zodiac sign (e.g. "leo", "dragon")
    Zodiac {
        sign: String,
    },

    /// Show current configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    profile: natal::ProfileSnapshot,
    greeting: Option<&'a Greeting>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    init_tracing(&config);
    if !config.color {
        colored::control::set_override(false);
    }

    let clock = clock_for(&config, cli.today.as_deref())?;

    match cli.command {
        Commands::Show { date, json } => cmd_show(&config, clock, &date, json),
        Commands::Interactive => cmd_interactive(&config, clock),
        Commands::Zodiac { sign } => cmd_zodiac(&config, &sign),
        Commands::Config { init } => cmd_config(&config, init),
    }
}

fn init_tracing(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_filter.as_deref().unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn clock_for(config: &Config, today: Option<&str>) -> Result<Arc<dyn Clock>> {
    match today {
        Some(input) => {
            let today = parse_date(input, &config.date_format).context("Invalid --today")?;
            tracing::debug!(%today, "Using fixed clock");
            Ok(Arc::new(FixedClock::new(today)))
        }
        None => Ok(Arc::new(SystemClock)),
    }
}

fn view_model(
    config: &Config,
    clock: Arc<dyn Clock>,
    presenter: TerminalPresenter,
) -> Result<ProfileViewModel> {
    let lookup: Arc<dyn ZodiacLookup> = Arc::new(config.zodiac_catalog()?);
    let profile = Profile::new(lookup, clock);
    Ok(ProfileViewModel::new(profile, Rc::new(presenter)))
}

// ============================================
// Command Implementations
// ============================================

fn cmd_show(config: &Config, clock: Arc<dyn Clock>, date: &str, json: bool) -> Result<()> {
    let birth_date = parse_date(date, &config.date_format)?;

    let presenter = if json {
        TerminalPresenter::new(false).without_greetings()
    } else {
        TerminalPresenter::new(false)
    };
    let mut view_model = view_model(config, clock, presenter)?;
    view_model.set_birth_date(birth_date);

    let profile = view_model.profile();
    if json {
        let greeting = view_model.greeting();
        let output = ShowOutput {
            profile: profile.snapshot(),
            greeting: greeting.as_ref(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize profile")?
        );
        return Ok(());
    }

    print_profile(profile);
    profile
        .ensure_valid()
        .context("Birth date is outside the accepted range")
}

fn cmd_interactive(config: &Config, clock: Arc<dyn Clock>) -> Result<()> {
    let interactive_alerts = config.interactive_alerts && std::io::stdin().is_terminal();
    let mut view_model = view_model(config, clock, TerminalPresenter::new(interactive_alerts))?;

    println!(
        "{}",
        format!(
            "Enter a birth date ({}), or an empty line to quit.",
            config.date_format
        )
        .dimmed()
    );

    loop {
        let input: String = Input::new()
            .with_prompt("Birth date")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;

        if input.trim().is_empty() {
            break;
        }

        let birth_date = match parse_date(&input, &config.date_format) {
            Ok(date) => date,
            Err(e) => {
                println!("{} {}", "✗".red(), e);
                continue;
            }
        };

        if !view_model.set_birth_date(birth_date) {
            println!("{}", "Unchanged".dimmed());
        }
        print_profile(view_model.profile());
    }

    Ok(())
}

fn cmd_zodiac(config: &Config, sign: &str) -> Result<()> {
    let sign: ZodiacSign = sign.parse()?;
    let catalog = config.zodiac_catalog()?;

    let system = match sign {
        ZodiacSign::Western(_) => "Western",
        ZodiacSign::Chinese(_) => "Chinese",
    };
    println!("{} {}", sign.to_string().cyan().bold(), format!("({})", system).dimmed());
    println!("  {}", catalog.describe(sign));

    Ok(())
}

fn cmd_config(config: &Config, init: bool) -> Result<()> {
    let path = Config::config_path()?;

    if init {
        if path.exists() {
            println!("{} Config already exists at {:?}", "✓".yellow(), path);
        } else {
            Config::default().save()?;
            println!("{} Default config written to {:?}", "✓".green(), path);
        }
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", path);
    println!("  Date format: {}", config.date_format.cyan());
    println!(
        "  Color: {}",
        if config.color { "On".green() } else { "Off".red() }
    );
    println!(
        "  Interactive alerts: {}",
        if config.interactive_alerts { "On".green() } else { "Off".red() }
    );
    println!(
        "  Log filter: {}",
        config.log_filter.as_deref().unwrap_or("warn").cyan()
    );
    println!("  Custom descriptions: {}", config.descriptions.len());

    Ok(())
}

fn print_profile(profile: &Profile) {
    field("Birth date", profile.birth_date().to_string());
    field("Age", profile.age().to_string());
    field("Lived", profile.formatted_age().replace('\n', " "));
    field("Western", profile.western_zodiac().to_string());
    field("Chinese", profile.chinese_zodiac().to_string());
    if profile.is_birthday_today() {
        field("Birthday", "today!".magenta().bold().to_string());
    }
    if profile.has_errors() {
        for error in profile.birth_date_errors() {
            field("Invalid", error.as_str().red().to_string());
        }
    } else {
        println!();
        for line in profile.zodiac_info().lines() {
            println!("  {}", line.dimmed());
        }
    }
    println!();
}

fn field(label: &str, value: String) {
    println!("  {} {}", format!("{:<11}", format!("{}:", label)).bold(), value);
}

