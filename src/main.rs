use clap::Parser;
use tracing_subscriber::EnvFilter;

use reshub::{AppConfig, COURSES, ThemeChoice};

#[derive(Parser)]
#[command(name = "reshub")]
#[command(about = "Browse course resources: slides, lecture notes and past exams")]
struct Cli {
    /// Color theme of the window
    #[arg(long, value_enum, default_value_t = ThemeChoice::Light)]
    theme: ThemeChoice,

    /// Print the catalog and exit without opening a window
    #[arg(long)]
    list: bool,

    /// With --list, print the catalog as JSON
    #[arg(long, requires = "list")]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        AppConfig {
            theme: cli.theme,
            list: cli.list,
            json: cli.json,
            verbose: cli.verbose,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from(Cli::parse());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if config.list {
        return print_catalog(config.json);
    }

    run_gui(config)
}

fn print_catalog(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(COURSES)?);
        return Ok(());
    }

    for course in COURSES {
        println!("\n=== {} ({}) ===", course.name, course.code);
        for resource in course.resources {
            println!(
                "  [{:>2}] {:<5} {} - updated {}, {} students",
                resource.id, resource.kind, resource.title, resource.updated, resource.users
            );
        }
    }
    Ok(())
}

#[cfg(feature = "gui")]
fn run_gui(config: AppConfig) -> anyhow::Result<()> {
    reshub::gui::run(config)
}

#[cfg(not(feature = "gui"))]
fn run_gui(_config: AppConfig) -> anyhow::Result<()> {
    anyhow::bail!("built without the `gui` feature; only --list is available")
}
