use clap::Parser;
use is_terminal::IsTerminal;
use staredown::areas::repository::Repository;
use staredown::error::{DIAGNOSTIC_EXIT_CODE, INTERRUPT_EXIT_CODE, StaredownError};

#[derive(Parser)]
#[command(
    name = "staredown",
    version = "0.1.0",
    about = "Find which GitHub pull requests have touched a file",
    long_about = "This tool traces a file's change history through the local commit graph \
    and cross-references the resulting commit ids against the pull requests \
    of the repository's GitHub remotes, printing one line per matching pull request.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "Relative path of file to track history of (ex. \"README\")")]
    filename: String,
    #[arg(
        short = 'r',
        long = "repo",
        help = "Override path to repository (defaults to current working directory)"
    )]
    repo: Option<String>,
    #[arg(
        long = "no-color",
        help = "Do not use colors (default if output is redirected)"
    )]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let result = tokio::select! {
        result = run(&cli) => result,
        _ = tokio::signal::ctrl_c() => std::process::exit(INTERRUPT_EXIT_CODE),
    };

    if let Err(error) = result {
        match error.downcast_ref::<StaredownError>() {
            Some(diagnostic) => {
                eprintln!("{diagnostic}");
                std::process::exit(DIAGNOSTIC_EXIT_CODE);
            }
            None => {
                eprintln!("Error: {error:#}");
                std::process::exit(1);
            }
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let repository = match &cli.repo {
        Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
        None => {
            let pwd = std::env::current_dir()?;
            Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?
        }
    };

    repository.staredown(&cli.filename).await
}
