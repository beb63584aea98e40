use clap::{Parser, Subcommand};
use gitlet::areas::repository::Repository;
use gitlet::artifacts::core::error::{GitletError, user_error};
use is_terminal::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `GITLET_LOG=gitlet=debug`
const LOG_ENV: &str = "GITLET_LOG";

#[derive(Parser)]
#[command(
    name = "gitlet",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A tiny local version-control system",
    long_about = "Gitlet keeps snapshots of a working directory as commits on named branches. \
    It supports staging, committing, checking out, resetting and merging, all stored locally \
    in a .gitlet directory.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository in the current directory"
    )]
    Init,
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "commit",
        about = "Record the staged changes as a new commit",
        long_about = "This command snapshots the active commit with the staged additions and \
        removals applied, then advances the active branch to the new commit."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "rm",
        about = "Unstage a file, and stop tracking it if the active commit does"
    )]
    Rm {
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "checkout",
        about = "Restore a file or switch branches",
        long_about = "Forms:\n  \
        checkout -- <file>             restore <file> from the active commit\n  \
        checkout <commit> -- <file>    restore <file> from <commit>\n  \
        checkout <branch>              switch to <branch>"
    )]
    Checkout {
        #[arg(index = 1, help = "A commit id or a branch name")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "The file to restore")]
        file: Option<String>,
    },
    #[command(name = "log", about = "Show the history of the active branch")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(name = "branch", about = "Create a branch at the active commit")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "status", about = "Show branches, the stage and working tree changes")]
    Status,
    #[command(name = "merge", about = "Merge a branch into the active branch")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
    #[command(
        name = "reset",
        about = "Move the active branch to a commit and check out its files"
    )]
    Reset {
        #[arg(index = 1)]
        commit: String,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => match user_error(&error) {
            Some(gitlet_error) => {
                println!("{gitlet_error}");
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("fatal: {error:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn use_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

fn run(command: &Commands) -> anyhow::Result<()> {
    let pwd = std::env::current_dir()?;
    let color = use_color();
    colored::control::set_override(color);

    let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?.with_color(color);

    match command {
        Commands::Init => repository.init(),
        Commands::Add { file } => repository.add(file),
        Commands::Commit { message } => repository.commit(message),
        Commands::Rm { file } => repository.rm(file),
        Commands::Checkout { target, file } => match (target, file) {
            (None, Some(file)) => repository.checkout_file(file),
            (Some(commit_id), Some(file)) => repository.checkout_commit_file(commit_id, file),
            (Some(branch), None) => repository.checkout_branch(branch),
            (None, None) => Err(GitletError::IncorrectOperands.into()),
        },
        Commands::Log => repository.log(),
        Commands::GlobalLog => repository.global_log(),
        Commands::Find { message } => repository.find(message),
        Commands::Branch { name } => repository.branch(name),
        Commands::RmBranch { name } => repository.rm_branch(name),
        Commands::Status => repository.status(),
        Commands::Merge { branch } => repository.merge(branch),
        Commands::Reset { commit } => repository.reset(commit),
    }
}
