pub mod capture;
pub mod prompt;
pub mod report;

use std::path::PathBuf;

use anyhow::Result;
use capture::capture_reflection;
use clap::Parser;
use prompt::Prompter;
use report::show_summary;
use tokio::io::AsyncBufRead;
use tracing::level_filters::LevelFilter;

use crate::{
    store::journal_store::{JournalStore, JournalStoreImpl},
    utils::{dir::create_application_default_path, logging::enable_logging},
};

#[derive(Parser, Debug)]
#[command(name = "Daybook", version, long_about = None)]
#[command(about = "Interactive daily reflection journal", long_about = None)]
struct Args {
    #[arg(
        long,
        help = "Journal directory. By default tries to save into $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
    #[arg(long, help = "Enable logging")]
    log: bool,
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let dir = match args.dir {
        Some(dir) => dir,
        None => create_application_default_path()?,
    };

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(&dir, logging_level, args.log)?;

    let store = JournalStoreImpl::new(dir)?;
    let mut prompter = Prompter::stdin();
    run_menu(&mut prompter, &store).await
}

/// The interactive loop: capture a new reflection, show the summary, or
/// exit. Runs until the user picks exit or the input stream closes.
pub async fn run_menu<R: AsyncBufRead + Unpin>(
    prompter: &mut Prompter<R>,
    store: &impl JournalStore,
) -> Result<()> {
    loop {
        println!("Daybook");
        println!("{}", "-".repeat(40));
        println!("1) New reflection");
        println!("2) View summary");
        println!("3) Exit");

        let Some(choice) = prompter.try_line("Choose an option (1-3): ").await? else {
            // Closed stdin behaves like picking exit.
            break;
        };

        match choice.as_str() {
            "1" => {
                let entry = capture_reflection(prompter).await?;
                store.append(&entry).await?;
            }
            "2" => show_summary(store).await?,
            "3" => {
                println!("Goodbye.");
                break;
            }
            _ => println!("Please choose 1, 2 or 3."),
        }
        println!();
    }
    Ok(())
}
