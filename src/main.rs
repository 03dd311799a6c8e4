use chrono::{DateTime, Local, TimeZone, Utc};
use clap::Parser;
use mindnote::application::{
    init::init, ConfigService, HomeService, ListEntriesService, Screen, ShowEntryService,
};
use mindnote::cli::{format_entry_detail, format_entry_list, format_home, Cli, Commands};
use mindnote::error::Result;
use mindnote::infrastructure::config::Observer;
use mindnote::infrastructure::{EntryStore, FileSystemImageLoader, FileSystemStore};
use std::fmt;

/// Log to stderr so stdout only carries command output
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "mindnote=warn".into()),
    );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path }) => init(&path),
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(FileSystemStore::discover()?);

            if list {
                let config = service.list()?;
                println!("entries_file = {}", config.entries_file);
                println!(
                    "utc_offset = {}",
                    config.utc_offset.as_deref().unwrap_or("local")
                );
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    println!("{}", service.get(&k)?);
                    Ok(())
                }
            } else {
                println!("Usage: mindnote config [--list | <key> [<value>]]");
                println!("Valid keys: entries_file, utc_offset, created");
                Ok(())
            }
        }
        Some(Commands::Notes) => {
            let (store, config) = FileSystemStore::open(FileSystemStore::discover()?)?;
            match config.observer()? {
                Observer::Local => list_notes(store, &Local).await,
                Observer::Fixed(offset) => list_notes(store, &offset).await,
            }
        }
        Some(Commands::Show { id }) => {
            let (store, config) = FileSystemStore::open(FileSystemStore::discover()?)?;
            match config.observer()? {
                Observer::Local => show_entry(store, &id, &Local::now()).await,
                Observer::Fixed(offset) => {
                    show_entry(store, &id, &Utc::now().with_timezone(&offset)).await
                }
            }
        }
        Some(Commands::Home) | None => {
            let (store, config) = FileSystemStore::open(FileSystemStore::discover()?)?;
            match config.observer()? {
                Observer::Local => show_home(store, &Local::now()).await,
                Observer::Fixed(offset) => {
                    show_home(store, &Utc::now().with_timezone(&offset)).await
                }
            }
        }
    }
}

async fn list_notes<Tz: TimeZone>(store: FileSystemStore, tz: &Tz) -> Result<()>
where
    Tz::Offset: fmt::Display,
{
    let loader = FileSystemImageLoader::new(store.root());
    let service = ListEntriesService::new(store, loader);

    let screen = Screen::new("notes");
    if let Some(list) = service.execute(&screen, tz).await {
        println!("{}", format_entry_list(&list).trim_end());
    }
    Ok(())
}

async fn show_entry<Tz: TimeZone>(
    store: FileSystemStore,
    id: &str,
    now: &DateTime<Tz>,
) -> Result<()>
where
    Tz::Offset: fmt::Display,
{
    let loader = FileSystemImageLoader::new(store.root());
    let service = ShowEntryService::new(store, loader);

    let screen = Screen::new("show");
    if let Some(detail) = service.execute(&screen, id, now).await? {
        print!("{}", format_entry_detail(&detail));
    }
    Ok(())
}

async fn show_home<Tz: TimeZone>(store: FileSystemStore, now: &DateTime<Tz>) -> Result<()>
where
    Tz::Offset: fmt::Display,
{
    let loader = FileSystemImageLoader::new(store.root());
    let service = HomeService::new(store, loader);

    let screen = Screen::new("home");
    if let Some(view) = service.execute(&screen, now).await {
        print!("{}", format_home(&view));
    }
    Ok(())
}
