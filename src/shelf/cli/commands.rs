use super::menu::run_menu;
use super::render::{print_books, print_messages};
use super::setup::{Cli, Commands};
use clap::Parser;
use shelf::api::{CmdResult, ShelfApi};
use shelf::config::{resolve_store_path, store_from_env};
use shelf::error::Result;
use shelf::logging::{init_logging, DEFAULT_LEVEL};
use shelf::store::fs::FileStore;
use std::io::{self, Write};

struct AppContext {
    api: ShelfApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { "debug" } else { DEFAULT_LEVEL })?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut ctx = init_context(&cli, &mut out)?;

    match cli.command {
        None | Some(Commands::Menu) => run_menu(&mut ctx.api, io::stdin().lock(), &mut out),
        Some(Commands::Add {
            title,
            author,
            year,
        }) => {
            let result = ctx.api.add_book(&title, &author, year)?;
            print_result(&mut out, &result)
        }
        Some(Commands::Remove { id }) => {
            let result = ctx.api.remove_book(id)?;
            print_result(&mut out, &result)
        }
        Some(Commands::Search { query }) => {
            let result = ctx.api.search_books(&query.join(" "))?;
            print_result(&mut out, &result)
        }
        Some(Commands::List) => {
            let result = ctx.api.list_books()?;
            print_result(&mut out, &result)
        }
        Some(Commands::Status { id, status }) => {
            let result = ctx.api.change_status(id, &status)?;
            print_result(&mut out, &result)
        }
    }
}

fn init_context<W: Write>(cli: &Cli, out: &mut W) -> Result<AppContext> {
    let store_path = resolve_store_path(cli.store.clone(), store_from_env())?;
    log::debug!("using catalog at {}", store_path.display());

    let (api, loaded) = ShelfApi::open(FileStore::new(store_path))?;
    print_messages(out, &loaded.messages)?;

    Ok(AppContext { api })
}

fn print_result<W: Write>(out: &mut W, result: &CmdResult) -> Result<()> {
    print_books(out, &result.listed_books)?;
    print_messages(out, &result.messages)?;
    Ok(())
}
