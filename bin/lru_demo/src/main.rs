mod command;
mod session;

use clap::Parser;
use lru_cache::LruCache;
use session::Session;
use std::io::Read;

#[derive(Clone,Debug,Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Filepath of command script, reads from stdin if omitted
    script: Option<String>,
    /// Maximum number of cached entries
    #[arg(long, default_value_t = 3)]
    capacity: usize,
    /// Number of entries to reserve storage for up front
    #[arg(long, default_value_t = 0)]
    initial_capacity: usize,
}

fn read_script(args: &Args) -> anyhow::Result<String> {
    let mut source = String::new();
    match &args.script {
        Some(filename) => {
            source = std::fs::read_to_string(filename)?;
        },
        None => {
            std::io::stdin().read_to_string(&mut source)?;
        },
    }
    Ok(source)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    simple_logger::SimpleLogger::new()
        .env()
        .with_colors(true)
        .without_timestamps()
        .init()?;

    let source = read_script(&args)?;
    let commands = command::parse_script(source.as_str())?;
    log::info!("[lru-demo] running {} command(s) with capacity={}", commands.len(), args.capacity);

    let cache = LruCache::with_initial_capacity(args.initial_capacity, args.capacity)?;
    let mut session = Session::new(cache);
    let mut stdout = std::io::stdout().lock();
    session.execute_all(commands.as_slice(), &mut stdout)?;
    log::info!("[lru-demo] finished with {}/{} entries", session.get_cache().len(), args.capacity);
    Ok(())
}
