use std::process::exit;
use std::time::Instant;

use log::{error, info};
use structopt::StructOpt;

use trie_suggest::error::Result;
use trie_suggest::wordlist::trie::searchconfig::SearchConfig;
use trie_suggest::wordlist::wordlist::{FileFormat, Wordlist};


/// Suggest dictionary words close to a misspelled word, most frequent first.
#[derive(StructOpt)]
struct Cli {
    /// Dictionary with one `word frequency` entry per line
    #[structopt(parse(from_os_str))]
    path: std::path::PathBuf,
    /// The word to look up
    word: String,
    /// Maximum edit distance
    #[structopt(short = "d", long, default_value = "2", allow_hyphen_values = true)]
    max_distance: isize,
    /// Show at most this many suggestions
    #[structopt(short = "n", long)]
    limit: Option<usize>,
    /// Search subtrees on all cores
    #[structopt(long)]
    parallel: bool,
    /// Print suggestions as a JSON array
    #[structopt(long)]
    json: bool,
}

fn run(args: Cli) -> Result<()> {
    let start = Instant::now();

    let wl = Wordlist::from_file(&args.path, FileFormat::builder().build())?;
    let config = SearchConfig { max_results: args.limit, parallel: args.parallel };
    let suggestions = wl.suggest(&args.word, args.max_distance, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        info!("overall computing time: {:.8} s", start.elapsed().as_secs_f64());
    } else {
        for (idx, suggestion) in suggestions.iter().enumerate() {
            println!("idx = {}, {} (freq {}, distance {})",
                     idx, suggestion.word, suggestion.freq, suggestion.distance);
        }
        println!("overall computing time: {:.8} s", start.elapsed().as_secs_f64());
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Cli::from_args();

    if let Err(e) = run(args) {
        error!("{}", e);
        exit(1);
    }
}
