use std::path::PathBuf;
use std::process;
use std::time::Instant;

use log::info;
use structopt::StructOpt;

use wordsearch::{FileFormat, Pattern, SearchConfig, Wordlist};

/// Find the words of a word list that match wildcard patterns
/// ('?' matches one character, '*' matches any run of characters).
#[derive(StructOpt)]
struct Cli {
    /// The path to the word list, one word per line
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Patterns to search for
    #[structopt(required = true)]
    patterns: Vec<String>,
    /// JSON file with search settings
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,
    /// Column delimiter of the word list
    #[structopt(long)]
    delimiter: Option<char>,
    /// Column holding the word; needs --delimiter
    #[structopt(long, requires = "delimiter")]
    column: Option<usize>,
    /// Stop after this many matches per pattern
    #[structopt(long)]
    max_results: Option<usize>,
}

fn file_format(args: &Cli) -> FileFormat {
    match (args.delimiter, args.column) {
        (Some(delimiter), Some(column)) => FileFormat::builder().delimiter(delimiter).word_column(column).build(),
        (Some(delimiter), None) => FileFormat::builder().delimiter(delimiter).build(),
        (None, _) => FileFormat::builder().build(),
    }
}

fn run(args: &Cli) -> wordsearch::Result<()> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::from_json_file(path)?,
        None => SearchConfig::new(),
    };
    if args.max_results.is_some() {
        config.max_results = args.max_results;
    }

    let mut wl = Wordlist::with_config(config);
    wl.load_file(&args.path, &file_format(args))?;

    let start = Instant::now();
    let results = wl.search_many(&args.patterns[..]);
    info!("Searched {} patterns in {:.3}s", args.patterns.len(), start.elapsed().as_secs_f64());

    for (pattern, result) in args.patterns.iter().zip(results) {
        match result {
            Some(words) => {
                println!("Total {} matching words found for: {}", words.len(), pattern);
                println!();
                for (count, word) in words.iter().enumerate() {
                    println!("{}. {}", count + 1, word);
                }
                println!();
            }
            None => {
                if let Err(e) = Pattern::parse(pattern) {
                    eprintln!("invalid pattern {:?}: {}", pattern, e);
                }
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Cli::from_args();

    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use structopt::StructOpt;

    use crate::Cli;

    #[test]
    fn column_needs_delimiter() {
        assert!(Cli::from_iter_safe(&["wordsearch", "words.txt", "ca?", "--column", "1"]).is_err());

        let args = Cli::from_iter_safe(&["wordsearch", "words.txt", "ca?", "--delimiter", ";", "--column", "1"]).unwrap();
        assert_eq!(args.delimiter, Some(';'));
        assert_eq!(args.column, Some(1));
    }

    #[test]
    fn patterns_are_required() {
        assert!(Cli::from_iter_safe(&["wordsearch", "words.txt"]).is_err());
        let args = Cli::from_iter_safe(&["wordsearch", "words.txt", "ca?", "*s"]).unwrap();
        assert_eq!(args.patterns, vec!["ca?", "*s"]);
    }
}
