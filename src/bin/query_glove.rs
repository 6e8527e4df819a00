use clap::{value_t, App, Arg};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::Path;

use glovetools::{loaders::load_vectors, output::write_lookup};
use glovetools::{DuplicatePolicy, EmbeddingStore, LoadOptions};

/// Validate path args.
fn is_path(path: String) -> Result<(), String> {
    if Path::new(&path).exists() {
        return Ok(());
    }
    Err(format!("{} is not a valid path", path))
}

/// Print one lookup result.
fn fetch_one<W: Write>(store: &EmbeddingStore, token: &str, out: &mut W) -> io::Result<()> {
    write_lookup(out, token, store.get_vector(token))
}

/// Read tokens from stdin, one per line, until EOF.
fn fetch_interactive<W: Write>(store: &EmbeddingStore, out: &mut W) -> io::Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        fetch_one(store, token, out)?;
        out.flush()?;
    }
    Ok(())
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("query_glove")
        .about("Look up word vectors in a GloVe-format text file")
        .arg(
            Arg::with_name("vectors_path")
                .index(1)
                .help("Path to the word vector file")
                .validator(is_path)
                .required(true),
        )
        .arg(
            Arg::with_name("query")
                .short("q")
                .long("query")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("Token to print the vector for; reads tokens from stdin if absent")
                .required(false),
        )
        .arg(
            Arg::with_name("duplicates")
                .long("duplicates")
                .takes_value(true)
                .possible_values(&DuplicatePolicy::NAMES)
                .default_value("keep_first")
                .help("How to load tokens that appear on more than one line"),
        )
        .arg(
            Arg::with_name("no_progress")
                .long("no-progress")
                .help("Do not draw a progress bar while loading"),
        )
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let app = app().get_matches();

    let vectors_path = app
        .value_of("vectors_path")
        .map(Path::new)
        .ok_or("missing vectors path")?;
    let duplicates = value_t!(app, "duplicates", DuplicatePolicy)?;
    let options = LoadOptions::default().with_duplicates(duplicates);

    let store = load_vectors(vectors_path, &options, !app.is_present("no_progress"))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match app.values_of("query") {
        Some(queries) => {
            for token in queries {
                fetch_one(&store, token, &mut out)?;
            }
        }
        None => fetch_interactive(&store, &mut out)?,
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_app_duplicates_default() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let matches = app().get_matches_from_safe(vec!["query_glove", path]).unwrap();
        let policy = value_t!(matches, "duplicates", DuplicatePolicy).unwrap();
        assert_eq!(policy, DuplicatePolicy::KeepFirst);
        assert_eq!(matches.value_of("vectors_path"), Some(path));
    }

    #[test]
    fn test_app_accepts_every_policy_name() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        for name in DuplicatePolicy::NAMES.iter() {
            let matches = app()
                .get_matches_from_safe(vec!["query_glove", path, "--duplicates", *name])
                .unwrap();
            let policy = value_t!(matches, "duplicates", DuplicatePolicy).unwrap();
            assert_eq!(policy.to_string(), *name);
        }
    }

    #[test]
    fn test_app_rejects_policy_aliases() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        for alias in &["first", "keep-last"] {
            let res = app().get_matches_from_safe(vec!["query_glove", path, "--duplicates", *alias]);
            assert!(res.is_err());
        }
    }

    #[test]
    fn test_app_requires_existing_vectors_path() {
        assert!(app().get_matches_from_safe(vec!["query_glove"]).is_err());
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let res = app().get_matches_from_safe(vec!["query_glove", missing.to_str().unwrap()]);
        assert!(res.is_err());
    }
}
