use std::env;
use std::process;

use chained::hashing::{ChainedHashTable, ChainedHashTableBuilder, DEFAULT_BUCKET_COUNT};
use chained::{Error, Result};

/// Parsed command line: `chain_dump [--buckets N] WORD...`
#[derive(Debug, PartialEq)]
struct Invocation {
    buckets: usize,
    words: Vec<String>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Invocation> {
    let mut args = args.into_iter().peekable();
    let mut buckets = DEFAULT_BUCKET_COUNT;

    if args.peek().map(String::as_str) == Some("--buckets") {
        args.next();
        let value = args.next().unwrap_or_default();
        buckets = value
            .parse()
            .map_err(|source| Error::InvalidBucketCount { value, source })?;
    }

    Ok(Invocation {
        buckets,
        words: args.collect(),
    })
}

/// Each word maps to the position it was last seen at.
fn build_table(invocation: Invocation) -> Result<ChainedHashTable<String, usize>> {
    let mut table = ChainedHashTableBuilder::new()
        .with_buckets(invocation.buckets)
        .build()?;
    for (position, word) in invocation.words.into_iter().enumerate() {
        table.put(word, position);
    }
    Ok(table)
}

fn main() {
    env_logger::init();

    match parse_args(env::args().skip(1)).and_then(build_table) {
        Ok(table) => {
            println!("{}", table.dump());
            println!("{} keys in {} buckets", table.len(), table.bucket_count());
        }
        Err(e) => {
            eprintln!("chain_dump: {}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_bucket_count() {
        let invocation = parse_args(args(&["a", "b"])).unwrap();
        assert_eq!(invocation.buckets, DEFAULT_BUCKET_COUNT);
        assert_eq!(invocation.words, args(&["a", "b"]));
    }

    #[test]
    fn test_explicit_bucket_count() {
        let invocation = parse_args(args(&["--buckets", "3", "a"])).unwrap();
        assert_eq!(invocation.buckets, 3);
        assert_eq!(invocation.words, args(&["a"]));
    }

    #[test]
    fn test_non_numeric_bucket_count() {
        let err = parse_args(args(&["--buckets", "x", "a"])).unwrap_err();
        assert!(matches!(err, Error::InvalidBucketCount { ref value, .. } if value == "x"));
        assert_eq!(
            err.to_string(),
            "invalid bucket count \"x\": invalid digit found in string"
        );
    }

    #[test]
    fn test_missing_bucket_count() {
        let err = parse_args(args(&["--buckets"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid bucket count \"\": cannot parse integer from empty string"
        );
    }

    #[test]
    fn test_zero_buckets_rejected_at_build() {
        let invocation = parse_args(args(&["--buckets", "0", "a"])).unwrap();
        assert_eq!(build_table(invocation).unwrap_err(), Error::ZeroBuckets);
    }

    #[test]
    fn test_later_position_wins() {
        let table = build_table(parse_args(args(&["a", "b", "a"])).unwrap()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("a"), Some(&2));
        assert_eq!(table.get("b"), Some(&1));
    }
}
