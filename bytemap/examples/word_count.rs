//! Counts word occurrences with borrowed, nul-terminated keys.

use bytemap::{ByteMap, KeyMode};

const TEXT: &str = "the quick brown fox jumps over the lazy dog while the dog sleeps";

fn main() {
    // Keys live in this vector; the map borrows them (copy_keys = false).
    let words: Vec<Vec<u8>> = TEXT
        .split_whitespace()
        .map(|word| {
            let mut key = word.as_bytes().to_vec();
            key.push(0);
            key
        })
        .collect();

    let mut counts: ByteMap<u64> = ByteMap::new(16, KeyMode::NulTerminated, false);
    for word in &words {
        let seen = counts.get(word).copied().unwrap_or(0);
        counts.insert(word, seen + 1);
    }

    println!(
        "{} distinct words, capacity {}, load factor {:.2}",
        counts.len(),
        counts.capacity(),
        counts.load_factor()
    );

    for (key, count) in counts.iter() {
        let word = std::str::from_utf8(&key[..key.len() - 1]).unwrap();
        println!("{word}: {count}");
    }
}
