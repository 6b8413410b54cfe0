//! Synthetic user data.
//!
//! Usernames are `[a-z0-9_]`, at most 20 chars, and never repeat within one
//! generator: the random tail is re-rolled on the (unlikely) collision.

use std::collections::HashSet;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "ada", "alan", "barbara", "claude", "dennis", "edsger", "frances", "grace", "hedy", "john",
    "ken", "linus", "margaret", "niklaus", "radia", "tony",
];

const LAST_NAMES: &[&str] = &[
    "allen", "backus", "dijkstra", "hamilton", "hoare", "hopper", "kernighan", "lamarr",
    "liskov", "lovelace", "perlman", "ritchie", "shannon", "thompson", "turing", "wirth",
];

const TAIL_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const TAIL_LEN: usize = 6;
const MAX_USERNAME_LEN: usize = 20;
const EMAIL_DOMAIN: &str = "example.com";

/// One generated identity, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub username: String,
    pub name: String,
    pub email: String,
}

pub struct UserDataGenerator {
    state: Mutex<GeneratorState>,
}

struct GeneratorState {
    rng: StdRng,
    issued: HashSet<String>,
}

impl Default for UserDataGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

impl UserDataGenerator {
    /// `Some(seed)` gives a reproducible sequence; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            state: Mutex::new(GeneratorState {
                rng,
                issued: HashSet::new(),
            }),
        }
    }

    pub fn next_user(&self) -> UserData {
        let mut state = self.state.lock();
        let first = FIRST_NAMES[state.rng.random_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[state.rng.random_range(0..LAST_NAMES.len())];

        let username = loop {
            let tail: String = (0..TAIL_LEN)
                .map(|_| TAIL_ALPHABET[state.rng.random_range(0..TAIL_ALPHABET.len())] as char)
                .collect();
            let stem_len = MAX_USERNAME_LEN - TAIL_LEN - 1;
            let stem: String = format!("{first}_{last}").chars().take(stem_len).collect();
            let candidate = format!("{stem}_{tail}");
            if state.issued.insert(candidate.clone()) {
                break candidate;
            }
        };

        UserData {
            email: format!("{username}@{EMAIL_DOMAIN}"),
            name: format!("{} {}", capitalize(first), capitalize(last)),
            username,
        }
    }

    pub fn issued_count(&self) -> usize {
        self.state.lock().issued.len()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
