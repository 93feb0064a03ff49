//! Word list used both for picking solutions and for validating guesses.
//!
//! The list is immutable once built and shared behind an `Arc`, so tests can
//! inject a tiny dictionary instead of the built-in one.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rand::Rng;
use thiserror::Error;

use super::rules::is_well_formed;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary is empty")]
    Empty,
    #[error("invalid dictionary word {word:?} at line {line}: words must be 5 ASCII letters")]
    InvalidWord { line: usize, word: String },
    #[error("failed to read dictionary file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl Dictionary {
    /// Build from any list of words. Words are lowercased and de-duplicated
    /// (first occurrence keeps its position for random picks).
    pub fn new<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Builder::default();
        for (idx, word) in words.into_iter().enumerate() {
            builder.push(idx + 1, word.as_ref().trim())?;
        }
        builder.finish()
    }

    /// Parse newline-separated text. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, DictionaryError> {
        let mut builder = Builder::default();
        for (idx, line) in text.lines().enumerate() {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            builder.push(idx + 1, word)?;
        }
        builder.finish()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Built-in list shipped with the binary.
    pub fn builtin() -> Self {
        let words: Vec<String> = BUILTIN_WORDS.iter().map(|w| (*w).to_string()).collect();
        let lookup = words.iter().cloned().collect();
        Self { words, lookup }
    }

    /// Membership test. Callers pass the lowercased word.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Uniformly random word.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let idx = rng.random_range(0..self.words.len());
        &self.words[idx]
    }
}

#[derive(Default)]
struct Builder {
    words: Vec<String>,
    lookup: HashSet<String>,
}

impl Builder {
    fn push(&mut self, line: usize, word: &str) -> Result<(), DictionaryError> {
        if !is_well_formed(word) {
            return Err(DictionaryError::InvalidWord {
                line,
                word: word.to_string(),
            });
        }
        let word = word.to_ascii_lowercase();
        if self.lookup.insert(word.clone()) {
            self.words.push(word);
        }
        Ok(())
    }

    fn finish(self) -> Result<Dictionary, DictionaryError> {
        if self.words.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(Dictionary {
            words: self.words,
            lookup: self.lookup,
        })
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN_WORDS: &[&str] = &[
    "apple", "again", "alarm", "dates", "elder", "about", "above", "actor", "acute", "admit",
    "adopt", "adult", "after", "agent", "agree", "ahead", "alert", "alike", "alive", "allow",
    "alone", "along", "alter", "amber", "among", "angel", "anger", "angle", "angry", "apart",
    "apply", "arena", "argue", "arise", "array", "aside", "asset", "audio", "avoid", "award",
    "aware", "bacon", "badge", "baker", "basic", "beach", "beard", "begin", "being", "below",
    "bench", "berry", "birth", "black", "blade", "blame", "blank", "blast", "blend", "blind",
    "block", "bloom", "board", "boost", "brain", "brave", "bread", "break", "brick", "bride",
    "brief", "bring", "broad", "brown", "brush", "build", "burst", "cabin", "cable", "candy",
    "cargo", "carry", "catch", "cause", "chain", "chair", "chalk", "charm", "chart", "chase",
    "cheap", "check", "chess", "chest", "chief", "child", "cider", "civic", "claim", "class",
    "clean", "clear", "climb", "clock", "close", "cloud", "coach", "coast", "coral", "count",
    "court", "cover", "craft", "crane", "crash", "cream", "crisp", "cross", "crowd", "crown",
    "curve", "cycle", "daily", "dance", "delta", "depth", "diary", "dough", "draft", "drama",
    "dream", "dress", "drift", "drink", "drive", "eagle", "early", "earth", "eight", "elbow",
    "empty", "enjoy", "enter", "entry", "equal", "error", "event", "exact", "extra", "fable",
    "faith", "false", "feast", "fence", "fever", "field", "fifth", "final", "flame", "flash",
    "fleet", "flint", "float", "flock", "floor", "flour", "fluid", "focus", "force", "forge",
    "forth", "frame", "fresh", "front", "frost", "fruit", "ghost", "giant", "given", "glass",
    "globe", "glove", "grace", "grade", "grain", "grand", "grape", "grass", "green", "greet",
    "group", "guard", "guest", "guide", "habit", "happy", "harsh", "heart", "heavy", "hedge",
    "honey", "horse", "hotel", "house", "human", "humor", "ideal", "image", "index", "inner",
    "input", "issue", "ivory", "jelly", "jewel", "joint", "judge", "juice", "knife", "label",
    "large", "laser", "later", "laugh", "layer", "learn", "lemon", "level", "light", "limit",
    "linen", "local", "logic", "loose", "lucky", "lunar", "lunch", "magic", "major", "maker",
    "mango", "maple", "march", "match", "mayor", "medal", "metal", "meter", "minor", "mixed",
    "model", "money", "month", "moral", "motor", "mount", "mouse", "mouth", "movie", "music",
    "noble", "noise", "north", "novel", "nurse", "ocean", "offer", "olive", "onion", "opera",
    "orbit", "order", "other", "outer", "owner", "paint", "panel", "paper", "party", "pasta",
    "peace", "peach", "pearl", "phase", "phone", "photo", "piano", "piece", "pilot", "pitch",
    "place", "plain", "plane", "plant", "plate", "plaza", "point", "polar", "pound", "power",
    "press", "price", "pride", "prime", "print", "prize", "proof", "proud", "queen", "quest",
    "quick", "quiet", "radio", "raise", "range", "rapid", "ratio", "reach", "ready", "realm",
    "river", "robin", "robot", "rocky", "round", "route", "royal", "rural", "salad", "scale",
    "scene", "scope", "score", "sense", "serve", "seven", "shade", "shape", "share", "sharp",
    "sheep", "shelf", "shell", "shift", "shine", "shirt", "shock", "shore", "short", "sight",
    "skill", "slate", "sleep", "slice", "smart", "smile", "smoke", "snake", "solar", "solid",
    "sound", "south", "space", "spare", "spark", "speak", "spice", "spine", "spoon", "sport",
    "staff", "stage", "stair", "stamp", "stand", "start", "steam", "steel", "stone", "storm",
    "story", "stove", "straw", "sugar", "sunny", "sweet", "swift", "table", "teach", "thick",
    "thing", "think", "tiger", "title", "toast", "topic", "torch", "total", "touch", "tower",
    "trace", "track", "trade", "trail", "train", "treat", "trend", "trial", "tribe", "truck",
    "trust", "truth", "twist", "uncle", "under", "union", "unity", "upper", "urban", "usage",
    "valid", "value", "vapor", "vault", "video", "vigor", "visit", "vital", "vivid", "voice",
    "waste", "watch", "water", "wheat", "wheel", "whole", "width", "woman", "world", "worth",
    "wrist", "yacht", "yield", "young", "youth", "zebra",
];
