//! Toppings parsing.
//!
//! The toppings slot is free text holding a comma-delimited list. Each
//! element is normalized and checked against [`ALLOWED_TOPPINGS`].

/// Toppings the kitchen can put on a pizza.
pub const ALLOWED_TOPPINGS: &[&str] = &[
    "cheese",
    "olives",
    "mushrooms",
    "pepperoni",
    "onions",
    "peppers",
    "pineapple",
    "bacon",
];

/// Why a toppings value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToppingError {
    #[error("no toppings given")]
    Empty,

    #[error("unknown toppings: {}", .0.join(", "))]
    Unknown(Vec<String>),
}

/// A validated, normalized toppings list (lower-case, input order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toppings(Vec<String>);

impl Toppings {
    /// Normalized elements.
    pub fn items(&self) -> &[String] {
        &self.0
    }

    /// Capitalized, comma-joined form for confirmation messages.
    pub fn display(&self) -> String {
        self.0
            .iter()
            .map(|t| capitalize(t))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Split, normalize and validate a raw toppings value.
pub fn parse_toppings(raw: &str) -> Result<Toppings, ToppingError> {
    let items: Vec<String> = raw
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    if items.is_empty() {
        return Err(ToppingError::Empty);
    }

    let unknown: Vec<String> = items
        .iter()
        .filter(|t| !ALLOWED_TOPPINGS.contains(&t.as_str()))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(ToppingError::Unknown(unknown));
    }

    Ok(Toppings(items))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
