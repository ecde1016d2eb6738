//! Card notation shortcuts for tests.

use xeri_backend::domain::Card;

pub fn card(token: &str) -> Card {
    token
        .parse()
        .unwrap_or_else(|e| panic!("bad card token {token}: {e}"))
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|t| card(t)).collect()
}
