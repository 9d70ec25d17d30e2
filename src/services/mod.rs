//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! `catalog` and `leaderboard` own the only shared mutable state. `query` is
//! pure filtering/sorting over snapshots taken from them, and `score`
//! orchestrates a submission across both stores. Route handlers stay focused
//! on protocol translation.

pub mod catalog;
pub mod leaderboard;
pub mod query;
pub mod score;

/// Case-insensitive exact match using Unicode lowercase folding.
#[must_use]
pub fn same_text(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
