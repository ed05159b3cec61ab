use tracing::error;

use crate::{
    domain::{catalog::ids, Suggestion},
    form::{FormSurface, ResultCard},
};

pub const RESULTS_HEADING: &str = "Results";

/// Replaces the results container with one card per suggestion, in the order
/// the server returned them.
pub fn render_results(surface: &mut dyn FormSurface, suggestions: &[Suggestion]) -> usize {
    let cards: Vec<ResultCard> = suggestions
        .iter()
        .enumerate()
        .map(|(index, suggestion)| ResultCard {
            rank: index + 1,
            career: suggestion.career.clone(),
            score: suggestion.score.to_string(),
        })
        .collect();
    let count = cards.len();
    if !surface.set_results(ids::RESULTS, cards) {
        error!("results container not found");
        return 0;
    }
    count
}

pub fn clear_results(surface: &mut dyn FormSurface) {
    surface.set_results(ids::RESULTS, Vec::new());
}

/// Text rendering of the results container.
pub fn render_results_text(cards: &[ResultCard]) -> String {
    let mut out = String::from(RESULTS_HEADING);
    for card in cards {
        out.push('\n');
        out.push_str(&format!("{}. {}  {}", card.rank, card.career, card.score));
    }
    out
}
