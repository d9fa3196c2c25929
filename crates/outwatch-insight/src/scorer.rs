//! Lexicon scorer for community outage reports.

/// Outage-domain word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to `[-1.0, 1.0]`.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("fixed", 0.5),
    ("restored", 0.5),
    ("resolved", 0.5),
    ("working", 0.4),
    ("works", 0.3),
    ("back", 0.2),
    ("fine", 0.3),
    ("good", 0.3),
    ("great", 0.4),
    ("stable", 0.3),
    ("fast", 0.3),
    ("thanks", 0.2),
    // Negative signals
    ("down", -0.5),
    ("outage", -0.5),
    ("outages", -0.5),
    ("blackout", -0.5),
    ("broken", -0.5),
    ("dead", -0.5),
    ("slow", -0.4),
    ("dropped", -0.4),
    ("dropping", -0.4),
    ("disconnected", -0.4),
    ("disconnecting", -0.4),
    ("failed", -0.4),
    ("failing", -0.4),
    ("lost", -0.3),
    ("unable", -0.3),
    ("can't", -0.3),
    ("cant", -0.3),
    ("problem", -0.2),
    ("problems", -0.2),
    ("issue", -0.2),
    ("issues", -0.2),
    ("error", -0.3),
    ("unreliable", -0.5),
    ("useless", -0.6),
    ("frustrated", -0.5),
    ("frustrating", -0.5),
    ("terrible", -0.6),
    ("awful", -0.6),
    ("horrible", -0.6),
    ("worst", -0.6),
];

/// Score a text string using the outage lexicon.
///
/// Splits text into lowercase words, sums matching weights, and clamps
/// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let mut score = 0.0_f32;
    for word in text.split_whitespace() {
        let w = word
            .trim_matches(|c: char| !c.is_alphabetic())
            .to_lowercase()
            .replace('\u{2019}', "'");
        if let Some(&(_, weight)) = LEXICON.iter().find(|(lex_word, _)| *lex_word == w) {
            score += weight;
        }
    }
    score.clamp(-1.0, 1.0)
}
