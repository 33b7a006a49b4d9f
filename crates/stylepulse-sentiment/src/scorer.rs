//! Rule-based lexicon scorer producing a compound polarity in `[-1.0, 1.0]`.

use crate::lexicon;

/// Normalization constant for the compound score: `sum / sqrt(sum² + ALPHA)`.
const ALPHA: f64 = 15.0;

/// Multiplier applied to a sentiment word preceded by a negation.
const NEGATION_SCALAR: f64 = -0.74;

/// How far back (in tokens) boosters and negations reach.
const MODIFIER_WINDOW: usize = 3;

/// Booster strength decays with distance from the sentiment word.
const BOOSTER_DECAY: [f64; MODIFIER_WINDOW] = [1.0, 0.95, 0.9];

/// Weight of sentiment before and after a contrastive `but`.
const BEFORE_BUT: f64 = 0.5;
const AFTER_BUT: f64 = 1.5;

/// A model that maps text to a single polarity score in `[-1.0, 1.0]`.
///
/// The collector only depends on this contract, so any deterministic model
/// honoring the range can replace [`LexiconModel`].
pub trait SentimentModel: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

/// The built-in lexicon model. Stateless; see [`compound_score`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconModel;

impl SentimentModel for LexiconModel {
    fn score(&self, text: &str) -> f64 {
        compound_score(text)
    }
}

/// Score text with the built-in lexicon.
///
/// Each lexicon word contributes its valence, adjusted by boosters and
/// negations in the three preceding tokens. Sentiment after a `but` outweighs
/// sentiment before it. The summed valence is squashed into `[-1.0, 1.0]`.
/// Returns `0.0` for empty or unknown text.
#[must_use]
pub fn compound_score(text: &str) -> f64 {
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect();

    let mut valences: Vec<f64> = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| token_valence(&tokens[..i], token))
        .collect();

    if let Some(but_at) = tokens.iter().position(|t| t == "but") {
        for (i, v) in valences.iter_mut().enumerate() {
            if i < but_at {
                *v *= BEFORE_BUT;
            } else if i > but_at {
                *v *= AFTER_BUT;
            }
        }
    }

    normalize(valences.iter().sum())
}

fn token_valence(preceding: &[String], token: &str) -> f64 {
    let Some(mut v) = lexicon::valence(token) else {
        return 0.0;
    };

    let window = || preceding.iter().rev().take(MODIFIER_WINDOW);

    for (distance, prev) in window().enumerate() {
        if let Some(boost) = lexicon::booster(prev) {
            let scaled = boost * BOOSTER_DECAY[distance];
            v += if v > 0.0 { scaled } else { -scaled };
        }
    }

    if window().any(|prev| lexicon::is_negation(prev)) {
        v *= NEGATION_SCALAR;
    }

    v
}

fn normalize(sum: f64) -> f64 {
    if sum.abs() < f64::EPSILON {
        return 0.0;
    }
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}
