//! Word valences, intensity modifiers and negators for the lexicon scorer.

/// Valence per lowercase word on a `[-4.0, 4.0]` scale.
///
/// General-purpose sentiment words plus fashion vocabulary whose polarity is
/// stable in posts about clothes and brands.
pub(crate) const VALENCE: &[(&str, f64)] = &[
    // Positive
    ("adorable", 2.2),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("bold", 1.1),
    ("brilliant", 2.8),
    ("chic", 1.9),
    ("classic", 1.2),
    ("classy", 1.9),
    ("comfortable", 1.5),
    ("comfy", 1.6),
    ("cool", 1.3),
    ("cute", 2.0),
    ("dapper", 1.8),
    ("dazzling", 2.5),
    ("delight", 2.9),
    ("elegant", 2.1),
    ("enjoy", 2.2),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("fab", 2.1),
    ("fabulous", 2.4),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("favourite", 2.0),
    ("fierce", 1.2),
    ("fire", 1.0),
    ("flattering", 1.8),
    ("flawless", 2.3),
    ("fresh", 1.3),
    ("fun", 2.3),
    ("glam", 1.6),
    ("glamorous", 2.1),
    ("glamour", 1.7),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("great", 3.1),
    ("happy", 2.7),
    ("iconic", 1.9),
    ("impressive", 2.3),
    ("inspired", 2.2),
    ("inspiring", 2.3),
    ("like", 1.5),
    ("liked", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loving", 2.9),
    ("nice", 1.8),
    ("obsessed", 1.2),
    ("perfect", 2.7),
    ("pretty", 2.2),
    ("recommend", 1.5),
    ("sleek", 1.4),
    ("slay", 1.8),
    ("smart", 1.7),
    ("stunning", 2.9),
    ("stylish", 2.0),
    ("superb", 3.1),
    ("sustainable", 1.2),
    ("thanks", 1.9),
    ("timeless", 1.7),
    ("trendy", 1.3),
    ("want", 0.3),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("wow", 2.8),
    ("yes", 1.7),
    // Negative
    ("annoying", -1.7),
    ("awful", -2.0),
    ("bad", -2.5),
    ("boring", -1.3),
    ("broke", -1.8),
    ("broken", -2.1),
    ("cheap", -1.0),
    ("cheesy", -1.0),
    ("dated", -0.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disaster", -3.1),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("dull", -1.7),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fake", -2.1),
    ("flop", -1.4),
    ("gross", -2.1),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hideous", -2.9),
    ("horrible", -2.5),
    ("itchy", -1.1),
    ("lame", -1.8),
    ("meh", -0.5),
    ("mess", -1.5),
    ("overpriced", -1.6),
    ("poor", -2.1),
    ("regret", -1.8),
    ("ripoff", -2.0),
    ("ruined", -2.4),
    ("sad", -2.1),
    ("scam", -2.8),
    ("shame", -2.0),
    ("sucks", -1.5),
    ("tacky", -1.7),
    ("terrible", -2.1),
    ("trash", -1.9),
    ("ugly", -2.3),
    ("uncomfortable", -1.6),
    ("unethical", -2.3),
    ("upset", -1.6),
    ("waste", -1.8),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

/// Intensity modifiers applied to the sentiment word that follows them.
/// Positive values amplify, negative values dampen.
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("completely", 0.293),
    ("extremely", 0.293),
    ("highly", 0.293),
    ("incredibly", 0.293),
    ("really", 0.293),
    ("so", 0.293),
    ("super", 0.293),
    ("totally", 0.293),
    ("very", 0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("kinda", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
];

/// Words that invert the polarity of a sentiment word within three tokens.
/// Apostrophes are already stripped by the normalizer, hence `dont`.
pub(crate) const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont", "hasnt", "havent",
    "isnt", "neither", "never", "no", "nor", "not", "nothing", "shouldnt", "wasnt", "werent",
    "without", "wont", "wouldnt",
];

pub(crate) fn valence(word: &str) -> Option<f64> {
    VALENCE
        .iter()
        .find(|&&(lex_word, _)| lex_word == word)
        .map(|&(_, v)| v)
}

pub(crate) fn booster(word: &str) -> Option<f64> {
    BOOSTERS
        .iter()
        .find(|&&(lex_word, _)| lex_word == word)
        .map(|&(_, v)| v)
}

pub(crate) fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}
