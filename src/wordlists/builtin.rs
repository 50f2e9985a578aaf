//! Built-in wordlists.
//!
//! Entries are already lower-case and ordered; restricted phrases are listed
//! in the order they are checked.

use crate::core::level::TaxonomyLevel;

/// Remember keywords.
pub const REMEMBER: &[&str] = &[
    "arrange", "count", "define", "describe", "draw", "duplicate",
    "enumerate", "find", "identify", "know", "label", "list",
    "locate", "match", "name", "outline", "recall", "recognize",
    "relate", "repeat", "reproduce", "select", "sequence", "state",
    "tell", "write",
];

/// Understand keywords.
pub const UNDERSTAND: &[&str] = &[
    "classify", "compare", "comprehend", "convert", "defend",
    "demonstrate", "describe", "discuss", "distinguish", "estimate",
    "explain", "express", "extend", "generalize", "give examples",
    "illustrate", "indicate", "infer", "interpret", "locate",
    "paraphrase", "predict", "recognize", "rewrite", "select",
    "summarize", "translate",
];

/// Apply keywords.
pub const APPLY: &[&str] = &[
    "apply", "build", "calculate", "change", "choose", "complete",
    "compute", "construct", "demonstrate", "develop", "discover",
    "dramatize", "employ", "examine", "experiment", "illustrate",
    "interpret", "manipulate", "modify", "operate", "organize",
    "practice", "predict", "prepare", "produce", "relate", "schedule",
    "select", "show", "sketch", "solve", "use", "utilize",
];

/// Analyze keywords.
pub const ANALYZE: &[&str] = &[
    "analyze", "arrange", "breakdown", "categorize", "classify",
    "compare", "contrast", "correlate", "diagram", "differentiate",
    "discriminate", "distinguish", "examine", "explain", "focus",
    "illustrate", "infer", "investigate", "limit", "outline",
    "point out", "prioritize", "recognize", "separate", "subdivide",
];

/// Evaluate keywords.
pub const EVALUATE: &[&str] = &[
    "appraise", "argue", "assess", "attach", "choose", "compare",
    "conclude", "contrast", "criticize", "critique", "decide",
    "defend", "estimate", "evaluate", "grade", "interpret", "judge",
    "justify", "measure", "prioritize", "prove", "rank", "rate",
    "recommend", "select", "support", "test", "validate", "value",
];

/// Create keywords.
pub const CREATE: &[&str] = &[
    "adapt", "anticipate", "arrange", "assemble", "categorize",
    "collaborate", "collect", "combine", "compile", "compose",
    "construct", "create", "design", "develop", "devise", "express",
    "facilitate", "formulate", "generate", "imagine", "incorporate",
    "integrate", "invent", "make", "modify", "organize", "originate",
    "plan", "prepare", "produce", "propose", "rearrange", "reconstruct",
    "reorganize", "revise", "rewrite", "set up", "structure", "synthesize",
    "validate", "write",
];

/// Unmeasurable words, matched as whole tokens.
pub const RESTRICTED_WORDS: &[&str] = &[
    "believe", "hear", "realize", "capacity", "intelligence",
    "recognize", "comprehend", "know", "see", "conceptualize",
    "listen", "self-actualize", "memorize", "think", "experience",
    "perceive", "understand", "feel",
];

/// Recall-oriented phrases, matched as substrings.
pub const RESTRICTED_PHRASES: &[&str] = &[
    "what is", "define", "name the", "state the meaning of",
    "who is", "when did", "where is", "list the", "identify the",
    "evidence a", "evidence an", "to become", "to reduce",
    "appreciation for", "acquainted with", "adjusted to",
    "awareness of", "capable of", "comprehension of", "cognizant of",
    "enjoyment of", "conscious of", "familiar with",
    "interest in", "interested in", "knowledge of",
    "understanding of", "knowledgeable about",
];

/// Built-in keywords for a level.
pub fn keywords(level: TaxonomyLevel) -> &'static [&'static str] {
    match level {
        TaxonomyLevel::Remember => REMEMBER,
        TaxonomyLevel::Understand => UNDERSTAND,
        TaxonomyLevel::Apply => APPLY,
        TaxonomyLevel::Analyze => ANALYZE,
        TaxonomyLevel::Evaluate => EVALUATE,
        TaxonomyLevel::Create => CREATE,
    }
}
