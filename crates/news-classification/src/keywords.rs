//! Keyword tables backing the rule classifier. Matching is substring
//! containment on lowercased text for phrases and exact token matching for
//! the polarity vocabularies.

pub const GLOBAL_CUES: &[&str] = &[
    "global",
    "worldwide",
    "international",
    "world economy",
    "imf",
    "world bank",
    "g20",
    "g7",
];

pub const EARNINGS_KEYWORDS: &[&str] = &[
    "earnings",
    "quarterly results",
    "revenue",
    "eps",
    "guidance",
    "net income",
    "profit margin",
    "beat estimates",
    "missed estimates",
];

pub const POLICY_KEYWORDS: &[&str] = &[
    "interest rate",
    "rate hike",
    "rate cut",
    "central bank",
    "federal reserve",
    "monetary policy",
    "regulation",
    "tariff",
    "stimulus",
    "fiscal",
    "tax reform",
];

pub const GEOPOLITICAL_KEYWORDS: &[&str] = &[
    "sanctions",
    "geopolitical",
    "invasion",
    "military",
    "ceasefire",
    "conflict",
    "nato",
    "election",
];

pub const CORPORATE_KEYWORDS: &[&str] = &[
    "merger",
    "acquisition",
    "buyout",
    "takeover",
    "spinoff",
    "ipo",
    "ceo",
    "cfo",
    "restructuring",
    "layoffs",
    "product launch",
    "share buyback",
];

pub const MACRO_KEYWORDS: &[&str] = &[
    "inflation",
    "gdp",
    "unemployment",
    "recession",
    "economic growth",
    "consumer spending",
    "manufacturing",
    "trade deficit",
    "retail sales",
];

pub const SENTIMENT_KEYWORDS: &[&str] = &[
    "investor sentiment",
    "optimism",
    "pessimism",
    "fear",
    "euphoria",
    "panic",
    "risk appetite",
];

pub const POSITIVE_WORDS: &[&str] = &[
    "surge",
    "rally",
    "gain",
    "profit",
    "growth",
    "beat",
    "upgrade",
    "outperform",
    "strong",
    "positive",
    "rise",
    "record",
    "breakthrough",
    "exceed",
    "momentum",
    "rebound",
    "expansion",
    "robust",
    "upside",
    "raised",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "decline",
    "loss",
    "fall",
    "plunge",
    "crash",
    "miss",
    "downgrade",
    "underperform",
    "weak",
    "negative",
    "drop",
    "concern",
    "risk",
    "disappoint",
    "slump",
    "warning",
    "lawsuit",
    "bankruptcy",
    "layoff",
    "default",
    "investigation",
    "recall",
    "lowered",
];

pub const NEUTRAL_CUES: &[&str] = &[
    "unchanged",
    "stable",
    "flat",
    "steady",
    "maintained",
    "mixed",
];

/// Attribution verbs that mark a fact as specific, not speculative
pub const SPECIFICITY_TERMS: &[&str] = &["announced", "reported", "confirmed", "stated", "said"];

pub const HORIZON_SHORT_CUES: &[&str] = &[
    "today",
    "tomorrow",
    "overnight",
    "intraday",
    "immediate",
    "this week",
];

pub const HORIZON_MEDIUM_CUES: &[&str] = &[
    "next quarter",
    "coming months",
    "months",
    "half-year",
    "mid-term",
    "medium-term",
];

pub const HORIZON_LONG_CUES: &[&str] = &[
    "long-term",
    "years",
    "decade",
    "structural",
    "permanent",
    "lasting",
];
