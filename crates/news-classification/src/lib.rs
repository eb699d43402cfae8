use engine_core::{
    ArticleInput, EngineError, ImpactAssessment, ImpactDirection, NewsClassification,
    NewsEntities, NewsScope, NewsType, ThresholdConfig, TimeHorizon,
};

pub mod keywords;


use keywords::*;

/// Candidate facts kept per article
const MAX_FACTS: usize = 10;

struct ScopeInputs<'a> {
    entities: &'a NewsEntities,
    text: &'a str,
}

type ScopePredicate = fn(&ScopeInputs<'_>) -> bool;

/// Ordered scope rules, priority Company > Sector > Country with one
/// dominance exception: multi-country news carrying a global cue is Global.
const SCOPE_RULES: &[(ScopePredicate, NewsScope)] = &[
    (has_company, NewsScope::Company),
    (has_sector, NewsScope::Sector),
    (global_signal_dominates, NewsScope::Global),
    (has_country, NewsScope::Country),
];

/// Fixed news-type priority; the first table with a hit wins
const NEWS_TYPE_RULES: &[(NewsType, &[&str])] = &[
    (NewsType::Earnings, EARNINGS_KEYWORDS),
    (NewsType::Policy, POLICY_KEYWORDS),
    (NewsType::Geopolitical, GEOPOLITICAL_KEYWORDS),
    (NewsType::Corporate, CORPORATE_KEYWORDS),
    (NewsType::Macro, MACRO_KEYWORDS),
    (NewsType::Sentiment, SENTIMENT_KEYWORDS),
];

fn has_company(inputs: &ScopeInputs<'_>) -> bool {
    !inputs.entities.companies.is_empty()
}

fn has_sector(inputs: &ScopeInputs<'_>) -> bool {
    !inputs.entities.sectors.is_empty()
}

fn global_signal_dominates(inputs: &ScopeInputs<'_>) -> bool {
    inputs.entities.countries.len() >= 2
        && GLOBAL_CUES.iter().any(|cue| inputs.text.contains(cue))
}

fn has_country(inputs: &ScopeInputs<'_>) -> bool {
    !inputs.entities.countries.is_empty()
}

pub struct NewsRuleClassifier;

impl NewsRuleClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify an article into scope, news type, and impact from its text,
    /// pre-extracted entities, and candidate facts. Purely rule-driven:
    /// the output categorizes stated content and never recommends.
    pub fn classify(
        &self,
        article: &ArticleInput,
        config: &ThresholdConfig,
    ) -> Result<NewsClassification, EngineError> {
        if article.headline.trim().is_empty() {
            return Err(EngineError::InvalidInput("article headline is empty".into()));
        }
        if article.body.trim().is_empty() {
            return Err(EngineError::InvalidInput("article body is empty".into()));
        }

        let text = format!("{} {}", article.headline, article.body).to_lowercase();
        let facts = clean_facts(&article.candidate_facts);

        let scope = classify_scope(&article.entities, &text);
        let news_type = classify_news_type(&text);
        let impact = assess_impact(&article.headline, &facts, &text, config);

        tracing::debug!(?scope, ?news_type, facts = facts.len(), "article classified");

        Ok(NewsClassification {
            scope,
            news_type,
            impact,
            facts,
            entities: article.entities.clone(),
        })
    }
}

impl Default for NewsRuleClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn classify_scope(entities: &NewsEntities, text: &str) -> NewsScope {
    let inputs = ScopeInputs { entities, text };
    SCOPE_RULES
        .iter()
        .find(|(predicate, _)| predicate(&inputs))
        .map(|(_, scope)| *scope)
        .unwrap_or(NewsScope::Global)
}

fn classify_news_type(text: &str) -> NewsType {
    NEWS_TYPE_RULES
        .iter()
        .find(|(_, table)| table.iter().any(|kw| text.contains(kw)))
        .map(|(news_type, _)| *news_type)
        .unwrap_or(NewsType::Macro)
}

fn assess_impact(
    headline: &str,
    facts: &[String],
    text: &str,
    config: &ThresholdConfig,
) -> ImpactAssessment {
    let headline_lower = headline.to_lowercase();
    // Headline hits weigh double
    let mut positive = 2 * token_hits(&headline_lower, POSITIVE_WORDS);
    let mut negative = 2 * token_hits(&headline_lower, NEGATIVE_WORDS);
    for fact in facts {
        let fact_lower = fact.to_lowercase();
        positive += token_hits(&fact_lower, POSITIVE_WORDS);
        negative += token_hits(&fact_lower, NEGATIVE_WORDS);
    }
    let neutral = NEUTRAL_CUES.iter().filter(|cue| text.contains(*cue)).count();

    let raw_direction = if neutral > 2 {
        ImpactDirection::Neutral
    } else if positive as f64 > negative as f64 * 1.5 {
        ImpactDirection::Positive
    } else if negative as f64 > positive as f64 * 1.5 {
        ImpactDirection::Negative
    } else if positive == 0 && negative == 0 {
        ImpactDirection::Unclear
    } else {
        ImpactDirection::Neutral
    };

    let confidence = confidence_score(headline, facts);
    let direction = if facts.is_empty() || confidence < config.confidence_threshold {
        ImpactDirection::Unclear
    } else {
        raw_direction
    };

    ImpactAssessment {
        direction,
        confidence,
        time_horizon: time_horizon(text),
    }
}

/// Deterministic confidence in [0, 1]: weighted by numeric facts, fact
/// count, a fixed source factor, and attribution specificity. Monotone
/// nondecreasing in corroborating facts.
fn confidence_score(headline: &str, facts: &[String]) -> f64 {
    let numeric_facts = facts
        .iter()
        .filter(|fact| fact.chars().any(|c| c.is_ascii_digit()))
        .count();
    let clarity = (numeric_facts as f64 / 3.0).min(1.0) * 0.3;
    let breadth = (facts.len() as f64 / 5.0).min(1.0) * 0.3;
    let source = 0.6 * 0.2;

    let corpus = format!("{} {}", headline, facts.join(" ")).to_lowercase();
    let specificity = SPECIFICITY_TERMS
        .iter()
        .filter(|term| corpus.contains(*term))
        .count();
    let specificity_score = (specificity as f64 / 3.0).min(1.0) * 0.2;

    let confidence = (clarity + breadth + source + specificity_score).clamp(0.0, 1.0);
    (confidence * 100.0).round() / 100.0
}

fn time_horizon(text: &str) -> TimeHorizon {
    let short = cue_hits(text, HORIZON_SHORT_CUES);
    let medium = cue_hits(text, HORIZON_MEDIUM_CUES);
    let long = cue_hits(text, HORIZON_LONG_CUES);

    if long > medium && long > short {
        TimeHorizon::Long
    } else if medium > short {
        TimeHorizon::Medium
    } else {
        TimeHorizon::Short
    }
}

fn cue_hits(text: &str, cues: &[&str]) -> usize {
    cues.iter().filter(|cue| text.contains(*cue)).count()
}

/// Exact token matches against a polarity vocabulary
fn token_hits(text: &str, vocabulary: &[&str]) -> usize {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .filter(|token| vocabulary.contains(token))
        .count()
}

fn clean_facts(candidates: &[String]) -> Vec<String> {
    candidates
        .iter()
        .map(|fact| fact.trim())
        .filter(|fact| !fact.is_empty())
        .map(str::to_string)
        .take(MAX_FACTS)
        .collect()
}
