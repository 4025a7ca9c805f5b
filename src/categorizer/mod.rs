mod rules;

use crate::models::Category;
use crate::types::fold_text;

pub use rules::DEFAULT_RULES;

/// One entry of the rule table: a category and the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    category: Category,
    /// Stored folded so matching only has to fold the description.
    keywords: Vec<String>
}

impl CategoryRule {
    pub fn new<I, S>(category: Category, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            category,
            keywords: keywords.into_iter()
                .map(|keyword| fold_text(keyword.as_ref()))
                .filter(|keyword| !keyword.is_empty())
                .collect()
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    fn matches(&self, folded_description: &str) -> bool {
        self.keywords.iter().any(|keyword| folded_description.contains(keyword.as_str()))
    }
}

/// Assigns a category to a description using an ordered keyword table.
///
/// Rules are evaluated in order and the first one with a keyword contained in
/// the description wins, so earlier rules take priority. Descriptions matching
/// no rule fall back to `Category::Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categorizer {
    rules: Vec<CategoryRule>
}

impl Categorizer {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// Appends a rule with lower priority than every existing one.
    pub fn with_rule<I, S>(mut self, category: Category, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.rules.push(CategoryRule::new(category, keywords));
        self
    }

    pub fn categorize(&self, description: &str) -> Category {
        let folded = fold_text(description);

        self.rules.iter()
            .find(|rule| rule.matches(&folded))
            .map_or(Category::Other, CategoryRule::category)
    }
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.iter()
            .map(|(category, keywords)| CategoryRule::new(*category, keywords.iter()))
            .collect())
    }
}
