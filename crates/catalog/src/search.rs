//! Search criteria for listing products.
//!
//! `like` patterns follow SQL conventions: `%` matches any run of characters
//! (including none), `_` matches exactly one, and `\` escapes the next
//! character. Matching is case-insensitive, like the default collation of the
//! catalog database.

use crate::product::Product;

/// Comparison applied by a [`Filter`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Condition {
    Eq,
    Like,
}

/// A single field predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: String,
    pub value: String,
    pub condition: Condition,
}

impl Filter {
    /// Returns `false` for fields the catalog does not know.
    pub fn matches(&self, product: &Product) -> bool {
        let Some(actual) = field_value(product, &self.field) else {
            return false;
        };
        match self.condition {
            Condition::Eq => actual == self.value,
            Condition::Like => like(&self.value, actual),
        }
    }
}

fn field_value<'a>(product: &'a Product, field: &str) -> Option<&'a str> {
    match field {
        "sku" => Some(product.sku()),
        "name" => Some(product.name()),
        _ => None,
    }
}

/// A conjunction of filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    filters: Vec<Filter>,
}

impl SearchCriteria {
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// A product matches when every filter matches. No filters matches all.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }
}

/// Accumulates filters; `create` hands them over and resets the builder.
#[derive(Debug, Default)]
pub struct SearchCriteriaBuilder {
    filters: Vec<Filter>,
}

impl SearchCriteriaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_filter(
        &mut self,
        field: impl Into<String>,
        value: impl Into<String>,
        condition: Condition,
    ) -> &mut Self {
        self.filters.push(Filter {
            field: field.into(),
            value: value.into(),
            condition,
        });
        self
    }

    pub fn create(&mut self) -> SearchCriteria {
        SearchCriteria {
            filters: std::mem::take(&mut self.filters),
        }
    }
}

/// Products returned by [`ProductRepository::get_list`](crate::ProductRepository::get_list).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    items: Vec<Product>,
}

impl SearchResults {
    pub fn new(items: Vec<Product>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn total_count(&self) -> usize {
        self.items.len()
    }
}

/// Escape `like` metacharacters so `value` only matches itself.
pub fn escape_like(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Token {
    AnyRun,
    One,
    Lit(char),
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        tokens.push(match c {
            '%' => Token::AnyRun,
            '_' => Token::One,
            '\\' => Token::Lit(chars.next().unwrap_or('\\')),
            c => Token::Lit(c),
        });
    }
    tokens
}

fn same_char(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// SQL-style `like` match of `text` against `pattern`.
pub fn like(pattern: &str, text: &str) -> bool {
    let tokens = tokenize(pattern);
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    // Resume point after the most recent `%`: (token index, text index).
    let mut resume: Option<(usize, usize)> = None;

    while t < text.len() {
        match tokens.get(p) {
            Some(Token::AnyRun) => {
                p += 1;
                resume = Some((p, t));
                continue;
            }
            Some(Token::One) => {
                p += 1;
                t += 1;
                continue;
            }
            Some(Token::Lit(c)) if same_char(*c, text[t]) => {
                p += 1;
                t += 1;
                continue;
            }
            _ => {}
        }
        match resume {
            Some((rp, rt)) => {
                resume = Some((rp, rt + 1));
                p = rp;
                t = rt + 1;
            }
            None => return false,
        }
    }

    tokens[p..].iter().all(|tok| *tok == Token::AnyRun)
}
