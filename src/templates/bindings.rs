//! Static bindings from host rule categories to failure kinds
//!
//! The binding table declares, for this one catalog, which failure kind
//! answers for each rule category the host framework can raise. Several
//! categories deliberately share a kind: a "not null" failure reads the same
//! to an end user as a "not empty" failure.

/// Rule categories the host validation framework can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    /// Email address format
    Email,
    /// Value must be >= a comparison value
    GreaterThanOrEqual,
    /// Value must be > a comparison value
    GreaterThan,
    /// String length within a min/max range
    Length,
    /// String length at least a minimum
    MinimumLength,
    /// String length at most a maximum
    MaximumLength,
    /// Value must be <= a comparison value
    LessThanOrEqual,
    /// Value must be < a comparison value
    LessThan,
    /// Value must be present and non-empty
    NotEmpty,
    /// Value must differ from a comparison value
    NotEqual,
    /// Value must be present
    NotNull,
    /// Caller-supplied predicate failed
    Predicate,
    /// Caller-supplied async predicate failed
    AsyncPredicate,
    /// Regular expression mismatch
    Regex,
    /// Value must equal a comparison value
    Equal,
    /// String length must be exact
    ExactLength,
    /// Value within an inclusive range
    InclusiveBetween,
    /// Value within an exclusive range
    ExclusiveBetween,
    /// Credit card number check
    CreditCard,
    /// Decimal scale and precision limits
    ScalePrecision,
    /// Value must be empty
    Empty,
    /// Value must be absent
    Null,
    /// Value must be a defined enum member
    Enum,
}

impl RuleCategory {
    /// The failure kind this category resolves messages under
    pub fn failure_kind(&self) -> &'static str {
        match self {
            RuleCategory::Email => "Email",
            RuleCategory::GreaterThanOrEqual => "GreaterThanOrEqual",
            RuleCategory::GreaterThan => "GreaterThan",
            RuleCategory::Length => "Length",
            RuleCategory::MinimumLength => "MinLength",
            RuleCategory::MaximumLength => "MaxLength",
            RuleCategory::LessThanOrEqual => "LessThanOrEqual",
            RuleCategory::LessThan => "LessThan",
            RuleCategory::NotEmpty => "NotEmpty",
            RuleCategory::NotEqual => "NotEqual",
            RuleCategory::NotNull => "NotEmpty",
            RuleCategory::Predicate => "Predicate",
            RuleCategory::AsyncPredicate => "Predicate",
            RuleCategory::Regex => "Regex",
            RuleCategory::Equal => "Equal",
            RuleCategory::ExactLength => "ExactLength",
            RuleCategory::InclusiveBetween => "InclusiveBetween",
            RuleCategory::ExclusiveBetween => "ExclusiveBetween",
            RuleCategory::CreditCard => "CreditCard",
            RuleCategory::ScalePrecision => "ScalePrecision",
            RuleCategory::Empty => "Empty",
            RuleCategory::Null => "Empty",
            RuleCategory::Enum => "Enum",
        }
    }

    /// All bound rule categories, in binding-table order
    pub fn all() -> &'static [RuleCategory] {
        &[
            RuleCategory::Email,
            RuleCategory::GreaterThanOrEqual,
            RuleCategory::GreaterThan,
            RuleCategory::Length,
            RuleCategory::MinimumLength,
            RuleCategory::MaximumLength,
            RuleCategory::LessThanOrEqual,
            RuleCategory::LessThan,
            RuleCategory::NotEmpty,
            RuleCategory::NotEqual,
            RuleCategory::NotNull,
            RuleCategory::Predicate,
            RuleCategory::AsyncPredicate,
            RuleCategory::Regex,
            RuleCategory::Equal,
            RuleCategory::ExactLength,
            RuleCategory::InclusiveBetween,
            RuleCategory::ExclusiveBetween,
            RuleCategory::CreditCard,
            RuleCategory::ScalePrecision,
            RuleCategory::Empty,
            RuleCategory::Null,
            RuleCategory::Enum,
        ]
    }
}

/// Short-form template kinds selected only through an explicit per-rule
/// error-code override. No rule category binds to these; the host never
/// chooses them automatically, and presence or absence of context values
/// plays no part in the selection.
pub const SIMPLE_KINDS: &[&str] = &[
    "Length_Simple",
    "MinimumLength_Simple",
    "MaximumLength_Simple",
    "ExactLength_Simple",
    "InclusiveBetween_Simple",
];

/// Every failure kind the binding table references, de-duplicated, in
/// binding order. The default resource must carry a template for each.
pub fn required_kinds() -> Vec<&'static str> {
    let mut kinds = Vec::new();
    for category in RuleCategory::all() {
        let kind = category.failure_kind();
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    kinds.extend_from_slice(SIMPLE_KINDS);
    kinds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_kind_bindings() {
        assert_eq!(
            RuleCategory::NotNull.failure_kind(),
            RuleCategory::NotEmpty.failure_kind()
        );
        assert_eq!(
            RuleCategory::Null.failure_kind(),
            RuleCategory::Empty.failure_kind()
        );
        assert_eq!(
            RuleCategory::AsyncPredicate.failure_kind(),
            RuleCategory::Predicate.failure_kind()
        );
    }

    #[test]
    fn test_required_kinds_deduplicated() {
        let kinds = required_kinds();
        // 23 categories collapse to 20 distinct kinds, plus 5 simple kinds
        assert_eq!(kinds.len(), 25);
        for kind in &kinds {
            assert_eq!(kinds.iter().filter(|&&k| k == *kind).count(), 1);
        }
    }

    #[test]
    fn test_simple_kinds_not_category_bound() {
        for category in RuleCategory::all() {
            assert!(!SIMPLE_KINDS.contains(&category.failure_kind()));
        }
    }
}
