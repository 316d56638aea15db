//! Safety rules: a small boolean expression engine over item membership.
//!
//! A rule is a predicate over one substate's item set. If any rule evaluates
//! to true for any substate of a candidate state, that state is disallowed.
//! Rules are pure: evaluation is a function of the expression text and the
//! item set, with no side effects.
//!
//! # Grammar
//!
//! - literals `True` and `False`
//! - a bare word tests membership of that item; a `!`-prefixed word tests
//!   its absence
//! - `AND` / `OR` join exactly two operands at one nesting level; deeper
//!   combinations are written with parentheses, which are evaluated
//!   innermost-first
//! - a bare word with no combinator, a chain of combinators at one level,
//!   or anything else unrecognized evaluates to `false`
//!
//! Malformed expressions never raise - they evaluate to `false`. The engine
//! accepts that an unrecognized rule is misread as "safe"; callers who need
//! stricter handling should validate rule text upstream.

use crate::core::state::SystemState;
use std::collections::BTreeSet;

/// A parsed safety rule.
///
/// Construction never fails: text the grammar does not recognize parses to
/// an expression that is false for every item set.
///
/// # Example
///
/// ```rust
/// use crossway::core::Rule;
/// use std::collections::BTreeSet;
///
/// let rule = Rule::new("(fox AND goose) AND !boat");
///
/// let mut bank: BTreeSet<String> = BTreeSet::new();
/// bank.insert("fox".to_string());
/// bank.insert("goose".to_string());
///
/// // Fox and goose alone together: the rule matches, the state is unsafe.
/// assert!(rule.evaluate(&bank));
///
/// // With the boat present the rule no longer matches.
/// bank.insert("boat".to_string());
/// assert!(!rule.evaluate(&bank));
/// ```
#[derive(Clone, Debug)]
pub struct Rule {
    text: String,
    expr: Expr,
}

impl Rule {
    /// Parse a rule from its expression text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let expr = parse(&text);
        Self { text, expr }
    }

    /// The original expression text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Evaluate the rule against one substate's item set.
    ///
    /// Returns `true` when the rule matches - i.e. the configuration is
    /// disallowed.
    pub fn evaluate(&self, items: &BTreeSet<String>) -> bool {
        self.expr.eval_expression(items)
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Rule {}

/// Evaluate a rule expression directly, without keeping the parsed form.
pub fn evaluate(rule: &str, items: &BTreeSet<String>) -> bool {
    Rule::new(rule).evaluate(items)
}

/// Whether `state` violates none of `rules`.
///
/// Every rule is checked against every substate; a single match anywhere
/// disallows the state.
pub fn state_is_allowed(state: &SystemState, rules: &[Rule]) -> bool {
    for items in state.substates().values() {
        for rule in rules {
            if rule.evaluate(items) {
                return false;
            }
        }
    }
    true
}

/// One token of rule text.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Open,
    Close,
    And,
    Or,
    Lit(bool),
    Word { name: String, negated: bool },
}

fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            '(' => {
                chars.next();
                tokens.push(Token::Open);
            }
            ')' => {
                chars.next();
                tokens.push(Token::Close);
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            _ => {
                let mut negated = false;
                if c == '!' {
                    chars.next();
                    negated = true;
                }
                let mut word = String::new();
                while let Some(&c) = chars.peek() {
                    if c == '(' || c == ')' || c == '!' || c.is_whitespace() {
                        break;
                    }
                    word.push(c);
                    chars.next();
                }
                tokens.push(match (word.as_str(), negated) {
                    ("AND", false) => Token::And,
                    ("OR", false) => Token::Or,
                    ("True", false) => Token::Lit(true),
                    ("False", false) => Token::Lit(false),
                    _ => Token::Word {
                        name: word,
                        negated,
                    },
                });
            }
        }
    }
    tokens
}

/// Parsed expression tree.
///
/// `Binary` only ever appears at the top of a nesting level; operands are
/// literals, membership tests, or parenthesized groups.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Expr {
    Lit(bool),
    Member { item: String, negated: bool },
    Group(Box<Expr>),
    Binary {
        op: Combinator,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Unrecognized input; false for every item set.
    Falsey,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Combinator {
    And,
    Or,
}

impl Expr {
    /// Evaluate at expression level: one nesting level of a rule.
    ///
    /// A lone membership test is not a complete expression here - it only
    /// carries meaning as a combinator operand - so it evaluates false.
    fn eval_expression(&self, items: &BTreeSet<String>) -> bool {
        match self {
            Expr::Lit(value) => *value,
            Expr::Group(inner) => inner.eval_expression(items),
            Expr::Binary { op, lhs, rhs } => {
                let left = lhs.eval_operand(items);
                let right = rhs.eval_operand(items);
                match op {
                    Combinator::And => left && right,
                    Combinator::Or => left || right,
                }
            }
            Expr::Member { .. } | Expr::Falsey => false,
        }
    }

    /// Evaluate in operand position, where membership tests apply.
    fn eval_operand(&self, items: &BTreeSet<String>) -> bool {
        match self {
            Expr::Lit(value) => *value,
            Expr::Member { item, negated } => items.contains(item) != *negated,
            Expr::Group(inner) => inner.eval_expression(items),
            Expr::Binary { .. } => self.eval_expression(items),
            Expr::Falsey => false,
        }
    }
}

fn parse(text: &str) -> Expr {
    let tokens = tokenize(text);
    let mut pos = 0;
    match parse_expression(&tokens, &mut pos) {
        Some(expr) if pos == tokens.len() => expr,
        _ => Expr::Falsey,
    }
}

/// Parse one nesting level: `operand [AND|OR operand]`, ending at a `)`
/// or at the end of input. Anything further at the same level is malformed.
fn parse_expression(tokens: &[Token], pos: &mut usize) -> Option<Expr> {
    let first = parse_operand(tokens, pos)?;
    match peek_combinator(tokens, *pos) {
        None => {
            if at_level_end(tokens, *pos) {
                Some(first)
            } else {
                None
            }
        }
        Some(combinator) => {
            *pos += 1;
            let second = parse_operand(tokens, pos)?;
            if !at_level_end(tokens, *pos) {
                return None;
            }
            Some(Expr::Binary {
                op: combinator,
                lhs: Box::new(first),
                rhs: Box::new(second),
            })
        }
    }
}

fn parse_operand(tokens: &[Token], pos: &mut usize) -> Option<Expr> {
    match tokens.get(*pos)? {
        Token::Lit(value) => {
            *pos += 1;
            Some(Expr::Lit(*value))
        }
        Token::Word { name, negated } => {
            *pos += 1;
            Some(Expr::Member {
                item: name.clone(),
                negated: *negated,
            })
        }
        Token::Open => {
            *pos += 1;
            let inner = parse_expression(tokens, pos)?;
            match tokens.get(*pos) {
                Some(Token::Close) => {
                    *pos += 1;
                    Some(Expr::Group(Box::new(inner)))
                }
                _ => None,
            }
        }
        _ => None,
    }
}

fn peek_combinator(tokens: &[Token], pos: usize) -> Option<Combinator> {
    match tokens.get(pos) {
        Some(Token::And) => Some(Combinator::And),
        Some(Token::Or) => Some(Combinator::Or),
        _ => None,
    }
}

fn at_level_end(tokens: &[Token], pos: usize) -> bool {
    matches!(tokens.get(pos), None | Some(Token::Close))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system_state;

    fn items(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn literal_true_and_false() {
        assert!(evaluate("True", &items(&[])));
        assert!(!evaluate("False", &items(&[])));
    }

    #[test]
    fn bare_token_without_combinator_is_false() {
        // A membership test only has meaning as a combinator operand.
        assert!(!evaluate("fox", &items(&["fox"])));
        assert!(!evaluate("(fox)", &items(&["fox"])));
    }

    #[test]
    fn and_tests_membership_of_both_operands() {
        let bank = items(&["fox", "goose"]);
        assert!(evaluate("fox AND goose", &bank));
        assert!(!evaluate("fox AND beans", &bank));
    }

    #[test]
    fn or_matches_word_operands_like_and() {
        let bank = items(&["goose"]);
        assert!(evaluate("fox OR goose", &bank));
        assert!(evaluate("goose OR fox", &bank));
        assert!(!evaluate("fox OR beans", &bank));
    }

    #[test]
    fn negation_tests_absence() {
        let bank = items(&["fox", "goose"]);
        assert!(evaluate("fox AND !boat", &bank));
        assert!(!evaluate("fox AND !goose", &bank));
    }

    #[test]
    fn parentheses_reduce_innermost_first() {
        let bank = items(&["fox", "goose"]);
        assert!(evaluate("(fox AND goose) AND !boat", &bank));
        assert!(!evaluate("(fox AND boat) AND !goose", &bank));
        assert!(evaluate("(fox AND goose) OR False", &bank));
    }

    #[test]
    fn nested_parentheses() {
        let bank = items(&["fox", "goose", "beans"]);
        assert!(evaluate("((fox AND goose) AND beans) AND !boat", &bank));
        assert!(evaluate("((fox OR boat) AND (goose AND beans)) OR False", &bank));
    }

    #[test]
    fn chained_combinators_are_unsupported() {
        let bank = items(&["fox", "goose", "beans"]);
        assert!(!evaluate("fox AND goose AND beans", &bank));
        assert!(!evaluate("fox OR goose OR beans", &bank));
    }

    #[test]
    fn malformed_input_evaluates_false() {
        let bank = items(&["fox"]);
        assert!(!evaluate("", &bank));
        assert!(!evaluate("AND", &bank));
        assert!(!evaluate("fox AND", &bank));
        assert!(!evaluate("(fox AND goose", &bank));
        assert!(!evaluate("fox AND goose)", &bank));
        assert!(!evaluate(")(", &bank));
    }

    #[test]
    fn unrecognized_tokens_never_exclude() {
        // The permissive policy: garbage reads as "safe".
        let bank = items(&["fox", "goose"]);
        assert!(!evaluate("wibble", &bank));
        assert!(!evaluate("fox XOR goose", &bank));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let bank = items(&["fox", "goose"]);
        let rule = Rule::new("(fox AND goose) AND !boat");
        assert_eq!(rule.evaluate(&bank), rule.evaluate(&bank));
    }

    #[test]
    fn rule_keeps_its_text() {
        let rule = Rule::new("fox AND goose");
        assert_eq!(rule.text(), "fox AND goose");
    }

    #[test]
    fn state_is_allowed_checks_every_substate() {
        let rules = vec![Rule::new("(fox AND goose) AND !boat")];

        let safe = system_state! {
            "bank1": ["boat", "fox", "goose"],
            "bank2": ["beans"],
        };
        assert!(state_is_allowed(&safe, &rules));

        let unsafe_far_bank = system_state! {
            "bank1": ["boat", "beans"],
            "bank2": ["fox", "goose"],
        };
        assert!(!state_is_allowed(&unsafe_far_bank, &rules));
    }

    #[test]
    fn no_rules_allows_everything() {
        let state = system_state! {
            "bank1": ["fox", "goose"],
            "bank2": [],
        };
        assert!(state_is_allowed(&state, &[]));
    }
}
