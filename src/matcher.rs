/// Canonicalizes an ingredient token for comparison: lowercase, trimmed.
/// Deliberately nothing else (no stemming, no punctuation stripping, no
/// synonym lookup) so that "Large Egg " and "large egg" compare equal but
/// "scallion" and "green onion" do not.
pub fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Decides whether a single pantry term satisfies a single recipe term.
/// Both terms arrive already normalized. Implementations must be pure;
/// the ranker calls this once per (user term, recipe term) pair.
pub trait MatchStrategy: Send + Sync {
    fn is_covered(&self, user_term: &str, recipe_term: &str) -> bool;
}

/// Default strategy: a match is declared when either normalized term is a
/// substring of the other. A short pantry term ("egg") covers a longer recipe
/// term ("large egg"), and vice versa. Coarse on purpose: "pea" covers
/// "peach" and "tea" covers "steak". That over-matching is the contract;
/// stricter algorithms belong in their own `MatchStrategy` impl, not here.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstringContainment;

impl MatchStrategy for SubstringContainment {
    fn is_covered(&self, user_term: &str, recipe_term: &str) -> bool {
        user_term.contains(recipe_term) || recipe_term.contains(user_term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(normalize("  EGG "), "egg");
        assert_eq!(normalize("Olive Oil"), "olive oil");
        assert_eq!(normalize("\ttomato\n"), "tomato");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for s in ["  Soy Sauce ", "egg", "", "  ", "ChIlI  PoWdEr"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_keeps_inner_whitespace_and_punctuation() {
        assert_eq!(normalize("half-and-half"), "half-and-half");
        assert_eq!(normalize("soy  sauce"), "soy  sauce");
    }

    #[test]
    fn test_containment_both_directions() {
        let strategy = SubstringContainment;
        assert!(strategy.is_covered("egg", "large egg"));
        assert!(strategy.is_covered("large egg", "egg"));
        assert!(strategy.is_covered("egg", "egg"));
        assert!(!strategy.is_covered("milk", "egg"));
    }

    #[test]
    fn test_containment_known_false_positives_are_kept() {
        // Over-matching on short substrings is specified behavior.
        let strategy = SubstringContainment;
        assert!(strategy.is_covered("pea", "peach"));
        assert!(strategy.is_covered("tea", "steak"));
    }
}
