//! Run-list identity digests.

use sha2::{Digest, Sha256};

use crate::recipe::RecipeName;

/// Compute a deterministic digest of an ordered run-list.
///
/// SHA-256 over the qualified names, NUL-separated. Order-sensitive: the
/// same recipes in a different order produce a different digest.
pub fn run_list_digest(names: &[RecipeName]) -> String {
    let mut hasher = Sha256::new();
    for name in names {
        hasher.update(name.qualified().as_bytes());
        hasher.update(b"\0");
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<RecipeName> {
        raw.iter()
            .map(|n| RecipeName::parse(n).expect("parse failed"))
            .collect()
    }

    #[test]
    fn test_digest_deterministic() {
        let a = run_list_digest(&names(&["base", "app::config"]));
        let b = run_list_digest(&names(&["base", "app::config"]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_order_sensitive() {
        let a = run_list_digest(&names(&["base", "app"]));
        let b = run_list_digest(&names(&["app", "base"]));
        assert_ne!(a, b);
    }

    #[test]
    fn test_digest_distinguishes_qualification() {
        // "base" expands to base::default, so these must match
        let bare = run_list_digest(&names(&["base"]));
        let qualified = run_list_digest(&names(&["base::default"]));
        assert_eq!(bare, qualified);
    }
}
