//! Random identifier generation.
//!
//! The real bill.com API hands out opaque ids; the mock fabricates them from a
//! fixed alphabet. Ids are not unique and not secret, they only need to look
//! plausible to a client under test.

use rand::Rng;

/// Alphabet the mock draws identifier characters from.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!-1234567890+_";

/// Generate a random identifier of `len` characters drawn uniformly from
/// [`ALPHABET`].
///
/// Uses the thread-local generator, seeded once per thread from OS entropy,
/// so concurrent handlers never share or repeat a seed.
pub fn random_id(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_has_requested_length() {
        assert_eq!(random_id(20).len(), 20);
        assert_eq!(random_id(45).len(), 45);
        assert_eq!(random_id(0).len(), 0);
    }

    #[test]
    fn test_id_stays_within_alphabet() {
        let id = random_id(200);
        assert!(id.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_consecutive_ids_differ() {
        // 45 chars over a 66-char alphabet; a collision here means the
        // generator is broken, not unlucky.
        assert_ne!(random_id(45), random_id(45));
    }

    #[test]
    fn test_concurrent_ids_differ() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| random_id(45)))
            .collect();

        let mut ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8, "threads produced identical ids");
    }
}
