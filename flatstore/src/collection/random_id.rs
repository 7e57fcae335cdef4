use rand::Rng;

/// Alphabet for generated document identifiers: lowercase base-36.
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of generated document identifiers.
const ID_LENGTH: usize = 8;

/// Generates a short random base-36 identifier for a new document.
///
/// Collision probability is low (36^8 values) but not zero; callers that
/// append into a collection check the generated value against the loaded
/// collection and regenerate on collision, keeping identifier uniqueness an
/// invariant rather than a probability.
pub fn random_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
