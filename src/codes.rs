use std::collections::HashSet;

use rand::Rng;
use uuid::{Builder, Uuid};

/// Generates `count` distinct version 4 voucher codes in generation order.
pub fn generate_codes(count: usize) -> Vec<Uuid> {
    generate_codes_with(&mut rand::thread_rng(), count)
}

pub fn generate_codes_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Uuid> {
    let mut seen = HashSet::with_capacity(count);
    let mut codes = Vec::with_capacity(count);

    while codes.len() < count {
        let code = Builder::from_random_bytes(rng.gen()).into_uuid();
        if seen.insert(code) {
            codes.push(code);
        }
    }

    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::{Variant, Version};

    #[test]
    fn generates_requested_number_of_distinct_codes() {
        let codes = generate_codes(250);

        let distinct: HashSet<_> = codes.iter().collect();
        assert_eq!(codes.len(), 250);
        assert_eq!(distinct.len(), 250);
    }

    #[test]
    fn codes_are_random_uuids() {
        for code in generate_codes(10) {
            assert_eq!(code.get_version(), Some(Version::Random));
            assert_eq!(code.get_variant(), Variant::RFC4122);
        }
    }

    #[test]
    fn zero_count_generates_nothing() {
        assert!(generate_codes(0).is_empty());
    }

    #[test]
    fn seeded_generation_is_repeatable() {
        let first = generate_codes_with(&mut StdRng::seed_from_u64(7), 5);
        let second = generate_codes_with(&mut StdRng::seed_from_u64(7), 5);

        assert_eq!(first, second);
    }
}
