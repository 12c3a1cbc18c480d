/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use rand::Rng;

use super::consts::{ACCESS_CODE_CHARS, ACCESS_CODE_LENGTH};

pub fn generate_access_code() -> String {
    generate_access_code_with(&mut rand::rng())
}

pub fn generate_access_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ACCESS_CODE_LENGTH)
        .map(|_| char::from(ACCESS_CODE_CHARS[rng.random_range(0..ACCESS_CODE_CHARS.len())]))
        .collect()
}

pub fn is_access_code(s: &str) -> bool {
    s.len() == ACCESS_CODE_LENGTH && s.bytes().all(|b| ACCESS_CODE_CHARS.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generated_codes_use_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let code = generate_access_code_with(&mut rng);
            assert_eq!(code.len(), 3);
            assert!(is_access_code(&code), "unexpected code {}", code);
        }
    }

    #[test]
    fn test_is_access_code() {
        assert!(is_access_code("a1z"));
        assert!(!is_access_code("A1z"));
        assert!(!is_access_code("a1"));
        assert!(!is_access_code("a1zz"));
        assert!(!is_access_code("a-z"));
    }
}
