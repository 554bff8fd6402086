use rpawogen::passgen::*;
use rpawogen::{PassGenError, Vocabulary};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn seeded(seed: u64) -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(seed)
    }

    fn animals() -> Vocabulary {
        Vocabulary::new(["cat", "dog", "sun"])
    }

    #[test]
    fn test_random_password_length_and_universe() {
        for length in 1..=40 {
            let generator = RandomPasswordGenerator::new(length, true, true).unwrap();
            let universe: HashSet<char> = generator.universe().iter().copied().collect();
            let password = generator.generate();
            assert_eq!(password.chars().count(), length);
            assert!(password.chars().all(|c| universe.contains(&c)));
        }
    }

    #[test]
    fn test_random_password_letters_only() {
        let generator = RandomPasswordGenerator::new(8, false, false).unwrap();
        assert_eq!(generator.universe().len(), 52);
        assert_eq!(generator.universe().iter().collect::<String>(), LETTERS);

        let password = generator.generate();
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_random_password_flags_enlarge_universe() {
        let letters: HashSet<char> = RandomPasswordGenerator::new(8, false, false).unwrap().universe().iter().copied().collect();
        let with_numbers: HashSet<char> = RandomPasswordGenerator::new(8, true, false).unwrap().universe().iter().copied().collect();
        let with_symbols: HashSet<char> = RandomPasswordGenerator::new(8, false, true).unwrap().universe().iter().copied().collect();
        let with_both: HashSet<char> = RandomPasswordGenerator::new(8, true, true).unwrap().universe().iter().copied().collect();

        assert!(letters.is_subset(&with_numbers) && letters.len() < with_numbers.len());
        assert!(letters.is_subset(&with_symbols) && letters.len() < with_symbols.len());
        assert!(with_numbers.is_subset(&with_both) && with_numbers.len() < with_both.len());
        assert!(with_symbols.is_subset(&with_both) && with_symbols.len() < with_both.len());
        assert_eq!(with_numbers.len(), 62);
        assert_eq!(with_symbols.len(), 84);
        assert_eq!(with_both.len(), 94);
    }

    #[test]
    fn test_random_password_numbers_only_adds_digits() {
        let generator = RandomPasswordGenerator::new(32, true, false).unwrap();
        let mut rng = seeded(7);
        for _ in 0..50 {
            let password = generator.generate_with(&mut rng);
            assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_random_password_zero_length() {
        let result = RandomPasswordGenerator::new(0, true, true);
        assert!(matches!(result, Err(PassGenError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_random_password_default() {
        let generator = RandomPasswordGenerator::default();
        assert_eq!(generator.length(), 8);
        assert_eq!(generator, RandomPasswordGenerator::new(8, true, true).unwrap());
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let generator = RandomPasswordGenerator::new(16, true, true).unwrap();
        let a = generator.generate_with(&mut seeded(42));
        let b = generator.generate_with(&mut seeded(42));
        assert_eq!(a, b);

        let pin = PinCodeGenerator::new(12).unwrap();
        assert_eq!(pin.generate_with(&mut seeded(1)), pin.generate_with(&mut seeded(1)));
    }

    #[test]
    fn test_successive_calls_keep_shape() {
        let generator = RandomPasswordGenerator::new(12, false, true).unwrap();
        let mut rng = seeded(3);
        let first = generator.generate_with(&mut rng);
        let second = generator.generate_with(&mut rng);
        for password in [&first, &second] {
            assert_eq!(password.len(), 12);
            assert!(password.chars().all(|c| generator.universe().contains(&c)));
        }
    }

    #[test]
    fn test_memorable_password_word_count_and_separator() {
        let generator = MemorablePasswordGenerator::new(3, "-", false, Some(animals())).unwrap();
        let mut rng = seeded(11);
        for _ in 0..50 {
            let password = generator.generate_with(&mut rng);
            let parts: Vec<&str> = password.split('-').collect();
            assert_eq!(parts.len(), 3);
            assert!(parts.iter().all(|p| ["cat", "dog", "sun"].contains(p)));
        }
    }

    #[test]
    fn test_memorable_password_covers_vocabulary() {
        let generator = MemorablePasswordGenerator::new(3, "-", false, Some(animals())).unwrap();
        let mut rng = seeded(5);
        let seen: HashSet<String> = (0..500).map(|_| generator.generate_with(&mut rng)).collect();
        // 3^3 种组合
        assert!(seen.len() <= 27);
        assert!(seen.len() > 20);
    }

    #[test]
    fn test_memorable_password_multi_char_separator() {
        let generator = MemorablePasswordGenerator::new(5, "::", false, Some(animals())).unwrap();
        let password = generator.generate();
        assert_eq!(password.split("::").count(), 5);
        assert_eq!(password.matches("::").count(), 4);
    }

    #[test]
    fn test_memorable_password_empty_separator() {
        let vocabulary = Vocabulary::new(["ab"]);
        let generator = MemorablePasswordGenerator::new(4, "", false, Some(vocabulary)).unwrap();
        assert_eq!(generator.generate(), "abababab");
    }

    #[test]
    fn test_memorable_password_without_capitalize_keeps_words() {
        let vocabulary = Vocabulary::new(["MiXeD", "UPPER"]);
        let generator = MemorablePasswordGenerator::new(6, " ", false, Some(vocabulary)).unwrap();
        let mut rng = seeded(9);
        let password = generator.generate_with(&mut rng);
        assert!(password.split(' ').all(|w| w == "MiXeD" || w == "UPPER"));
    }

    #[test]
    fn test_memorable_password_capitalize_forms() {
        let vocabulary = Vocabulary::new(["hello", "WORLD", "rUsT"]);
        let generator = MemorablePasswordGenerator::new(8, "_", true, Some(vocabulary)).unwrap();
        let allowed = ["hello", "Hello", "world", "World", "rust", "Rust"];
        let mut rng = seeded(21);
        let mut seen_upper = false;
        let mut seen_lower = false;
        for _ in 0..50 {
            let password = generator.generate_with(&mut rng);
            for word in password.split('_') {
                assert!(allowed.contains(&word), "unexpected word {}", word);
                if word.starts_with(char::is_uppercase) {
                    seen_upper = true;
                } else {
                    seen_lower = true;
                }
            }
        }
        assert!(seen_upper && seen_lower);
    }

    #[test]
    fn test_capitalize_word() {
        assert_eq!(capitalize_word("hello"), "Hello");
        assert_eq!(capitalize_word("wORLD"), "World");
        assert_eq!(capitalize_word("a"), "A");
        assert_eq!(capitalize_word(""), "");
    }

    #[test]
    fn test_memorable_password_empty_vocabulary() {
        let empty: Vec<String> = Vec::new();
        let result = MemorablePasswordGenerator::new(4, "-", false, Some(Vocabulary::new(empty)));
        assert_eq!(result.unwrap_err(), PassGenError::EmptyVocabulary);
    }

    #[test]
    fn test_memorable_password_zero_words() {
        let result = MemorablePasswordGenerator::new(0, "-", false, Some(animals()));
        assert!(matches!(result, Err(PassGenError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_memorable_password_default_vocabulary() {
        let generator = MemorablePasswordGenerator::new(4, "-", false, None).unwrap();
        assert!(!generator.vocabulary().is_empty());
        let password = generator.generate();
        let parts: Vec<&str> = password.split('-').collect();
        assert_eq!(parts.len(), 4);
        assert!(parts.iter().all(|p| generator.vocabulary().contains(p)));

        let default = MemorablePasswordGenerator::default();
        assert_eq!(default.number_of_words(), 4);
        assert_eq!(default.separator(), "-");
        assert!(!default.capitalize());
    }

    #[test]
    fn test_pin_code_digits_only() {
        let generator = PinCodeGenerator::new(6).unwrap();
        let mut rng = seeded(13);
        for _ in 0..100 {
            let pin = generator.generate_with(&mut rng);
            assert_eq!(pin.len(), 6);
            assert!(pin.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_pin_code_keeps_leading_zeros() {
        let generator = PinCodeGenerator::new(4).unwrap();
        let mut rng = seeded(17);
        let leading_zero = (0..2000)
            .map(|_| generator.generate_with(&mut rng))
            .find(|pin| pin.starts_with('0'));
        let pin = leading_zero.expect("no pin with a leading zero in 2000 draws");
        assert_eq!(pin.len(), 4);
    }

    #[test]
    fn test_pin_code_zero_length() {
        assert!(matches!(PinCodeGenerator::new(0), Err(PassGenError::InvalidConfiguration(_))));
        assert_eq!(PinCodeGenerator::default().length(), 8);
    }

    #[test]
    fn test_generator_enum_dispatch() {
        let generators: Vec<Generator> = vec![
            RandomPasswordGenerator::new(10, false, false).unwrap().into(),
            MemorablePasswordGenerator::new(2, "+", false, Some(animals())).unwrap().into(),
            PinCodeGenerator::new(5).unwrap().into(),
        ];
        let kinds: Vec<GeneratorKind> = generators.iter().map(Generator::kind).collect();
        assert_eq!(kinds, vec![GeneratorKind::Random, GeneratorKind::Memorable, GeneratorKind::Pin]);

        let mut rng = seeded(99);
        assert_eq!(generators[0].generate_with(&mut rng).len(), 10);
        assert_eq!(generators[1].generate_with(&mut rng).split('+').count(), 2);
        assert_eq!(generators[2].generate_with(&mut rng).len(), 5);
    }

    #[test]
    fn test_trait_object() {
        let generator: Box<dyn PasswordGenerator> = Box::new(PinCodeGenerator::new(7).unwrap());
        assert_eq!(generator.generate().len(), 7);
    }

    #[test]
    fn test_shared_generator_across_threads() {
        let generator = Arc::new(RandomPasswordGenerator::new(20, true, true).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || (0..25).map(|_| generator.generate()).collect::<Vec<_>>())
            })
            .collect();
        for handle in handles {
            for password in handle.join().unwrap() {
                assert_eq!(password.len(), 20);
            }
        }
    }
}
