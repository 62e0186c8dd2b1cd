use std::collections::BTreeMap;

use plate_core::{PLATE_LETTERS, PlateString, Rarity, classify, generate_plate};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn plate(first: char, digits: &str, series: [char; 2]) -> PlateString {
    format!("{first}{digits}{}{}", series[0], series[1])
        .parse()
        .expect("valid plate")
}

#[test]
fn same_digit_plates_split_into_rare_and_legendary() {
    let mut counts = BTreeMap::new();
    for first in PLATE_LETTERS {
        for a in PLATE_LETTERS {
            for b in PLATE_LETTERS {
                for d in 0..10 {
                    let digits = d.to_string().repeat(3);
                    let tier = classify(&plate(first, &digits, [a, b]));
                    *counts.entry(tier).or_insert(0_u32) += 1;
                }
            }
        }
    }
    // 12 same-letter triples x 10 digits, plus the hand-picked Е777ВА.
    assert_eq!(counts.get(&Rarity::Legendary), Some(&121));
    assert_eq!(counts.get(&Rarity::Rare), Some(&(17_280 - 121)));
    assert_eq!(counts.get(&Rarity::Uncommon), None);
    assert_eq!(counts.get(&Rarity::Common), None);
}

#[test]
fn same_letter_plates_are_uncommon_unless_digits_repeat() {
    for letter in PLATE_LETTERS {
        for n in 0..1000 {
            let digits = format!("{n:03}");
            let tier = classify(&plate(letter, &digits, [letter, letter]));
            if n % 111 == 0 {
                assert_eq!(tier, Rarity::Legendary, "{letter}{digits}");
            } else {
                assert_eq!(tier, Rarity::Uncommon, "{letter}{digits}");
            }
        }
    }
}

#[test]
fn classification_is_deterministic_on_random_plates() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x0BAD_5EED);
    for _ in 0..5_000 {
        let p = generate_plate(&mut rng);
        let again: PlateString = p.to_string().parse().unwrap();
        assert_eq!(classify(&p), classify(&again));
    }
}

#[test]
fn random_rolls_are_mostly_common() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let mut common = 0;
    let total = 10_000;
    for _ in 0..total {
        if classify(&generate_plate(&mut rng)) == Rarity::Common {
            common += 1;
        }
    }
    // Expected share is about 98.3%.
    assert!(common > total * 95 / 100, "common = {common}");
}
