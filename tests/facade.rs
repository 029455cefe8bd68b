mod common;

use proptest::prelude::*;

use mrandom::random::{Card, Coin, Error, Flavor, Outcome, RandomGenerator, RANKS, SUITS};
use mrandom::{Mt19937, Mt19937_64};

const SUIT_NAMES: [&str; 4] = ["spades", "hearts", "diamonds", "clubs"];
const RANK_NAMES: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King", "Ace",
];

#[test]
fn check_flavor_selection() {
    common::init_logger();

    assert_eq!(RandomGenerator::from_bits(None, Some(1)).unwrap().flavor(), Flavor::Mt64);
    assert_eq!(RandomGenerator::from_bits(Some(1), Some(1)).unwrap().word_width(), 32);
    assert_eq!(RandomGenerator::from_bits(Some(64), None).unwrap().word_width(), 64);
    assert_eq!(
        RandomGenerator::from_bits(Some(16), Some(1)).err(),
        Some(Error::InvalidVariant(16))
    );
}

#[test]
fn check_words_follow_engine() {
    let mut rng = RandomGenerator::new(Flavor::Mt32, Some(5489));
    let mut engine = Mt19937::new(5489);

    for _i in 0..2000 {
        let word = rng.next_word();
        assert!(word < 1 << 32);
        assert_eq!(word, engine.extract_number() as u64);
    }

    let mut rng_64 = RandomGenerator::with_seed(5489);
    let mut engine_64 = Mt19937_64::new(5489);
    for _i in 0..2000 {
        assert_eq!(rng_64.next_word(), engine_64.extract_number());
    }
}

#[test]
fn check_seed_truncated_for_32_bit() {
    let mut wide = RandomGenerator::new(Flavor::Mt32, Some(0x1_0000_0005));
    let mut narrow = RandomGenerator::new(Flavor::Mt32, Some(5));

    for _i in 0..100 {
        assert_eq!(wide.next_word(), narrow.next_word());
    }
}

#[test]
fn check_reseed() {
    let mut rng = RandomGenerator::new(Flavor::Mt32, Some(10));
    for _i in 0..50 {
        let _ = rng.next_word();
    }

    rng.reseed(11);

    let mut fresh = RandomGenerator::new(Flavor::Mt32, Some(11));
    for _i in 0..1000 {
        assert_eq!(rng.next_word(), fresh.next_word());
    }
}

#[test]
fn check_rand() {
    let mut rng = RandomGenerator::new(Flavor::Mt32, None);

    for _i in 0..10_000 {
        let x = rng.rand();
        assert!(x >= 0.0 && x < 1.0);
        // at most 10 decimal digits
        let scaled = x * 1e10;
        assert!((scaled - scaled.round()).abs() < 1e-3);
    }

    let mut rng = RandomGenerator::new(Flavor::Mt32, Some(5489));
    assert_eq!(rng.rand_with_precision(3), 0.815);
}

#[test]
fn check_randint() {
    let mut rng = RandomGenerator::with_seed(1);

    let mut values = Vec::with_capacity(10_000);
    for _i in 0..10_000 {
        values.push(rng.randint(1, 5).unwrap());
    }

    let counts = common::counts(&values);
    assert_eq!(counts.len(), 5);
    for value in 1..=5_i64 {
        assert!(counts[&value] > 0);
    }

    assert_eq!(rng.randint(5, 1), Err(Error::InvalidRange { low: 5, high: 1 }));
    assert_eq!(rng.randint(3, 3), Err(Error::InvalidRange { low: 3, high: 3 }));
}

#[test]
fn check_randint_modulo() {
    let mut rng = RandomGenerator::new(Flavor::Mt32, Some(5489));
    assert_eq!(rng.randint(1, 5).unwrap(), (3499211612_i64 % 5) + 1);
    assert_eq!(rng.randrange(-3, 4).unwrap(), (581869302_i64 % 7) - 3);
}

#[test]
fn check_randrange() {
    let mut rng = RandomGenerator::new(Flavor::Mt32, Some(77));

    for _i in 0..10_000 {
        let value = rng.randrange(1, 5).unwrap();
        assert!(value >= 1 && value < 5);
    }

    assert_eq!(rng.randrange(2, 2), Err(Error::InvalidRange { low: 2, high: 2 }));
}

#[test]
fn check_invalid_range_consumes_nothing() {
    let mut rng = RandomGenerator::with_seed(42);
    let mut reference = rng.clone();

    assert!(rng.randint(9, 2).is_err());
    assert!(rng.randrange(9, 9).is_err());
    assert!(rng.sample(4, 1, 10).is_err());
    assert_eq!(rng.choice::<u8>(&[]), Err(Error::EmptySequence));
    assert_eq!(rng.choices::<u8>(&[], 3), Err(Error::EmptySequence));

    assert_eq!(rng.next_word(), reference.next_word());
}

#[test]
fn check_sample() {
    let mut rng = RandomGenerator::with_seed(5);

    let sample = rng.sample(1, 5, 25).unwrap();
    assert_eq!(sample.len(), 25);
    assert!(sample.iter().all(|value| *value >= 1 && *value <= 5));

    assert!(rng.sample(1, 5, 0).unwrap().is_empty());
}

#[test]
fn check_choice() {
    let mut rng = RandomGenerator::with_seed(6);
    let items = [1, 2, 3, 4, 5];

    for _i in 0..1000 {
        assert!(items.contains(rng.choice(&items).unwrap()));
    }

    assert_eq!(rng.choice(&["only"]), Ok(&"only"));

    let picks = rng.choices(&items, 20).unwrap();
    assert_eq!(picks.len(), 20);
    assert!(picks.iter().all(|pick| items.contains(pick)));
}

#[test]
fn check_shuffle_reproducible() {
    let mut first = RandomGenerator::with_seed(12);
    let mut second = RandomGenerator::with_seed(12);

    let mut left: Vec<u32> = (0..52).collect();
    let mut right = left.clone();

    first.shuffle(&mut left);
    second.shuffle(&mut right);
    assert_eq!(left, right);

    // 10 * len swaps, two draws each
    let mut reference = RandomGenerator::with_seed(12);
    for _i in 0..2 * 10 * 52 {
        let _ = reference.next_word();
    }
    assert_eq!(first.next_word(), reference.next_word());

    let mut empty: [u8; 0] = [];
    first.shuffle(&mut empty);
}

#[test]
fn check_flip_coin() {
    let mut rng = RandomGenerator::with_seed(3);
    let mut reference = rng.clone();

    let expected = if reference.rand() < 0.5 { Coin::Head } else { Coin::Tail };
    assert_eq!(rng.flip_coin(None, None), Outcome::One(expected));

    match rng.flip_coin(Some(5), Some(2)) {
        Outcome::Nested(rows) => {
            assert_eq!(rows.len(), 5);
            assert!(rows.iter().all(|row| row.len() == 2));
        }
        other => panic!("unexpected shape {:?}", other),
    }

    match rng.flip_coin(None, Some(4)) {
        Outcome::Many(coins) => assert_eq!(coins.len(), 4),
        other => panic!("unexpected shape {:?}", other),
    }

    let coins = rng.flip_coin(Some(2000), None).into_flat();
    let counts = common::counts(&coins);
    assert!(counts[&Coin::Head] > 0 && counts[&Coin::Tail] > 0);

    assert_eq!(Coin::Head.to_string(), "head");
    assert_eq!(Coin::Tail.to_string(), "tail");
}

#[test]
fn check_roll_dice() {
    let mut rng = RandomGenerator::new(Flavor::Mt32, Some(4));

    let rolls = rng.roll_dice(Some(1000), Some(3));
    assert_eq!(rolls.len(), 3000);

    let faces = rolls.into_flat();
    assert!(faces.iter().all(|face| *face >= 1 && *face <= 6));
    assert_eq!(common::counts(&faces).len(), 6);

    match rng.roll_dice(None, None) {
        Outcome::One(face) => assert!(face >= 1 && face <= 6),
        other => panic!("unexpected shape {:?}", other),
    }
}

#[test]
fn check_draw_cards() {
    let mut rng = RandomGenerator::with_seed(52);

    let cards = rng.draw_cards(Some(500)).into_flat();
    assert_eq!(cards.len(), 500);

    for card in cards.iter() {
        let name = card.to_string();
        let mut parts = name.splitn(2, " of ");
        let rank = parts.next().unwrap();
        let suit = parts.next().unwrap();

        assert!(RANK_NAMES.contains(&rank), "bad rank in {}", name);
        assert!(SUIT_NAMES.contains(&suit), "bad suit in {}", name);
    }

    // suit is drawn before rank
    let mut reference = RandomGenerator::with_seed(52);
    let suit = SUITS[(reference.next_word() % 4) as usize];
    let rank = RANKS[(reference.next_word() % 13) as usize];
    let mut rng = RandomGenerator::with_seed(52);
    assert_eq!(rng.draw_cards(None), Outcome::One(Card::new(rank, suit)));
}

proptest! {
    #[test]
    fn shuffle_keeps_elements(seed in any::<u64>(), items in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut rng = RandomGenerator::with_seed(seed);
        let mut shuffled = items.clone();
        rng.shuffle(&mut shuffled);

        prop_assert_eq!(common::counts(&shuffled), common::counts(&items));
    }

    #[test]
    fn randint_stays_in_bounds(seed in any::<u64>(), a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a != b);
        let (a, b) = if a < b { (a, b) } else { (b, a) };

        let mut rng = RandomGenerator::new(Flavor::Mt32, Some(seed));
        let value = rng.randint(a, b).unwrap();
        prop_assert!(value >= a && value <= b);

        let value = rng.randrange(a, b).unwrap();
        prop_assert!(value >= a && value < b);
    }
}
