use super::*;

use proptest::prelude::*;
use proptest_derive::Arbitrary;

fn validate_code(code: &PrefixCode) {
    if let Err(e) = code.validate() {
        panic!("invariant broken: {e}\n{code}");
    }
    assert_eq!(
        code.by_label.len(),
        code.len(),
        "label index must cover every leaf"
    );
    for (leaf, label) in code.leaves() {
        assert_eq!(
            &code.by_label[label], leaf,
            "label index out of sync at label {label}"
        );
    }
}

fn word_over(symbols: &'static [char], max_len: usize) -> impl Strategy<Value = String> + Clone {
    prop::collection::vec(prop::sample::select(symbols), 0..=max_len)
        .prop_map(|cs| cs.into_iter().collect())
}

fn binary_word() -> impl Strategy<Value = String> + Clone {
    word_over(&['0', '1'], 6)
}

fn ternary_word() -> impl Strategy<Value = String> + Clone {
    word_over(&['a', 'b', 'c'], 4)
}

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    #[proptest(weight = 4)]
    Expand(#[proptest(strategy = "binary_word()")] String),
    #[proptest(weight = 2)]
    Reduce(#[proptest(strategy = "binary_word()")] String),
    Swap(
        #[proptest(strategy = "binary_word()")] String,
        #[proptest(strategy = "binary_word()")] String,
    ),
}

fn expanded(alphabet: &Alphabet, words: &[String]) -> PrefixCode {
    let mut code = PrefixCode::with_alphabet(alphabet.clone());
    for w in words {
        let _ = code.expand_at(w).unwrap();
    }
    code
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 10_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_invariants_hold(ops in prop::collection::vec(any::<Op>(), 0..=60)) {
        let mut code = PrefixCode::new();
        for op in ops {
            let before = code.clone();
            match op {
                Op::Expand(w) => {
                    if code.expand_at(&w).unwrap() == Outcome::Unchanged {
                        prop_assert_eq!(&code, &before);
                        prop_assert_eq!(code.prefix_of(&w).unwrap(), None);
                    }
                }
                Op::Reduce(w) => {
                    if code.reduce_at(&w).unwrap() == Outcome::Unchanged {
                        prop_assert_eq!(&code, &before);
                    }
                }
                Op::Swap(a, b) => {
                    if code.swap_labels(&a, &b).is_err() {
                        prop_assert_eq!(&code, &before);
                    }
                }
            }
            validate_code(&code);
        }
    }

    #[test]
    fn prop_ternary_expand_reduce_keeps_natural_labels(
        ops in prop::collection::vec((any::<bool>(), ternary_word()), 0..=40)
    ) {
        let abc = Alphabet::from_text("abc").unwrap();
        let mut code = PrefixCode::with_alphabet(abc);
        for (grow, w) in ops {
            if grow {
                let _ = code.expand_at(&w).unwrap();
            } else {
                let _ = code.reduce_at(&w).unwrap();
            }
            validate_code(&code);
            prop_assert_eq!(code.permutation(), Permutation::identity(code.len()));
        }
    }

    #[test]
    fn prop_expand_then_reduce_restores(
        setup in prop::collection::vec(binary_word(), 0..=6),
        swap in (binary_word(), binary_word()),
        w in binary_word(),
    ) {
        let mut code = expanded(&Alphabet::binary(), &setup);
        let _ = code.swap_labels(&swap.0, &swap.1);
        let before = code.clone();
        let covering = code.prefix_of(&w).unwrap();

        match code.expand_at(&w).unwrap() {
            Outcome::Changed => {
                let p = covering.expect("expansion needs a covering leaf");
                let label = before.label_at_leaf(&p);
                prop_assert_eq!(code.reduce_at(&p).unwrap(), Outcome::Changed);
                prop_assert_eq!(&code, &before);
                prop_assert_eq!(code.label_at_leaf(&p), label);
            }
            Outcome::Unchanged => {
                prop_assert!(covering.is_none());
                prop_assert_eq!(&code, &before);
            }
        }
    }

    #[test]
    fn prop_expand_is_idempotent(
        setup in prop::collection::vec(binary_word(), 0..=6),
        w in binary_word(),
    ) {
        let mut code = expanded(&Alphabet::binary(), &setup);
        let _ = code.expand_at(&w).unwrap();
        let once = code.clone();
        prop_assert_eq!(code.expand_at(&w).unwrap(), Outcome::Unchanged);
        prop_assert_eq!(code, once);
    }

    #[test]
    fn prop_lattice_laws(
        a in prop::collection::vec(binary_word(), 0..=5),
        b in prop::collection::vec(binary_word(), 0..=5),
        c in prop::collection::vec(binary_word(), 0..=5),
    ) {
        let binary = Alphabet::binary();
        let a = expanded(&binary, &a);
        let b = expanded(&binary, &b);
        let c = expanded(&binary, &c);

        let join = a.join(&b).unwrap();
        let meet = a.meet(&b).unwrap();
        validate_code(&join);
        validate_code(&meet);

        prop_assert!(a.precedes(&join));
        prop_assert!(b.precedes(&join));
        prop_assert!(meet.precedes(&a));
        prop_assert!(meet.precedes(&b));

        prop_assert_eq!(&a.join(&a).unwrap(), &a);
        prop_assert_eq!(&a.meet(&a).unwrap(), &a);
        prop_assert_eq!(&b.join(&a).unwrap(), &join);
        prop_assert_eq!(&b.meet(&a).unwrap(), &meet);

        if a.precedes(&c) && b.precedes(&c) {
            prop_assert!(join.precedes(&c));
        }
        if c.precedes(&a) && c.precedes(&b) {
            prop_assert!(c.precedes(&meet));
        }
    }

    #[test]
    fn prop_dfs_reencodes(words in prop::collection::vec(binary_word(), 0..=8)) {
        let code = expanded(&Alphabet::binary(), &words);
        match code.to_dfs() {
            None => prop_assert!(code.is_trivial()),
            Some(dfs) => {
                prop_assert!(is_valid_dfs(2, &dfs));
                let decoded = PrefixCode::from_dfs(Alphabet::binary(), &dfs).unwrap();
                prop_assert_eq!(decoded, code);
            }
        }
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

#[test]
fn exhaustive_expansion_order() {
    let words: Vec<String> = ["0110", "11", "0001", "10", "111"]
        .iter()
        .map(|w| w.to_string())
        .collect();
    let binary = Alphabet::binary();
    let reference = expanded(&binary, &words);
    validate_code(&reference);

    for_each_permutation(&words, |perm| {
        assert_eq!(expanded(&binary, &perm), reference);
    });
}

#[test]
fn randomized_walk_over_ternary_alphabet() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let abc = Alphabet::from_text("abc").unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let mut code = PrefixCode::with_alphabet(abc.clone());

    for _ in 0..2_000 {
        let len = rng.gen_range(0..6);
        let word: String = (0..len)
            .map(|_| abc.symbols()[rng.gen_range(0..abc.len())])
            .collect();

        match rng.gen_range(0..100) {
            0..=59 => {
                let _ = code.expand_at(&word).unwrap();
            }
            60..=89 => {
                let _ = code.reduce_at(&word).unwrap();
            }
            _ => {
                let perm = code.permutation().inverse();
                code.apply_permutation(&perm).unwrap();
            }
        }
        validate_code(&code);
    }
}
