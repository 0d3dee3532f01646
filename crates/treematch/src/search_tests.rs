use treematch_core::Element;

use crate::combinators::{
    end, lit, maybe, maybe_ng, more, named, or, reference, whatever, whatever_ng,
};
use crate::pattern::compile;
use crate::search::search;
use crate::seq;

fn ints(values: impl IntoIterator<Item = i64>) -> Vec<Element> {
    values.into_iter().map(Element::from).collect()
}

fn i(v: i64) -> Element {
    Element::from(v)
}

fn s(v: &str) -> Element {
    Element::from(v)
}

#[test]
fn s1_plain_sequence() {
    let pattern = compile(vec![lit(3), lit(4), lit(5)]).unwrap();
    let mut tree = Element::Seq(ints(1..=9));
    let mut hits = Vec::new();
    search(&mut tree, &pattern, |m, root| {
        hits.push((m.start(), m.end(), m.content(root).to_vec()));
        None
    })
    .unwrap();
    assert_eq!(hits, vec![(2, 5, ints([3, 4, 5]))]);
}

#[test]
fn s2_greedy_more() {
    let pattern = compile(vec![more(vec![lit("a")])]).unwrap();
    let mut tree = Element::Seq(vec![
        i(1),
        i(2),
        s("a"),
        i(3),
        i(4),
        s("a"),
        s("a"),
        s("a"),
        s("b"),
        s("a"),
        s("a"),
        s("c"),
    ]);
    let mut hits = Vec::new();
    search(&mut tree, &pattern, |m, root| {
        hits.push((m.start(), m.end(), m.content(root).to_vec()));
        None
    })
    .unwrap();
    assert_eq!(
        hits,
        vec![
            (2, 3, vec![s("a")]),
            (5, 8, vec![s("a"), s("a"), s("a")]),
            (9, 11, vec![s("a"), s("a")]),
        ]
    );
}

fn s3_s4_haystack() -> Element {
    Element::Seq(vec![
        i(1),
        i(2),
        i(3),
        i(4),
        i(2),
        i(4),
        i(2),
        i(1),
        s("a"),
        s("b"),
        i(4),
        i(5),
    ])
}

#[test]
fn s3_greedy_whatever() {
    let pattern = compile(vec![lit(2), whatever(), lit(4)]).unwrap();
    let mut tree = s3_s4_haystack();
    let mut hits = Vec::new();
    search(&mut tree, &pattern, |m, root| {
        hits.push((m.start(), m.end(), m.content(root).to_vec()));
        None
    })
    .unwrap();
    assert_eq!(
        hits,
        vec![(
            1,
            11,
            vec![
                i(2),
                i(3),
                i(4),
                i(2),
                i(4),
                i(2),
                i(1),
                s("a"),
                s("b"),
                i(4),
            ]
        )]
    );
}

#[test]
fn s4_non_greedy_whatever() {
    let pattern = compile(vec![lit(2), whatever_ng(), lit(4)]).unwrap();
    let mut tree = s3_s4_haystack();
    let mut hits = Vec::new();
    search(&mut tree, &pattern, |m, root| {
        hits.push((m.start(), m.end(), m.content(root).to_vec()));
        None
    })
    .unwrap();
    assert_eq!(
        hits,
        vec![
            (1, 4, vec![i(2), i(3), i(4)]),
            (4, 6, vec![i(2), i(4)]),
            (6, 11, vec![i(2), i(1), s("a"), s("b"), i(4)]),
        ]
    );
}

#[test]
fn s5_ref() {
    let pattern = compile(vec![named("a", vec![]), more(vec![reference("a")])]).unwrap();
    let mut tree = Element::Seq(ints([1, 2, 3, 3, 3, 2, 2, 1, 2, 1, 1, 1, 1, 1, 2, 3, 3]));
    let mut hits = Vec::new();
    search(&mut tree, &pattern, |m, root| {
        let group = m
            .group("a")
            .map(|span| span.content(root).to_vec())
            .unwrap();
        hits.push((m.start(), m.end(), group));
        None
    })
    .unwrap();
    assert_eq!(
        hits,
        vec![
            (2, 5, vec![i(3)]),
            (5, 7, vec![i(2)]),
            (9, 14, vec![i(1)]),
            (15, 17, vec![i(3)]),
        ]
    );
}

#[test]
fn s6_subseq_with_end_anchors_the_inner_sub_sequence() {
    // compile(NAMED("exp", ["a", ["b", OR("c","d"), END()]]))
    let pattern = compile(vec![named(
        "exp",
        vec![seq!["a", seq!["b", or(vec![lit("c"), lit("d")]), end()]]],
    )])
    .unwrap();
    let abc = Element::Seq(vec![s("a"), Element::Seq(vec![s("b"), s("c")])]);
    let abe = Element::Seq(vec![s("a"), Element::Seq(vec![s("b"), s("e")])]);
    let abd_nested = Element::Seq(vec![
        s("a"),
        Element::Seq(vec![s("b"), s("d"), abc.clone()]),
    ]);
    let mut tree = Element::Seq(vec![i(1), i(2), i(3), abc.clone(), abe, abd_nested]);
    let mut firsts = Vec::new();
    search(&mut tree, &pattern, |m, root| {
        firsts.push(m.group("exp").and_then(|span| span.first(root)).cloned());
        None
    })
    .unwrap();
    // The middle element ("b","e") never matches (neither "c" nor "d"). The
    // third element's inner ["b","d", ...] is rejected by the nested END()
    // since "d" isn't the last element there; its nested ["a",["b","c"]]
    // matches on its own when the walk descends into it.
    assert_eq!(firsts, vec![Some(abc.clone()), Some(abc)]);
}

#[test]
fn s7_replace() {
    let pattern = compile(vec![lit(2), lit(3), lit(4)]).unwrap();
    let mut tree = Element::Seq(ints([1, 2, 3, 4, 5]));
    search(&mut tree, &pattern, |m, root| {
        m.replace(root, vec![s("cut")]);
        None
    })
    .unwrap();
    assert_eq!(tree, Element::Seq(vec![i(1), s("cut"), i(5)]));
}

#[test]
fn continuation_control_resumes_at_callback_chosen_index() {
    let pattern = compile(vec![lit(1)]).unwrap();
    let mut tree = Element::Seq(ints([1, 1, 1, 1]));
    let mut hits = Vec::new();
    search(&mut tree, &pattern, |m, _root| {
        hits.push(m.start());
        Some(m.end() + 1)
    })
    .unwrap();
    // Skips every other position because the callback jumps past it.
    assert_eq!(hits, vec![0, 2]);
}

#[test]
fn greediness_duality_non_greedy_never_starts_earlier_or_ends_later() {
    let greedy = compile(vec![maybe(vec![lit(1), lit(1)])]).unwrap();
    let non_greedy = compile(vec![maybe_ng(vec![lit(1), lit(1)])]).unwrap();
    let mut tree = Element::Seq(ints([1, 1, 2]));
    let mut greedy_hits = Vec::new();
    let mut non_greedy_hits = Vec::new();
    search(&mut tree.clone(), &greedy, |m, _root| {
        greedy_hits.push((m.start(), m.end()));
        None
    })
    .unwrap();
    search(&mut tree, &non_greedy, |m, _root| {
        non_greedy_hits.push((m.start(), m.end()));
        None
    })
    .unwrap();
    assert_eq!(greedy_hits[0].0, non_greedy_hits[0].0);
    assert!(non_greedy_hits[0].1 <= greedy_hits[0].1);
}

#[test]
fn determinism_repeated_runs_produce_the_same_matches() {
    let pattern = compile(vec![or(vec![lit(1), lit(2)])]).unwrap();
    let mut tree = Element::Seq(ints([1, 2, 1, 3]));
    let run = |tree: &mut Element| {
        let mut hits = Vec::new();
        search(tree, &pattern, |m, root| {
            hits.push((m.start(), m.end(), m.content(root).to_vec()));
            None
        })
        .unwrap();
        hits
    };
    let first = run(&mut tree.clone());
    let second = run(&mut tree);
    assert_eq!(first, second);
}
