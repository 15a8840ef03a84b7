use crate::detect::{Composite, Consecutive, Detector, Exhaustive, ProperNouns};
use crate::display::MweDisplay;
use crate::test_utils::{open_index, tok};
use crate::token::Token;

const INDEX: &str = "world_record_N 5,0,3,1,0\nlook_up_V 4,2,0,0,1";

fn render(detector: &dyn Detector, sentence: &[Token]) -> String {
    let found = detector.detect(sentence).unwrap();
    MweDisplay::new(sentence).with(&found).to_string()
}

fn sentence(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .map(|word| match word {
            "looked" => tok(word, "VBD", &["look"]),
            "." | "," => tok(word, word, &[]),
            _ => tok(word, "NN", &[]),
        })
        .collect()
}

#[test]
fn consecutive_noun() {
    let index = open_index("world_record_N 5,0,3,1,0");
    insta::assert_snapshot!(render(&Consecutive::new(index), &sentence("She looked up the world record .")), @r###"
    She  looked  up  the  world  record  .
                          ╰───╯  ╰────╯world_record_N
    "###);
}

#[test]
fn adjacent_phrasal_verb() {
    let index = open_index(INDEX);
    insta::assert_snapshot!(render(&Consecutive::new(index), &sentence("She looked up the world record .")), @r###"
    She  looked  up  the  world  record  .
         ╰────╯  ╰╯look_up_V
                          ╰───╯  ╰────╯world_record_N
    "###);
}

#[test]
fn discontinuous_phrasal_verb() {
    let index = open_index(INDEX);
    insta::assert_snapshot!(render(&Exhaustive::new(index), &sentence("She looked the world record up .")), @r###"
    She  looked  the  world  record  up  .
         ╰────╯                      ╰╯look_up_V
                      ╰───╯  ╰────╯world_record_N
    "###);
}

#[test]
fn out_of_order_noun() {
    let index = open_index(INDEX);
    insta::assert_snapshot!(render(&Exhaustive::new(index), &sentence("the record of the world")), @r###"
    the  record  of  the  world
         ╰────╯           ╰───╯world_record_N
    "###);
}

#[test]
fn proper_noun_run() {
    let index = open_index(INDEX);
    let sentence = vec![
        tok("New", "NNP", &[]),
        tok("York", "NNP", &[]),
        tok(",", ",", &[]),
        tok("a", "DT", &[]),
        tok("city", "NN", &[]),
    ];
    let detector = Composite::default()
        .with(Exhaustive::new(index))
        .with(ProperNouns::default());
    insta::assert_snapshot!(render(&detector, &sentence), @r###"
    New  York  ,  a  city
    ╰─╯  ╰──╯new_york_N
    "###);
}
