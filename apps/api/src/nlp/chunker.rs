//! Noun-phrase chunking over a tagged token stream.
//!
//! A phrase is a maximal run of `[determiner] (adverb? adjective | numeral | noun)*`
//! that ends on its last noun. Punctuation, symbols, verbs and line breaks
//! close the run, except a `-` or `/` glued between two words ("Full-Stack",
//! "CI/CD"), which keeps the compound in one phrase.

use crate::nlp::{NounPhrase, PosTag, Token};

/// Intra-word joiners. Word segmentation splits on them.
const JOINERS: &[&str] = &["-", "/"];

pub fn noun_phrases(text: &str, tokens: &[Token]) -> Vec<NounPhrase> {
    let mut phrases = Vec::new();
    let mut run: Vec<usize> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if let Some(&last) = run.last() {
            if line_break_between(text, &tokens[last], token) {
                flush(text, tokens, &mut run, &mut phrases);
            }
        }

        let extends = match token.tag {
            PosTag::Determiner => run.is_empty(),
            PosTag::Adverb => next_is_adjective(text, tokens, i),
            PosTag::Punctuation => {
                run.last().is_some_and(|&last| last + 1 == i) && joins_words(tokens, i)
            }
            tag => extends_run(tag),
        };

        if extends {
            run.push(i);
            continue;
        }

        flush(text, tokens, &mut run, &mut phrases);
        if token.tag == PosTag::Determiner {
            run.push(i);
        }
    }
    flush(text, tokens, &mut run, &mut phrases);

    phrases
}

fn extends_run(tag: PosTag) -> bool {
    matches!(
        tag,
        PosTag::Adjective | PosTag::Numeral | PosTag::Noun | PosTag::ProperNoun
    )
}

/// True when `tokens[i]` is a joiner with no whitespace on either side and a
/// phrase word right after it.
fn joins_words(tokens: &[Token], i: usize) -> bool {
    let joiner = &tokens[i];
    let (Some(prev), Some(next)) = (i.checked_sub(1).map(|p| &tokens[p]), tokens.get(i + 1))
    else {
        return false;
    };
    JOINERS.contains(&joiner.text.as_str())
        && prev.end == joiner.start
        && joiner.end == next.start
        && extends_run(next.tag)
}

fn next_is_adjective(text: &str, tokens: &[Token], i: usize) -> bool {
    match tokens.get(i + 1) {
        Some(next) => next.tag == PosTag::Adjective && !line_break_between(text, &tokens[i], next),
        None => false,
    }
}

fn line_break_between(text: &str, left: &Token, right: &Token) -> bool {
    text.get(left.end..right.start)
        .is_some_and(|gap| gap.contains('\n') || gap.contains('\r'))
}

fn flush(text: &str, tokens: &[Token], run: &mut Vec<usize>, out: &mut Vec<NounPhrase>) {
    let Some(last_noun) = run.iter().rposition(|&i| tokens[i].tag.is_noun()) else {
        run.clear();
        return;
    };

    let indices = &run[..=last_noun];
    let first = &tokens[indices[0]];
    let last = &tokens[indices[indices.len() - 1]];

    let flat = text[first.start..last.end]
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    out.push(NounPhrase {
        tokens: indices.iter().map(|&i| tokens[i].clone()).collect(),
        text: flat,
    });
    run.clear();
}
