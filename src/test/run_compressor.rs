use crate::trace::{Span, compress_runs, expand_runs};
use proptest::prelude::*;

#[test]
fn compress_runs_merges_repeated_ticks() {
    let seq = ["T1", "T1", "T2"];
    let spans = compress_runs(&seq);
    assert_eq!(spans, vec![Span::new(&"T1", 0, 2), Span::new(&"T2", 2, 1)]);
}

#[test]
fn compress_runs_empty_yields_no_spans() {
    let seq: [&str; 0] = [];
    assert!(compress_runs(&seq).is_empty());
}

#[test]
fn compress_runs_single_run_covers_whole_sequence() {
    let seq = vec!["T4".to_string(); 7];
    let spans = compress_runs(&seq);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].token, "T4");
    assert_eq!((spans[0].start, spans[0].length, spans[0].end()), (0, 7, 7));
}

#[test]
fn compress_runs_reopens_task_after_interruption() {
    let seq = ["T1", "T1", "T1", "T1", "T2", "T2", "T1", "T3", "T3"];
    let spans = compress_runs(&seq)
        .into_iter()
        .map(|s| (*s.token, s.start, s.length))
        .collect::<Vec<_>>();
    assert_eq!(
        spans,
        vec![("T1", 0, 4), ("T2", 4, 2), ("T1", 6, 1), ("T3", 7, 2)]
    );
}

fn token_seq() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop_oneof!["T1", "T2", "T3", "idle"], 0..64)
}

proptest! {
    #[test]
    fn expanding_spans_reconstructs_sequence(seq in token_seq()) {
        let spans = compress_runs(&seq);
        let rebuilt = expand_runs(&spans).into_iter().cloned().collect::<Vec<_>>();
        prop_assert_eq!(rebuilt, seq);
    }

    #[test]
    fn spans_are_contiguous_and_cover_every_tick(seq in token_seq()) {
        let spans = compress_runs(&seq);
        let total: usize = spans.iter().map(|s| s.length).sum();
        prop_assert_eq!(total, seq.len());

        let mut next = 0;
        for span in &spans {
            prop_assert!(span.length >= 1);
            prop_assert_eq!(span.start, next);
            next = span.end();
        }
        for pair in spans.windows(2) {
            prop_assert!(pair[0].start < pair[1].start);
            prop_assert_ne!(pair[0].token, pair[1].token);
        }
    }
}
