//! Property tests for the windowing rules

use proptest::prelude::*;
use wordchunk::{segment, Chunker};

fn params_strategy() -> impl Strategy<Value = (usize, usize)> {
    (2usize..12).prop_flat_map(|window| (Just(window), 1..window))
}

fn lines_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-z0-9]{1,5}", 0..8), 0..24)
}

fn render(lines: &[Vec<String>], separator: &str) -> String {
    lines
        .iter()
        .map(|words| words.join(separator))
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #[test]
    fn chunks_reconstruct_input((window, overlap) in params_strategy(), lines in lines_strategy()) {
        let chunker = Chunker::new(window, overlap).unwrap();
        let chunks = chunker.chunk_text(&render(&lines, " ")).unwrap();
        let expected: Vec<&str> = lines.iter().flatten().map(String::as_str).collect();

        let mut rebuilt: Vec<&str> = Vec::new();
        for (i, chunk) in chunks.iter().enumerate() {
            let skip = if i == 0 { 0 } else { overlap };
            rebuilt.extend(chunk.split(' ').skip(skip));
        }
        prop_assert_eq!(rebuilt, expected);
    }

    #[test]
    fn consecutive_chunks_share_overlap((window, overlap) in params_strategy(), lines in lines_strategy()) {
        let chunker = Chunker::new(window, overlap).unwrap();
        let chunks = chunker.chunk_text(&render(&lines, " ")).unwrap();

        for pair in chunks.windows(2) {
            let prev: Vec<&str> = pair[0].split(' ').collect();
            let next: Vec<&str> = pair[1].split(' ').collect();
            prop_assert!(next.len() > overlap);
            prop_assert_eq!(&next[..overlap], &prev[prev.len() - overlap..]);
        }
    }

    #[test]
    fn non_final_chunks_are_full((window, overlap) in params_strategy(), lines in lines_strategy()) {
        let chunker = Chunker::new(window, overlap).unwrap();
        let chunks = chunker.chunk_text(&render(&lines, " ")).unwrap();

        if let Some((last, rest)) = chunks.split_last() {
            for chunk in rest {
                prop_assert_eq!(chunk.split(' ').count(), window);
            }
            let last_len = last.split(' ').count();
            prop_assert!(last_len >= 1 && last_len <= window);
        }
    }

    #[test]
    fn whitespace_runs_do_not_change_output((window, overlap) in params_strategy(), lines in lines_strategy()) {
        let chunker = Chunker::new(window, overlap).unwrap();
        let tight = chunker.chunk_text(&render(&lines, " ")).unwrap();
        let loose = chunker.chunk_text(&render(&lines, " \t  ")).unwrap();
        prop_assert_eq!(tight, loose);
    }

    #[test]
    fn stream_matches_in_memory_segment((window, overlap) in params_strategy(), lines in lines_strategy()) {
        let chunker = Chunker::new(window, overlap).unwrap();
        let text = render(&lines, " ");
        let streamed = chunker.chunk_reader(text.as_bytes()).unwrap();
        prop_assert_eq!(streamed, segment(&text, chunker.params()));
    }
}
