use streamtext_stream::{chunk, ChunkPolicy, ChunkEmitter, Frame, StreamProfile, CLIMATE_REPORT};
use std::sync::Arc;

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn sample_texts() -> Vec<String> {
    let mut texts: Vec<String> = vec![
        "a".to_string(),
        "abcdefg".to_string(),
        "abcdefgh".to_string(),
        "The quick brown fox jumps over the lazy dog".to_string(),
        "  leading and trailing  ".to_string(),
        "tabs\tand\nnewlines\r\nmixed".to_string(),
        "ünïcödé 1.5°C → 2°C ☀ 🌍🌍🌍".to_string(),
        CLIMATE_REPORT.to_string(),
    ];
    for len in [9, 15, 17, 63, 64, 65, 1001] {
        texts.push("xy z".chars().cycle().take(len).collect());
    }
    texts
}

#[test]
fn test_character_round_trip() {
    for text in sample_texts() {
        let fragments = chunk(&text, ChunkPolicy::characters());
        assert_eq!(fragments.concat(), text, "round trip failed for {:?}", text);
    }
}

#[test]
fn test_character_frame_count() {
    for text in sample_texts() {
        let fragments = chunk(&text, ChunkPolicy::characters());
        let chars = text.chars().count();

        if chars >= 8 {
            assert_eq!(fragments.len(), 8, "text {:?}", text);
        } else {
            assert_eq!(fragments.len(), chars);
        }
        assert!(fragments.iter().all(|f| !f.is_empty()));
        assert_eq!(fragments.len(), ChunkPolicy::characters().fragment_count(&text));
    }
}

#[test]
fn test_word_round_trip_after_collapse() {
    for text in sample_texts() {
        let fragments = chunk(&text, ChunkPolicy::words());
        assert_eq!(collapse(&fragments.concat()), collapse(&text));
        assert!(fragments.iter().all(|f| f.ends_with(' ')));
    }
}

#[test]
fn test_word_frame_count() {
    for text in sample_texts() {
        let words = text.split_whitespace().count();
        let group = std::cmp::max(5, words / 8);
        let expected = words.div_ceil(group);

        let fragments = chunk(&text, ChunkPolicy::words());
        assert_eq!(fragments.len(), expected, "text {:?}", text);
        assert_eq!(ChunkPolicy::words().fragment_count(&text), expected);
    }
}

#[test]
fn test_report_under_both_profiles() {
    let text: Arc<str> = Arc::from(CLIMATE_REPORT);

    let chars = ChunkEmitter::new(text.clone(), StreamProfile::character()).frames();
    assert_eq!(chars.len(), 9);

    let words = ChunkEmitter::new(text, StreamProfile::word()).frames();
    let word_count = CLIMATE_REPORT.split_whitespace().count();
    assert_eq!(words.len(), word_count.div_ceil(std::cmp::max(5, word_count / 8)) + 1);
    assert_eq!(words.last(), Some(&Frame::Done));
}
