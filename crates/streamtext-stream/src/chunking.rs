/// Rule for partitioning a text into stream fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkPolicy {
    /// Contiguous character slices. Texts with at least `slices` characters
    /// yield exactly `slices` fragments; the last one absorbs the remainder.
    Characters { slices: usize },

    /// Whitespace-delimited words, grouped `max(min_group, words / target_frames)`
    /// at a time and re-joined with single spaces plus one trailing space.
    Words { min_group: usize, target_frames: usize },
}

impl ChunkPolicy {
    pub const fn characters() -> Self {
        ChunkPolicy::Characters { slices: 8 }
    }

    pub const fn words() -> Self {
        ChunkPolicy::Words {
            min_group: 5,
            target_frames: 8,
        }
    }

    /// Number of fragments `chunk` produces for `text`.
    pub fn fragment_count(&self, text: &str) -> usize {
        match *self {
            ChunkPolicy::Characters { slices } => text.chars().count().min(slices.max(1)),
            ChunkPolicy::Words {
                min_group,
                target_frames,
            } => {
                let words = text.split_whitespace().count();
                words.div_ceil(word_group_size(words, min_group, target_frames))
            }
        }
    }
}

/// Split `text` into ordered fragments according to `policy`.
///
/// Empty (or, for the word policy, all-whitespace) input yields no fragments.
pub fn chunk(text: &str, policy: ChunkPolicy) -> Vec<String> {
    match policy {
        ChunkPolicy::Characters { slices } => chunk_chars(text, slices.max(1)),
        ChunkPolicy::Words {
            min_group,
            target_frames,
        } => chunk_words(text, min_group, target_frames),
    }
}

fn chunk_chars(text: &str, slices: usize) -> Vec<String> {
    let total = text.chars().count();
    if total == 0 {
        return Vec::new();
    }

    let size = (total / slices).max(1);
    let count = total.min(slices);

    // Byte offsets of each slice start, so multi-byte characters never split.
    let mut bounds: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .step_by(size)
        .take(count)
        .collect();
    bounds.push(text.len());

    bounds
        .windows(2)
        .map(|w| text[w[0]..w[1]].to_string())
        .collect()
}

fn chunk_words(text: &str, min_group: usize, target_frames: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let group = word_group_size(words.len(), min_group, target_frames);

    words
        .chunks(group)
        .map(|group| format!("{} ", group.join(" ")))
        .collect()
}

fn word_group_size(words: usize, min_group: usize, target_frames: usize) -> usize {
    (words / target_frames.max(1)).max(min_group).max(1)
}
