//! Compound name tokenization
//!
//! Splits a compound name string ("Smith-Jones, Maria") into an ordered
//! sequence of name chunks and single-character separators, and reassembles
//! renamed chunks back into a single string with the original separators in
//! their original positions. Concatenating the segment texts of a split
//! always reconstructs the input exactly.

/// Characters that delimit name chunks within a compound name
pub const SEPARATORS: [char; 5] = [' ', '-', '–', '—', ','];

/// One piece of a tokenized name string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A maximal run of non-separator characters; empty between adjacent
    /// separators and at separator-adjacent string boundaries
    Chunk(String),
    /// A single separator character, preserved verbatim on reassembly
    Separator(char),
}

/// Returns true if the character delimits name chunks
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Split a name string into chunk and separator segments
///
/// Each separator character becomes its own segment, so a run of separators
/// produces one segment per character with empty chunks between them.
pub fn split(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut pending = String::new();

    for c in text.chars() {
        if is_separator(c) {
            segments.push(Segment::Chunk(std::mem::take(&mut pending)));
            segments.push(Segment::Separator(c));
        } else {
            pending.push(c);
        }
    }

    // Trailing chunk, empty when the text ends with a separator
    if !segments.is_empty() || !pending.is_empty() {
        segments.push(Segment::Chunk(pending));
    }

    segments
}

/// Reassemble a split string, substituting renamed chunk texts in order
///
/// Separator segments are copied verbatim. `renamed` must yield one value
/// per chunk segment; if it runs short, the remaining chunks keep their
/// original text.
pub fn join<I>(segments: &[Segment], renamed: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut renamed = renamed.into_iter();
    let mut output = String::new();

    for segment in segments {
        match segment {
            Segment::Chunk(original) => {
                output.push_str(&renamed.next().unwrap_or_else(|| original.clone()));
            }
            Segment::Separator(c) => output.push(*c),
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn chunk_texts(segments: &[Segment]) -> Vec<String> {
        segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Chunk(text) => Some(text.clone()),
                Segment::Separator(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_split_compound_name() {
        let segments = split("Smith-Jones, Maria");

        assert_eq!(
            segments,
            vec![
                Segment::Chunk("Smith".to_string()),
                Segment::Separator('-'),
                Segment::Chunk("Jones".to_string()),
                Segment::Separator(','),
                Segment::Chunk("".to_string()),
                Segment::Separator(' '),
                Segment::Chunk("Maria".to_string()),
            ]
        );
    }

    #[test]
    fn test_split_plain_name_is_single_chunk() {
        assert_eq!(split("Maria"), vec![Segment::Chunk("Maria".to_string())]);
    }

    #[test]
    fn test_split_empty_string() {
        assert_eq!(split(""), Vec::new());
    }

    #[test]
    fn test_separator_runs_become_individual_segments() {
        let segments = split("a--b");

        assert_eq!(
            segments,
            vec![
                Segment::Chunk("a".to_string()),
                Segment::Separator('-'),
                Segment::Chunk("".to_string()),
                Segment::Separator('-'),
                Segment::Chunk("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_boundary_separators_yield_empty_chunks() {
        let segments = split("-Ana-");

        assert_eq!(
            segments,
            vec![
                Segment::Chunk("".to_string()),
                Segment::Separator('-'),
                Segment::Chunk("Ana".to_string()),
                Segment::Separator('-'),
                Segment::Chunk("".to_string()),
            ]
        );
    }

    #[test_case("Smith-Jones, Maria")]
    #[test_case("O'Brien–Díaz")]
    #[test_case("a—b—c")]
    #[test_case(",,leading")]
    #[test_case("trailing ")]
    #[test_case(" - , – — ")]
    #[test_case("single")]
    fn test_identity_round_trip(text: &str) {
        let segments = split(text);
        assert_eq!(join(&segments, chunk_texts(&segments)), text);
    }

    #[test]
    fn test_join_substitutes_chunks_in_order() {
        let segments = split("Smith-Jones");
        let renamed = vec!["Adams".to_string(), "Baker".to_string()];

        assert_eq!(join(&segments, renamed), "Adams-Baker");
    }

    #[test]
    fn test_join_preserves_empty_chunk_adjacency() {
        let segments = split("Smith--Jones");
        // The empty chunk between the separators is renamed to empty, so
        // the double separator survives reassembly
        let renamed = vec!["Adams".to_string(), "".to_string(), "Baker".to_string()];

        assert_eq!(join(&segments, renamed), "Adams--Baker");
    }
}
