use std::io::{Read, Write};

use super::FrequencyIndex;
use crate::error::Result;

/// Writes the maximum n-gram length the index was built with, followed by the index.
pub fn write_snapshot(
    output: &mut impl Write,
    max_ngram_length: isize,
    index: &FrequencyIndex,
) -> Result<()> {
    ciborium::into_writer(&max_ngram_length, &mut *output)?;
    ciborium::into_writer(index, output)?;
    Ok(())
}

pub fn read_snapshot(input: &mut impl Read) -> Result<(isize, FrequencyIndex)> {
    let max_ngram_length: isize = ciborium::from_reader(&mut *input)?;
    let index: FrequencyIndex = ciborium::from_reader(input)?;
    Ok((max_ngram_length, index))
}

#[cfg(test)]
mod tests {
    use crate::{frequency_index::FrequencyIndex, test_util::mock_alignment};

    use super::{read_snapshot, write_snapshot};

    #[test]
    fn snapshot_preserves_counts() {
        let mut index = FrequencyIndex::new();
        index.add_alignments([
            &mock_alignment("עִם", "with the"),
            &mock_alignment("עִם", "with"),
        ]);

        let mut buffer = Vec::new();
        write_snapshot(&mut buffer, 2, &index).unwrap();
        let (max_ngram_length, loaded) = read_snapshot(&mut buffer.as_slice()).unwrap();

        assert_eq!(max_ngram_length, 2);
        assert_eq!(loaded, index);
        assert_eq!(loaded.alignment_frequency(&mock_alignment("עִם", "with")), 1);
    }
}
