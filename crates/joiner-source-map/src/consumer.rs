//! Reading positions back out of an encoded source map

use crate::error::{Result, SourceMapError};
use crate::sourcemap::SourceMap;
use crate::types::{Mapping, Position};
use crate::vlq;

/// Result of mapping a generated position back to an original file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedLocation {
    /// The original source, as listed in `sources`
    pub source: String,
    /// Position in the original source
    pub position: Position,
    /// Symbol name, if the segment carried one
    pub name: Option<String>,
}

impl SourceMap {
    /// Decode the `mappings` string into absolute mappings
    ///
    /// Mappings come back in the order they were encoded, which is sorted
    /// by generated position.
    pub fn decode_mappings(&self) -> Result<Vec<Mapping>> {
        let input = self.mappings.as_bytes();
        let mut result = Vec::new();

        let mut generated_line = 1usize;
        let mut generated_column = 0i64;
        let mut source = 0i64;
        let mut original_line = 0i64;
        let mut original_column = 0i64;
        let mut name = 0i64;

        let mut pos = 0;
        while pos < input.len() {
            match input[pos] {
                b';' => {
                    generated_line += 1;
                    generated_column = 0;
                    pos += 1;
                    continue;
                }
                b',' => {
                    pos += 1;
                    continue;
                }
                _ => {}
            }

            let segment_start = pos;
            let mut fields = [0i64; 5];
            let mut count = 0;
            while pos < input.len() && input[pos] != b',' && input[pos] != b';' {
                if count == fields.len() {
                    return Err(SourceMapError::InvalidVlq {
                        position: segment_start,
                        message: "segment has more than 5 fields".to_string(),
                    });
                }
                let (value, next) = vlq::decode(input, pos)?;
                fields[count] = value;
                count += 1;
                pos = next;
            }

            generated_column += fields[0];
            let generated = Position::new(generated_line, to_index(generated_column, segment_start)?);

            match count {
                1 => result.push(Mapping::generated_only(generated)),
                4 | 5 => {
                    source += fields[1];
                    original_line += fields[2];
                    original_column += fields[3];

                    let source_name = lookup(&self.sources, source).ok_or(
                        SourceMapError::SourceIndexOutOfRange {
                            index: source,
                            count: self.sources.len(),
                        },
                    )?;
                    let original = Position::new(
                        to_index(original_line, segment_start)? + 1,
                        to_index(original_column, segment_start)?,
                    );
                    let mut mapping = Mapping::new(generated, original, source_name);

                    if count == 5 {
                        name += fields[4];
                        let symbol = lookup(&self.names, name).ok_or(
                            SourceMapError::NameIndexOutOfRange {
                                index: name,
                                count: self.names.len(),
                            },
                        )?;
                        mapping = mapping.with_name(symbol);
                    }
                    result.push(mapping);
                }
                _ => {
                    return Err(SourceMapError::InvalidVlq {
                        position: segment_start,
                        message: format!("segment has {} fields, expected 1, 4 or 5", count),
                    });
                }
            }
        }

        Ok(result)
    }

    /// Find the original position for a generated position
    ///
    /// Decodes the whole `mappings` string on every call. Callers doing
    /// many lookups should decode once with [`SourceMap::decode_mappings`]
    /// and use [`find_original_position`].
    pub fn original_position_for(&self, line: usize, column: usize) -> Result<Option<MappedLocation>> {
        let mappings = self.decode_mappings()?;
        Ok(find_original_position(&mappings, line, column))
    }
}

/// Find the original position for a generated position in decoded mappings
///
/// Uses the closest segment at or before `column` on the same generated
/// line. Returns `None` when no segment precedes the column or the
/// closest one is generated-only. `mappings` must be sorted by generated
/// position, as [`SourceMap::decode_mappings`] returns them for maps this
/// crate produces.
pub fn find_original_position(mappings: &[Mapping], line: usize, column: usize) -> Option<MappedLocation> {
    let target = Position::new(line, column);
    let end = mappings.partition_point(|m| m.generated <= target);
    let found = mappings[..end].last().filter(|m| m.generated.line == line)?;

    Some(MappedLocation {
        source: found.source.clone()?,
        position: found.original?,
        name: found.name.clone(),
    })
}

fn lookup(items: &[String], index: i64) -> Option<&str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| items.get(i))
        .map(String::as_str)
}

fn to_index(value: i64, position: usize) -> Result<usize> {
    usize::try_from(value).map_err(|_| SourceMapError::InvalidVlq {
        position,
        message: format!("negative position {}", value),
    })
}
