//! Ordered reassembly of a chunked text payload.
//!
//! A large base64 payload arrives as a stream of small messages: a start
//! marker carrying the expected byte size and chunk count, indexed chunks
//! that may arrive out of order, and an end marker. The assembler stores
//! chunks by index and joins them in order at the end, skipping any that
//! never arrived. Pure logic only; no transport.

use std::collections::HashMap;

/// One message of the chunk stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkMessage<'a> {
    /// Announces a new payload: decoded byte size and chunk count. A start
    /// marker with missing or malformed numbers still starts a transfer,
    /// with both values zero.
    Start {
        /// Expected size of the decoded payload, in bytes.
        size: usize,
        /// Number of chunks that will follow.
        total: usize,
    },
    /// One indexed chunk of payload text.
    Chunk {
        /// Position of this chunk in the assembled payload.
        index: usize,
        /// The chunk's text.
        data: &'a str,
    },
    /// Marks the payload as complete.
    End,
}

/// Parses one payload string into a [`ChunkMessage`], or [`None`] if it
/// matches no known form.
///
/// # Examples
///
/// ```
/// use drills::prelude::*;
///
/// assert_eq!(
///     parse_message("IMG_START:4096:3"),
///     Some(ChunkMessage::Start { size: 4096, total: 3 })
/// );
/// assert_eq!(
///     parse_message("IMG_CHUNK:0:aGFsbw=="),
///     Some(ChunkMessage::Chunk { index: 0, data: "aGFsbw==" })
/// );
/// assert_eq!(parse_message("IMG_END"), Some(ChunkMessage::End));
/// assert_eq!(parse_message("something else"), None);
/// ```
pub fn parse_message(payload: &str) -> Option<ChunkMessage<'_>> {
    if let Some(rest) = payload.strip_prefix("IMG_START:") {
        let mut parts = rest.split(':');
        let size = parts.next().and_then(|p| p.parse().ok());
        let total = parts.next().and_then(|p| p.parse().ok());

        // A malformed header still opens the transfer.
        Some(ChunkMessage::Start {
            size: size.unwrap_or(0),
            total: total.unwrap_or(0),
        })
    } else if let Some(rest) = payload.strip_prefix("IMG_CHUNK:") {
        let (index, data) = rest.split_once(':')?;

        Some(ChunkMessage::Chunk {
            index: index.parse().ok()?,
            data,
        })
    } else if payload == "IMG_END" {
        Some(ChunkMessage::End)
    } else {
        None
    }
}

/// Collects indexed chunks and joins them in order once the end marker
/// arrives.
///
/// Chunks may arrive in any order and duplicates overwrite. Chunks seen
/// outside a transfer are dropped, as is an end marker with no open
/// transfer.
///
/// # Examples
///
/// ```
/// use drills::prelude::*;
///
/// let mut assembler = ChunkAssembler::new();
///
/// assert_eq!(assembler.handle("IMG_START:6:2"), None);
/// assert_eq!(assembler.handle("IMG_CHUNK:1:lo"), None);
/// assert_eq!(assembler.handle("IMG_CHUNK:0:hal"), None);
/// assert_eq!(assembler.handle("IMG_END"), Some(String::from("hallo")));
/// ```
#[derive(Debug, Default)]
pub struct ChunkAssembler {
    receiving: bool,
    expected_size: usize,
    total_chunks: usize,
    chunks: HashMap<usize, String>,
}

impl ChunkAssembler {
    /// Creates an assembler with no open transfer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one payload string through the assembler.
    ///
    /// Returns the assembled text when `payload` is an end marker closing an
    /// open transfer; every other input returns [`None`]. Missing chunks are
    /// skipped, so the result can be shorter than expected (or empty).
    pub fn handle(&mut self, payload: &str) -> Option<String> {
        match parse_message(payload)? {
            ChunkMessage::Start { size, total } => {
                self.receiving = true;
                self.expected_size = size;
                self.total_chunks = total;
                self.chunks.clear();
                None
            }
            ChunkMessage::Chunk { index, data } if self.receiving => {
                self.chunks.insert(index, data.to_string());
                None
            }
            ChunkMessage::End if self.receiving => {
                self.receiving = false;

                let mut assembled = String::new();
                for i in 0..self.total_chunks {
                    if let Some(chunk) = self.chunks.get(&i) {
                        assembled.push_str(chunk);
                    }
                }
                Some(assembled)
            }
            _ => None,
        }
    }

    /// Whether a transfer is currently open.
    pub fn is_receiving(&self) -> bool {
        self.receiving
    }

    /// Number of distinct chunks received for the open transfer.
    pub fn received_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// Expected size of the decoded payload, in bytes, as announced by the
    /// start marker.
    pub fn expected_size(&self) -> usize {
        self.expected_size
    }

    /// Completion of the open transfer as a percentage, `0.0` when the
    /// announced chunk count was zero.
    pub fn progress(&self) -> f64 {
        if self.total_chunks == 0 {
            0.0
        } else {
            (self.chunks.len() as f64 / self.total_chunks as f64) * 100.0
        }
    }
}

/// Normalizes assembled base64 text: strips whitespace and pads with `=` to
/// a multiple of four characters.
///
/// # Example
///
/// ```
/// use drills::prelude::*;
///
/// assert_eq!(normalize_base64("aGFs\nbG8"), "aGFsbG8=");
/// assert_eq!(normalize_base64("aGFsbw=="), "aGFsbw==");
/// ```
pub fn normalize_base64(data: &str) -> String {
    let mut clean: String = data.chars().filter(|c| !matches!(c, '\n' | '\r' | ' ')).collect();

    let missing = clean.len() % 4;
    if missing != 0 {
        clean.push_str(&"=".repeat(4 - missing));
    }

    clean
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start() {
        assert_eq!(
            parse_message("IMG_START:1024:8"),
            Some(ChunkMessage::Start {
                size: 1024,
                total: 8
            })
        );
    }

    #[test]
    fn test_parse_malformed_start_opens_empty_transfer() {
        assert_eq!(
            parse_message("IMG_START:"),
            Some(ChunkMessage::Start { size: 0, total: 0 })
        );
        assert_eq!(
            parse_message("IMG_START:abc:def"),
            Some(ChunkMessage::Start { size: 0, total: 0 })
        );
    }

    #[test]
    fn test_parse_chunk_keeps_colons_in_data() {
        assert_eq!(
            parse_message("IMG_CHUNK:2:ab:cd"),
            Some(ChunkMessage::Chunk {
                index: 2,
                data: "ab:cd"
            })
        );
    }

    #[test]
    fn test_parse_rejects_bad_chunk_index() {
        assert_eq!(parse_message("IMG_CHUNK:x:data"), None);
        assert_eq!(parse_message("IMG_CHUNK:nodata"), None);
    }

    #[test]
    fn test_assembles_out_of_order() {
        let mut assembler = ChunkAssembler::new();
        assembler.handle("IMG_START:9:3");
        assembler.handle("IMG_CHUNK:2:cc");
        assembler.handle("IMG_CHUNK:0:aa");
        assembler.handle("IMG_CHUNK:1:bb");
        assert_eq!(assembler.handle("IMG_END"), Some(String::from("aabbcc")));
    }

    #[test]
    fn test_missing_chunk_is_skipped() {
        let mut assembler = ChunkAssembler::new();
        assembler.handle("IMG_START:9:3");
        assembler.handle("IMG_CHUNK:0:aa");
        assembler.handle("IMG_CHUNK:2:cc");
        assert_eq!(assembler.handle("IMG_END"), Some(String::from("aacc")));
    }

    #[test]
    fn test_chunk_before_start_is_dropped() {
        let mut assembler = ChunkAssembler::new();
        assert_eq!(assembler.handle("IMG_CHUNK:0:aa"), None);
        assert_eq!(assembler.received_chunks(), 0);
    }

    #[test]
    fn test_end_without_start_is_dropped() {
        let mut assembler = ChunkAssembler::new();
        assert_eq!(assembler.handle("IMG_END"), None);
    }

    #[test]
    fn test_new_start_clears_previous_chunks() {
        let mut assembler = ChunkAssembler::new();
        assembler.handle("IMG_START:4:2");
        assembler.handle("IMG_CHUNK:0:old");
        assembler.handle("IMG_START:4:1");
        assembler.handle("IMG_CHUNK:0:new");
        assert_eq!(assembler.handle("IMG_END"), Some(String::from("new")));
    }

    #[test]
    fn test_duplicate_chunk_overwrites() {
        let mut assembler = ChunkAssembler::new();
        assembler.handle("IMG_START:2:1");
        assembler.handle("IMG_CHUNK:0:aa");
        assembler.handle("IMG_CHUNK:0:bb");
        assert_eq!(assembler.handle("IMG_END"), Some(String::from("bb")));
    }

    #[test]
    fn test_empty_transfer_assembles_empty() {
        let mut assembler = ChunkAssembler::new();
        assembler.handle("IMG_START:0:0");
        assert_eq!(assembler.handle("IMG_END"), Some(String::new()));
    }

    #[test]
    fn test_progress() {
        let mut assembler = ChunkAssembler::new();
        assembler.handle("IMG_START:16:4");
        assert_eq!(assembler.progress(), 0.0);
        assembler.handle("IMG_CHUNK:0:a");
        assembler.handle("IMG_CHUNK:1:b");
        assert_eq!(assembler.progress(), 50.0);
    }

    #[test]
    fn test_progress_with_zero_total() {
        let mut assembler = ChunkAssembler::new();
        assembler.handle("IMG_START:");
        assert_eq!(assembler.progress(), 0.0);
    }

    #[test]
    fn test_unknown_payload_is_ignored() {
        let mut assembler = ChunkAssembler::new();
        assembler.handle("IMG_START:4:1");
        assert_eq!(assembler.handle("garbage"), None);
        assert!(assembler.is_receiving());
    }

    #[test]
    fn test_normalize_strips_and_pads() {
        assert_eq!(normalize_base64("a b\r\nc"), "abc=");
        assert_eq!(normalize_base64("abcd"), "abcd");
        assert_eq!(normalize_base64(""), "");
    }
}
