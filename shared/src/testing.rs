use std::io::Cursor;

/// In-memory stand-in for an externally owned byte stream.
pub fn text_stream(contents: &str) -> Cursor<Vec<u8>> {
    Cursor::new(contents.as_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    #[test]
    fn test_text_stream_reads_back() {
        let mut stream = text_stream("hello");
        let mut contents = String::new();
        stream.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "hello");
    }
}
