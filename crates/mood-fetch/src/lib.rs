//! # mood-fetch
//!
//! Dataset loading for the mood chart: a local export file, the remote
//! download service, or the demo generator. All loads funnel through the
//! same guarded pipeline so a slow response can never clobber a newer one.

pub mod loader;

pub use loader::*;

/// A local export dropped next to the page takes priority over everything.
pub const LOCAL_DATA_PATH: &str = "mappiness.json";

/// URL of a user's export on the download service.
pub fn remote_data_url(code: &str) -> String {
    format!("https://mappiness.me/{code}/mappiness.json")
}

/// Extract a download code from whatever the user pasted.
///
/// A code is three dot-separated groups of four lowercase alphanumerics,
/// like `3kkq.pk7d.23wb`. People paste whole URLs, so the code is accepted
/// anywhere inside the input; the first match wins.
pub fn parse_download_code(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let code_char = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();

    for start in 0..bytes.len().saturating_sub(13) {
        let candidate = &bytes[start..start + 14];
        let groups_ok = candidate
            .chunks(5)
            .all(|chunk| chunk[..4.min(chunk.len())].iter().copied().all(code_char));
        let dots_ok = candidate[4] == b'.' && candidate[9] == b'.';
        if groups_ok && dots_ok {
            // Already validated as ASCII, so the slice is valid UTF-8.
            return std::str::from_utf8(candidate).ok().map(String::from);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_bare_code() {
        assert_eq!(parse_download_code("3kkq.pk7d.23wb").as_deref(), Some("3kkq.pk7d.23wb"));
    }

    #[test]
    fn extracts_a_code_from_a_pasted_url() {
        assert_eq!(
            parse_download_code("https://mappiness.me/3kkq.pk7d.23wb").as_deref(),
            Some("3kkq.pk7d.23wb")
        );
    }

    #[test]
    fn rejects_malformed_codes() {
        assert_eq!(parse_download_code(""), None);
        assert_eq!(parse_download_code("3KKQ.PK7D.23WB"), None);
        assert_eq!(parse_download_code("3kkq-pk7d-23wb"), None);
        assert_eq!(parse_download_code("3kk.pk7.23w"), None);
    }

    #[test]
    fn remote_url_embeds_the_code() {
        assert_eq!(
            remote_data_url("3kkq.pk7d.23wb"),
            "https://mappiness.me/3kkq.pk7d.23wb/mappiness.json"
        );
    }
}
