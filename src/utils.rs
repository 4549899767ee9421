use std::path::Path;

use crate::core::media_protocol::MEDIA_PROTOCOL;

/// Generates a URL for a local file that is served by the `media` custom protocol handler.
/// WebView2 on Windows exposes custom protocols as `http://<name>.localhost/`, other
/// platforms use `<name>://localhost/`.
pub fn get_local_file_url(path: &Path) -> String {
    // Forward slashes keep the decoded path usable on every platform.
    let p_str = path.to_string_lossy().replace('\\', "/");
    let encoded = urlencoding::encode(&p_str);
    if cfg!(windows) {
        format!("http://{MEDIA_PROTOCOL}.localhost/{encoded}")
    } else {
        format!("{MEDIA_PROTOCOL}://localhost/{encoded}")
    }
}

pub fn parse_f64_input(value: &str, fallback: f64) -> f64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return fallback;
    }
    match trimmed.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_file_url_encodes_path() {
        let url = get_local_file_url(Path::new("/videos/demo clip.mp4"));
        assert!(url.ends_with("%2Fvideos%2Fdemo%20clip.mp4"));
    }

    #[test]
    fn test_parse_f64_input() {
        assert_eq!(parse_f64_input(" 2.5 ", 0.0), 2.5);
        assert_eq!(parse_f64_input("", 1.0), 1.0);
        assert_eq!(parse_f64_input("abc", 1.0), 1.0);
        assert_eq!(parse_f64_input("inf", 1.0), 1.0);
    }
}
