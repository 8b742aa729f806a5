//! Document I/O operations for booklets

use crate::types::*;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Load a single PDF document
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    log::debug!("Loaded {} ({} pages)", path.display(), doc.get_pages().len());
    Ok(doc)
}

/// Save the finished document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, BookletError>(writer)
    })
    .await??;
    tokio::fs::write(&path, &bytes).await?;
    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Output path used when none is given: the input path with its last four
/// characters (normally `.pdf`) replaced by `_book.pdf`.
///
/// A path that is not valid UTF-8 keeps its raw directory and stem and only
/// has its extension replaced.
pub fn default_output_path(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref();
    let Some(text) = input.to_str() else {
        let mut name = input.file_stem().unwrap_or_default().to_os_string();
        name.push("_book.pdf");
        return input.with_file_name(name);
    };

    let cut = text
        .char_indices()
        .rev()
        .nth(3)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    PathBuf::from(format!("{}_book.pdf", &text[..cut]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path("docs/manual.pdf"),
            PathBuf::from("docs/manual_book.pdf")
        );
    }

    #[test]
    fn test_default_output_path_strips_any_extension_of_four_chars() {
        assert_eq!(default_output_path("scan.PDF"), PathBuf::from("scan_book.pdf"));
        assert_eq!(default_output_path("a.xyz"), PathBuf::from("a_book.pdf"));
    }

    #[test]
    fn test_default_output_path_short_input() {
        assert_eq!(default_output_path("ab"), PathBuf::from("_book.pdf"));
    }

    #[test]
    fn test_default_output_path_multibyte() {
        assert_eq!(default_output_path("récit.pdf"), PathBuf::from("récit_book.pdf"));
    }

    #[cfg(unix)]
    #[test]
    fn test_default_output_path_keeps_non_utf8_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let input = Path::new(OsStr::from_bytes(b"scans/\xffcover.pdf"));
        let expected = Path::new(OsStr::from_bytes(b"scans/\xffcover_book.pdf"));
        assert_eq!(default_output_path(input), expected);
    }
}
