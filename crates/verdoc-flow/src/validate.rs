//! Client-side file validation.

use crate::types::{InvalidFile, SelectedFile, UploadConfig, UploadError};

/// Validate a single file against `config`.
///
/// The type check runs first, so a file with a disallowed MIME type is
/// reported as [`InvalidFile::UnsupportedType`] whatever its size.
/// The size limit is inclusive.
///
/// # Errors
///
/// Returns [`InvalidFile::UnsupportedType`] if the MIME type is not
/// allowed, otherwise [`InvalidFile::TooLarge`] if the file exceeds
/// [`UploadConfig::max_file_size_bytes`].
pub fn validate(config: &UploadConfig, file: &SelectedFile) -> Result<(), InvalidFile> {
    if !config.is_allowed_type(&file.mime_type) {
        return Err(InvalidFile::UnsupportedType {
            mime_type: file.mime_type.clone(),
        });
    }
    if file.size_bytes > config.max_file_size_bytes {
        return Err(InvalidFile::TooLarge {
            size_bytes: file.size_bytes,
            max_bytes: config.max_file_size_bytes,
        });
    }
    Ok(())
}

/// Pick the file an upload would start with.
///
/// Only the first file of a multi-file selection is considered.
///
/// # Errors
///
/// Returns [`UploadError::NoFileSelected`] for an empty selection and
/// [`UploadError::InvalidFile`] when the first file fails [`validate`].
pub fn check_selection<'a>(
    config: &UploadConfig,
    files: &'a [SelectedFile],
) -> Result<&'a SelectedFile, UploadError> {
    let file = files.first().ok_or(UploadError::NoFileSelected)?;
    validate(config, file)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_MAX_FILE_SIZE_BYTES;

    fn file(mime: &str, size: u64) -> SelectedFile {
        SelectedFile::new("doc", mime, size)
    }

    #[test]
    fn allowed_types_within_limit_pass() {
        let config = UploadConfig::default();
        for mime in ["application/pdf", "image/jpeg", "image/png"] {
            for size in [0, 1, 2 * 1024 * 1024, DEFAULT_MAX_FILE_SIZE_BYTES] {
                assert_eq!(
                    validate(&config, &file(mime, size)),
                    Ok(()),
                    "{mime} at {size} bytes"
                );
            }
        }
    }

    #[test]
    fn disallowed_type_wins_over_size() {
        let config = UploadConfig::default();
        for size in [0, DEFAULT_MAX_FILE_SIZE_BYTES + 1, u64::MAX] {
            let err = validate(&config, &file("text/plain", size));
            assert_eq!(
                err,
                Err(InvalidFile::UnsupportedType {
                    mime_type: "text/plain".into()
                })
            );
        }
    }

    #[test]
    fn one_byte_over_limit_is_rejected() {
        let config = UploadConfig::default();
        let err = validate(&config, &file("image/png", DEFAULT_MAX_FILE_SIZE_BYTES + 1));
        assert!(matches!(err, Err(InvalidFile::TooLarge { .. })));
    }

    #[test]
    fn eleven_megabyte_pdf_message() {
        let config = UploadConfig::default();
        let err = validate(&config, &file("application/pdf", 11 * 1024 * 1024));
        assert_eq!(
            err.map_err(|e| e.to_string()),
            Err("File size exceeds 10MB limit".to_owned())
        );
    }

    #[test]
    fn empty_selection() {
        let config = UploadConfig::default();
        assert_eq!(
            check_selection(&config, &[]),
            Err(UploadError::NoFileSelected)
        );
    }

    #[test]
    fn only_first_file_counts() {
        let config = UploadConfig::default();
        let files = [file("image/png", 10), file("text/plain", 10)];
        assert_eq!(check_selection(&config, &files), Ok(&files[0]));

        let files = [file("text/plain", 10), file("image/png", 10)];
        assert!(matches!(
            check_selection(&config, &files),
            Err(UploadError::InvalidFile(InvalidFile::UnsupportedType { .. }))
        ));
    }
}
