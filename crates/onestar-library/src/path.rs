//! Directory derivation for media file paths.

use regex::Regex;

use crate::error::{LibraryError, LibraryResult};

/// Trailing `/<name>.<extension>` segment. The name may contain spaces; the
/// extension is letters only, so `Film.mp4` is left as is and directory mode
/// removes just that file.
const FILE_SUFFIX_PATTERN: &str = r"/[^/]+\.[A-Za-z]+$";

/// Strips the trailing file name component from a media path.
#[derive(Debug, Clone)]
pub struct DirectoryDeriver {
    suffix: Regex,
}

impl DirectoryDeriver {
    /// Compile the file-name pattern.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::Pattern`] if the pattern fails to compile.
    pub fn new() -> LibraryResult<Self> {
        let suffix =
            Regex::new(FILE_SUFFIX_PATTERN).map_err(|source| LibraryError::Pattern { source })?;
        Ok(Self { suffix })
    }

    /// Remove the trailing `/<name>.<extension>` segment.
    ///
    /// Paths without such a segment are returned unchanged. A file sitting
    /// directly under `/` derives to an empty path, which never exists on
    /// disk and therefore can never be removed.
    #[must_use]
    pub fn derive(&self, file_path: &str) -> String {
        self.suffix.replace(file_path, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_file_name_with_spaces() -> LibraryResult<()> {
        let deriver = DirectoryDeriver::new()?;
        assert_eq!(deriver.derive("/a/b/Show Name.mkv"), "/a/b");
        assert_eq!(
            deriver.derive("/tv/Old Show/Season 1/Old Show - S01E01.mkv"),
            "/tv/Old Show/Season 1"
        );
        Ok(())
    }

    #[test]
    fn extensions_with_digits_are_unchanged() -> LibraryResult<()> {
        let deriver = DirectoryDeriver::new()?;
        assert_eq!(deriver.derive("/movies/Film.mp4"), "/movies/Film.mp4");
        assert_eq!(
            deriver.derive("/tv/Old Show/Season 1/Old Show - S01E01.mp4"),
            "/tv/Old Show/Season 1/Old Show - S01E01.mp4"
        );
        assert_eq!(deriver.derive("/music/Track.m4a"), "/music/Track.m4a");
        Ok(())
    }

    #[test]
    fn only_the_last_segment_is_removed() -> LibraryResult<()> {
        let deriver = DirectoryDeriver::new()?;
        assert_eq!(deriver.derive("/media/v1.0/clip.final.avi"), "/media/v1.0");
        Ok(())
    }

    #[test]
    fn paths_without_extension_are_unchanged() -> LibraryResult<()> {
        let deriver = DirectoryDeriver::new()?;
        assert_eq!(deriver.derive("/a/b/README"), "/a/b/README");
        assert_eq!(deriver.derive("/a/b/"), "/a/b/");
        assert_eq!(deriver.derive("relative.mkv"), "relative.mkv");
        assert_eq!(deriver.derive("/a/b/trailing.123"), "/a/b/trailing.123");
        Ok(())
    }

    #[test]
    fn root_level_file_derives_to_empty_path() -> LibraryResult<()> {
        let deriver = DirectoryDeriver::new()?;
        assert_eq!(deriver.derive("/movie.mkv"), "");
        Ok(())
    }
}
