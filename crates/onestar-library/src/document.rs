//! Parser for the recently viewed listing.
//!
//! # Design
//! - Stream the document with `quick-xml` and pick out `Video` elements at
//!   any depth, matching element and attribute names case-insensitively.
//! - The media file is the `file` attribute of the first `Part` inside the
//!   first `Media` of each video.
//! - Attributes are captured raw; interpreting them is the classifier's job.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{LibraryError, LibraryResult};

/// Raw attributes of one `Video` element, in listing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoNode {
    /// `ratingKey` attribute, used only to identify the item in logs.
    pub rating_key: Option<String>,
    /// `title` attribute.
    pub title: Option<String>,
    /// `userRating` attribute, unparsed.
    pub user_rating: Option<String>,
    /// `file` attribute of the first media part.
    pub file: Option<String>,
}

struct OpenVideo {
    node: VideoNode,
    depth: usize,
    media_seen: bool,
    media_depth: Option<usize>,
}

/// Parse the listing into video nodes, preserving document order.
///
/// # Errors
///
/// Returns [`LibraryError::Xml`] when the markup is not well-formed and
/// [`LibraryError::Malformed`] when it has no root element or ends with
/// elements still open.
pub fn parse_listing(document: &str) -> LibraryResult<Vec<VideoNode>> {
    let mut reader = Reader::from_str(document);
    reader.config_mut().trim_text(true);

    let mut videos = Vec::new();
    let mut current: Option<OpenVideo> = None;
    let mut depth = 0usize;
    let mut saw_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(element) => {
                depth += 1;
                saw_root = true;
                open_element(&element, depth, false, &mut current, &mut videos)?;
            }
            Event::Empty(element) => {
                saw_root = true;
                open_element(&element, depth + 1, true, &mut current, &mut videos)?;
            }
            Event::End(_) => {
                if let Some(open) = current.as_mut()
                    && open.media_depth == Some(depth)
                {
                    open.media_depth = None;
                }
                if let Some(open) = current.take_if(|open| open.depth == depth) {
                    videos.push(open.node);
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(LibraryError::Malformed {
            reason: "missing root element",
        });
    }
    if depth != 0 || current.is_some() {
        return Err(LibraryError::Malformed {
            reason: "unclosed element",
        });
    }
    Ok(videos)
}

fn open_element(
    element: &BytesStart<'_>,
    depth: usize,
    self_closing: bool,
    current: &mut Option<OpenVideo>,
    videos: &mut Vec<VideoNode>,
) -> LibraryResult<()> {
    let name = element.local_name();
    let name = name.as_ref();

    if name.eq_ignore_ascii_case(b"video") {
        if current.is_some() {
            tracing::debug!("ignoring video element nested inside another video");
            return Ok(());
        }
        let node = read_video(element)?;
        if self_closing {
            videos.push(node);
        } else {
            *current = Some(OpenVideo {
                node,
                depth,
                media_seen: false,
                media_depth: None,
            });
        }
        return Ok(());
    }

    let Some(open) = current.as_mut() else {
        return Ok(());
    };

    if name.eq_ignore_ascii_case(b"media") {
        if !open.media_seen {
            open.media_seen = true;
            if !self_closing {
                open.media_depth = Some(depth);
            }
        }
    } else if name.eq_ignore_ascii_case(b"part")
        && open.media_depth.is_some()
        && open.node.file.is_none()
    {
        open.node.file = attribute(element, b"file")?;
    }
    Ok(())
}

fn read_video(element: &BytesStart<'_>) -> LibraryResult<VideoNode> {
    let mut node = VideoNode::default();
    for attr in element.attributes() {
        let attr = attr?;
        let key = attr.key.local_name();
        let key = key.as_ref();
        let slot = if key.eq_ignore_ascii_case(b"title") {
            &mut node.title
        } else if key.eq_ignore_ascii_case(b"userrating") {
            &mut node.user_rating
        } else if key.eq_ignore_ascii_case(b"ratingkey") {
            &mut node.rating_key
        } else {
            continue;
        };
        *slot = Some(attr.unescape_value()?.into_owned());
    }
    Ok(node)
}

fn attribute(element: &BytesStart<'_>, name: &[u8]) -> LibraryResult<Option<String>> {
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref().eq_ignore_ascii_case(name) {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<MediaContainer size="3" librarySectionID="1">
  <Video ratingKey="101" title="Old Show" userRating="2">
    <Media id="1">
      <Part id="11" file="/tv/Old Show/Pilot.mkv" />
      <Part id="12" file="/tv/Old Show/Pilot.part2.mkv" />
    </Media>
    <Media id="2">
      <Part id="21" file="/other/copy.mkv" />
    </Media>
  </Video>
  <Directory title="Not a video" />
  <Video ratingKey="102" title="Grey&apos;s Anatomy">
    <Media><Part file="/tv/Greys/ep.mkv"/></Media>
  </Video>
  <Video ratingKey="103" title="Bare" userRating="4" />
</MediaContainer>"#;

    #[test]
    fn parses_videos_in_document_order() -> LibraryResult<()> {
        let videos = parse_listing(LISTING)?;
        assert_eq!(videos.len(), 3);

        assert_eq!(videos[0].rating_key.as_deref(), Some("101"));
        assert_eq!(videos[0].title.as_deref(), Some("Old Show"));
        assert_eq!(videos[0].user_rating.as_deref(), Some("2"));
        assert_eq!(videos[0].file.as_deref(), Some("/tv/Old Show/Pilot.mkv"));

        assert_eq!(videos[1].title.as_deref(), Some("Grey's Anatomy"));
        assert_eq!(videos[1].user_rating, None);
        assert_eq!(videos[1].file.as_deref(), Some("/tv/Greys/ep.mkv"));

        assert_eq!(videos[2].title.as_deref(), Some("Bare"));
        assert_eq!(videos[2].file, None);
        Ok(())
    }

    #[test]
    fn matches_lowercase_names() -> LibraryResult<()> {
        let doc = r#"<mediacontainer><video title="x" userrating="2"><media><part file="/a/x.mkv"/></media></video></mediacontainer>"#;
        let videos = parse_listing(doc)?;
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].user_rating.as_deref(), Some("2"));
        assert_eq!(videos[0].file.as_deref(), Some("/a/x.mkv"));
        Ok(())
    }

    #[test]
    fn part_outside_media_is_ignored() -> LibraryResult<()> {
        let doc = r#"<MediaContainer><Video title="x"><Part file="/stray.mkv"/><Media/></Video></MediaContainer>"#;
        let videos = parse_listing(doc)?;
        assert_eq!(videos[0].file, None);
        Ok(())
    }

    #[test]
    fn empty_container_has_no_videos() -> LibraryResult<()> {
        assert!(parse_listing(r#"<MediaContainer size="0"/>"#)?.is_empty());
        Ok(())
    }

    #[test]
    fn mismatched_tags_are_rejected() {
        let doc = "<MediaContainer><Video title=\"x\"></MediaContainer>";
        assert!(parse_listing(doc).is_err());
    }

    #[test]
    fn unclosed_document_is_rejected() {
        let doc = "<MediaContainer><Video title=\"x\">";
        assert!(parse_listing(doc).is_err());
    }

    #[test]
    fn text_without_markup_is_rejected() {
        assert!(matches!(
            parse_listing("service unavailable"),
            Err(LibraryError::Malformed {
                reason: "missing root element"
            })
        ));
    }
}
