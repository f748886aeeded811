/// Netscape bookmark-file export

use crate::bookmark::Bookmark;
use crate::error::ExportError;

pub const EXPORT_FILENAME: &str = "bookmarks.html";
pub const EXPORT_MIME: &str = "text/html";

const FOLDER_NAME: &str = "Tagscope AI";

/// Render bookmarks as a `NETSCAPE-Bookmark-file-1` document.
///
/// `add_date` is Unix seconds and is stamped on the folder and every row.
pub fn netscape_html(bookmarks: &[Bookmark], add_date: i64) -> Result<String, ExportError> {
    if bookmarks.is_empty() {
        return Err(ExportError::Empty);
    }

    let rows: Vec<String> = bookmarks
        .iter()
        .map(|bm| {
            format!(
                "    <DT><A HREF=\"{}\" ADD_DATE=\"{}\">{}</A>",
                escape(&bm.link),
                add_date,
                escape(bm.title())
            )
        })
        .collect();

    Ok(format!(
        "<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
     It will be read and overwritten.
     DO NOT EDIT! -->
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
<DL><p>
  <DT><H3 ADD_DATE=\"{add_date}\" LAST_MODIFIED=\"0\">{FOLDER_NAME}</H3>
  <DL><p>
{rows}
  </DL><p>
</DL><p>",
        rows = rows.join("\n")
    ))
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(netscape_html(&[], 0), Err(ExportError::Empty));
    }

    #[test]
    fn test_document_shape() {
        let bookmarks = vec![
            Bookmark::new("https://www.rust-lang.org", "Rust"),
            Bookmark::new("https://yew.rs", ""),
        ];

        let html = netscape_html(&bookmarks, 1_700_000_000).unwrap();

        assert!(html.starts_with("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n"));
        assert!(html.contains("<TITLE>Bookmarks</TITLE>"));
        assert!(html.contains("<H3 ADD_DATE=\"1700000000\" LAST_MODIFIED=\"0\">Tagscope AI</H3>"));
        assert!(html.contains(
            "    <DT><A HREF=\"https://www.rust-lang.org\" ADD_DATE=\"1700000000\">Rust</A>\n"
        ));
        assert!(html.contains("<A HREF=\"https://yew.rs\" ADD_DATE=\"1700000000\">https://yew.rs</A>"));
        assert_eq!(html.matches("<DT><A ").count(), 2);
        assert!(html.ends_with("</DL><p>"));
    }

    #[test]
    fn test_escaping() {
        let bookmarks = vec![Bookmark::new("https://a.com/?q=\"x\"&y=1", "<b>Tips & tricks</b>")];

        let html = netscape_html(&bookmarks, 5).unwrap();

        assert!(html.contains("HREF=\"https://a.com/?q=&quot;x&quot;&amp;y=1\""));
        assert!(html.contains(">&lt;b&gt;Tips &amp; tricks&lt;/b&gt;</A>"));
    }
}
