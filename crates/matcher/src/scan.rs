//! Single-pass field scanner over raw `PATDOC` markup.
//!
//! The scanner never builds a tree. It walks the tags once, keeps a stack of
//! open element names, and records the character data of every element whose
//! open-element stack equals one of the requested target paths.
//!
//! Markup rules, kept to what legacy SGML exports actually contain:
//!
//! - `<NAME ...>` opens, `</NAME>` closes, `<NAME/>` is empty and ignored.
//! - `<!-- ... -->`, `<!...>` and `<?...?>` are skipped.
//! - `<![CDATA[ ... ]]>` contributes its contents as text, verbatim.
//! - Quoted attribute values may contain `>`.
//! - An end tag closes the nearest open element with that name, along with
//!   anything still open inside it (SGML end-tag omission). End tags with no
//!   open counterpart are ignored.
//! - Names are case-sensitive; text is taken verbatim, entities included.
//! - Elements open at end of input are closed there.
//! - Only the first element at a target path under any one parent is
//!   captured, so a field with two `PDAT` children yields the first.

use pathquery::ElementPath;

/// Field values gathered from one document, indexed like the scan targets.
///
/// A target holds one value per parent element that contained it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: Vec<Vec<String>>,
}

impl FieldValues {
    /// Values found for target `index`, in document order. Unknown indexes
    /// have no values.
    pub fn get(&self, index: usize) -> &[String] {
        self.values.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Vec::is_empty)
    }
}

#[derive(Debug)]
enum Tag<'a> {
    Start(&'a str),
    End(&'a str),
    Text(&'a str),
    Skip,
}

#[derive(Debug)]
struct Capture {
    target: usize,
    depth: usize,
    text: String,
}

/// Collect the text of every element located at one of `targets`.
pub fn scan_fields(document: &str, targets: &[ElementPath]) -> FieldValues {
    let mut values = vec![Vec::new(); targets.len()];
    if targets.is_empty() {
        return FieldValues { values };
    }

    let mut stack: Vec<&str> = Vec::new();
    // Instance id of each open element, parallel to `stack`.
    let mut ids: Vec<usize> = Vec::new();
    let mut next_id = 0usize;
    // Parent instance that already supplied a value, per target.
    let mut captured_under: Vec<Option<usize>> = vec![None; targets.len()];
    let mut open: Vec<Capture> = Vec::new();
    let mut rest = document;

    while !rest.is_empty() {
        let Some(lt) = rest.find('<') else {
            append_text(&mut open, rest);
            break;
        };
        append_text(&mut open, &rest[..lt]);
        rest = &rest[lt..];

        let Some((tag, consumed)) = next_tag(rest) else {
            // Unterminated tag: the remainder is plain text.
            append_text(&mut open, rest);
            break;
        };
        rest = &rest[consumed..];

        match tag {
            Tag::Start(name) => {
                next_id += 1;
                stack.push(name);
                ids.push(next_id);
                let parent = ids.len().checked_sub(2).map(|i| ids[i]);
                for (target, path) in targets.iter().enumerate() {
                    if !path.matches_stack(stack.as_slice()) {
                        continue;
                    }
                    if parent.is_none() || captured_under[target] != parent {
                        captured_under[target] = parent;
                        open.push(Capture {
                            target,
                            depth: stack.len(),
                            text: String::new(),
                        });
                    }
                }
            }
            Tag::End(name) => {
                if let Some(pos) = stack.iter().rposition(|element| *element == name) {
                    stack.truncate(pos);
                    ids.truncate(pos);
                    close_captures(&mut open, &mut values, stack.len());
                }
            }
            Tag::Text(text) => append_text(&mut open, text),
            Tag::Skip => {}
        }
    }

    close_captures(&mut open, &mut values, 0);
    FieldValues { values }
}

fn append_text(open: &mut [Capture], text: &str) {
    if text.is_empty() {
        return;
    }
    for capture in open.iter_mut() {
        capture.text.push_str(text);
    }
}

/// Finish every capture opened deeper than `depth`. Captures are ordered by
/// depth, so they form a suffix of `open`.
fn close_captures(open: &mut Vec<Capture>, values: &mut [Vec<String>], depth: usize) {
    let keep = open.iter().take_while(|c| c.depth <= depth).count();
    for capture in open.drain(keep..) {
        values[capture.target].push(capture.text);
    }
}

/// Parse the tag at the start of `input` (which begins with `<`). Returns the
/// tag and the number of bytes it spans, or `None` if it never terminates.
fn next_tag(input: &str) -> Option<(Tag<'_>, usize)> {
    let body = &input[1..];

    if let Some(cdata) = body.strip_prefix("![CDATA[") {
        let end = cdata.find("]]>")?;
        return Some((Tag::Text(&cdata[..end]), 1 + 8 + end + 3));
    }
    if let Some(comment) = body.strip_prefix("!--") {
        let end = comment.find("-->")?;
        return Some((Tag::Skip, 1 + 3 + end + 3));
    }
    if body.starts_with('!') || body.starts_with('?') {
        let end = body.find('>')?;
        return Some((Tag::Skip, 1 + end + 1));
    }

    let close = find_tag_end(body)?;
    let inner = &body[..close];
    let consumed = 1 + close + 1;

    if let Some(name) = inner.strip_prefix('/') {
        let name = name.split_whitespace().next().unwrap_or("");
        if name.is_empty() {
            return Some((Tag::Skip, consumed));
        }
        return Some((Tag::End(name), consumed));
    }

    let name_end = inner
        .find(|c: char| c.is_whitespace() || c == '/')
        .unwrap_or(inner.len());
    let name = &inner[..name_end];
    if name.is_empty() || inner.ends_with('/') {
        return Some((Tag::Skip, consumed));
    }
    Some((Tag::Start(name), consumed))
}

/// Index of the `>` closing a tag body, skipping quoted attribute values.
fn find_tag_end(body: &str) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, b) in body.bytes().enumerate() {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(i),
            None => {}
        }
    }
    None
}
