use chrono::NaiveDateTime;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::date::format_export_time;

pub const ROOT_ELEMENT: &str = "Books";
pub const EXPORT_TIME_ELEMENT: &str = "ExportTime";
pub const BOOK_ELEMENT: &str = "Book";

/// Renders the export envelope:
///
/// ```text
/// <Books>
///   <ExportTime>yyyy-MM-dd HH:mm:ss</ExportTime>
///   <Book>Title, Author, Description, RubricId, ImageId, Price, IsBusy</Book>
///   ...
/// </Books>
/// ```
///
/// Every book is checked before anything is written, and the document is built in memory, so
/// a failure never leaves a partial document behind.
pub fn render(books: &[BookDto], exported_at: NaiveDateTime) -> LibraryResult<String> {
    for book in books {
        check_exportable(book)?;
    }

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new(ROOT_ELEMENT)))?;
    write_text_element(&mut writer, EXPORT_TIME_ELEMENT, format_export_time(exported_at).as_str())?;
    for book in books {
        write_book(&mut writer, book)?;
    }
    writer.write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_book(writer: &mut Writer<Vec<u8>>, book: &BookDto) -> LibraryResult<()> {
    writer.write_event(Event::Start(BytesStart::new(BOOK_ELEMENT)))?;
    write_text_element(writer, "Title", book.name.as_str())?;
    write_text_element(writer, "Author", book.author.as_deref().unwrap_or(""))?;
    write_text_element(writer, "Description", book.description.as_deref().unwrap_or(""))?;
    write_text_element(writer, "RubricId", book.rubric_id.to_string().as_str())?;
    write_text_element(writer, "ImageId", book.image_id.to_string().as_str())?;
    write_text_element(writer, "Price", book.price.to_string().as_str())?;
    write_text_element(writer, "IsBusy", if book.is_busy { "true" } else { "false" })?;
    writer.write_event(Event::End(BytesEnd::new(BOOK_ELEMENT)))?;
    Ok(())
}

// An empty text event keeps `<Author></Author>` on one line instead of indenting a closing tag
// into the element's content.
fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> LibraryResult<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn check_exportable(book: &BookDto) -> LibraryResult<()> {
    let id = book.book_id.map(|id| id.to_string()).unwrap_or_else(|| "<unsaved>".to_string());
    if book.name.trim().is_empty() {
        return Err(LibraryError::serialization(
            format!("book {} has no title", id).as_str()));
    }
    if !book.price.is_finite() || book.price < 0.0 {
        return Err(LibraryError::serialization(
            format!("book {} has price {} that cannot be exported", id, book.price).as_str()));
    }
    let texts = [
        ("Title", Some(book.name.as_str())),
        ("Author", book.author.as_deref()),
        ("Description", book.description.as_deref()),
    ];
    for (field, text) in texts {
        if let Some(bad) = text.and_then(|t| t.chars().find(|c| !is_xml_char(*c))) {
            return Err(LibraryError::serialization(
                format!("book {} {} contains character {:?} not allowed in xml", id, field, bad).as_str()));
        }
    }
    Ok(())
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

#[cfg(test)]
pub(crate) mod tests {
    use quick_xml::events::Event;
    use quick_xml::Reader;
    use crate::books::dto::BookDto;
    use crate::catalog::domain::exporter::render;
    use crate::core::library::LibraryError;
    use crate::utils::date::tests::fixed_time;

    // Element is a minimal parsed xml tree used to compare documents structurally
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct Element {
        pub name: String,
        pub text: String,
        pub children: Vec<Element>,
    }

    impl Element {
        pub(crate) fn leaf(name: &str, text: &str) -> Self {
            Self { name: name.to_string(), text: text.to_string(), children: vec![] }
        }

        pub(crate) fn node(name: &str, children: Vec<Element>) -> Self {
            Self { name: name.to_string(), text: String::new(), children }
        }

        pub(crate) fn children_named(&self, name: &str) -> Vec<&Element> {
            self.children.iter().filter(|c| c.name == name).collect()
        }

        pub(crate) fn child_text(&self, name: &str) -> Option<&str> {
            self.children.iter().find(|c| c.name == name).map(|c| c.text.as_str())
        }
    }

    pub(crate) fn parse(xml: &str) -> Element {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);
        let mut stack: Vec<Element> = vec![];
        let mut root = None;
        loop {
            match reader.read_event().expect("should read xml") {
                Event::Start(e) => {
                    let name = String::from_utf8(e.name().as_ref().to_vec()).expect("utf8 name");
                    stack.push(Element::node(name.as_str(), vec![]));
                }
                Event::Empty(e) => {
                    let name = String::from_utf8(e.name().as_ref().to_vec()).expect("utf8 name");
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(Element::leaf(name.as_str(), ""));
                    }
                }
                Event::Text(t) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(t.unescape().expect("should unescape").as_ref());
                    }
                }
                Event::End(_) => {
                    let done = stack.pop().expect("balanced xml");
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(done),
                        None => root = Some(done),
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }
        root.expect("should have root element")
    }

    pub(crate) fn expected_book(book: &BookDto) -> Element {
        Element::node("Book", vec![
            Element::leaf("Title", book.name.as_str()),
            Element::leaf("Author", book.author.as_deref().unwrap_or("")),
            Element::leaf("Description", book.description.as_deref().unwrap_or("")),
            Element::leaf("RubricId", book.rubric_id.to_string().as_str()),
            Element::leaf("ImageId", book.image_id.to_string().as_str()),
            Element::leaf("Price", book.price.to_string().as_str()),
            Element::leaf("IsBusy", if book.is_busy { "true" } else { "false" }),
        ])
    }

    #[tokio::test]
    async fn test_should_render_empty_envelope() {
        let xml = render(&[], fixed_time()).expect("should render");
        assert!(xml.contains("<Books>"));
        assert!(xml.contains("<ExportTime>2023-03-07 09:05:41</ExportTime>"));
        assert!(!xml.contains("<Book>"));

        let doc = parse(xml.as_str());
        assert_eq!(Element::node("Books", vec![Element::leaf("ExportTime", "2023-03-07 09:05:41")]), doc);
    }

    #[tokio::test]
    async fn test_should_render_books_in_given_order() {
        let first = BookDto::new("Война и мир", 4, 12).with_author("Лев Толстой").with_price(350.5);
        let second = BookDto::new("Second", 1, 3).with_busy(true);
        let xml = render(&[first.clone(), second.clone()], fixed_time()).expect("should render");

        let expected = Element::node("Books", vec![
            Element::leaf("ExportTime", "2023-03-07 09:05:41"),
            expected_book(&first),
            expected_book(&second),
        ]);
        assert_eq!(expected, parse(xml.as_str()));
    }

    #[tokio::test]
    async fn test_should_render_missing_optionals_as_empty_elements() {
        let xml = render(&[BookDto::new("Bare", 1, 2)], fixed_time()).expect("should render");
        assert!(xml.contains("<Author></Author>"));
        assert!(xml.contains("<Description></Description>"));
        assert!(xml.contains("<Price>0</Price>"));
        assert!(xml.contains("<IsBusy>false</IsBusy>"));
    }

    #[tokio::test]
    async fn test_should_keep_fixed_child_order() {
        let xml = render(&[BookDto::new("Ordered", 1, 2)], fixed_time()).expect("should render");
        let doc = parse(xml.as_str());
        let book = doc.children_named("Book")[0];
        let names: Vec<&str> = book.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(vec!["Title", "Author", "Description", "RubricId", "ImageId", "Price", "IsBusy"], names);
    }

    #[tokio::test]
    async fn test_should_escape_markup_in_text() {
        let book = BookDto::new("Tom & Jerry <3", 1, 2).with_description("\"quoted\"");
        let xml = render(&[book], fixed_time()).expect("should render");
        let doc = parse(xml.as_str());
        let rendered = doc.children_named("Book")[0];
        assert_eq!(Some("Tom & Jerry <3"), rendered.child_text("Title"));
        assert_eq!(Some("\"quoted\""), rendered.child_text("Description"));
    }

    #[tokio::test]
    async fn test_should_render_identically_for_same_input() {
        let books = vec![BookDto::new("a", 1, 1), BookDto::new("b", 2, 2)];
        let first = render(&books, fixed_time()).expect("should render");
        let second = render(&books, fixed_time()).expect("should render");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_should_fail_on_missing_title() {
        let res = render(&[BookDto::new("ok", 1, 1), BookDto::new("  ", 1, 1)], fixed_time());
        assert!(matches!(res, Err(LibraryError::Serialization { .. })));
    }

    #[tokio::test]
    async fn test_should_fail_on_unrenderable_price() {
        let res = render(&[BookDto::new("nan", 1, 1).with_price(f64::NAN)], fixed_time());
        assert!(matches!(res, Err(LibraryError::Serialization { .. })));
        let res = render(&[BookDto::new("negative", 1, 1).with_price(-1.0)], fixed_time());
        assert!(matches!(res, Err(LibraryError::Serialization { .. })));
    }

    #[tokio::test]
    async fn test_should_fail_on_control_characters() {
        let res = render(&[BookDto::new("bell\u{7}", 1, 1)], fixed_time());
        assert!(matches!(res, Err(LibraryError::Serialization { .. })));
    }
}
