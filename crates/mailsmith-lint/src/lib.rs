#![forbid(unsafe_code)]

//! Content and accessibility lints for Mailsmith documents.
//!
//! The code generator never fails on semantically incomplete content —
//! a missing alt text or a button without a destination still renders.
//! Those problems surface here instead, as an ordered list of
//! [`LintIssue`]s produced by a separate pass the application runs
//! before export or test-send.
//!
//! Lints are advisory. Nothing here blocks generation, and the pass is
//! pure: same document in, same issues out, in document order.

use std::fmt;

use mailsmith_model::{Block, BlockKind, EmailDocument, HeadingLevel};

/// How serious an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Cosmetic or best-practice advice.
    Notice,
    /// Likely to hurt deliverability, accessibility, or rendering.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Notice => write!(f, "notice"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// Machine-readable category of a lint issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintKind {
    MissingAltText,
    MissingImageSource,
    EmptyButtonLabel,
    MissingButtonLink,
    MissingUnsubscribe,
    HeadingLevelSkip,
    MultipleH1,
    MissingPreheader,
    EmptyDocument,
}

/// One finding from the lint pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LintIssue {
    pub severity: Severity,
    pub kind: LintKind,
    /// The offending block, when the issue is block-scoped.
    pub block_id: Option<mailsmith_model::BlockId>,
    pub message: String,
}

impl LintIssue {
    fn on_block(severity: Severity, kind: LintKind, block: &Block, message: String) -> Self {
        Self {
            severity,
            kind,
            block_id: Some(block.id),
            message,
        }
    }

    fn on_document(severity: Severity, kind: LintKind, message: &str) -> Self {
        Self {
            severity,
            kind,
            block_id: None,
            message: message.into(),
        }
    }
}

/// Run every lint over the document. Issues come back in document
/// order, document-scoped issues first.
#[must_use]
pub fn lint_document(doc: &EmailDocument) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    if doc.blocks.is_empty() {
        issues.push(LintIssue::on_document(
            Severity::Notice,
            LintKind::EmptyDocument,
            "document has no content blocks",
        ));
    }
    if doc.settings.preheader.trim().is_empty() {
        issues.push(LintIssue::on_document(
            Severity::Notice,
            LintKind::MissingPreheader,
            "preheader is empty; inboxes will show the first body text instead",
        ));
    }

    let ordered = doc.blocks_in_order();
    let mut walker = Walker {
        issues: &mut issues,
        h1_count: 0,
        last_heading: None,
        saw_unsubscribe: false,
        saw_footer: false,
    };
    for block in &ordered {
        walker.visit(block);
    }

    if walker.saw_footer && !walker.saw_unsubscribe {
        issues.push(LintIssue::on_document(
            Severity::Warning,
            LintKind::MissingUnsubscribe,
            "footer has no unsubscribe link",
        ));
    }

    issues
}

struct Walker<'a> {
    issues: &'a mut Vec<LintIssue>,
    h1_count: u32,
    last_heading: Option<HeadingLevel>,
    saw_unsubscribe: bool,
    saw_footer: bool,
}

impl Walker<'_> {
    fn visit(&mut self, block: &Block) {
        match &block.kind {
            BlockKind::Heading(data) => self.check_heading(block, data.level),
            BlockKind::Image(data) => {
                if data.src.trim().is_empty() {
                    self.issues.push(LintIssue::on_block(
                        Severity::Warning,
                        LintKind::MissingImageSource,
                        block,
                        format!("image {} has no source", block.id),
                    ));
                }
                if data.alt.trim().is_empty() {
                    self.issues.push(LintIssue::on_block(
                        Severity::Warning,
                        LintKind::MissingAltText,
                        block,
                        format!("image {} has no alt text", block.id),
                    ));
                }
            }
            BlockKind::ImageGallery(data) => {
                for image in &data.images {
                    if image.alt.trim().is_empty() {
                        self.issues.push(LintIssue::on_block(
                            Severity::Warning,
                            LintKind::MissingAltText,
                            block,
                            format!("gallery {} has an image without alt text", block.id),
                        ));
                    }
                }
            }
            BlockKind::Button(data) => {
                if data.text.trim().is_empty() {
                    self.issues.push(LintIssue::on_block(
                        Severity::Warning,
                        LintKind::EmptyButtonLabel,
                        block,
                        format!("button {} has no label", block.id),
                    ));
                }
                if data.link_url.trim().is_empty() {
                    self.issues.push(LintIssue::on_block(
                        Severity::Warning,
                        LintKind::MissingButtonLink,
                        block,
                        format!("button {} has no destination", block.id),
                    ));
                }
            }
            BlockKind::Footer(data) => {
                self.saw_footer = true;
                if !data.unsubscribe_url.trim().is_empty() {
                    self.saw_unsubscribe = true;
                }
            }
            BlockKind::Layout(data) => {
                for child in &data.children {
                    self.visit(child);
                }
            }
            BlockKind::Text(_) | BlockKind::Spacer(_) | BlockKind::Divider(_) => {}
        }
    }

    fn check_heading(&mut self, block: &Block, level: HeadingLevel) {
        if level == HeadingLevel::H1 {
            self.h1_count += 1;
            if self.h1_count > 1 {
                self.issues.push(LintIssue::on_block(
                    Severity::Notice,
                    LintKind::MultipleH1,
                    block,
                    format!("heading {} is a second h1; screen readers expect one", block.id),
                ));
            }
        }

        // A jump like h1 → h3 skips a level in the outline.
        if let Some(previous) = self.last_heading {
            let previous: u8 = previous.into();
            let current: u8 = level.into();
            if current > previous + 1 {
                self.issues.push(LintIssue::on_block(
                    Severity::Notice,
                    LintKind::HeadingLevelSkip,
                    block,
                    format!(
                        "heading {} skips from h{previous} to h{current}",
                        block.id
                    ),
                ));
            }
        }
        self.last_heading = Some(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailsmith_model::{BlockFactory, ColumnCount, EmailDocument, tree};

    fn doc_with(blocks: Vec<Block>) -> EmailDocument {
        let mut doc = EmailDocument::new();
        doc.settings.preheader = "preview".into();
        doc.blocks = blocks;
        tree::renumber(&mut doc.blocks);
        doc
    }

    fn kinds(issues: &[LintIssue]) -> Vec<LintKind> {
        issues.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn empty_document_is_noticed() {
        let issues = lint_document(&EmailDocument::new());
        assert!(kinds(&issues).contains(&LintKind::EmptyDocument));
        assert!(kinds(&issues).contains(&LintKind::MissingPreheader));
    }

    #[test]
    fn clean_document_produces_no_issues() {
        let mut factory = BlockFactory::new();
        let mut image = factory.image();
        if let BlockKind::Image(data) = &mut image.kind {
            data.src = "https://cdn.example.com/x.png".into();
            data.alt = "A thing".into();
        }
        let mut button = factory.button();
        if let BlockKind::Button(data) = &mut button.kind {
            data.link_url = "https://example.com".into();
        }
        let mut footer = factory.footer();
        if let BlockKind::Footer(data) = &mut footer.kind {
            data.unsubscribe_url = "https://example.com/unsub".into();
        }

        let doc = doc_with(vec![
            factory.heading(mailsmith_model::HeadingLevel::H1),
            image,
            button,
            footer,
        ]);

        assert!(lint_document(&doc).is_empty());
    }

    #[test]
    fn missing_alt_text_is_flagged() {
        let mut factory = BlockFactory::new();
        let mut image = factory.image();
        if let BlockKind::Image(data) = &mut image.kind {
            data.src = "https://cdn.example.com/x.png".into();
        }
        let id = image.id;
        let doc = doc_with(vec![image]);

        let issues = lint_document(&doc);
        let issue = issues
            .iter()
            .find(|i| i.kind == LintKind::MissingAltText)
            .unwrap();
        assert_eq!(issue.severity, Severity::Warning);
        assert_eq!(issue.block_id, Some(id));
    }

    #[test]
    fn button_without_destination_is_flagged() {
        let mut factory = BlockFactory::new();
        let doc = doc_with(vec![factory.button()]);

        let issues = lint_document(&doc);
        assert!(kinds(&issues).contains(&LintKind::MissingButtonLink));
    }

    #[test]
    fn footer_without_unsubscribe_is_flagged() {
        let mut factory = BlockFactory::new();
        let doc = doc_with(vec![factory.footer()]);

        let issues = lint_document(&doc);
        assert!(kinds(&issues).contains(&LintKind::MissingUnsubscribe));
    }

    #[test]
    fn second_h1_is_noticed() {
        let mut factory = BlockFactory::new();
        let doc = doc_with(vec![
            factory.heading(mailsmith_model::HeadingLevel::H1),
            factory.heading(mailsmith_model::HeadingLevel::H1),
        ]);

        let issues = lint_document(&doc);
        assert_eq!(
            issues
                .iter()
                .filter(|i| i.kind == LintKind::MultipleH1)
                .count(),
            1
        );
    }

    #[test]
    fn heading_level_skip_is_noticed() {
        let mut factory = BlockFactory::new();
        let doc = doc_with(vec![
            factory.heading(mailsmith_model::HeadingLevel::H1),
            factory.heading(mailsmith_model::HeadingLevel::H3),
        ]);

        let issues = lint_document(&doc);
        assert!(kinds(&issues).contains(&LintKind::HeadingLevelSkip));
    }

    #[test]
    fn nested_children_are_linted() {
        let mut factory = BlockFactory::new();
        let mut layout = factory.layout(ColumnCount::Two);
        let image = factory.image(); // no src, no alt
        if let BlockKind::Layout(data) = &mut layout.kind {
            data.children.push(image);
        }
        let doc = doc_with(vec![layout]);

        let issues = lint_document(&doc);
        assert!(kinds(&issues).contains(&LintKind::MissingImageSource));
        assert!(kinds(&issues).contains(&LintKind::MissingAltText));
    }

    #[test]
    fn issues_follow_document_order() {
        let mut factory = BlockFactory::new();
        let button = factory.button(); // missing link
        let image = factory.image(); // missing src + alt
        let doc = doc_with(vec![button, image]);

        let issues = lint_document(&doc);
        let positions: Vec<LintKind> = kinds(&issues);
        let button_at = positions
            .iter()
            .position(|k| *k == LintKind::MissingButtonLink)
            .unwrap();
        let image_at = positions
            .iter()
            .position(|k| *k == LintKind::MissingImageSource)
            .unwrap();
        assert!(button_at < image_at);
    }
}
