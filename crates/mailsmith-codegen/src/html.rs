#![forbid(unsafe_code)]

//! Block tree → email-client-safe HTML.
//!
//! The generator walks the top-level blocks in `order`, dispatches on
//! kind, and emits one self-contained table fragment per block. Layout
//! blocks recurse into their children with the column widths from
//! [`crate::columns`]. The whole thing is a pure function of the
//! document: no clock, no randomness, no I/O.
//!
//! # Dual rendering paths
//!
//! Image and button blocks rely on CSS the legacy mail client does not
//! support (percentage max-widths, border-radius, inline-block
//! centering). With the legacy fallback enabled they emit two parallel
//! branches delimited by conditional comments:
//!
//! ```text
//! <!--[if mso]>      plain <img> / VML roundrect       <![endif]-->
//! <!--[if !mso]><!-- pixel-accurate modern markup  --><!--<![endif]-->
//! ```
//!
//! Both branches carry the same semantic content — same src, alt and
//! link target — only presentation differs.
//!
//! # Sanitization
//!
//! Every user-supplied string is routed through `crate::sanitize`
//! before interpolation. Invalid values are omitted, never guessed at,
//! and generation itself never fails.

use std::fmt::Write as _;

use mailsmith_model::{
    Block, BlockKind, BlockStyles, ButtonData, ColumnRatio, DividerData, DocumentSettings,
    EmailDocument, FooterData, GalleryData, HeadingData, ImageData, LayoutData, SpacerData,
    TextData, Typography,
};

use crate::columns::{COLUMN_GAP, column_widths};
use crate::sanitize::{
    escape_html, escape_html_into, sanitize_color, sanitize_font_stack, sanitize_length,
    sanitize_rich_text, sanitize_url,
};

/// Fixed button height used by the VML fallback, in pixels.
const BUTTON_HEIGHT: u16 = 44;

/// Fixed VML button width, in pixels.
const BUTTON_WIDTH: u16 = 220;

/// Generate the complete HTML document for `doc`.
///
/// Convenience wrapper over [`HtmlGenerator`].
#[must_use]
pub fn generate(doc: &EmailDocument, include_legacy_fallback: bool) -> String {
    HtmlGenerator::new()
        .include_legacy_fallback(include_legacy_fallback)
        .generate(doc)
}

/// Configurable HTML generator.
#[derive(Debug, Clone)]
pub struct HtmlGenerator {
    include_legacy_fallback: bool,
}

impl Default for HtmlGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlGenerator {
    /// A generator with the legacy fallback enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            include_legacy_fallback: true,
        }
    }

    /// Toggle the legacy-client markup branches.
    #[must_use]
    pub fn include_legacy_fallback(mut self, on: bool) -> Self {
        self.include_legacy_fallback = on;
        self
    }

    /// Render the whole document.
    #[must_use]
    pub fn generate(&self, doc: &EmailDocument) -> String {
        let mut out = String::with_capacity(8 * 1024);
        self.write_head(&mut out, &doc.settings);
        self.write_body(&mut out, doc);
        out.push_str("</html>");
        out
    }

    // ====================================================================
    // Document chrome
    // ====================================================================

    fn write_head(&self, out: &mut String, settings: &DocumentSettings) {
        out.push_str("<!DOCTYPE html>\n");
        if self.include_legacy_fallback {
            out.push_str(
                "<html lang=\"en\" xmlns=\"http://www.w3.org/1999/xhtml\" \
                 xmlns:v=\"urn:schemas-microsoft-com:vml\" \
                 xmlns:o=\"urn:schemas-microsoft-com:office:office\">\n",
            );
        } else {
            out.push_str("<html lang=\"en\" xmlns=\"http://www.w3.org/1999/xhtml\">\n");
        }
        out.push_str("<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        out.push_str("<meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\">\n");
        out.push_str("<title></title>\n");

        if self.include_legacy_fallback {
            out.push_str(
                "<!--[if mso]><xml><o:OfficeDocumentSettings>\
                 <o:PixelsPerInch>96</o:PixelsPerInch>\
                 </o:OfficeDocumentSettings></xml><![endif]-->\n",
            );
        }

        // Fixed legacy compatibility resets.
        out.push_str("<style>\n");
        out.push_str(
            "body,table,td,a{-webkit-text-size-adjust:100%;-ms-text-size-adjust:100%;}\n",
        );
        out.push_str("table,td{mso-table-lspace:0pt;mso-table-rspace:0pt;}\n");
        out.push_str(
            "img{-ms-interpolation-mode:bicubic;border:0;height:auto;line-height:100%;\
             outline:none;text-decoration:none;}\n",
        );
        out.push_str("table{border-collapse:collapse!important;}\n");
        out.push_str("body{margin:0!important;padding:0!important;width:100%!important;}\n");
        out.push_str("</style>\n");

        // Mobile stylesheet keyed to the content width.
        write!(
            out,
            "<style>@media (max-width:{}px){{\n\
             .stack-column{{display:block!important;width:100%!important;\
             max-width:100%!important;}}\n\
             .mobile-full{{width:100%!important;max-width:100%!important;}}\n\
             }}</style>\n",
            settings.content_width
        )
        .unwrap();
        out.push_str("</head>\n");
    }

    fn write_body(&self, out: &mut String, doc: &EmailDocument) {
        let settings = &doc.settings;
        let canvas = sanitize_color(&settings.background_color)
            .unwrap_or_else(|| "#ffffff".into());
        let width = settings.content_width;

        write!(
            out,
            "<body style=\"margin:0;padding:0;background-color:{canvas};\">\n"
        )
        .unwrap();

        // Hidden preheader shown by inbox list views, never on screen.
        out.push_str(
            "<div style=\"display:none;font-size:1px;color:transparent;line-height:1px;\
             max-height:0;max-width:0;opacity:0;overflow:hidden;\">",
        );
        escape_html_into(out, &settings.preheader);
        out.push_str("</div>\n");

        write!(
            out,
            "<center role=\"article\" aria-roledescription=\"email\" \
             style=\"width:100%;background-color:{canvas};\">\n"
        )
        .unwrap();

        // The legacy client ignores max-width; the ghost table pins the
        // content column to the fixed width instead.
        if self.include_legacy_fallback {
            write!(
                out,
                "<!--[if mso]><table role=\"presentation\" border=\"0\" cellpadding=\"0\" \
                 cellspacing=\"0\" width=\"{width}\" align=\"center\"><tr><td><![endif]-->\n"
            )
            .unwrap();
        }

        write!(
            out,
            "<table role=\"presentation\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\" \
             align=\"center\" width=\"100%\" \
             style=\"max-width:{width}px;margin:0 auto;background-color:#ffffff;\">\n"
        )
        .unwrap();

        for block in doc.blocks_in_order() {
            self.render_block_row(out, block, settings, width);
        }

        out.push_str("</table>\n");
        if self.include_legacy_fallback {
            out.push_str("<!--[if mso]></td></tr></table><![endif]-->\n");
        }
        out.push_str("</center>\n</body>\n");
    }

    // ====================================================================
    // Block dispatch
    // ====================================================================

    /// Render one top-level block as a row of the content table.
    fn render_block_row(
        &self,
        out: &mut String,
        block: &Block,
        settings: &DocumentSettings,
        width: u16,
    ) {
        out.push_str("<tr><td");
        self.write_wrapper_style(out, &block.styles);
        out.push('>');
        let inner = inner_width(width, &block.styles);
        self.render_content(out, block, settings, inner);
        out.push_str("</td></tr>\n");
    }

    /// Render a layout child inside its column cell.
    fn render_child(
        &self,
        out: &mut String,
        block: &Block,
        settings: &DocumentSettings,
        width: u16,
    ) {
        out.push_str(
            "<table role=\"presentation\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\" \
             width=\"100%\"><tr><td",
        );
        self.write_wrapper_style(out, &block.styles);
        out.push('>');
        let inner = inner_width(width, &block.styles);
        self.render_content(out, block, settings, inner);
        out.push_str("</td></tr></table>");
    }

    /// Shared wrapper: padding, background and alignment from the
    /// block's [`BlockStyles`].
    fn write_wrapper_style(&self, out: &mut String, styles: &BlockStyles) {
        out.push_str(" style=\"");
        write!(out, "padding:{};", styles.padding.as_css()).unwrap();
        if let Some(color) = styles.background_color.as_deref().and_then(sanitize_color) {
            write!(out, "background-color:{color};").unwrap();
        }
        write!(out, "text-align:{};", styles.text_align.as_css()).unwrap();
        out.push('"');
    }

    fn render_content(
        &self,
        out: &mut String,
        block: &Block,
        settings: &DocumentSettings,
        width: u16,
    ) {
        match &block.kind {
            BlockKind::Heading(data) => self.render_heading(out, data, settings),
            BlockKind::Text(data) => self.render_text(out, data, settings),
            BlockKind::Image(data) => self.render_image(out, data, width),
            BlockKind::ImageGallery(data) => self.render_gallery(out, data, width),
            BlockKind::Button(data) => self.render_button(out, data, settings),
            BlockKind::Spacer(data) => self.render_spacer(out, data),
            BlockKind::Divider(data) => self.render_divider(out, data),
            BlockKind::Layout(data) => self.render_layout(out, data, settings, width),
            BlockKind::Footer(data) => self.render_footer(out, data, settings),
        }
    }

    // ====================================================================
    // Leaf renderers
    // ====================================================================

    fn render_heading(&self, out: &mut String, data: &HeadingData, settings: &DocumentSettings) {
        let preset = &settings.heading_typography;
        let family = resolve_font(&data.font_family, preset);
        // The preset is user-configurable too; it gets no free pass.
        let size = data
            .font_size
            .as_deref()
            .and_then(sanitize_length)
            .or_else(|| sanitize_length(&preset.font_size))
            .unwrap_or_else(|| "28px".into());
        let color = data
            .color
            .as_deref()
            .and_then(sanitize_color)
            .or_else(|| sanitize_color(&preset.color))
            .unwrap_or_else(|| "#1a1a1a".into());

        write!(
            out,
            "<{tag} style=\"margin:0;font-family:{family};font-size:{size};\
             line-height:1.3;color:{color};\">",
            tag = data.level.tag()
        )
        .unwrap();
        out.push_str(&sanitize_rich_text(&data.text));
        write!(out, "</{}>", data.level.tag()).unwrap();
    }

    fn render_text(&self, out: &mut String, data: &TextData, settings: &DocumentSettings) {
        let preset = &settings.body_typography;
        let family = resolve_font(&data.font_family, preset);
        let size = data
            .font_size
            .as_deref()
            .and_then(sanitize_length)
            .or_else(|| sanitize_length(&preset.font_size))
            .unwrap_or_else(|| "16px".into());
        let color = data
            .color
            .as_deref()
            .and_then(sanitize_color)
            .or_else(|| sanitize_color(&preset.color))
            .unwrap_or_else(|| "#333333".into());
        let line_height = data
            .line_height
            .as_deref()
            .and_then(sanitize_length)
            .unwrap_or_else(|| "1.5".into());

        write!(
            out,
            "<div style=\"font-family:{family};font-size:{size};\
             line-height:{line_height};color:{color};\">"
        )
        .unwrap();
        out.push_str(&sanitize_rich_text(&data.html));
        out.push_str("</div>");
    }

    fn render_image(&self, out: &mut String, data: &ImageData, width: u16) {
        let src = sanitize_url(&data.src);
        let alt = escape_html(&data.alt);
        let link = data.link_url.as_deref().map(sanitize_url);
        let max_width = data
            .width
            .as_deref()
            .and_then(sanitize_length)
            .unwrap_or_else(|| format!("{width}px"));
        let radius = data.border_radius.as_deref().and_then(sanitize_length);

        // Legacy branch: fixed pixel width, no radius, no max-width.
        // The stretched rendering is an accepted imperfection.
        if self.include_legacy_fallback {
            out.push_str("<!--[if mso]>");
            open_link(out, &link);
            write!(
                out,
                "<img src=\"{}\" alt=\"{alt}\" width=\"{width}\" \
                 style=\"display:block;width:{width}px;\">",
                escape_html(&src)
            )
            .unwrap();
            close_link(out, &link);
            out.push_str("<![endif]-->");
            out.push_str("<!--[if !mso]><!-->");
        }

        open_link(out, &link);
        write!(
            out,
            "<img src=\"{}\" alt=\"{alt}\" width=\"{width}\" class=\"mobile-full\" \
             style=\"width:100%;max-width:{max_width};height:auto;display:block;",
            escape_html(&src)
        )
        .unwrap();
        if let Some(radius) = &radius {
            write!(out, "border-radius:{radius};").unwrap();
        }
        out.push_str("\">");
        close_link(out, &link);

        if self.include_legacy_fallback {
            out.push_str("<!--<![endif]-->");
        }
    }

    fn render_gallery(&self, out: &mut String, data: &GalleryData, width: u16) {
        if data.images.is_empty() {
            return;
        }
        let widths = column_widths(
            width,
            COLUMN_GAP,
            mailsmith_model::ColumnCount::Two,
            ColumnRatio::Even,
        );

        for row in data.images.chunks(2) {
            out.push_str(
                "<table role=\"presentation\" border=\"0\" cellpadding=\"0\" \
                 cellspacing=\"0\" width=\"100%\"><tr>",
            );
            for (index, image) in row.iter().enumerate() {
                let col = widths[index];
                write!(
                    out,
                    "<td class=\"stack-column\" width=\"{cell}\" valign=\"top\" \
                     style=\"width:{cell}px;{pad}\">",
                    cell = col.cell,
                    pad = if index == 0 && row.len() == 2 {
                        format!("padding-right:{COLUMN_GAP}px;")
                    } else {
                        String::new()
                    }
                )
                .unwrap();

                let link = image.link_url.as_deref().map(sanitize_url);
                open_link(out, &link);
                write!(
                    out,
                    "<img src=\"{}\" alt=\"{}\" width=\"{}\" \
                     style=\"width:100%;height:auto;display:block;\">",
                    escape_html(&sanitize_url(&image.src)),
                    escape_html(&image.alt),
                    col.content
                )
                .unwrap();
                close_link(out, &link);
                out.push_str("</td>");
            }
            if row.len() == 1 {
                write!(
                    out,
                    "<td class=\"stack-column\" width=\"{0}\" \
                     style=\"width:{0}px;\">&nbsp;</td>",
                    widths[1].cell
                )
                .unwrap();
            }
            out.push_str("</tr></table>");
        }
    }

    fn render_button(&self, out: &mut String, data: &ButtonData, settings: &DocumentSettings) {
        let url = sanitize_url(&data.link_url);
        let href = escape_html(&url);
        let label = escape_html(&data.text);
        let background = data
            .background_color
            .as_deref()
            .and_then(sanitize_color)
            .unwrap_or_else(|| "#2563eb".into());
        let color = data
            .text_color
            .as_deref()
            .and_then(sanitize_color)
            .unwrap_or_else(|| "#ffffff".into());
        let family = resolve_font(&None, &settings.body_typography);
        let radius = data.border_radius.as_deref().and_then(sanitize_length);

        // Legacy branch: VML roundrect, since the legacy client ignores
        // border-radius and padding on anchors.
        if self.include_legacy_fallback {
            let arcsize = if radius.is_some() { "10%" } else { "0%" };
            out.push_str("<!--[if mso]>");
            write!(
                out,
                "<v:roundrect xmlns:v=\"urn:schemas-microsoft-com:vml\" \
                 xmlns:w=\"urn:schemas-microsoft-com:office:word\" href=\"{href}\" \
                 style=\"height:{BUTTON_HEIGHT}px;v-text-anchor:middle;width:{BUTTON_WIDTH}px;\" \
                 arcsize=\"{arcsize}\" fillcolor=\"{background}\" stroke=\"f\">\
                 <w:anchorlock/>\
                 <center style=\"color:{color};font-family:{family};font-size:16px;\
                 font-weight:bold;\">{label}</center>\
                 </v:roundrect>"
            )
            .unwrap();
            out.push_str("<![endif]-->");
            out.push_str("<!--[if !mso]><!-->");
        }

        let display = if data.full_width {
            "display:block;text-align:center;"
        } else {
            "display:inline-block;"
        };
        write!(
            out,
            "<a href=\"{href}\" target=\"_blank\" \
             style=\"{display}background-color:{background};color:{color};\
             font-family:{family};font-size:16px;font-weight:bold;\
             text-decoration:none;padding:12px 32px;"
        )
        .unwrap();
        if let Some(radius) = &radius {
            write!(out, "border-radius:{radius};").unwrap();
        }
        write!(out, "\">{label}</a>").unwrap();

        if self.include_legacy_fallback {
            out.push_str("<!--<![endif]-->");
        }
    }

    fn render_spacer(&self, out: &mut String, data: &SpacerData) {
        write!(
            out,
            "<div style=\"height:{0}px;line-height:{0}px;font-size:1px;\">&nbsp;</div>",
            data.height
        )
        .unwrap();
    }

    fn render_divider(&self, out: &mut String, data: &DividerData) {
        let color = data
            .color
            .as_deref()
            .and_then(sanitize_color)
            .unwrap_or_else(|| "#dddddd".into());
        write!(
            out,
            "<table role=\"presentation\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\" \
             width=\"100%\"><tr><td style=\"border-top:{}px {} {color};\
             font-size:1px;line-height:1px;\">&nbsp;</td></tr></table>",
            data.thickness,
            data.style.as_css()
        )
        .unwrap();
    }

    fn render_layout(
        &self,
        out: &mut String,
        data: &LayoutData,
        settings: &DocumentSettings,
        width: u16,
    ) {
        let widths = column_widths(width, COLUMN_GAP, data.columns, data.column_ratio);

        out.push_str(
            "<table role=\"presentation\" border=\"0\" cellpadding=\"0\" cellspacing=\"0\" \
             width=\"100%\"><tr>",
        );
        for (index, col) in widths.iter().enumerate() {
            let last = index == widths.len() - 1;
            write!(
                out,
                "<td class=\"stack-column\" width=\"{cell}\" valign=\"top\" \
                 style=\"width:{cell}px;{pad}\">",
                cell = col.cell,
                pad = if last {
                    String::new()
                } else {
                    format!("padding-right:{COLUMN_GAP}px;")
                }
            )
            .unwrap();
            match data.children.get(index) {
                Some(child) => self.render_child(out, child, settings, col.content),
                None => out.push_str("&nbsp;"),
            }
            out.push_str("</td>");
        }
        out.push_str("</tr></table>");
    }

    fn render_footer(&self, out: &mut String, data: &FooterData, settings: &DocumentSettings) {
        let family = resolve_font(&None, &settings.body_typography);

        if !data.company_name.is_empty() {
            write!(
                out,
                "<p style=\"margin:0 0 8px;font-family:{family};font-size:12px;\
                 color:#888888;\">"
            )
            .unwrap();
            escape_html_into(out, &data.company_name);
            out.push_str("</p>");
        }
        if !data.address.is_empty() {
            write!(
                out,
                "<p style=\"margin:0 0 8px;font-family:{family};font-size:12px;\
                 color:#888888;\">"
            )
            .unwrap();
            escape_html_into(out, &data.address);
            out.push_str("</p>");
        }

        let unsubscribe = sanitize_url(&data.unsubscribe_url);
        write!(
            out,
            "<p style=\"margin:0;font-family:{family};font-size:12px;color:#888888;\">\
             <a href=\"{}\" target=\"_blank\" \
             style=\"color:#888888;text-decoration:underline;\">",
            escape_html(&unsubscribe)
        )
        .unwrap();
        escape_html_into(out, &data.unsubscribe_text);
        out.push_str("</a></p>");

        if let Some(legal) = &data.legal {
            write!(
                out,
                "<p style=\"margin:8px 0 0;font-family:{family};font-size:11px;\
                 color:#aaaaaa;\">"
            )
            .unwrap();
            escape_html_into(out, legal);
            out.push_str("</p>");
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Content width inside a block's horizontal padding.
fn inner_width(width: u16, styles: &BlockStyles) -> u16 {
    width.saturating_sub(styles.padding.left + styles.padding.right)
}

/// Per-block font override, falling back to the document preset.
fn resolve_font(font: &Option<String>, preset: &Typography) -> String {
    font.as_deref()
        .and_then(sanitize_font_stack)
        .unwrap_or_else(|| {
            sanitize_font_stack(&preset.font_family)
                .unwrap_or_else(|| "Arial, Helvetica, sans-serif".into())
        })
}

fn open_link(out: &mut String, link: &Option<String>) {
    if let Some(link) = link {
        write!(out, "<a href=\"{}\" target=\"_blank\">", escape_html(link)).unwrap();
    }
}

fn close_link(out: &mut String, link: &Option<String>) {
    if link.is_some() {
        out.push_str("</a>");
    }
}
