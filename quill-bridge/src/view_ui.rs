//! View / UI rendering.
//!
//! Layout: a scrollable row of line-number gutter and editor, the
//! suggestion panel stacked on top of it, and a status bar underneath.

use crate::app::QuillApp;
use crate::helpers::status_line;
use crate::highlighter::{Highlight, MarkupHighlighter, MarkupSettings};
use crate::keyboard;
use crate::messages::Message;
use crate::renderer::{palette_for, Palette};

use iced::widget::{button, column, container, row, scrollable, stack, text, text_editor};
use iced::{Alignment, Background, Border, Color, Element, Font, Length, Padding, Theme};

use quill_core::Suggestion;

const GUTTER_WIDTH: f32 = 44.0;
const EDITOR_PADDING: f32 = 5.0;
const PANEL_WIDTH: f32 = 300.0;

// ────────────────────────────────────────────────────────────────
// Title & Theme
// ────────────────────────────────────────────────────────────────

pub fn title(app: &QuillApp) -> String {
    format!("Quill /// {}", app.session.grammar().label())
}

pub fn theme(_: &QuillApp) -> Theme {
    Theme::Dark
}

// ────────────────────────────────────────────────────────────────
// View
// ────────────────────────────────────────────────────────────────

pub fn view(app: &QuillApp) -> Element<'_, Message> {
    let session = &app.session;
    let palette = palette_for(session.theme_name());
    let font_size = app.config.font_size;
    let trigger = app.config.trigger_key;

    // ── Line-number gutter, one entry per document line ──
    let gutter = column(session.document().line_numbers().map(|n| -> Element<'_, Message> {
        text(n.to_string())
            .font(Font::MONOSPACE)
            .size(font_size)
            .color(palette.gutter_fg)
            .into()
    }))
    .width(Length::Fixed(GUTTER_WIDTH))
    .align_x(Alignment::End)
    .padding(Padding {
        top: EDITOR_PADDING,
        right: 8.0,
        bottom: EDITOR_PADDING,
        left: 0.0,
    });

    // ── Editor ──
    let settings = MarkupSettings {
        markup: session.markup().clone(),
        revision: session.revision(),
        theme_name: session.theme_name(),
    };

    let editor = text_editor(&app.content)
        .font(Font::MONOSPACE)
        .size(font_size)
        .padding(EDITOR_PADDING)
        .on_action(Message::Edit)
        .key_binding(move |key_press| keyboard::editor_binding(key_press, trigger))
        .highlight_with::<MarkupHighlighter>(settings, Highlight::to_format);

    let editor_area = scrollable(row![gutter, editor].width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = stack![editor_area].width(Length::Fill).height(Length::Fill);
    if !session.suggestions().is_empty() {
        layers = layers.push(suggestion_panel(app, &palette));
    }

    // ── Status bar ──
    let status_bar = container(
        text(status_line(session, trigger, &app.config.endpoint))
            .font(Font::MONOSPACE)
            .size(12)
            .color(Color::from_rgb(0.5, 0.55, 0.6)),
    )
    .width(Length::Fill)
    .padding([3.0, 12.0])
    .style(status_bar_style);

    column![layers, status_bar]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

// ────────────────────────────────────────────────────────────────
// Suggestion panel
// ────────────────────────────────────────────────────────────────

/// The dropdown, offset to the estimated cursor location.
fn suggestion_panel<'a>(app: &'a QuillApp, palette: &Palette) -> Element<'a, Message> {
    let session = &app.session;
    let (left, top) = session
        .cursor()
        .pixel_offset(app.config.char_width, app.config.line_height);

    let mut entries = column![].spacing(1);
    for (index, (suggestion, expanded)) in session.suggestions().iter().enumerate() {
        entries = entries.push(suggestion_entry(
            index,
            suggestion,
            expanded,
            palette,
            app.config.font_size,
        ));
    }

    let panel_bg = palette.panel_bg;
    let panel_border = palette.panel_border;
    let panel = container(entries)
        .width(Length::Fixed(PANEL_WIDTH))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(panel_bg)),
            border: Border {
                color: panel_border,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..container::Style::default()
        });

    container(panel)
        .padding(Padding {
            top,
            right: 0.0,
            bottom: 0.0,
            left,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn suggestion_entry<'a>(
    index: usize,
    suggestion: &'a Suggestion,
    expanded: bool,
    palette: &Palette,
    font_size: f32,
) -> Element<'a, Message> {
    let italic = Font {
        style: iced::font::Style::Italic,
        ..Font::MONOSPACE
    };

    let header = row![
        text(suggestion.name.as_str())
            .font(Font::MONOSPACE)
            .size(font_size)
            .color(palette.default_fg),
        text(format!("({})", suggestion.kind))
            .font(italic)
            .size(font_size)
            .color(palette.type_name),
    ]
    .spacing(6);

    let mut body = column![header].spacing(2);
    if expanded {
        for line in suggestion.details() {
            body = body.push(
                text(format!("• {}", line))
                    .font(Font::MONOSPACE)
                    .size(font_size - 2.0)
                    .color(palette.comment),
            );
        }
    }

    let idle = palette.panel_bg;
    let hover = palette.panel_hover;
    let fg = palette.default_fg;

    button(body)
        .width(Length::Fill)
        .padding([5, 10])
        .on_press(Message::SuggestionClicked(index))
        .style(move |_theme: &Theme, status| button::Style {
            background: Some(Background::Color(match status {
                button::Status::Hovered | button::Status::Pressed => hover,
                _ => idle,
            })),
            text_color: fg,
            border: Border::default(),
            ..button::Style::default()
        })
        .into()
}

// ────────────────────────────────────────────────────────────────
// Status bar styling
// ────────────────────────────────────────────────────────────────

fn status_bar_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.08, 0.09, 0.1, 1.0))),
        border: Border {
            color: Color::from_rgb(0.2, 0.22, 0.25),
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}
