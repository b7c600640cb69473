use iced::{
    Color, Element, Font, Length, Theme, border, font,
    widget::{center, column, container, container::Style, opaque, scrollable, stack, text},
};
use iced_widget::container::bordered_box;

use crate::core::{ColorClasses, Icon, Rgb};

pub const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// gray-600
pub const MUTED: Color = Color {
    r: 0.294,
    g: 0.333,
    b: 0.388,
    a: 1.0,
};

impl From<Rgb> for Color {
    fn from(color: Rgb) -> Self {
        Color::from_rgb8(color.r, color.g, color.b)
    }
}

pub fn card_style(theme: &Theme) -> Style {
    let palette = theme.extended_palette();
    bordered_box(theme)
        .background(palette.background.base.color)
        .border(border::rounded(12).width(1).color(palette.background.strong.color))
}

fn tile_style(theme: &Theme) -> Style {
    bordered_box(theme).border(border::rounded(8))
}

fn backdrop_style(_theme: &Theme) -> Style {
    Style::default().background(Color { a: 0.5, ..Color::BLACK })
}

/// Course code badge styled by its color bundle.
pub fn badge<'a, Message: 'a>(label: &'a str, classes: ColorClasses) -> Element<'a, Message> {
    container(text(label).font(BOLD).size(14).color(classes.text))
        .padding([8, 16])
        .style(move |_theme: &Theme| {
            Style::default()
                .background(Color::from(classes.background))
                .border(border::rounded(8).width(1).color(classes.border))
        })
        .into()
}

/// Small rounded label, used for the resource type.
pub fn pill<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    container(text(label).size(12))
        .padding([4, 12])
        .style(|theme: &Theme| bordered_box(theme).border(border::rounded(12)))
        .into()
}

pub fn icon<'a, Message: 'a>(icon: Icon, size: u32) -> Element<'a, Message> {
    container(text(icon.glyph()).size(size))
        .padding(12)
        .style(tile_style)
        .into()
}

/// Caption above a value, as in "Last Updated / 2 days ago".
pub fn labelled<'a, Message: 'a>(label: &'a str, value: String) -> Element<'a, Message> {
    container(column![
        text(label).size(14).color(MUTED),
        text(value).size(18).font(BOLD),
    ])
    .padding(16)
    .width(Length::Fill)
    .style(tile_style)
    .into()
}

/// Frame of a modal window. Content taller than the window scrolls.
pub fn dialog<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    max_width: f32,
) -> Element<'a, Message> {
    container(scrollable(content))
        .max_width(max_width)
        .style(card_style)
        .into()
}

/// Lays `dialog` over `base` on a dimmed backdrop. Clicks on the backdrop are
/// swallowed; the dialog has to be closed from its own buttons.
pub fn modal<'a, Message: 'a>(
    base: impl Into<Element<'a, Message>>,
    dialog: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(center(opaque(dialog)).padding(16).style(backdrop_style)),
    ]
    .into()
}
