use crate::consts;
use crate::util::Pointer;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::Widget,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Logo;

impl Logo {
    const TEXT_HEIGHT: u16 = 5;
    const SNAKE_BODY_LENGTH: u16 = 11;
    const SNAKE_FOOD_GUTTER: u16 = 2;
    pub(super) const HEIGHT: u16 = Self::TEXT_HEIGHT + 2;
    pub(super) const WIDTH: u16 = 28;

    #[rustfmt::skip]
    const TEXT: [&'static str; Self::TEXT_HEIGHT as usize] = [
         " ____              _        ",
         "/ ___| _ __   __ _| | _____ ",
        r"\___ \| '_ \ / _` | |/ / _ \",
         " ___) | | | | (_| |   <  __/",
        r"|____/|_| |_|\__,_|_|\_\___|",
    ];
}

impl Widget for Logo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [area] = Layout::horizontal([Self::WIDTH])
            .flex(Flex::Start)
            .areas(area);
        let [words_area, diagram_area] = Layout::vertical([Self::TEXT_HEIGHT, 1])
            .flex(Flex::Start)
            .spacing(1)
            .areas(area);
        Text::from_iter(Self::TEXT)
            .style(consts::SNAKE_STYLE)
            .render(words_area, buf);
        let [tail_area, body_area, head_area, _, food_area] = Layout::horizontal([
            Constraint::Length(1),
            Constraint::Length(Self::SNAKE_BODY_LENGTH),
            Constraint::Length(1),
            Constraint::Length(Self::SNAKE_FOOD_GUTTER),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(diagram_area);
        let glyphs = [
            (tail_area, consts::SNAKE_TAIL_SYMBOL, consts::SNAKE_TAIL_STYLE),
            (body_area, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE),
            (head_area, consts::SNAKE_HEAD_EAST_SYMBOL, consts::SNAKE_STYLE),
            (food_area, consts::FOOD_HIGH_SYMBOL, consts::FOOD_STYLE),
        ];
        for (glyph_area, symbol, style) in glyphs {
            for p in glyph_area.positions() {
                if let Some(cell) = buf.cell_mut(p) {
                    cell.set_char(symbol);
                    cell.set_style(style);
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Instructions;

impl Instructions {
    pub(super) const HEIGHT: u16 = 7;
    pub(super) const WIDTH: u16 = 20;
}

impl Widget for Instructions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let keys = |prefix: &'static str, ks: [&'static str; 4]| {
            let mut line = Line::raw(prefix);
            for (i, k) in ks.into_iter().enumerate() {
                if i > 0 {
                    line.push_span(" ");
                }
                line.push_span(Span::styled(k, consts::KEY_STYLE));
            }
            line
        };
        let text = Text::from_iter([
            Line::from("Move the snake with:"),
            keys("       ", ["←", "↓", "↑", "→"]),
            keys("   or: ", ["h", "j", "k", "l"]),
            keys("   or: ", ["a", "s", "w", "d"]),
            Line::from("Eat the food, but"),
            Line::from("don't hit a wall"),
            Line::from("or yourself!"),
        ]);
        debug_assert_eq!(
            text.height(),
            usize::from(Self::HEIGHT),
            "Instructions::HEIGHT is wrong"
        );
        debug_assert_eq!(
            text.width(),
            usize::from(Self::WIDTH),
            "Instructions::WIDTH is wrong"
        );
        text.render(area, buf);
    }
}

/// A single-line button of the form `[Label (k)]`, where `k` is the
/// button's hotkey
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Button {
    label: &'static str,
    key: &'static str,
}

impl Button {
    pub(super) const fn new(label: &'static str, key: &'static str) -> Button {
        Button { label, key }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(super) fn width(self) -> u16 {
        // "[" + label + " (" + key + ")]"
        (self.label.chars().count() + self.key.chars().count() + 5) as u16
    }

    /// Return the area within `row` that the button occupies when centered
    pub(super) fn area(self, row: Rect) -> Rect {
        let [area] = Layout::horizontal([self.width()])
            .flex(Flex::Center)
            .areas(row);
        area
    }

    pub(super) fn line(self, selected: bool) -> Line<'static> {
        let style = if selected {
            consts::MENU_SELECTION_STYLE
        } else {
            Style::new()
        };
        Line::from_iter([
            Span::styled("[", style),
            Span::styled(self.label, style),
            Span::styled(" (", style),
            Span::styled(self.key, consts::KEY_STYLE.patch(style)),
            Span::styled(")]", style),
        ])
    }

    /// Draw the button centered within `row`
    pub(super) fn render(self, row: Rect, buf: &mut Buffer, selected: bool) {
        self.line(selected).render(self.area(row), buf);
    }
}

/// Find which of a column of buttons, laid out in `rows`, is under the mouse
/// pointer.  Returns the index of the button and whether it was clicked.
pub(super) fn pointed_button<I>(pointer: Pointer, buttons: I) -> Option<(usize, bool)>
where
    I: IntoIterator<Item = (Button, Rect)>,
{
    let (pos, clicked) = match pointer {
        Pointer::Hover(pos) => (pos, false),
        Pointer::Click(pos) => (pos, true),
    };
    buttons
        .into_iter()
        .position(|(button, row)| button.area(row).contains(pos))
        .map(|i| (i, clicked))
}
