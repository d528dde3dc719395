//! Search input for the switcher dropdown, with IME support.
//!
//! Editing state lives in [`TextBuffer`], which knows nothing about GPUI.
//! `TextEditor` wraps it with focus, key actions, mouse selection and the
//! platform input handler.

use std::ops::Range;

use gpui::{
    div, fill, point, prelude::*, px, relative, size, App, Bounds, ClipboardItem, Context,
    CursorStyle, Element, ElementId, ElementInputHandler, Entity, EntityInputHandler, EventEmitter,
    FocusHandle, Focusable, GlobalElementId, InteractiveElement, IntoElement, LayoutId,
    MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, PaintQuad, ParentElement, Pixels,
    Point, Render, ShapedLine, SharedString, Style, Styled, TextRun, UTF16Selection,
    UnderlineStyle, Window,
};
use unicode_segmentation::UnicodeSegmentation;

use crate::actions::{
    Backspace, Copy, Cut, Delete, End, Home, MoveLeft, MoveRight, Paste, SelectLeft, SelectRight,
    Submit, TextSelectAll,
};
use crate::keymap::INPUT_CONTEXT;
use crate::theme::ThemeExt;

// =============================================================================
// Events
// =============================================================================

/// Events emitted by SearchInput.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInputEvent {
    /// Text content changed.
    Changed(String),
    /// Enter pressed.
    Submit,
}

// =============================================================================
// Text Buffer
// =============================================================================

/// Single-line text with a selection and an optional IME composition.
///
/// All ranges are UTF-8 byte offsets on grapheme boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    /// Start == end means a caret with no selection.
    selected_range: Range<usize>,
    /// Caret sits at the start of the selection.
    selection_reversed: bool,
    marked_range: Option<Range<usize>>,
}

impl TextBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace everything and put the caret at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.selected_range = self.text.len()..self.text.len();
        self.selection_reversed = false;
        self.marked_range = None;
    }

    /// The active end of the selection.
    pub fn cursor_offset(&self) -> usize {
        if self.selection_reversed {
            self.selected_range.start
        } else {
            self.selected_range.end
        }
    }

    pub fn selected_range(&self) -> Range<usize> {
        self.selected_range.clone()
    }

    pub fn selected_text(&self) -> &str {
        &self.text[self.selected_range.clone()]
    }

    /// Collapse the selection to `offset`.
    pub fn move_to(&mut self, offset: usize) {
        let offset = offset.min(self.text.len());
        self.selected_range = offset..offset;
        self.selection_reversed = false;
    }

    /// Extend the selection so its active end is at `offset`.
    pub fn select_to(&mut self, offset: usize) {
        let offset = offset.min(self.text.len());
        if self.selection_reversed {
            self.selected_range.start = offset;
        } else {
            self.selected_range.end = offset;
        }

        if self.selected_range.end < self.selected_range.start {
            self.selection_reversed = !self.selection_reversed;
            self.selected_range = self.selected_range.end..self.selected_range.start;
        }
    }

    pub fn select_all(&mut self) {
        self.selected_range = 0..self.text.len();
        self.selection_reversed = false;
    }

    pub fn previous_boundary(&self, offset: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .rev()
            .find_map(|(idx, _)| (idx < offset).then_some(idx))
            .unwrap_or(0)
    }

    pub fn next_boundary(&self, offset: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .find_map(|(idx, _)| (idx > offset).then_some(idx))
            .unwrap_or(self.text.len())
    }

    /// Delete the selection, or the grapheme before the caret.
    pub fn backspace(&mut self) {
        if self.selected_range.is_empty() {
            self.select_to(self.previous_boundary(self.cursor_offset()));
        }
        self.replace(None, "");
    }

    /// Delete the selection, or the grapheme after the caret.
    pub fn delete(&mut self) {
        if self.selected_range.is_empty() {
            self.select_to(self.next_boundary(self.cursor_offset()));
        }
        self.replace(None, "");
    }

    pub fn move_left(&mut self) {
        if self.selected_range.is_empty() {
            self.move_to(self.previous_boundary(self.cursor_offset()));
        } else {
            self.move_to(self.selected_range.start);
        }
    }

    pub fn move_right(&mut self) {
        if self.selected_range.is_empty() {
            self.move_to(self.next_boundary(self.cursor_offset()));
        } else {
            self.move_to(self.selected_range.end);
        }
    }

    /// Replace `range` (or the composition, or the selection) with `new_text`.
    pub fn replace(&mut self, range: Option<Range<usize>>, new_text: &str) {
        let range = range
            .or(self.marked_range.clone())
            .unwrap_or(self.selected_range.clone());

        self.text.replace_range(range.clone(), new_text);

        let caret = range.start + new_text.len();
        self.selected_range = caret..caret;
        self.selection_reversed = false;
        self.marked_range = None;
    }

    /// Replace like [`replace`](Self::replace) and mark the new text as composing.
    ///
    /// `new_selected` is relative to the inserted text.
    pub fn replace_and_mark(
        &mut self,
        range: Option<Range<usize>>,
        new_text: &str,
        new_selected: Option<Range<usize>>,
    ) {
        let range = range
            .or(self.marked_range.clone())
            .unwrap_or(self.selected_range.clone());

        self.text.replace_range(range.clone(), new_text);

        self.marked_range =
            (!new_text.is_empty()).then(|| range.start..range.start + new_text.len());
        self.selected_range = new_selected
            .map(|r| r.start + range.start..r.end + range.start)
            .unwrap_or_else(|| {
                let caret = range.start + new_text.len();
                caret..caret
            });
    }

    pub fn marked_range(&self) -> Option<Range<usize>> {
        self.marked_range.clone()
    }

    pub fn unmark(&mut self) {
        self.marked_range = None;
    }

    // -------------------------------------------------------------------------
    // UTF-16 Conversion (for platform IME APIs)
    // -------------------------------------------------------------------------

    pub fn offset_to_utf16(&self, utf8_offset: usize) -> usize {
        self.text[..utf8_offset].encode_utf16().count()
    }

    pub fn offset_from_utf16(&self, utf16_offset: usize) -> usize {
        utf8_offset_in(&self.text, utf16_offset)
    }

    pub fn range_to_utf16(&self, range: &Range<usize>) -> Range<usize> {
        self.offset_to_utf16(range.start)..self.offset_to_utf16(range.end)
    }

    pub fn range_from_utf16(&self, range: &Range<usize>) -> Range<usize> {
        self.offset_from_utf16(range.start)..self.offset_from_utf16(range.end)
    }
}

// =============================================================================
// SearchInput (Public API)
// =============================================================================

/// Search input component.
///
/// Forwards events from the inner `TextEditor`. Use `focus()` to give it
/// keyboard focus from the parent.
pub struct SearchInput {
    editor: Entity<TextEditor>,
}

impl SearchInput {
    pub fn new(
        placeholder: impl Into<SharedString>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let editor = cx.new(|cx| TextEditor::new(placeholder.into(), window, cx));

        cx.subscribe(&editor, |_this, _editor, event: &SearchInputEvent, cx| {
            cx.emit(event.clone());
        })
        .detach();

        Self { editor }
    }

    /// Get the current text content.
    pub fn text<'a>(&self, cx: &'a App) -> &'a str {
        self.editor.read(cx).buffer.text()
    }

    /// Set the text content. Emits `Changed` when the text differs.
    pub fn set_text(&self, text: impl Into<String>, cx: &mut App) {
        let text = text.into();
        self.editor.update(cx, |editor, cx| {
            let changed = editor.buffer.text() != text;
            editor.buffer.set_text(text);
            if changed {
                cx.emit(SearchInputEvent::Changed(editor.buffer.text().to_string()));
            }
            cx.notify();
        });
    }

    /// Clear the text content.
    pub fn clear(&self, cx: &mut App) {
        self.set_text("", cx);
    }

    /// Move keyboard focus into the input.
    pub fn focus(&self, window: &mut Window, cx: &mut App) {
        let handle = self.editor.read(cx).focus_handle.clone();
        window.focus(&handle, cx);
    }
}

impl EventEmitter<SearchInputEvent> for SearchInput {}

impl Focusable for SearchInput {
    fn focus_handle(&self, cx: &App) -> FocusHandle {
        self.editor.read(cx).focus_handle.clone()
    }
}

impl Render for SearchInput {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        self.editor.clone()
    }
}

// =============================================================================
// TextEditor (Internal Implementation)
// =============================================================================

struct TextEditor {
    buffer: TextBuffer,
    placeholder: SharedString,
    focus_handle: FocusHandle,
    /// Shaped text from last paint (for hit testing).
    last_layout: Option<ShapedLine>,
    /// Element bounds from last paint (for hit testing).
    last_bounds: Option<Bounds<Pixels>>,
    is_selecting: bool,
}

impl TextEditor {
    fn new(placeholder: SharedString, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        Self {
            buffer: TextBuffer::default(),
            placeholder,
            focus_handle: cx.focus_handle(),
            last_layout: None,
            last_bounds: None,
            is_selecting: false,
        }
    }

    /// Run an edit and emit `Changed` if the text moved.
    fn edit(&mut self, cx: &mut Context<Self>, f: impl FnOnce(&mut TextBuffer)) {
        let old = self.buffer.text().to_string();
        f(&mut self.buffer);

        if self.buffer.text() != old {
            cx.emit(SearchInputEvent::Changed(self.buffer.text().to_string()));
        }
        cx.notify();
    }

    fn index_for_mouse_position(&self, position: Point<Pixels>) -> usize {
        if self.buffer.text().is_empty() {
            return 0;
        }

        let (Some(bounds), Some(line)) = (self.last_bounds.as_ref(), self.last_layout.as_ref())
        else {
            return 0;
        };

        if position.y < bounds.top() {
            return 0;
        }
        if position.y > bounds.bottom() {
            return self.buffer.text().len();
        }

        line.closest_index_for_x(position.x - bounds.left())
    }

    // -------------------------------------------------------------------------
    // Action Handlers
    // -------------------------------------------------------------------------

    fn backspace(&mut self, _: &Backspace, _window: &mut Window, cx: &mut Context<Self>) {
        self.edit(cx, TextBuffer::backspace);
    }

    fn delete(&mut self, _: &Delete, _window: &mut Window, cx: &mut Context<Self>) {
        self.edit(cx, TextBuffer::delete);
    }

    fn left(&mut self, _: &MoveLeft, _window: &mut Window, cx: &mut Context<Self>) {
        self.buffer.move_left();
        cx.notify();
    }

    fn right(&mut self, _: &MoveRight, _window: &mut Window, cx: &mut Context<Self>) {
        self.buffer.move_right();
        cx.notify();
    }

    fn select_left(&mut self, _: &SelectLeft, _window: &mut Window, cx: &mut Context<Self>) {
        let target = self.buffer.previous_boundary(self.buffer.cursor_offset());
        self.buffer.select_to(target);
        cx.notify();
    }

    fn select_right(&mut self, _: &SelectRight, _window: &mut Window, cx: &mut Context<Self>) {
        let target = self.buffer.next_boundary(self.buffer.cursor_offset());
        self.buffer.select_to(target);
        cx.notify();
    }

    fn select_all(&mut self, _: &TextSelectAll, _window: &mut Window, cx: &mut Context<Self>) {
        self.buffer.select_all();
        cx.notify();
    }

    fn home(&mut self, _: &Home, _window: &mut Window, cx: &mut Context<Self>) {
        self.buffer.move_to(0);
        cx.notify();
    }

    fn end(&mut self, _: &End, _window: &mut Window, cx: &mut Context<Self>) {
        self.buffer.move_to(self.buffer.text().len());
        cx.notify();
    }

    fn copy(&mut self, _: &Copy, _window: &mut Window, cx: &mut Context<Self>) {
        if !self.buffer.selected_range().is_empty() {
            cx.write_to_clipboard(ClipboardItem::new_string(
                self.buffer.selected_text().to_string(),
            ));
        }
    }

    fn paste(&mut self, _: &Paste, _window: &mut Window, cx: &mut Context<Self>) {
        if let Some(text) = cx.read_from_clipboard().and_then(|item| item.text()) {
            let text = text.replace('\n', " ");
            self.edit(cx, |buffer| buffer.replace(None, &text));
        }
    }

    fn cut(&mut self, _: &Cut, _window: &mut Window, cx: &mut Context<Self>) {
        if !self.buffer.selected_range().is_empty() {
            cx.write_to_clipboard(ClipboardItem::new_string(
                self.buffer.selected_text().to_string(),
            ));
            self.edit(cx, |buffer| buffer.replace(None, ""));
        }
    }

    fn submit(&mut self, _: &Submit, _window: &mut Window, cx: &mut Context<Self>) {
        cx.emit(SearchInputEvent::Submit);
    }

    // -------------------------------------------------------------------------
    // Mouse Handlers
    // -------------------------------------------------------------------------

    fn on_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.is_selecting = true;
        window.focus(&self.focus_handle, cx);

        let offset = self.index_for_mouse_position(event.position);
        if event.modifiers.shift {
            self.buffer.select_to(offset);
        } else {
            self.buffer.move_to(offset);
        }
        cx.notify();
    }

    fn on_mouse_up(&mut self, _: &MouseUpEvent, _window: &mut Window, _cx: &mut Context<Self>) {
        self.is_selecting = false;
    }

    fn on_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.is_selecting {
            self.buffer
                .select_to(self.index_for_mouse_position(event.position));
            cx.notify();
        }
    }
}

impl EventEmitter<SearchInputEvent> for TextEditor {}

impl Focusable for TextEditor {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

// =============================================================================
// EntityInputHandler Implementation (IME Support)
// =============================================================================

impl EntityInputHandler for TextEditor {
    fn text_for_range(
        &mut self,
        range_utf16: Range<usize>,
        actual_range: &mut Option<Range<usize>>,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<String> {
        let range = self.buffer.range_from_utf16(&range_utf16);
        actual_range.replace(self.buffer.range_to_utf16(&range));
        self.buffer.text().get(range).map(str::to_string)
    }

    fn selected_text_range(
        &mut self,
        _ignore_disabled_input: bool,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<UTF16Selection> {
        Some(UTF16Selection {
            range: self.buffer.range_to_utf16(&self.buffer.selected_range()),
            reversed: self.buffer.selection_reversed,
        })
    }

    fn marked_text_range(
        &self,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<Range<usize>> {
        self.buffer
            .marked_range()
            .map(|r| self.buffer.range_to_utf16(&r))
    }

    fn unmark_text(&mut self, _window: &mut Window, _cx: &mut Context<Self>) {
        self.buffer.unmark();
    }

    fn replace_text_in_range(
        &mut self,
        range_utf16: Option<Range<usize>>,
        new_text: &str,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let range = range_utf16.map(|r| self.buffer.range_from_utf16(&r));
        self.edit(cx, |buffer| buffer.replace(range, new_text));
    }

    fn replace_and_mark_text_in_range(
        &mut self,
        range_utf16: Option<Range<usize>>,
        new_text: &str,
        new_selected_range_utf16: Option<Range<usize>>,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let range = range_utf16.map(|r| self.buffer.range_from_utf16(&r));
        // Relative to the inserted text
        let selected = new_selected_range_utf16.map(|r| utf16_range_in(new_text, &r));
        self.edit(cx, |buffer| buffer.replace_and_mark(range, new_text, selected));
    }

    fn bounds_for_range(
        &mut self,
        range_utf16: Range<usize>,
        element_bounds: Bounds<Pixels>,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<Bounds<Pixels>> {
        let layout = self.last_layout.as_ref()?;
        let range = self.buffer.range_from_utf16(&range_utf16);

        Some(Bounds::from_corners(
            point(
                element_bounds.left() + layout.x_for_index(range.start),
                element_bounds.top(),
            ),
            point(
                element_bounds.left() + layout.x_for_index(range.end),
                element_bounds.bottom(),
            ),
        ))
    }

    fn character_index_for_point(
        &mut self,
        point: Point<Pixels>,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> Option<usize> {
        let bounds = self.last_bounds.as_ref()?;
        let layout = self.last_layout.as_ref()?;

        let local_point = bounds.localize(&point)?;
        let utf8_index = layout.index_for_x(local_point.x)?;
        Some(self.buffer.offset_to_utf16(utf8_index))
    }
}

/// Byte offset in `text` of the given UTF-16 offset.
fn utf8_offset_in(text: &str, utf16_offset: usize) -> usize {
    let mut utf8_offset = 0;
    let mut utf16_count = 0;

    for ch in text.chars() {
        if utf16_count >= utf16_offset {
            break;
        }
        utf16_count += ch.len_utf16();
        utf8_offset += ch.len_utf8();
    }

    utf8_offset
}

fn utf16_range_in(text: &str, range: &Range<usize>) -> Range<usize> {
    utf8_offset_in(text, range.start)..utf8_offset_in(text, range.end)
}

// =============================================================================
// Render Implementation
// =============================================================================

impl Render for TextEditor {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let is_focused = self.focus_handle.is_focused(window);

        div()
            .id("search-input")
            .key_context(INPUT_CONTEXT)
            .track_focus(&self.focus_handle)
            .cursor(CursorStyle::IBeam)
            .on_action(cx.listener(Self::backspace))
            .on_action(cx.listener(Self::delete))
            .on_action(cx.listener(Self::left))
            .on_action(cx.listener(Self::right))
            .on_action(cx.listener(Self::select_left))
            .on_action(cx.listener(Self::select_right))
            .on_action(cx.listener(Self::select_all))
            .on_action(cx.listener(Self::home))
            .on_action(cx.listener(Self::end))
            .on_action(cx.listener(Self::copy))
            .on_action(cx.listener(Self::paste))
            .on_action(cx.listener(Self::cut))
            .on_action(cx.listener(Self::submit))
            // Dismiss and cursor movement bubble up to SwitcherPanel
            .on_mouse_down(MouseButton::Left, cx.listener(Self::on_mouse_down))
            .on_mouse_up(MouseButton::Left, cx.listener(Self::on_mouse_up))
            .on_mouse_up_out(MouseButton::Left, cx.listener(Self::on_mouse_up))
            .on_mouse_move(cx.listener(Self::on_mouse_move))
            .w_full()
            .px_3()
            .py_2()
            .bg(theme.surface)
            .rounded(theme.radius)
            .border_1()
            .border_color(theme.border)
            .when(is_focused, |this| this.border_color(theme.border_focused))
            .child(TextInputElement {
                editor: cx.entity().clone(),
            })
    }
}

// =============================================================================
// Custom Text Element (for handle_input and rendering)
// =============================================================================

/// Renders text with caret and selection and registers the input handler.
struct TextInputElement {
    editor: Entity<TextEditor>,
}

struct TextInputPrepaintState {
    line: Option<ShapedLine>,
    cursor: Option<PaintQuad>,
    selection: Option<PaintQuad>,
}

impl IntoElement for TextInputElement {
    type Element = Self;

    fn into_element(self) -> Self::Element {
        self
    }
}

impl Element for TextInputElement {
    type RequestLayoutState = ();
    type PrepaintState = TextInputPrepaintState;

    fn id(&self) -> Option<ElementId> {
        None
    }

    fn source_location(&self) -> Option<&'static core::panic::Location<'static>> {
        None
    }

    fn request_layout(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        window: &mut Window,
        cx: &mut App,
    ) -> (LayoutId, Self::RequestLayoutState) {
        let mut style = Style::default();
        style.size.width = relative(1.).into();
        style.size.height = window.line_height().into();
        (window.request_layout(style, [], cx), ())
    }

    fn prepaint(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        window: &mut Window,
        cx: &mut App,
    ) -> Self::PrepaintState {
        let editor = self.editor.read(cx);
        let theme = cx.theme();
        let buffer = &editor.buffer;

        let is_empty = buffer.text().is_empty();
        let selected_range = buffer.selected_range();
        let cursor = buffer.cursor_offset();
        let is_focused = editor.focus_handle.is_focused(window);
        let style = window.text_style();

        let (display_text, text_color) = if is_empty {
            (editor.placeholder.clone(), theme.text_placeholder)
        } else {
            (SharedString::from(buffer.text().to_string()), theme.text)
        };

        let base_run = TextRun {
            len: display_text.len(),
            font: style.font(),
            color: text_color,
            background_color: None,
            underline: None,
            strikethrough: None,
        };

        // Underline the IME composition, never the placeholder
        let runs = match buffer.marked_range().filter(|_| !is_empty) {
            Some(marked) => [
                TextRun {
                    len: marked.start,
                    ..base_run.clone()
                },
                TextRun {
                    len: marked.end - marked.start,
                    underline: Some(UnderlineStyle {
                        color: Some(text_color),
                        thickness: px(1.0),
                        wavy: false,
                    }),
                    ..base_run.clone()
                },
                TextRun {
                    len: display_text.len().saturating_sub(marked.end),
                    ..base_run
                },
            ]
            .into_iter()
            .filter(|run| run.len > 0)
            .collect(),
            None => vec![base_run],
        };

        let font_size = style.font_size.to_pixels(window.rem_size());
        let line = window
            .text_system()
            .shape_line(display_text, font_size, &runs, None);

        let caret_at = |x: Pixels| {
            fill(
                Bounds::new(
                    point(bounds.left() + x, bounds.top()),
                    size(px(2.), bounds.size.height),
                ),
                theme.accent,
            )
        };

        let (selection_quad, cursor_quad) = if is_empty {
            (None, is_focused.then(|| caret_at(px(0.))))
        } else if selected_range.is_empty() {
            (None, is_focused.then(|| caret_at(line.x_for_index(cursor))))
        } else {
            let selection_quad = fill(
                Bounds::from_corners(
                    point(
                        bounds.left() + line.x_for_index(selected_range.start),
                        bounds.top(),
                    ),
                    point(
                        bounds.left() + line.x_for_index(selected_range.end),
                        bounds.bottom(),
                    ),
                ),
                theme.selection,
            );
            (Some(selection_quad), None)
        };

        TextInputPrepaintState {
            line: Some(line),
            cursor: cursor_quad,
            selection: selection_quad,
        }
    }

    fn paint(
        &mut self,
        _id: Option<&GlobalElementId>,
        _inspector_id: Option<&gpui::InspectorElementId>,
        bounds: Bounds<Pixels>,
        _request_layout: &mut Self::RequestLayoutState,
        prepaint: &mut Self::PrepaintState,
        window: &mut Window,
        cx: &mut App,
    ) {
        let focus_handle = self.editor.read(cx).focus_handle.clone();
        window.handle_input(
            &focus_handle,
            ElementInputHandler::new(bounds, self.editor.clone()),
            cx,
        );

        if let Some(selection) = prepaint.selection.take() {
            window.paint_quad(selection);
        }

        if let Some(line) = prepaint.line.take() {
            let _ = line.paint(bounds.origin, window.line_height(), window, cx);

            self.editor.update(cx, |editor, _cx| {
                editor.last_layout = Some(line);
                editor.last_bounds = Some(bounds);
            });
        }

        if let Some(cursor) = prepaint.cursor.take() {
            window.paint_quad(cursor);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(text: &str) -> TextBuffer {
        let mut buffer = TextBuffer::default();
        buffer.set_text(text);
        buffer
    }

    #[test]
    fn test_set_text_puts_caret_at_end() {
        let buffer = buffer("api");
        assert_eq!(buffer.selected_range(), 3..3);
        assert_eq!(buffer.cursor_offset(), 3);
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut buffer = TextBuffer::default();
        buffer.replace(None, "d");
        buffer.replace(None, "o");
        buffer.replace(None, "c");
        assert_eq!(buffer.text(), "doc");

        buffer.backspace();
        assert_eq!(buffer.text(), "do");
        assert_eq!(buffer.cursor_offset(), 2);
    }

    #[test]
    fn test_backspace_on_empty() {
        let mut buffer = TextBuffer::default();
        buffer.backspace();
        assert_eq!(buffer.text(), "");
        assert_eq!(buffer.selected_range(), 0..0);
    }

    #[test]
    fn test_backspace_removes_whole_grapheme() {
        let mut buffer = buffer("team 👥");
        buffer.backspace();
        assert_eq!(buffer.text(), "team ");
    }

    #[test]
    fn test_delete_forward() {
        let mut buffer = buffer("graph");
        buffer.move_to(0);
        buffer.delete();
        assert_eq!(buffer.text(), "raph");
    }

    #[test]
    fn test_selection_flips_direction() {
        let mut buffer = buffer("mobile");
        buffer.move_to(3);
        buffer.select_to(5);
        assert_eq!(buffer.selected_text(), "il");

        buffer.select_to(1);
        assert_eq!(buffer.selected_range(), 1..3);
        assert_eq!(buffer.cursor_offset(), 1);
    }

    #[test]
    fn test_move_collapses_selection() {
        let mut buffer = buffer("client");
        buffer.select_all();
        buffer.move_left();
        assert_eq!(buffer.selected_range(), 0..0);

        buffer.select_all();
        buffer.move_right();
        assert_eq!(buffer.selected_range(), 6..6);
    }

    #[test]
    fn test_replace_selection() {
        let mut buffer = buffer("legacy");
        buffer.select_all();
        buffer.replace(None, "payment");
        assert_eq!(buffer.text(), "payment");
        assert_eq!(buffer.cursor_offset(), 7);
    }

    #[test]
    fn test_composition() {
        let mut buffer = buffer("ws ");
        buffer.replace_and_mark(None, "に", None);
        assert_eq!(buffer.text(), "ws に");
        assert_eq!(buffer.marked_range(), Some(3..6));

        buffer.replace(None, "日本");
        assert_eq!(buffer.text(), "ws 日本");
        assert_eq!(buffer.marked_range(), None);
    }

    #[test]
    fn test_utf16_offsets() {
        let buffer = buffer("a👥b");
        assert_eq!(buffer.offset_to_utf16(5), 3);
        assert_eq!(buffer.offset_from_utf16(3), 5);
        assert_eq!(utf16_range_in("a👥b", &(1..3)), 1..5);
    }
}
