//! Switcher panel view - the dropdown composition.
//!
//! This view coordinates the search input, the suggestions, and the
//! workspace list. It subscribes to backend state changes for reactive
//! updates.
//!
//! ## Architecture
//!
//! - Backend owns the workspace list (favorites, order, active flag)
//! - UI owns ephemeral display state (query, selection, hover, busy flag)
//! - List changes flow reactively via subscription

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use gpui::{
    canvas, div, prelude::*, px, relative, size, AnyElement, App, AsyncApp, Bounds, ClickEvent,
    Context, ElementId, Entity, EventEmitter, FocusHandle, Focusable, FontWeight, Hsla,
    InteractiveElement, IntoElement, MouseButton, ParentElement, Pixels, Render, SharedString,
    Size, Styled, WeakEntity, Window,
};
use gpui_component::{v_virtual_list, VirtualListScrollHandle};
use switcher_core::{BackendError, BehaviorConfig, Workspace, WorkspaceId};

use crate::actions::{CreateFromQuery, CursorDown, CursorUp, Dismiss};
use crate::backend::{Backend, BackendState};
use crate::keymap::PANEL_CONTEXT;
use crate::model::{
    derive_list, DerivedList, PreviewPlacement, RecentSearches, RowBounds, SubmitOutcome,
    SwitcherPhase,
};
use crate::theme::{HslaExt, Theme, ThemeExt};
use crate::views::{scroll_to_cursor, SearchInput, SearchInputEvent};

/// Rows shown before the list starts scrolling.
const MAX_ROWS_WITHOUT_SCROLL: usize = 7;

/// Placeholder rows shown while a workspace switch is pending.
const SKELETON_ROWS: usize = 3;

// =============================================================================
// Events
// =============================================================================

/// Events emitted by SwitcherPanel.
#[derive(Debug, Clone)]
pub enum SwitcherPanelEvent {
    /// The panel closed itself (Escape).
    Dismiss,
    /// A workspace switch completed.
    Selected(Workspace),
    /// A workspace was created from the query.
    Created(Workspace),
}

// =============================================================================
// Drag Payload
// =============================================================================

/// Payload carried while a row is dragged. Also renders the drag ghost.
#[derive(Debug, Clone)]
struct DraggedRow {
    id: WorkspaceId,
    name: SharedString,
    icon: &'static str,
}

impl Render for DraggedRow {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        div()
            .w(theme.panel_width - px(32.0))
            .h(theme.item_height)
            .px_2()
            .flex()
            .items_center()
            .gap_3()
            .opacity(0.5)
            .bg(theme.surface)
            .border_1()
            .border_color(theme.border)
            .rounded(theme.radius)
            .shadow_lg()
            .text_sm()
            .text_color(theme.text)
            .child(self.icon)
            .child(self.name.clone())
    }
}

/// Plain text tooltip.
struct TooltipLabel(SharedString);

impl Render for TooltipLabel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        div()
            .px_2()
            .py_1()
            .bg(theme.text)
            .text_color(theme.background)
            .text_xs()
            .rounded(px(4.0))
            .child(self.0.clone())
    }
}

// =============================================================================
// Layout Helpers
// =============================================================================

/// Height of the list viewport for `rows` rows.
fn list_height(rows: usize, item_height: Pixels) -> Pixels {
    item_height * rows.min(MAX_ROWS_WITHOUT_SCROLL) as f32
}

/// Convert GPUI bounds to placement input.
fn to_row_bounds(bounds: Bounds<Pixels>) -> RowBounds {
    RowBounds {
        left: bounds.origin.x.into(),
        top: bounds.origin.y.into(),
        width: bounds.size.width.into(),
        height: bounds.size.height.into(),
    }
}

/// The active row is pinned: it neither drags nor takes drops.
fn accepts_drop(ws: &Workspace) -> bool {
    !ws.is_active
}

/// Colour of the unread dot on a row icon.
fn notification_dot_color(ws: &Workspace, theme: &Theme) -> Option<Hsla> {
    ws.has_notifications.then_some(theme.error)
}

/// Whether the "Create Workspace" button accepts clicks.
fn can_create(query: &str, busy: bool) -> bool {
    !query.trim().is_empty() && !busy
}

// =============================================================================
// Switcher Panel
// =============================================================================

/// The workspace switcher dropdown.
pub struct SwitcherPanel {
    /// Backend holding the workspace list.
    backend: Arc<dyn Backend>,
    /// Timing and list limits.
    behavior: BehaviorConfig,
    /// Latest snapshot from the backend.
    workspaces: Vec<Workspace>,
    /// Open/closed plus interaction state.
    phase: SwitcherPhase,
    /// Rows and suggestions for the current query.
    derived: DerivedList,
    /// Queries that led to a selection.
    recent: RecentSearches,
    /// Search input view.
    search_input: Entity<SearchInput>,
    /// Focus handle.
    focus_handle: FocusHandle,
    /// Scroll handle for the workspace list.
    scroll_handle: VirtualListScrollHandle,
    /// Window bounds of the painted rows, by visible index.
    row_bounds: Rc<RefCell<HashMap<usize, Bounds<Pixels>>>>,
    /// Row whose preview card is showing.
    preview_index: Option<usize>,
    /// Generation counter for hover timers.
    hover_generation: u64,
    /// Generation counter for select/create.
    op_generation: u64,
}

impl SwitcherPanel {
    /// Create a new switcher panel.
    pub fn new(
        backend: Arc<dyn Backend>,
        behavior: BehaviorConfig,
        recent_searches: Vec<String>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let focus_handle = cx.focus_handle();

        let search_input = cx.new(|cx| SearchInput::new("Search workspaces...", window, cx));
        cx.subscribe(&search_input, Self::on_search_input_event)
            .detach();

        // Subscribe to backend state changes
        let state_rx = backend.subscribe();
        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let mut rx = state_rx;
            while rx.changed().await.is_ok() {
                let state = rx.borrow().clone();
                let _ = this.update(cx, |this, cx| {
                    this.on_backend_state_changed(state, cx);
                });
            }
        })
        .detach();

        let workspaces = backend.snapshot();
        let recent = RecentSearches::new(recent_searches, behavior.max_recent_searches);
        let derived = derive_list(&workspaces, "", recent.as_slice(), behavior.max_suggestions);

        Self {
            backend,
            behavior,
            workspaces,
            phase: SwitcherPhase::Closed,
            derived,
            recent,
            search_input,
            focus_handle,
            scroll_handle: VirtualListScrollHandle::new(),
            row_bounds: Rc::new(RefCell::new(HashMap::new())),
            preview_index: None,
            hover_generation: 0,
            op_generation: 0,
        }
    }

    /// Whether the dropdown is showing.
    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    /// The active workspace, if any.
    pub fn current_workspace(&self) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| w.is_active)
    }

    /// Open the dropdown and focus the search input.
    pub fn open(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.phase.is_open() {
            return;
        }
        let query = self.query(cx);
        self.phase.open(query);
        tracing::debug!("Switcher opened");

        self.search_input
            .update(cx, |input, cx| input.focus(window, cx));
        cx.notify();
    }

    /// Close the dropdown. The query is kept for the next open.
    pub fn close(&mut self, cx: &mut Context<Self>) {
        if !self.phase.is_open() {
            return;
        }
        self.phase.close();
        self.clear_preview();
        tracing::debug!("Switcher closed");
        cx.notify();
    }

    /// Open when closed, close when open.
    pub fn toggle(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.phase.is_open() {
            self.close(cx);
        } else {
            self.open(window, cx);
        }
    }

    /// The hovered workspace and where its card goes, once the hover delay
    /// has passed.
    pub fn preview(&self) -> Option<(Workspace, PreviewPlacement)> {
        if !self.phase.is_open() {
            return None;
        }
        let ix = self.preview_index?;
        let ws = self.visible().get(ix)?.clone();
        let bounds = *self.row_bounds.borrow().get(&ix)?;
        Some((ws, PreviewPlacement::beside(to_row_bounds(bounds))))
    }

    fn query(&self, cx: &App) -> String {
        self.search_input.read(cx).text(cx).to_string()
    }

    fn visible(&self) -> &[Workspace] {
        self.derived.visible(self.behavior.max_visible_rows)
    }

    fn rederive(&mut self, cx: &App) {
        let query = self.query(cx);
        self.derived = derive_list(
            &self.workspaces,
            &query,
            self.recent.as_slice(),
            self.behavior.max_suggestions,
        );
        self.row_bounds.borrow_mut().clear();
    }

    fn clear_preview(&mut self) {
        self.hover_generation += 1;
        self.preview_index = None;
    }

    // -------------------------------------------------------------------------
    // Backend State Changes
    // -------------------------------------------------------------------------

    fn on_backend_state_changed(&mut self, state: BackendState, cx: &mut Context<Self>) {
        tracing::debug!("on_backend_state_changed: {} workspaces", state.len());
        self.workspaces = state;
        self.rederive(cx);
        let len = self.visible().len();
        if let Some(open) = self.phase.open_state_mut() {
            open.clamp_selection(len);
        }
        cx.notify();
    }

    // -------------------------------------------------------------------------
    // Action Handlers
    // -------------------------------------------------------------------------

    fn on_cursor_up(&mut self, _: &CursorUp, _window: &mut Window, cx: &mut Context<Self>) {
        let Some(state) = self.phase.open_state_mut() else {
            return;
        };
        state.cursor_up();
        if let Some(ix) = state.selected_index {
            scroll_to_cursor(&self.scroll_handle, ix);
        }
        cx.notify();
    }

    fn on_cursor_down(&mut self, _: &CursorDown, _window: &mut Window, cx: &mut Context<Self>) {
        let len = self.visible().len();
        let Some(state) = self.phase.open_state_mut() else {
            return;
        };
        state.cursor_down(len);
        if let Some(ix) = state.selected_index {
            scroll_to_cursor(&self.scroll_handle, ix);
        }
        cx.notify();
    }

    fn on_dismiss(&mut self, _: &Dismiss, _window: &mut Window, cx: &mut Context<Self>) {
        self.close(cx);
        cx.emit(SwitcherPanelEvent::Dismiss);
    }

    fn on_create_from_query(
        &mut self,
        _: &CreateFromQuery,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let query = self.query(cx);
        self.create_workspace(query, cx);
    }

    // -------------------------------------------------------------------------
    // Search Input Events
    // -------------------------------------------------------------------------

    fn on_search_input_event(
        &mut self,
        _search_input: Entity<SearchInput>,
        event: &SearchInputEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            SearchInputEvent::Changed(query) => {
                if let Some(state) = self.phase.open_state_mut() {
                    state.set_query(query.clone());
                }
                self.clear_preview();
                self.rederive(cx);
                cx.notify();
            }
            SearchInputEvent::Submit => self.submit(cx),
        }
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let Some(state) = self.phase.open_state() else {
            return;
        };
        match state.submit(self.visible(), self.derived.has_results) {
            SubmitOutcome::Select(id) => self.select_workspace(id, cx),
            SubmitOutcome::Create(name) => self.create_workspace(name, cx),
            SubmitOutcome::Nothing => {}
        }
    }

    fn on_suggestion_click(
        &mut self,
        suggestion: String,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.search_input.update(cx, |input, cx| {
            input.set_text(suggestion, cx);
            input.focus(window, cx);
        });
    }

    // -------------------------------------------------------------------------
    // Backend Integration
    // -------------------------------------------------------------------------

    fn select_workspace(&mut self, id: WorkspaceId, cx: &mut Context<Self>) {
        let query = self.query(cx);
        let Some(state) = self.phase.open_state_mut() else {
            return;
        };
        if state.busy.is_some() {
            return;
        }
        state.begin_select(id.clone());
        self.clear_preview();

        if self.recent.record(&query) {
            tracing::debug!("Recorded recent search '{}'", query);
        }

        self.op_generation += 1;
        let gen = self.op_generation;
        tracing::info!("Switching to workspace {}", id);
        cx.notify();

        let task = self.backend.select(id);
        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let result = task.await;
            let _ = this.update(cx, |this, cx| {
                this.apply_result(gen, result, SwitcherPanelEvent::Selected, cx);
            });
        })
        .detach();
    }

    fn create_workspace(&mut self, name: String, cx: &mut Context<Self>) {
        let Some(state) = self.phase.open_state_mut() else {
            return;
        };
        if !can_create(&name, state.busy.is_some()) {
            return;
        }
        state.begin_create(name.clone());

        self.op_generation += 1;
        let gen = self.op_generation;
        tracing::info!("Creating workspace '{}'", name);
        cx.notify();

        let task = self.backend.create(name);
        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            let result = task.await;
            let _ = this.update(cx, |this, cx| {
                this.apply_result(gen, result, SwitcherPanelEvent::Created, cx);
            });
        })
        .detach();
    }

    fn apply_result(
        &mut self,
        generation: u64,
        result: Result<Workspace, BackendError>,
        event: fn(Workspace) -> SwitcherPanelEvent,
        cx: &mut Context<Self>,
    ) {
        if self.op_generation != generation {
            return;
        }

        match result {
            Ok(ws) => {
                if let Some(state) = self.phase.open_state_mut() {
                    state.finish();
                }
                self.close(cx);
                self.search_input.update(cx, |input, cx| input.clear(cx));
                cx.emit(event(ws));
            }
            Err(e) => {
                tracing::error!("Workspace operation failed: {}", e);
                if let Some(state) = self.phase.open_state_mut() {
                    state.busy = None;
                }
            }
        }

        cx.notify();
    }

    fn toggle_favorite(&mut self, id: &WorkspaceId) {
        match self.backend.toggle_favorite(id) {
            Ok(is_favorite) => tracing::debug!("Workspace {} favorite: {}", id, is_favorite),
            Err(e) => tracing::error!("Failed to toggle favorite: {}", e),
        }
    }

    fn remove_workspace(&mut self, id: &WorkspaceId, cx: &mut Context<Self>) {
        match self.backend.remove(id) {
            Ok(ws) => {
                tracing::info!("Removed '{}' from list", ws.name);
                self.clear_preview();
                if let Some(state) = self.phase.open_state_mut() {
                    state.unhover();
                }
                cx.notify();
            }
            Err(e) => tracing::error!("Failed to remove workspace: {}", e),
        }
    }

    fn reorder(&mut self, dragged: &WorkspaceId, over: &WorkspaceId) {
        match self.backend.reorder(dragged, over) {
            Ok(true) => tracing::debug!("Moved {} to {}", dragged, over),
            Ok(false) => {}
            Err(e) => tracing::error!("Reorder failed: {}", e),
        }
    }

    // -------------------------------------------------------------------------
    // Hover
    // -------------------------------------------------------------------------

    fn on_row_hover(&mut self, index: usize, hovered: bool, cx: &mut Context<Self>) {
        let Some(state) = self.phase.open_state_mut() else {
            return;
        };

        if !hovered {
            if state.hovered_index == Some(index) {
                state.unhover();
                self.clear_preview();
                cx.notify();
            }
            return;
        }

        state.hover(index);
        self.clear_preview();
        let gen = self.hover_generation;
        let delay = self.behavior.preview_delay();
        cx.notify();

        cx.spawn(async move |this: WeakEntity<Self>, cx: &mut AsyncApp| {
            cx.background_executor().timer(delay).await;
            let _ = this.update(cx, |this, cx| {
                this.show_preview(gen, index, cx);
            });
        })
        .detach();
    }

    fn show_preview(&mut self, generation: u64, index: usize, cx: &mut Context<Self>) {
        if self.hover_generation != generation {
            return;
        }
        let still_hovered = self
            .phase
            .open_state()
            .is_some_and(|s| s.hovered_index == Some(index));
        if still_hovered {
            self.preview_index = Some(index);
            cx.notify();
        }
    }

    // -------------------------------------------------------------------------
    // Render Helpers
    // -------------------------------------------------------------------------

    /// Small square icon button.
    fn icon_button(
        id: impl Into<ElementId>,
        glyph: &'static str,
        color: Hsla,
        hover_color: Hsla,
        theme: &Theme,
    ) -> gpui::Stateful<gpui::Div> {
        div()
            .id(id.into())
            .size(px(32.0))
            .flex()
            .items_center()
            .justify_center()
            .rounded(px(6.0))
            .cursor_pointer()
            .text_sm()
            .text_color(color)
            .hover(|style| style.bg(theme.surface_hover).text_color(hover_color))
            // Button presses never start a row drag
            .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
            .child(glyph)
    }

    /// Render one workspace row (without listeners - those are added by caller).
    fn render_row(ws: &Workspace, is_selected: bool, theme: &Theme) -> gpui::Stateful<gpui::Div> {
        let bg = if ws.is_active {
            theme.accent.with_alpha(0.08)
        } else if is_selected {
            theme.cursor
        } else {
            gpui::transparent_black()
        };

        let icon_bg = if ws.is_active {
            theme.accent.with_alpha(0.08)
        } else {
            theme.skeleton
        };

        div()
            .id(ElementId::Name(SharedString::from(format!("ws-{}", ws.id))))
            .relative()
            .w_full()
            .h(theme.item_height)
            .px_2()
            .flex()
            .items_center()
            .gap_3()
            .bg(bg)
            .rounded(theme.radius)
            .cursor_pointer()
            .when(ws.is_active, |this| {
                this.border_1().border_color(theme.accent.with_alpha(0.2))
            })
            .when(!ws.is_active, |this| {
                this.hover(|style| style.bg(theme.surface_hover))
            })
            .child(
                div()
                    .relative()
                    .size(px(32.0))
                    .flex_shrink_0()
                    .rounded(px(6.0))
                    .bg(icon_bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_xs()
                    .text_color(theme.kind_color(ws.kind))
                    .child(ws.kind.icon())
                    .when_some(notification_dot_color(ws, theme), |this, color| {
                        this.child(
                            div()
                                .absolute()
                                .top(px(-2.0))
                                .right(px(-2.0))
                                .size(px(8.0))
                                .rounded_full()
                                .bg(color)
                                .border_1()
                                .border_color(theme.background),
                        )
                    }),
            )
            .child(
                div()
                    .flex_1()
                    .min_w_0()
                    .overflow_hidden()
                    .child(
                        div()
                            .text_sm()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(theme.text)
                            .text_ellipsis()
                            .child(ws.name.clone()),
                    )
                    .child(
                        div()
                            .text_xs()
                            .text_color(theme.text_muted)
                            .child(ws.subtitle()),
                    ),
            )
    }

    fn render_skeleton(index: usize, theme: &Theme) -> AnyElement {
        div()
            .id(("skeleton", index))
            .w_full()
            .h(theme.item_height)
            .px_2()
            .flex()
            .items_center()
            .gap_3()
            .child(div().size(px(32.0)).rounded_full().bg(theme.skeleton))
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(
                        div()
                            .h(px(16.0))
                            .w(relative(0.75))
                            .rounded(px(4.0))
                            .bg(theme.skeleton),
                    )
                    .child(
                        div()
                            .h(px(12.0))
                            .w(relative(0.5))
                            .rounded(px(4.0))
                            .bg(theme.skeleton),
                    ),
            )
            .child(div().size(px(16.0)).rounded(px(4.0)).bg(theme.skeleton))
            .into_any_element()
    }

    fn render_header(
        &self,
        query: &str,
        busy: bool,
        is_creating: bool,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let theme = cx.theme().clone();
        let enabled = can_create(query, busy);
        let label = if is_creating { "Creating..." } else { "Create Workspace" };

        div()
            .w_full()
            .flex()
            .items_center()
            .gap_6()
            .child(
                div()
                    .flex_1()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(div().text_xs().text_color(theme.text_muted).child("🔍"))
                    .child(div().flex_1().child(self.search_input.clone())),
            )
            .child(
                div()
                    .id("create-workspace")
                    .flex_shrink_0()
                    .h(px(32.0))
                    .px_3()
                    .flex()
                    .items_center()
                    .border_1()
                    .border_color(theme.border)
                    .rounded(theme.radius)
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.text)
                    .when(!enabled, |this| this.opacity(0.5))
                    .when(enabled, |this| {
                        this.cursor_pointer()
                            .hover(|style| style.bg(theme.surface_hover))
                            .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| {
                                let query = this.query(cx);
                                this.create_workspace(query, cx);
                            }))
                    })
                    .child(label),
            )
            .into_any_element()
    }

    fn render_suggestions(&self, cx: &mut Context<Self>) -> Option<AnyElement> {
        if self.derived.suggestions.is_empty() {
            return None;
        }
        let theme = cx.theme().clone();

        let buttons = self
            .derived
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, suggestion)| {
                let text = suggestion.clone();
                div()
                    .id(("suggestion", i))
                    .w_full()
                    .h(px(28.0))
                    .px_2()
                    .flex()
                    .items_center()
                    .gap_2()
                    .rounded(px(6.0))
                    .cursor_pointer()
                    .text_xs()
                    .text_color(theme.text)
                    .hover(|style| style.bg(theme.surface_hover))
                    .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                        this.on_suggestion_click(text.clone(), window, cx);
                    }))
                    .child(div().text_color(theme.text_muted).child("🔍"))
                    .child(suggestion.clone())
                    .into_any_element()
            })
            .collect::<Vec<_>>();

        Some(
            div()
                .w_full()
                .flex()
                .flex_col()
                .gap_1()
                .pb_2()
                .border_b_1()
                .border_color(theme.border)
                .child(
                    div()
                        .px_2()
                        .text_xs()
                        .text_color(theme.text_muted)
                        .child("Suggestions"),
                )
                .children(buttons)
                .into_any_element(),
        )
    }

    fn render_list(&self, cx: &mut Context<Self>) -> AnyElement {
        let theme = cx.theme().clone();
        let loading = self.phase.open_state().is_some_and(|s| s.is_loading());

        if loading {
            return div()
                .id("workspace-skeletons")
                .w_full()
                .flex()
                .flex_col()
                .gap_1()
                .children((0..SKELETON_ROWS).map(|i| Self::render_skeleton(i, &theme)))
                .into_any_element();
        }

        if !self.derived.has_results {
            return div()
                .w_full()
                .py_4()
                .flex()
                .justify_center()
                .text_sm()
                .text_color(theme.text_muted)
                .child("No workspaces found")
                .into_any_element();
        }

        let rows = self.visible().len();
        let item_sizes: Rc<Vec<Size<Pixels>>> =
            Rc::new((0..rows).map(|_| size(px(0.0), theme.item_height)).collect());

        let entity = cx.entity().clone();
        let list = v_virtual_list(
            entity,
            "workspace-list",
            item_sizes,
            |this, range, _window, cx| {
                let theme = cx.theme().clone();
                let Some(state) = this.phase.open_state() else {
                    return vec![];
                };
                let selected = state.selected_index;
                let hovered = state.hovered_index;

                let mut elements = Vec::with_capacity(range.len());
                for ix in range {
                    let Some(ws) = this.visible().get(ix) else {
                        elements.push(div().into_any_element());
                        continue;
                    };
                    elements.push(this.render_interactive_row(
                        ix,
                        ws,
                        selected == Some(ix),
                        hovered == Some(ix),
                        &theme,
                        cx,
                    ));
                }
                elements
            },
        )
        .track_scroll(&self.scroll_handle)
        .w_full()
        .h(list_height(rows, theme.item_height));

        div().w_full().child(list).into_any_element()
    }

    fn render_interactive_row(
        &self,
        ix: usize,
        ws: &Workspace,
        is_selected: bool,
        is_hovered: bool,
        theme: &Theme,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let id = ws.id.clone();
        let bounds_store = self.row_bounds.clone();

        let mut row = Self::render_row(ws, is_selected, theme)
            .on_hover(cx.listener(move |this, hovered: &bool, _window, cx| {
                this.on_row_hover(ix, *hovered, cx);
            }))
            .on_click(cx.listener({
                let id = id.clone();
                move |this, _: &ClickEvent, _window, cx| {
                    this.select_workspace(id.clone(), cx);
                }
            }))
            // Record painted bounds for preview placement
            .child(
                canvas(
                    move |bounds, _window, _cx| {
                        bounds_store.borrow_mut().insert(ix, bounds);
                    },
                    |_, _, _, _| {},
                )
                .absolute()
                .top_0()
                .left_0()
                .size_full(),
            );

        if accepts_drop(ws) {
            let over = id.clone();
            row = row
                .drag_over::<DraggedRow>(|style, _, _, cx| style.bg(cx.theme().drop_target))
                .on_drop(cx.listener(move |this, dragged: &DraggedRow, _window, _cx| {
                    this.reorder(&dragged.id, &over);
                }));

            let payload = DraggedRow {
                id: id.clone(),
                name: ws.name.clone().into(),
                icon: ws.kind.icon(),
            };
            row = row.on_drag(payload, |payload, _offset, _window, cx| {
                cx.new(|_| payload.clone())
            });
        }

        let actions = div().flex().items_center().flex_shrink_0().gap_1();
        let actions = if ws.is_favorite {
            actions.child(
                Self::icon_button(
                    ("unstar", ix),
                    "★",
                    theme.favorite,
                    theme.favorite,
                    theme,
                )
                .on_click(cx.listener({
                    let id = id.clone();
                    move |this, _: &ClickEvent, _window, cx| {
                        cx.stop_propagation();
                        this.toggle_favorite(&id);
                    }
                })),
            )
        } else {
            let reveal = if is_hovered { 1.0 } else { 0.0 };
            actions
                .when(ws.can_remove(), |this| {
                    this.child(
                        Self::icon_button(
                            ("remove", ix),
                            "✕",
                            theme.text_muted,
                            theme.error,
                            theme,
                        )
                        .opacity(reveal)
                        .tooltip(|_window, cx| {
                            cx.new(|_| TooltipLabel("Remove from list".into())).into()
                        })
                        .on_click(cx.listener({
                            let id = id.clone();
                            move |this, _: &ClickEvent, _window, cx| {
                                cx.stop_propagation();
                                this.remove_workspace(&id, cx);
                            }
                        })),
                    )
                })
                .child(
                    Self::icon_button(
                        ("star", ix),
                        "☆",
                        theme.text_muted,
                        theme.favorite,
                        theme,
                    )
                    .opacity(reveal)
                    .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                        cx.stop_propagation();
                        this.toggle_favorite(&id);
                    })),
                )
        };

        row.child(actions).into_any_element()
    }

    fn render_footer(theme: &Theme) -> AnyElement {
        div()
            .id("view-all")
            .w_full()
            .pt_2()
            .border_t_1()
            .border_color(theme.border)
            .child(
                div()
                    .p_2()
                    .rounded(theme.radius)
                    .hover(|style| style.bg(theme.surface_hover))
                    .cursor_pointer()
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.accent)
                    .underline()
                    .child("View all workspaces"),
            )
            .into_any_element()
    }
}

// =============================================================================
// Focusable
// =============================================================================

impl Focusable for SwitcherPanel {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

// =============================================================================
// EventEmitter
// =============================================================================

impl EventEmitter<SwitcherPanelEvent> for SwitcherPanel {}

// =============================================================================
// Render
// =============================================================================

impl Render for SwitcherPanel {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let Some(state) = self.phase.open_state() else {
            return div().id("switcher-panel-closed").into_any_element();
        };
        let busy = state.busy.is_some();
        let is_creating = state.is_creating();
        let query = state.query.clone();

        let theme = cx.theme().clone();
        let header = self.render_header(&query, busy, is_creating, cx);
        let suggestions = self.render_suggestions(cx);
        let list = self.render_list(cx);

        div()
            .id("switcher-panel")
            .key_context(PANEL_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_cursor_up))
            .on_action(cx.listener(Self::on_cursor_down))
            .on_action(cx.listener(Self::on_dismiss))
            .on_action(cx.listener(Self::on_create_from_query))
            // Clicks inside the panel never reach the backdrop
            .on_mouse_down(MouseButton::Left, |_, _, cx| cx.stop_propagation())
            .w(theme.panel_width)
            .p_4()
            .flex()
            .flex_col()
            .gap_3()
            .bg(theme.surface)
            .border_1()
            .border_color(theme.border)
            .rounded(theme.radius)
            .shadow_lg()
            .font_family(theme.font_family.clone())
            .child(header)
            .children(suggestions)
            .child(list)
            .child(Self::render_footer(&theme))
            .into_any_element()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::point;
    use switcher_core::builtin_workspaces;

    #[test]
    fn test_switcher_panel_events() {
        let ws = Workspace::new_personal("Scratch");
        let event = SwitcherPanelEvent::Created(ws.clone());
        assert!(matches!(event, SwitcherPanelEvent::Created(w) if w == ws));
    }

    #[test]
    fn test_list_height_caps_rows() {
        assert_eq!(list_height(0, px(52.0)), px(0.0));
        assert_eq!(list_height(3, px(52.0)), px(156.0));
        assert_eq!(list_height(10, px(52.0)), px(364.0));
    }

    #[test]
    fn test_row_bounds_conversion() {
        let bounds = Bounds {
            origin: point(px(10.0), px(120.0)),
            size: size(px(391.0), px(52.0)),
        };
        let rb = to_row_bounds(bounds);
        assert_eq!(rb.left, 10.0);
        assert_eq!(rb.top, 120.0);
        assert_eq!(rb.right(), 401.0);

        let placement = PreviewPlacement::beside(rb);
        assert_eq!(placement.left, 425.0);
        assert_eq!(placement.top, 146.0);
    }

    #[test]
    fn test_notification_dot() {
        let theme = Theme::dark();
        let workspaces = builtin_workspaces();
        let api_team = workspaces
            .iter()
            .find(|ws| ws.name == "API Team Development")
            .unwrap();
        assert_eq!(notification_dot_color(api_team, &theme), Some(theme.error));

        let quiet = Workspace::new_personal("Scratch");
        assert!(!quiet.has_notifications);
        assert_eq!(notification_dot_color(&quiet, &theme), None);
    }

    #[test]
    fn test_active_row_rejects_drops() {
        let workspaces = builtin_workspaces();
        let active = workspaces.iter().find(|ws| ws.is_active).unwrap();
        assert!(!accepts_drop(active));
        assert!(workspaces.iter().filter(|ws| !ws.is_active).all(|ws| accepts_drop(ws)));
    }

    #[test]
    fn test_can_create() {
        assert!(can_create("Scratch", false));
        assert!(!can_create("", false));
        assert!(!can_create("   ", false));
        assert!(!can_create("Scratch", true));
    }
}
