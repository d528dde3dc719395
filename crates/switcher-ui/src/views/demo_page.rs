//! Demo page hosting the switcher.
//!
//! The page owns the switcher panel and renders it as an overlay anchored
//! under the trigger button, plus the preview card beside the hovered row.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use gpui::{
    anchored, canvas, deferred, div, point, prelude::*, px, AnyElement, App, Bounds, ClickEvent,
    Context, Corner, Entity, FocusHandle, Focusable, FontWeight, InteractiveElement, IntoElement,
    MouseButton, MouseDownEvent, ParentElement, Pixels, Render, Styled, Window,
};
use switcher_core::BehaviorConfig;

use crate::actions::ToggleSwitcher;
use crate::backend::Backend;
use crate::keymap::PAGE_CONTEXT;
use crate::theme::{Theme, ThemeExt};
use crate::views::{PreviewCardView, SwitcherPanel, SwitcherPanelEvent};

/// Label on the trigger when no workspace is active.
const NO_WORKSPACE_LABEL: &str = "Select Workspace";

/// Gap between the trigger and the dropdown.
const DROPDOWN_OFFSET: f32 = 4.0;

const KEY_FEATURES: &[(&str, &str, &str)] = &[
    ("⭐", "Favorite workspaces", "Star what matters most"),
    ("🏷️", "Clear workspace metadata", "Know who created what"),
    ("🎯", "Current workspace indicator", "Always know where you are"),
    ("🔔", "Activity notifications", "See what needs attention"),
    ("🔍", "Smart search", "Find by name or creator"),
    ("⚡", "Quick actions", "Create new or browse all"),
];

const SOLVED_PROBLEMS: &[&str] = &[
    "No more confusion between \"My Workspace\" entries",
    "Favorites don't get buried in recent history",
    "Public workspaces don't pollute your list",
    "Clear visual indicators for workspace types",
    "Fast navigation to frequently used spaces",
    "Encourages shared workspace discovery",
];

/// Text on the trigger button.
fn trigger_label(current: Option<&str>) -> &str {
    current.unwrap_or(NO_WORKSPACE_LABEL)
}

/// Top-left corner of the dropdown for a trigger at `bounds`.
fn dropdown_origin(bounds: Bounds<Pixels>) -> gpui::Point<Pixels> {
    point(
        bounds.origin.x,
        bounds.origin.y + bounds.size.height + px(DROPDOWN_OFFSET),
    )
}

/// The demo page root view.
pub struct DemoPage {
    panel: Entity<SwitcherPanel>,
    focus_handle: FocusHandle,
    /// Painted bounds of the trigger button.
    trigger_bounds: Rc<RefCell<Bounds<Pixels>>>,
}

impl DemoPage {
    pub fn new(
        backend: Arc<dyn Backend>,
        behavior: BehaviorConfig,
        recent_searches: Vec<String>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let panel = cx.new(|cx| SwitcherPanel::new(backend, behavior, recent_searches, window, cx));

        // Re-render when the panel changes (trigger label, overlay, preview)
        cx.observe(&panel, |_this, _panel, cx| cx.notify()).detach();
        cx.subscribe_in(&panel, window, Self::on_panel_event)
            .detach();

        Self {
            panel,
            focus_handle: cx.focus_handle(),
            trigger_bounds: Rc::new(RefCell::new(Bounds::default())),
        }
    }

    fn toggle_switcher(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let open = self.panel.update(cx, |panel, cx| {
            panel.toggle(window, cx);
            panel.is_open()
        });
        if !open {
            window.focus(&self.focus_handle, cx);
        }
    }

    fn close_switcher(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.panel.update(cx, |panel, cx| panel.close(cx));
        window.focus(&self.focus_handle, cx);
    }

    fn on_toggle_switcher(
        &mut self,
        _: &ToggleSwitcher,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.toggle_switcher(window, cx);
    }

    fn on_panel_event(
        &mut self,
        _panel: &Entity<SwitcherPanel>,
        event: &SwitcherPanelEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match event {
            SwitcherPanelEvent::Dismiss => {}
            SwitcherPanelEvent::Selected(ws) => {
                tracing::info!("Switched to workspace '{}'", ws.name);
            }
            SwitcherPanelEvent::Created(ws) => {
                tracing::info!("Created workspace '{}' ({})", ws.name, ws.id);
            }
        }
        window.focus(&self.focus_handle, cx);
        cx.notify();
    }

    // -------------------------------------------------------------------------
    // Render Helpers
    // -------------------------------------------------------------------------

    fn render_trigger(&self, theme: &Theme, cx: &mut Context<Self>) -> AnyElement {
        let label = trigger_label(
            self.panel
                .read(cx)
                .current_workspace()
                .map(|ws| ws.name.as_str()),
        )
        .to_string();
        let bounds_store = self.trigger_bounds.clone();

        div()
            .id("switcher-trigger")
            .relative()
            .w(px(256.0))
            .h(px(36.0))
            .px_3()
            .flex()
            .items_center()
            .justify_between()
            .border_1()
            .border_color(theme.border)
            .rounded(theme.radius)
            .bg(theme.surface)
            .cursor_pointer()
            .hover(|style| style.bg(theme.surface_hover))
            .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                this.toggle_switcher(window, cx);
            }))
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(theme.text)
                    .text_ellipsis()
                    .overflow_hidden()
                    .child(label),
            )
            .child(div().text_xs().text_color(theme.text_muted).child("▾"))
            // Record painted bounds to anchor the dropdown
            .child(
                canvas(
                    move |bounds, _window, _cx| {
                        *bounds_store.borrow_mut() = bounds;
                    },
                    |_, _, _, _| {},
                )
                .absolute()
                .top_0()
                .left_0()
                .size_full(),
            )
            .into_any_element()
    }

    fn render_header(&self, theme: &Theme, cx: &mut Context<Self>) -> AnyElement {
        div()
            .w_full()
            .h(theme.header_height)
            .px_4()
            .flex()
            .items_center()
            .justify_between()
            .border_b_1()
            .border_color(theme.border)
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_4()
                    .child(
                        div()
                            .text_2xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.accent)
                            .child("Postman"),
                    )
                    .child(self.render_trigger(theme, cx)),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(theme.text_muted)
                    .child("Welcome back!"),
            )
            .into_any_element()
    }

    fn render_column(title: &str, items: Vec<AnyElement>, theme: &Theme) -> AnyElement {
        div()
            .flex_1()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(theme.text)
                    .child(title.to_string()),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .text_color(theme.text_muted)
                    .children(items),
            )
            .into_any_element()
    }

    fn render_main(theme: &Theme) -> AnyElement {
        let features = KEY_FEATURES
            .iter()
            .map(|(icon, title, detail)| {
                div()
                    .flex()
                    .gap_1()
                    .child(format!("{} ", icon))
                    .child(
                        div()
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.text)
                            .child(*title),
                    )
                    .child(format!(" - {}", detail))
                    .into_any_element()
            })
            .collect();

        let problems = SOLVED_PROBLEMS
            .iter()
            .map(|text| div().child(format!("✅ {}", text)).into_any_element())
            .collect();

        div()
            .w_full()
            .max_w(px(896.0))
            .px_4()
            .py_8()
            .flex()
            .flex_col()
            .child(
                div()
                    .mb_4()
                    .text_3xl()
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.text)
                    .child("Workspace Switcher Redesign"),
            )
            .child(
                div()
                    .mb_8()
                    .text_lg()
                    .text_color(theme.text_muted)
                    .child(
                        "Experience the new intelligent workspace navigation that puts your \
                         most important workspaces first.",
                    ),
            )
            .child(
                div()
                    .flex()
                    .gap_8()
                    .child(Self::render_column("Key Features", features, theme))
                    .child(Self::render_column("Solves Key Problems", problems, theme)),
            )
            .into_any_element()
    }

    fn render_overlay(&self, cx: &mut Context<Self>) -> AnyElement {
        let origin = dropdown_origin(*self.trigger_bounds.borrow());
        let preview = self.panel.read(cx).preview();

        let backdrop = div()
            .id("switcher-backdrop")
            .absolute()
            .top_0()
            .left_0()
            .size_full()
            .occlude()
            // Clicking outside the dropdown closes it
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _: &MouseDownEvent, window, cx| {
                    this.close_switcher(window, cx);
                }),
            )
            .child(
                anchored()
                    .position(origin)
                    .anchor(Corner::TopLeft)
                    .snap_to_window_with_margin(px(8.0))
                    .child(self.panel.clone()),
            )
            .when_some(preview, |this, (ws, placement)| {
                this.child(
                    anchored()
                        .position(point(px(placement.left), px(placement.top)))
                        .anchor(Corner::TopLeft)
                        // Zero-height row centres the card on the anchor
                        .child(
                            div()
                                .h(px(0.0))
                                .flex()
                                .items_center()
                                .child(PreviewCardView::new(ws)),
                        ),
                )
            });

        deferred(backdrop).with_priority(1).into_any_element()
    }
}

impl Focusable for DemoPage {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for DemoPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme().clone();
        let is_open = self.panel.read(cx).is_open();
        let header = self.render_header(&theme, cx);
        let overlay = is_open.then(|| self.render_overlay(cx));

        div()
            .id("demo-page")
            .key_context(PAGE_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_toggle_switcher))
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(theme.background)
            .font_family(theme.font_family.clone())
            .text_size(theme.font_size)
            .child(header)
            .child(Self::render_main(&theme))
            .children(overlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::size;

    #[test]
    fn test_trigger_label() {
        assert_eq!(trigger_label(None), "Select Workspace");
        assert_eq!(trigger_label(Some("My Workspace")), "My Workspace");
    }

    #[test]
    fn test_dropdown_sits_under_trigger() {
        let bounds = Bounds {
            origin: point(px(120.0), px(10.0)),
            size: size(px(256.0), px(36.0)),
        };
        assert_eq!(dropdown_origin(bounds), point(px(120.0), px(50.0)));
    }
}
