//! Floating detail card shown beside a hovered row.

use gpui::{div, prelude::*, px, App, FontWeight, IntoElement, ParentElement, Styled, Window};
use switcher_core::{Member, Workspace};

use crate::model::PreviewCard;
use crate::theme::{Theme, ThemeExt};

/// Overlap between neighbouring avatars in the face pile.
const FACE_OVERLAP: f32 = 6.0;

/// Preview card element. Position it with `anchored()`.
#[derive(IntoElement)]
pub struct PreviewCardView {
    workspace: Workspace,
}

impl PreviewCardView {
    pub fn new(workspace: Workspace) -> Self {
        Self { workspace }
    }
}

/// Round avatar showing a member's initials.
fn avatar(initials: String, diameter: f32, theme: &Theme) -> impl IntoElement {
    div()
        .size(px(diameter))
        .flex_shrink_0()
        .rounded_full()
        .bg(theme.surface_hover)
        .border_1()
        .border_color(theme.surface)
        .flex()
        .items_center()
        .justify_center()
        .text_size(px(diameter * 0.4))
        .text_color(theme.text)
        .child(initials)
}

fn face(member: &Member, index: usize, theme: &Theme) -> impl IntoElement {
    let el = avatar(member.initials(), 20.0, theme);
    div()
        .when(index > 0, |this| this.ml(px(-FACE_OVERLAP)))
        .child(el)
}

impl RenderOnce for PreviewCardView {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let card = PreviewCard::new(&self.workspace);

        let faces = card
            .face_pile
            .visible
            .iter()
            .enumerate()
            .map(|(i, member)| face(member, i, theme).into_any_element())
            .collect::<Vec<_>>();

        div()
            .id("preview-card")
            .w(theme.preview_width)
            .p_4()
            .flex()
            .flex_col()
            .gap_3()
            .bg(theme.surface)
            .border_1()
            .border_color(theme.border)
            .rounded(theme.radius)
            .shadow_lg()
            .text_xs()
            .text_color(theme.text_muted)
            // Icon, name, description
            .child(
                div()
                    .flex()
                    .items_start()
                    .gap_3()
                    .child(
                        div()
                            .size(theme.icon_size)
                            .flex_shrink_0()
                            .rounded(px(6.0))
                            .bg(theme.kind_color(self.workspace.kind))
                            .flex()
                            .items_center()
                            .justify_center()
                            .child(card.icon),
                    )
                    .child(
                        div()
                            .flex_1()
                            .min_w_0()
                            .child(
                                div()
                                    .mb_1()
                                    .text_sm()
                                    .font_weight(FontWeight::MEDIUM)
                                    .text_color(theme.text)
                                    .child(card.name.to_string()),
                            )
                            .child(card.description.to_string()),
                    ),
            )
            // Activity and owner
            .child(
                div()
                    .pt_3()
                    .border_t_1()
                    .border_color(theme.border)
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(card.last_updated.clone())
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .gap_1()
                            .child(avatar(card.owner_initials.clone(), 20.0, theme))
                            .child(
                                div()
                                    .text_color(theme.text)
                                    .child(card.owner_name.to_string()),
                            ),
                    ),
            )
            // Members and collections
            .child(
                div()
                    .pt_3()
                    .border_t_1()
                    .border_color(theme.border)
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .items_center()
                            .children(faces)
                            .when(card.face_pile.overflow > 0, |this| {
                                this.child(
                                    div()
                                        .ml_1()
                                        .child(format!("+{}", card.face_pile.overflow)),
                                )
                            }),
                    )
                    .child(card.collections.clone()),
            )
            .child(
                div()
                    .pt_3()
                    .border_t_1()
                    .border_color(theme.border)
                    .child(card.id_line.clone()),
            )
    }
}
