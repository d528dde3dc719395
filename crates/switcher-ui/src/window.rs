//! Window management for the switcher demo.
//!
//! Opens a single normal window hosting the `DemoPage`.

use std::sync::Arc;

use gpui::{
    px, size, App, AppContext, Bounds, Focusable, TitlebarOptions, WindowAppearance, WindowBounds,
    WindowHandle, WindowKind, WindowOptions,
};
use switcher_core::AppConfig;

use crate::backend::Backend;
use crate::keymap::{apply_keybindings, resolve_bindings};
use crate::theme::{Theme, ThemeSettings};
use crate::views::DemoPage;

// =============================================================================
// Window Configuration
// =============================================================================

/// Default window dimensions.
pub const DEFAULT_WIDTH: f32 = 1100.0;
pub const DEFAULT_HEIGHT: f32 = 760.0;

const WINDOW_TITLE: &str = "Workspace Switcher";

/// Create window options for the demo page.
///
/// Note: Window bounds are set after creation since we need App context.
fn create_window_options() -> WindowOptions {
    WindowOptions {
        window_bounds: None,
        titlebar: Some(TitlebarOptions {
            title: Some(WINDOW_TITLE.into()),
            ..Default::default()
        }),
        focus: true,
        show: true,
        kind: WindowKind::Normal,
        is_movable: true,
        ..Default::default()
    }
}

fn is_dark(appearance: WindowAppearance) -> bool {
    matches!(
        appearance,
        WindowAppearance::Dark | WindowAppearance::VibrantDark
    )
}

/// Open the demo window. Returns `None` if the window couldn't be created.
fn open_demo_window(
    config: &AppConfig,
    backend: Arc<dyn Backend>,
    recent_searches: Vec<String>,
    cx: &mut App,
) -> Option<WindowHandle<DemoPage>> {
    let window_size = size(px(DEFAULT_WIDTH), px(DEFAULT_HEIGHT));
    let bounds = Bounds::centered(None, window_size, cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        ..create_window_options()
    };

    let settings = ThemeSettings::from_config(&config.appearance);
    let system_is_dark = is_dark(cx.window_appearance());
    let behavior = config.behavior.clone();

    cx.open_window(options, |window, cx| {
        // Initialize theme as a global
        cx.set_global(Theme::from_settings(&settings, system_is_dark));

        let page = cx.new(|inner_cx| {
            DemoPage::new(backend, behavior, recent_searches, window, inner_cx)
        });
        let handle = page.read(cx).focus_handle(cx);
        window.focus(&handle, cx);
        page
    })
    .map_err(|e| tracing::error!("Failed to open window: {}", e))
    .ok()
}

// =============================================================================
// App Entry Point
// =============================================================================

/// Initialize and run the demo application.
///
/// 1. Creates the GPUI application
/// 2. Sets up keybindings (defaults + `[keymap]` overrides)
/// 3. Opens the demo window
/// 4. Runs the main loop until the window closes
pub fn run_demo(config: AppConfig, backend: Arc<dyn Backend>, recent_searches: Vec<String>) {
    gpui::Application::new().run(move |cx| {
        // Initialize gpui-component
        gpui_component::init(cx);

        let bindings = resolve_bindings(&config.keymap);
        apply_keybindings(&bindings, cx);

        if open_demo_window(&config, backend, recent_searches, cx).is_none() {
            cx.quit();
            return;
        }

        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        cx.activate(true);
    });
}

// =============================================================================
// Tests
// =============================================================================
