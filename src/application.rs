use gpui::{AppContext, Bounds, TitlebarOptions, WindowBounds, WindowOptions, px, size};

use crate::config::AppConfig;
use crate::signup::{SignupForm, TITLE};
use crate::theme::Theme;

type LaunchHook = Box<dyn FnOnce(&mut gpui::App) + 'static>;

/// Boots gpui, installs the theme and opens the registration window.
pub struct SignupApplication {
    application: gpui::Application,
    config: AppConfig,
    theme: Theme,
    launch_hooks: Vec<LaunchHook>,
}

impl Default for SignupApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupApplication {
    pub fn new() -> Self {
        Self::from_application(gpui::Application::new())
    }

    pub fn headless() -> Self {
        Self::from_application(gpui::Application::headless())
    }

    pub fn from_application(application: gpui::Application) -> Self {
        Self {
            application,
            config: AppConfig::default(),
            theme: Theme::default(),
            launch_hooks: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn before_launch(mut self, hook: impl FnOnce(&mut gpui::App) + 'static) -> Self {
        self.launch_hooks.push(Box::new(hook));
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn run(self) {
        let config = self.config;
        let theme = self.theme;
        let launch_hooks = self.launch_hooks;
        self.application.run(move |cx| {
            theme.install(cx);

            for hook in launch_hooks {
                hook(cx);
            }

            let bounds = Bounds::centered(
                None,
                size(px(config.window_width), px(config.window_height)),
                cx,
            );
            let options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(TITLE.into()),
                    ..Default::default()
                }),
                ..Default::default()
            };
            match cx.open_window(options, move |_window, cx| {
                cx.new(move |cx| SignupForm::new(&config, cx))
            }) {
                Ok(_) => {
                    log::info!(
                        "registration window opened ({}x{})",
                        config.window_width,
                        config.window_height
                    );
                    cx.activate(true);
                }
                Err(error) => {
                    log::error!("failed to open registration window: {error:#}");
                    cx.quit();
                }
            }
        });
    }
}
