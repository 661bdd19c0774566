//! The widget trait and the host slot widgets are mounted into.

use crate::config::ShellConfig;
use crate::dice::DiceWidget;
use crate::error::{ShellError, ShellResult};
use crate::oracle::OracleWidget;
use crate::theme::{Theme, ThemeSignal};

/// A self-contained interactive component.
pub trait Widget {
    /// Short name shown in prompts, e.g. `dice`.
    fn name(&self) -> &'static str;

    /// React to one line of input and return the text to show.
    fn handle(&mut self, input: &str) -> ShellResult<String>;

    /// The widget's full view.
    fn render(&self, theme: Theme) -> String;

    /// Release anything held for the mounted lifetime. Called exactly once,
    /// before the widget is dropped by its host.
    fn teardown(&mut self) {}
}

/// The widgets a host can build by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// Dice roller.
    Dice,
    /// Yes/no oracle.
    Oracle,
}

impl WidgetKind {
    /// Parse a widget name.
    pub fn parse(s: &str) -> ShellResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "dice" | "roller" => Ok(Self::Dice),
            "oracle" => Ok(Self::Oracle),
            other => Err(ShellError::UnknownWidget(other.to_string())),
        }
    }

    /// Build a fresh widget of this kind.
    pub fn build(self, config: &ShellConfig, theme: &ThemeSignal) -> Box<dyn Widget> {
        match self {
            Self::Dice => Box::new(DiceWidget::new(config, theme.subscribe())),
            Self::Oracle => Box::new(OracleWidget::new(config, theme.subscribe())),
        }
    }
}

/// A slot holding at most one mounted widget.
pub struct Host {
    theme: ThemeSignal,
    mounted: Option<Box<dyn Widget>>,
}

impl Host {
    /// An empty host sharing `theme` with whatever it mounts.
    pub fn new(theme: ThemeSignal) -> Self {
        Self {
            theme,
            mounted: None,
        }
    }

    /// The theme signal handed to widgets.
    pub fn theme(&self) -> &ThemeSignal {
        &self.theme
    }

    /// Mount `widget`, tearing down whatever was mounted before, and return
    /// its first render.
    pub fn mount(&mut self, widget: Box<dyn Widget>) -> String {
        self.unmount();
        tracing::debug!(widget = widget.name(), "mounting widget");
        let view = widget.render(self.theme.get());
        self.mounted = Some(widget);
        view
    }

    /// Build and mount a widget of `kind`.
    pub fn mount_kind(&mut self, kind: WidgetKind, config: &ShellConfig) -> String {
        let widget = kind.build(config, &self.theme);
        self.mount(widget)
    }

    /// Tear down and drop the mounted widget, if any.
    pub fn unmount(&mut self) {
        if let Some(mut old) = self.mounted.take() {
            tracing::debug!(widget = old.name(), "tearing down widget");
            old.teardown();
        }
    }

    /// Whether a widget is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Name of the mounted widget.
    pub fn current(&self) -> Option<&'static str> {
        self.mounted.as_ref().map(|w| w.name())
    }

    /// Pass one line of input to the mounted widget.
    pub fn handle(&mut self, input: &str) -> ShellResult<String> {
        self.mounted
            .as_mut()
            .ok_or(ShellError::NothingMounted)?
            .handle(input)
    }

    /// Render the mounted widget with the current theme.
    pub fn render(&self) -> ShellResult<String> {
        let widget = self.mounted.as_ref().ok_or(ShellError::NothingMounted)?;
        Ok(widget.render(self.theme.get()))
    }
}

impl Drop for Host {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl std::fmt::Debug for Host {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Host")
            .field("theme", &self.theme.get())
            .field("mounted", &self.current())
            .finish()
    }
}
