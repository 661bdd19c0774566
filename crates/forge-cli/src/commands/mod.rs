pub mod ask;
pub mod history;
pub mod repl;
pub mod roll;

use forge_shell::{Host, ShellConfig, Theme, ThemeSignal, WidgetKind};

/// A host with a fresh widget of `kind` mounted.
fn mount(kind: WidgetKind, config: &ShellConfig) -> Host {
    let mut host = Host::new(ThemeSignal::new(Theme::from_dark(config.dark)));
    host.mount_kind(kind, config);
    host
}
