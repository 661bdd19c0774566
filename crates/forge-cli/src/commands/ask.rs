use forge_shell::{ShellConfig, WidgetKind};

pub fn run(config: &ShellConfig, likelihood: &[String]) -> miette::Result<()> {
    let mut host = super::mount(WidgetKind::Oracle, config);
    let line = if likelihood.is_empty() {
        "ask".to_string()
    } else {
        format!("ask {}", likelihood.join(" "))
    };
    println!("{}", host.handle(&line)?);
    Ok(())
}

pub fn inspire(config: &ShellConfig) -> miette::Result<()> {
    let mut host = super::mount(WidgetKind::Oracle, config);
    println!("{}", host.handle("inspire")?);
    Ok(())
}
