use forge_dice::DiceExpr;
use forge_shell::{ShellConfig, ShellError, WidgetKind};

pub fn run(config: &ShellConfig, dice: &[String], custom: bool) -> miette::Result<()> {
    let mut host = super::mount(WidgetKind::Dice, config);

    if custom {
        for expr in dice {
            println!("{}", host.handle(&format!("custom {expr}"))?);
        }
        return Ok(());
    }

    // `2d6` puts two d6 in the tray
    let mut names = Vec::new();
    for arg in dice {
        let expr = DiceExpr::parse(arg).map_err(ShellError::from)?;
        names.extend(std::iter::repeat_n(
            format!("d{}", expr.sides),
            expr.count as usize,
        ));
    }
    host.handle(&format!("add {}", names.join(" ")))?;
    println!("{}", host.handle("roll")?);
    Ok(())
}
