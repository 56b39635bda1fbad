mod cli;

use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use calctree::{
    syntax::{texts, to_postfix, Lexer, TreeBuilder},
    tree::printer::render_sideways,
    ErrorInfo,
};
use clap::Parser;

// library errors borrow the expression text, so they are flattened before `?`
fn lib_err(err: ErrorInfo<'_>) -> anyhow::Error {
    anyhow!("{}", err)
}

fn run(args: &cli::Cli, out: &mut impl Write) -> Result<()> {
    let tokens = Lexer::new(&args.expression).tokenize();
    let postfix = to_postfix(tokens).map_err(lib_err)?;
    if args.postfix {
        writeln!(out, "{}", texts(&postfix).join(" "))?;
    }
    let mut root = TreeBuilder::new(postfix.into_iter())
        .build()
        .map_err(lib_err)?;
    if !args.no_rewrite {
        root.normalize_products();
    }
    let sideways = render_sideways(&root);
    if args.tree {
        writeln!(out, "{}", root)?;
        write!(out, "{}", sideways)?;
    }
    if let Some(path) = &args.output {
        std::fs::write(path, &sideways)
            .with_context(|| format!("could not write tree to {}", path.display()))?;
        log::info!("wrote tree to {}", path.display());
    }
    for x in &args.values {
        let value = root
            .eval(*x)
            .map_err(lib_err)
            .with_context(|| format!("could not evaluate with x = {}", x))?;
        writeln!(out, "x = {}: {}", x, value)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = cli::Cli::parse();
    log::debug!("{:?}", args);
    let stdout = io::stdout();
    if let Err(err) = run(&args, &mut stdout.lock()) {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn output(argv: &[&str]) -> Result<String> {
        let args = cli::Cli::try_parse_from(argv)?;
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn evaluates_each_value_and_prints_postfix() {
        let stdout = output(&["calctree", "x*3+5", "-x", "2", "-x", "-1", "--postfix"]).unwrap();
        assert_eq!(stdout, "x 3 * 5 +\nx = 2: 11\nx = -1: 2\n");
    }

    #[test]
    fn long_flag_and_default_value() {
        assert_eq!(output(&["calctree", "x + 4", "--at", "-6"]).unwrap(), "x = -6: -2\n");
        assert_eq!(output(&["calctree", "7 % 4"]).unwrap(), "x = 0: 3\n");
    }

    #[test]
    fn tree_without_rewrite() {
        let stdout = output(&["calctree", "x*3", "--no-rewrite", "--tree", "-x", "1"]).unwrap();
        assert_eq!(stdout, "(x * 3)\n    3\n*\n    x\nx = 1: 3\n");
    }

    #[test]
    fn tree_is_rewritten_by_default() {
        let stdout = output(&["calctree", "x*3", "--tree", "-x", "1"]).unwrap();
        assert_eq!(stdout, "(3 * x)\n    x\n*\n    3\nx = 1: 3\n");
    }

    #[test]
    fn writes_the_sideways_tree_to_a_file() {
        let path = std::env::temp_dir().join(format!("calctree-{}.txt", std::process::id()));
        let path_arg = path.to_string_lossy().into_owned();
        let stdout = output(&["calctree", "12 + x * 3", "-o", &path_arg]).unwrap();
        assert_eq!(stdout, "x = 0: 12\n");

        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        let mut expected = calctree::parse("12 + x * 3").unwrap();
        expected.normalize_products();
        assert_eq!(written, render_sideways(&expected));
    }

    #[test]
    fn library_errors_are_reported() {
        let err = output(&["calctree", "(1 + 2"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed expression: unclosed parenthesis at 0..1, expected a closing parenthesis"
        );
        let err = output(&["calctree", "1 / x"]).unwrap_err();
        assert_eq!(format!("{:#}", err), "could not evaluate with x = 0: division by zero");
    }
}
