// Command line surface: one function, one or two complex literals

use anyhow::{anyhow, bail, Context as _, Result};
use bigcomplex::{BigComplex, Context, DEFAULT_PRECISION};
use clap::{Parser, ValueEnum};
use log::debug;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Function {
    Add,
    Sub,
    Mul,
    Div,
    #[clap(alias = "modulo")]
    Mod,
    Gcd,
    Pow,
    Abs,
    #[clap(alias = "arg")]
    Phase,
    #[clap(alias = "conjugate")]
    Conj,
    #[clap(alias = "reciprocal")]
    Recip,
    Sqrt,
    Exp,
    #[clap(alias = "ln")]
    Log,
    Log10,
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Asin,
    Acos,
    Atan,
}

impl Function {
    /// Whether the function takes a second operand.
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            Function::Add
                | Function::Sub
                | Function::Mul
                | Function::Div
                | Function::Mod
                | Function::Gcd
                | Function::Pow
        )
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "bigcomplex",
    about = "Evaluate complex functions at arbitrary decimal precision",
    version
)]
pub struct Cli {
    /// Function to evaluate
    #[arg(value_enum)]
    pub function: Function,

    /// Complex literal, e.g. "3 + 4i" or "(3, 4)"
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Second operand of add, sub, mul, div, mod, gcd and pow
    #[arg(allow_hyphen_values = true)]
    pub operand: Option<String>,

    /// Digits after the decimal point
    #[arg(
        short,
        long,
        env = "BIGCOMPLEX_PRECISION",
        default_value_t = DEFAULT_PRECISION
    )]
    pub precision: u64,
}

fn literal(text: &str) -> Result<BigComplex> {
    text.parse::<BigComplex>()
        .with_context(|| format!("could not read {:?}", text))
}

/// Runs the requested function and formats its result.
pub fn evaluate(cli: &Cli) -> Result<String> {
    let ctx = Context::new(cli.precision)?;
    let z = literal(&cli.value)?;
    let operand = match (&cli.operand, cli.function.is_binary()) {
        (Some(text), true) => Some(literal(text)?),
        (None, true) => bail!("{:?} needs a second operand", cli.function),
        (Some(_), false) => bail!("{:?} takes a single operand", cli.function),
        (None, false) => None,
    };
    let w = || operand.clone().ok_or_else(|| anyhow!("missing operand"));
    debug!("{:?} at precision {}", cli.function, ctx.precision());

    let result = match cli.function {
        Function::Add => &z + &w()?,
        Function::Sub => &z - &w()?,
        Function::Mul => &z * &w()?,
        Function::Div => z.divide(&w()?)?,
        Function::Mod => z.modulo(&w()?)?,
        Function::Gcd => z.gcd(&w()?, &ctx)?,
        Function::Pow => z.pow(&w()?, &ctx)?,
        Function::Abs => BigComplex::from_real(z.abs(&ctx)?),
        Function::Phase => BigComplex::from_real(z.phase(&ctx)?),
        Function::Conj => z.conjugate(),
        Function::Recip => z.reciprocal(),
        Function::Sqrt => z.sqrt(&ctx)?,
        Function::Exp => z.exp(&ctx),
        Function::Log => z.log(&ctx)?,
        Function::Log10 => z.log10(&ctx)?,
        Function::Sin => z.sin(&ctx),
        Function::Cos => z.cos(&ctx),
        Function::Tan => z.tan(&ctx)?,
        Function::Sinh => z.sinh(&ctx),
        Function::Cosh => z.cosh(&ctx),
        Function::Tanh => z.tanh(&ctx)?,
        Function::Asin => z.asin(&ctx)?,
        Function::Acos => z.acos(&ctx)?,
        Function::Atan => z.atan(&ctx)?,
    };
    Ok(result.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String> {
        let mut full = vec!["bigcomplex"];
        full.extend_from_slice(args);
        evaluate(&Cli::try_parse_from(full)?)
    }

    #[test]
    fn binary_functions() {
        assert_eq!(run(&["add", "3 + 13i", "7 + 5i"]).unwrap(), "10 + 18i");
        assert_eq!(run(&["mul", "7 + 5i", "3 + 13i"]).unwrap(), "-44 + 106i");
        assert_eq!(run(&["div", "(6, 4)", "(3, 2)"]).unwrap(), "2");
    }

    #[test]
    fn unary_functions() {
        assert_eq!(run(&["abs", "4 + 3i"]).unwrap(), "5");
        assert_eq!(run(&["sqrt", "-25"]).unwrap(), "0 + 5i");
        assert_eq!(
            run(&["--precision", "10", "sqrt", "-5"]).unwrap(),
            "0 + 2.2360679775i"
        );
        assert_eq!(run(&["conj", "4 + 3i"]).unwrap(), "4 - 3i");
    }

    #[test]
    fn operand_count_is_checked() {
        assert!(run(&["add", "1"]).is_err());
        assert!(run(&["sqrt", "1", "2"]).is_err());
    }

    #[test]
    fn failures_are_reported() {
        assert!(run(&["div", "1", "0"]).is_err());
        assert!(run(&["log", "0"]).is_err());
        assert!(run(&["abs", "not a number"]).is_err());
        assert!(run(&["--precision", "0", "abs", "1"]).is_err());
    }
}
