//! Minimal command trait shared by CLI subcommands.

use crate::error::Result;

pub trait Command {
    type Args;
    type Output;

    fn new(args: Self::Args) -> Self;
    fn execute(&self) -> Result<Self::Output>;
    fn name() -> &'static str;
}
