use std::process::ExitCode;

use opal_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    opal_driver::run(argument)
}
