use clap::Parser;

mod commands;
mod output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "repath")]
#[command(version = VERSION)]
#[command(about = "Rewrite the stale JUCE path inside the AIplayer Xcode project file")]
struct Cli {}

fn main() -> std::process::ExitCode {
    let _cli = Cli::parse();

    let exit_code = match commands::rewrite::run() {
        Ok((out, exit_code)) => {
            output::print_output(&out);
            exit_code
        }
        Err(err) => {
            output::print_error(&err);
            output::exit_code_for_error(err.code)
        }
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
