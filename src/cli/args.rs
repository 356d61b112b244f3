//! Command line argument parsing for argstrip.
//!
//! Every argument is collected verbatim, so clap's own help and version
//! flags are switched off and an escape marker is placed ahead of the
//! user's tokens.

use std::ffi::OsString;

use clap::Parser;

/// Command line arguments for argstrip
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Arguments to sanitize
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..,
        value_parser = clap::value_parser!(OsString)
    )]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parse the process arguments without letting clap interpret any of them
    pub fn parse_verbatim() -> Self {
        Self::parse_from(verbatim(std::env::args_os()))
    }

    /// Arguments as text, with invalid UTF-8 replaced
    pub fn lossy_args(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}

/// Insert `--` after the binary name so clap treats every user token as a value
pub fn verbatim<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut escaped: Vec<OsString> = args.next().into_iter().collect();
    escaped.push(OsString::from("--"));
    escaped.extend(args);
    escaped
}
