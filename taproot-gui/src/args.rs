use std::{error::Error, path::PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    ConfPath(PathBuf),
    Version,
    Help,
}

pub const USAGE: &str = r#"
Usage: taproot-gui [OPTIONS]

Options:
    --conf <PATH>       Path of the configuration file
    -v, --version       Display taproot-gui version
    -h, --help          Print help
"#;

/// Parse command-line arguments, program name excluded.
pub fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" | "--version" => res.push(Arg::Version),
            "-h" | "--help" => res.push(Arg::Help),
            "--conf" => {
                if let Some(path) = args.next() {
                    res.push(Arg::ConfPath(PathBuf::from(path)));
                } else {
                    return Err("missing arg to --conf".into());
                }
            }
            _ => return Err(format!("unknown argument '{}'", arg).into()),
        }
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert_eq!(Some(vec![]), parse_args(vec![]).ok());
        assert!(parse_args(vec!["--meth".into()]).is_err());
        assert!(parse_args(vec!["--conf".into()]).is_err());
        assert_eq!(
            Some(vec![Arg::ConfPath(PathBuf::from("/tmp/gui.toml"))]),
            parse_args(vec!["--conf".into(), "/tmp/gui.toml".into()]).ok()
        );
        assert_eq!(Some(vec![Arg::Version]), parse_args(vec!["-v".into()]).ok());
        assert_eq!(
            Some(vec![Arg::Help]),
            parse_args(vec!["--help".into()]).ok()
        );
    }
}
