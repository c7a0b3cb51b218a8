//! Incremental quad-viewer demos.
//!
//! Each step adds one capability over the previous one:
//! triangle → textured quad → keyboard camera → dynamic mesh.

mod steps;

use anyhow::{Result, bail};
use quadview_engine::logging::{LoggingConfig, init_logging};

const USAGE: &str = "\
usage: quadview [STEP] [--texture PATH]

steps:
  triangle   solid triangle on a cyan background
  quad       textured quad (checkerboard, or --texture image)
  camera     textured quad with a keyboard fly camera (default)
  dynamic    quad whose vertices are rewritten every frame

camera keys: W/S/A/D move, R/F up/down, arrows look, Escape quits
";

#[derive(Debug, Clone, PartialEq)]
struct Options {
    step: Step,
    texture: Option<String>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Step {
    Triangle,
    Quad,
    Camera,
    Dynamic,
}

impl Options {
    /// Parses the command line; `None` means help was requested.
    fn parse(args: impl Iterator<Item = String>) -> Result<Option<Self>> {
        let mut step = Step::Camera;
        let mut texture = None;

        let mut args = args;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "triangle" => step = Step::Triangle,
                "quad" => step = Step::Quad,
                "camera" => step = Step::Camera,
                "dynamic" => step = Step::Dynamic,
                "--texture" => match args.next() {
                    Some(path) => texture = Some(path),
                    None => bail!("--texture requires a path"),
                },
                "-h" | "--help" => return Ok(None),
                other => bail!("unknown step {other:?}\n\n{USAGE}"),
            }
        }

        Ok(Some(Self { step, texture }))
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let Some(opts) = Options::parse(std::env::args().skip(1))? else {
        print!("{USAGE}");
        return Ok(());
    };
    log::info!("starting step {:?}", opts.step);

    match opts.step {
        Step::Triangle => steps::triangle::run(),
        Step::Quad => steps::quad::run(opts.texture),
        Step::Camera => steps::camera::run(opts.texture),
        Step::Dynamic => steps::dynamic::run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Option<Options>> {
        Options::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn default_step_is_camera() {
        let opts = parse(&[]).unwrap().unwrap();
        assert_eq!(opts.step, Step::Camera);
        assert_eq!(opts.texture, None);
    }

    #[test]
    fn step_and_texture() {
        let opts = parse(&["quad", "--texture", "img.png"]).unwrap().unwrap();
        assert_eq!(opts.step, Step::Quad);
        assert_eq!(opts.texture.as_deref(), Some("img.png"));
    }

    #[test]
    fn help_is_not_an_error() {
        assert_eq!(parse(&["-h"]).unwrap(), None);
        assert_eq!(parse(&["--help"]).unwrap(), None);
    }

    #[test]
    fn texture_without_path_is_an_error() {
        assert!(parse(&["--texture"]).is_err());
    }

    #[test]
    fn unknown_step_is_an_error() {
        assert!(parse(&["cube"]).is_err());
    }
}
