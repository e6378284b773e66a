use ggez::GameResult;
use log::{error, info};
use spirograph::app::{self, RunMode, DEFAULT_CURVE_COUNT};

fn main() -> GameResult {
    env_logger::init();
    info!("generating spirograph...");

    let mode = match parse_mode(std::env::args().skip(1)) {
        Ok(mode) => mode,
        Err(message) => {
            error!("{message}");
            eprintln!("usage: spirograph [--sparams R r l]");
            std::process::exit(2);
        }
    };

    app::run(mode)
}

/// `--sparams R r l` draws one curve with the given geometry; no arguments
/// runs the randomized animation.
fn parse_mode(mut args: impl Iterator<Item = String>) -> Result<RunMode, String> {
    match args.next().as_deref() {
        None => Ok(RunMode::Animated {
            count: DEFAULT_CURVE_COUNT,
        }),
        Some("--sparams") => {
            let mut value = |name: &str| -> Result<f32, String> {
                args.next()
                    .ok_or_else(|| format!("--sparams is missing {name}"))?
                    .parse::<f32>()
                    .map_err(|e| format!("bad {name}: {e}"))
            };
            let outer = value("R")?;
            let inner = value("r")?;
            let hole = value("l")?;
            Ok(RunMode::Single {
                outer: outer as u32,
                inner: inner as u32,
                hole,
            })
        }
        Some(other) => Err(format!("unknown argument: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_the_randomized_animation() {
        assert!(matches!(
            parse_mode(std::iter::empty::<String>()),
            Ok(RunMode::Animated { count: 4 })
        ));
    }

    #[test]
    fn sparams_triple_selects_the_single_curve_mode() {
        let args = ["--sparams", "300", "200", "0.5"].map(String::from).into_iter();
        match parse_mode(args) {
            Ok(RunMode::Single { outer, inner, hole }) => {
                assert_eq!((outer, inner), (300, 200));
                assert!((hole - 0.5).abs() < f32::EPSILON);
            }
            other => panic!("unexpected mode: {other:?}"),
        }
    }

    #[test]
    fn missing_or_malformed_values_are_rejected() {
        let missing = ["--sparams", "300"].map(String::from).into_iter();
        assert!(parse_mode(missing).is_err());

        let malformed = ["--sparams", "300", "abc", "0.5"].map(String::from).into_iter();
        assert!(parse_mode(malformed).is_err());

        let unknown = ["--whatever"].map(String::from).into_iter();
        assert!(parse_mode(unknown).is_err());
    }
}
