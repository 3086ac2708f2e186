use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use seg2::api::{intersect_with, try_intersect, ParamAxis, SegCfg, Segment};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod provenance;

#[derive(Parser)]
#[command(name = "seg2")]
#[command(about = "Classify intersections of finite 2D segments")]
struct Cmd {
    /// Absolute threshold on |perp(u, v)| below which directions count as parallel
    #[arg(long, global = true, allow_hyphen_values = true, default_value_t = 1e-8)]
    eps: f64,

    /// Axis used to parameterize collinear overlaps
    #[arg(long, global = true, value_enum, default_value_t = Axis::FirstNonZero)]
    axis: Axis,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Axis {
    /// x component unless it is zero
    FirstNonZero,
    /// larger-magnitude component
    Dominant,
}

impl From<Axis> for ParamAxis {
    fn from(a: Axis) -> Self {
        match a {
            Axis::FirstNonZero => ParamAxis::FirstNonZero,
            Axis::Dominant => ParamAxis::Dominant,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Intersect (0,0)-(5,5) with (0,2)-(3,0) and print the result
    Demo,
    /// Intersect two segments given as "x0,y0,x1,y1"
    Check {
        #[arg(long, allow_hyphen_values = true)]
        s1: Segment,
        #[arg(long, allow_hyphen_values = true)]
        s2: Segment,
        /// Print a JSON record instead of the message
        #[arg(long)]
        json: bool,
    },
    /// Classify every row of a CSV (ax,ay,bx,by,cx,cy,dx,dy) and write JSON records
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

impl Cmd {
    fn cfg(&self) -> Result<SegCfg> {
        if !self.eps.is_finite() || self.eps < 0.0 {
            bail!("--eps must be finite and non-negative, got {}", self.eps);
        }
        Ok(SegCfg::default()
            .with_eps_parallel(self.eps)
            .with_param_axis(self.axis.into()))
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = cmd.cfg()?;
    match cmd.action {
        Action::Demo => demo(cfg),
        Action::Check { s1, s2, json } => check(s1, s2, json, cfg),
        Action::Batch { input, out } => {
            batch::run(&input, &out, cfg, cmd.axis).map(|_| ())
        }
        Action::Report => report(cfg, cmd.axis),
    }
}

fn demo(cfg: SegCfg) -> Result<()> {
    let s1 = Segment::from_coords(0.0, 0.0, 5.0, 5.0);
    let s2 = Segment::from_coords(0.0, 2.0, 3.0, 0.0);
    let r = intersect_with(s1, s2, cfg);
    tracing::info!(s1 = %s1, s2 = %s2, kind = r.kind().as_str(), "demo");
    println!("{r}");
    Ok(())
}

fn check(s1: Segment, s2: Segment, json: bool, cfg: SegCfg) -> Result<()> {
    let r = try_intersect(s1, s2, cfg)?;
    tracing::info!(s1 = %s1, s2 = %s2, kind = r.kind().as_str(), "check");
    if json {
        let rec = batch::Record::new(0, &r);
        println!("{}", serde_json::to_string_pretty(&rec)?);
    } else {
        println!("{r}");
    }
    Ok(())
}

fn report(cfg: SegCfg, axis: Axis) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": seg2::VERSION,
        "cfg": {
            "eps_parallel": cfg.eps_parallel,
            "axis": axis,
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_and_segments() {
        let cmd = Cmd::try_parse_from([
            "seg2", "--eps", "0", "--axis", "dominant", "check", "--s1", "-1,0,1,0", "--s2",
            "0,-1,0,1",
        ])
        .unwrap();
        let cfg = cmd.cfg().unwrap();
        assert_eq!(cfg.eps_parallel, 0.0);
        assert_eq!(cfg.param_axis, ParamAxis::Dominant);
        match cmd.action {
            Action::Check { s1, s2, json } => {
                assert_eq!(s1, Segment::from_coords(-1.0, 0.0, 1.0, 0.0));
                assert_eq!(s2, Segment::from_coords(0.0, -1.0, 0.0, 1.0));
                assert!(!json);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn defaults_match_library_cfg() {
        let cmd = Cmd::try_parse_from(["seg2", "demo"]).unwrap();
        assert_eq!(cmd.cfg().unwrap(), SegCfg::default());
    }

    #[test]
    fn rejects_bad_segments_and_eps() {
        assert!(Cmd::try_parse_from(["seg2", "check", "--s1", "1,2,3", "--s2", "0,0,1,1"]).is_err());
        let cmd = Cmd::try_parse_from(["seg2", "--eps", "-1", "demo"]).unwrap();
        assert!(cmd.cfg().is_err());
    }

    #[test]
    fn check_rejects_non_finite() {
        let s1: Segment = "NaN,0,1,1".parse().unwrap();
        let s2 = Segment::from_coords(0.0, 1.0, 1.0, 0.0);
        let err = check(s1, s2, false, SegCfg::default()).unwrap_err();
        assert!(err.to_string().contains("segment 1"));
    }
}
