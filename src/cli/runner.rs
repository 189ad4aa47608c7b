use std::path::{Path, PathBuf};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use logoproc::io::writers::report::write_report;
use logoproc::{
    JobKind, JobSpec, Manifest, ProcessingParams, Variant, parse_hex_color, process_file_to_path,
    process_manifest,
};

use super::args::{CliArgs, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_DIR};
use super::errors::AppError;

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Variant defaults, then the JSON preset, then individual CLI overrides
fn resolve_params(args: &CliArgs, variant: Variant) -> Result<ProcessingParams, AppError> {
    let mut params = match &args.params {
        Some(path) => {
            ProcessingParams::from_json_file(path, &ProcessingParams::for_variant(variant))?
        }
        None => ProcessingParams::for_variant(variant),
    };

    if let Some(strategy) = args.strategy {
        params.recolor = strategy;
    }
    if let Some(t) = args.light_threshold {
        params.light_threshold = t;
    }
    if let Some(t) = args.dark_threshold {
        params.dark_threshold = t;
    }
    if let Some(t) = args.tolerance {
        params.tolerance = t;
    }
    if let Some(c) = &args.from_color {
        params.source_color = parse_hex_color(c)?;
    }
    if let Some(c) = &args.to_color {
        params.target_color = parse_hex_color(c)?;
    }

    params.validate()?;
    Ok(params)
}

fn process_single_file(args: &CliArgs, input: &Path) -> Result<(), AppError> {
    for (flag, set) in [
        ("--manifest", args.manifest.is_some()),
        ("--source-dir", args.source_dir.is_some()),
        ("--output-dir", args.output_dir.is_some()),
        ("--fail-fast", args.fail_fast),
        ("--report", args.report.is_some()),
    ] {
        if set {
            return Err(AppError::WrongMode {
                arg: flag.to_string(),
                mode: "manifest",
            });
        }
    }
    let output = args.output.as_deref().ok_or(AppError::MissingArgument {
        arg: "--output".to_string(),
    })?;

    let file_name = |p: &Path| {
        p.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    };
    let job = JobSpec {
        source: file_name(input),
        output: file_name(output),
        kind: if args.sheet {
            JobKind::ReferenceSheet
        } else {
            JobKind::Single
        },
        recolor: args.recolor,
        remove_background: !args.keep_background,
    };
    let params = resolve_params(args, args.variant.unwrap_or(Variant::Fixed))?;

    info!("Processing: {:?} -> {:?}", input, output);
    let (width, height) = process_file_to_path(input, output, &job, &params)?;
    info!("Saved {:?} ({}x{})", output, width, height);
    Ok(())
}

fn process_batch(args: &CliArgs) -> Result<(), AppError> {
    for (flag, set) in [
        ("--output", args.output.is_some()),
        ("--sheet", args.sheet),
        ("--recolor", args.recolor),
        ("--keep-background", args.keep_background),
    ] {
        if set {
            return Err(AppError::WrongMode {
                arg: flag.to_string(),
                mode: "single file",
            });
        }
    }

    let manifest = match (&args.manifest, args.variant) {
        (Some(_), Some(_)) => {
            return Err(AppError::Conflict {
                arg: "--variant".to_string(),
                other: "--manifest (the manifest sets its own variant)".to_string(),
            });
        }
        (Some(path), None) => {
            info!("Loading manifest: {:?}", path);
            Manifest::from_json_file(path)?
        }
        (None, variant) => Manifest::builtin(variant.unwrap_or(Variant::Fixed)),
    };
    let source_dir = args
        .source_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR));
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    let params = resolve_params(args, manifest.variant)?;

    info!("{}", "=".repeat(60));
    info!("Logo processing ({} pipeline)", manifest.variant);
    info!("{}", "=".repeat(60));

    let report = process_manifest(&manifest, &source_dir, &output_dir, &params, !args.fail_fast)?;

    info!("Processing complete!");
    info!("Processed: {}", report.processed);
    info!("Skipped: {}", report.skipped);
    info!("Errors: {}", report.errors);
    info!("Output directory: {:?}", output_dir);

    if let Some(path) = &args.report {
        write_report(path, manifest.variant, &source_dir, &output_dir, &report)?;
        info!("Report written to {:?}", path);
    }

    if report.errors > 0 {
        warn!("{} job(s) failed", report.errors);
        return Err(AppError::JobsFailed {
            failed: report.errors,
        });
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    match &args.input {
        Some(input) => process_single_file(&args, input)?,
        None => process_batch(&args)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use logoproc::RecolorStrategy;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("logoproc").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn overrides_apply_on_top_of_variant_defaults() {
        let args = parse(&[
            "--variant",
            "legacy",
            "--dark-threshold",
            "12",
            "--to-color",
            "#00D4FF",
            "--strategy",
            "tone",
        ]);
        let params = resolve_params(&args, Variant::Legacy).unwrap();
        assert_eq!(params.light_threshold, 240);
        assert_eq!(params.dark_threshold, 12);
        assert_eq!(params.recolor, RecolorStrategy::Tone);
        assert_eq!(params.target_color, image::Rgb([0, 212, 255]));
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        let args = parse(&["--from-color", "orange"]);
        assert!(matches!(
            resolve_params(&args, Variant::Fixed),
            Err(AppError::Logoproc(logoproc::Error::InvalidColor { .. }))
        ));

        let args = parse(&["--light-threshold", "10", "--dark-threshold", "20"]);
        assert!(resolve_params(&args, Variant::Fixed).is_err());
    }

    #[test]
    fn single_file_flags_are_refused_in_manifest_mode() {
        let args = parse(&["--recolor"]);
        assert!(matches!(
            process_batch(&args),
            Err(AppError::WrongMode { .. })
        ));
    }

    #[test]
    fn preset_keeps_variant_defaults_it_does_not_set() {
        let dir = tempfile::tempdir().unwrap();
        let preset = dir.path().join("preset.json");
        std::fs::write(&preset, r#"{"tolerance":60.0}"#).unwrap();

        let args = parse(&["--variant", "legacy", "--params", preset.to_str().unwrap()]);
        let params = resolve_params(&args, Variant::Legacy).unwrap();
        assert_eq!(params.tolerance, 60.0);
        assert_eq!(params.dark_threshold, 20);
        assert_eq!(params.recolor, RecolorStrategy::Distance);
    }

    #[test]
    fn manifest_flags_are_refused_in_single_file_mode() {
        for extra in [
            &["--report", "r.json"][..],
            &["--manifest", "jobs.json"],
            &["--source-dir", "src"],
            &["--output-dir", "out"],
            &["--fail-fast"],
        ] {
            let mut argv = vec!["-i", "in.png", "-o", "out.png"];
            argv.extend_from_slice(extra);
            let args = parse(&argv);
            assert!(
                matches!(
                    process_single_file(&args, Path::new("in.png")),
                    Err(AppError::WrongMode { mode: "manifest", .. })
                ),
                "accepted {extra:?}"
            );
        }
    }

    #[test]
    fn variant_conflicts_with_explicit_manifest() {
        let args = parse(&["--manifest", "jobs.json", "--variant", "legacy"]);
        assert!(matches!(
            process_batch(&args),
            Err(AppError::Conflict { .. })
        ));
    }

    #[test]
    fn failed_jobs_are_reported_before_nonzero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let source_dir = dir.path().join("src");
        let output_dir = dir.path().join("out");
        std::fs::create_dir_all(&source_dir).unwrap();
        image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 149, 0, 255]))
            .save(source_dir.join("tiny.png"))
            .unwrap();

        // A 2x2 sheet is too small to crop, so the only job fails
        let manifest = dir.path().join("jobs.json");
        std::fs::write(
            &manifest,
            r#"{"variant":"legacy","jobs":[{"source":"tiny.png","output":"tiny","kind":"reference_sheet"}]}"#,
        )
        .unwrap();
        let report = dir.path().join("run.json");

        let args = parse(&[
            "--manifest",
            manifest.to_str().unwrap(),
            "--source-dir",
            source_dir.to_str().unwrap(),
            "--output-dir",
            output_dir.to_str().unwrap(),
            "--report",
            report.to_str().unwrap(),
        ]);
        assert!(matches!(
            process_batch(&args),
            Err(AppError::JobsFailed { failed: 1 })
        ));

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
        assert_eq!(written["errors"], 1);
        assert_eq!(written["processed"], 0);
    }

    #[test]
    fn single_file_mode_requires_output() {
        let args = parse(&["-i", "in.png"]);
        assert!(matches!(
            process_single_file(&args, Path::new("in.png")),
            Err(AppError::MissingArgument { .. })
        ));
    }
}
