use super::*;
use std::io;
use crate::error::Error;
use assert_matches::assert_matches;

fn options(mode: Mode, format: OutputFormat) -> Options {
    Options {
        engine: tracematch::Options::default(),
        mode,
        format,
        colors: false,
        indent: "  ".into(),
    }
}

fn run(mode: Mode, format: OutputFormat, pattern: &str, text: &str) -> Result<String> {
    let mut output = Vec::new();
    App::new(options(mode, format)).run(pattern, text, &mut output)?;
    Ok(String::from_utf8(output).unwrap())
}

#[test]
fn test_full_listing() {
    let out = run(Mode::Full, OutputFormat::Human, "x", "").unwrap();
    assert_eq!(
        out,
        concat!(
            "    0 start     [p=0, t=0] Attempting match starting at index 0...\n",
            "    1 start     [p=0, t=0] Trying to match 'x'\n",
            "    2 fail      [p=0, t=0] Mismatch\n",
            "    3 finish    [p=0, t=0] No match found in entire string.\n",
            "no match found in 4 steps\n",
        )
    );
}

#[test]
fn test_summary_only() {
    let out = run(Mode::Summary, OutputFormat::Human, "abc", "abc").unwrap();
    assert_eq!(
        out,
        "match found at 0..3 in 9 steps: \"abc\"\n  regex preview: \"abc\"\n"
    );
}

#[test]
fn test_step() {
    let out = run(Mode::Step(2), OutputFormat::Human, "x", "").unwrap();
    assert!(out.starts_with("step 2 / 3: fail\n"));
    assert!(!out.contains("no match found"));

    let out = run(Mode::Step(3), OutputFormat::Human, "x", "").unwrap();
    assert!(out.starts_with("step 3 / 3: finish\n"));
    assert!(out.ends_with("no match found in 4 steps\n"));
}

#[test]
fn test_step_out_of_range() {
    let result = run(Mode::Step(4), OutputFormat::Human, "x", "");
    assert_matches!(result, Err(Error::StepOutOfRange { step: 4, len: 4 }));

    let result = run(Mode::Step(100), OutputFormat::Json, "x", "");
    assert_matches!(result, Err(Error::StepOutOfRange { step: 100, len: 4 }));
}

#[test]
fn test_play_without_delay() {
    let play = run(
        Mode::Play {
            interval: Duration::ZERO,
        },
        OutputFormat::Human,
        "a+b",
        "aaac",
    )
    .unwrap();
    let full = run(Mode::Full, OutputFormat::Human, "a+b", "aaac").unwrap();
    assert_eq!(play, full);
}

#[test]
fn test_json_report() {
    let out = run(Mode::Full, OutputFormat::Json, "a+b", "xaaab").unwrap();
    let value: json::Value = json::from_str(&out).unwrap();
    assert_eq!(value["outcome"], json::json!({"result": "match", "start": 1, "end": 5}));
    assert_eq!(value["halted"], false);
    assert_eq!(value["max-steps"], 2000);
    assert_eq!(value["preview"], json::json!({"status": "matched", "value": "aaab"}));
    assert_eq!(value["events"].as_array().unwrap().len(), 10);
}

#[test]
fn test_json_summary_has_no_events() {
    let out = run(Mode::Summary, OutputFormat::Json, "a+b", "aaac").unwrap();
    let value: json::Value = json::from_str(&out).unwrap();
    assert_eq!(value["outcome"]["result"], "no-match");
    assert!(value.get("events").is_none());
}

#[test]
fn test_json_step() {
    let out = run(Mode::Step(1), OutputFormat::Json, "a", "a").unwrap();
    let value: json::Value = json::from_str(&out).unwrap();
    assert_eq!(value["step"], 1);
    assert_eq!(value["last"], 4);
    assert_eq!(value["event"]["message"], "Trying to match 'a'");
}

#[test]
fn test_halted_run() {
    let mut output = Vec::new();
    let app = App::new(Options {
        engine: tracematch::Options { max_steps: 10 },
        ..options(Mode::Summary, OutputFormat::Human)
    });
    app.run("a*a*b", "aaaaaa", &mut output).unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "catastrophic backtracking detected: execution halted after 10 steps\n"
    );
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::ErrorKind::BrokenPipe.into())
    }
}

#[test]
fn test_closed_output_is_io_error() {
    let modes = [Mode::Full, Mode::Summary, Mode::Step(0)];
    for format in [OutputFormat::Json, OutputFormat::Human] {
        for mode in modes {
            let result = App::new(options(mode, format)).run("a", "a", &mut ClosedPipe);
            assert_matches!(
                result,
                Err(Error::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe,
                "{mode:?} {format:?}"
            );
        }
    }
}
