// riffle: side-by-side line reconciliation from the command line.
//
// Reads two files, prints them side by side with diff markers, applies any
// requested line copies, and optionally writes the reconciled contents back.

use std::path::PathBuf;
use std::process::ExitCode;

use riffle_core::{CopyRequest, Side};
use riffle_session::persist::{save_snapshot, SessionSnapshot};
use riffle_session::DiffSession;
use unicode_width::UnicodeWidthStr;

const USAGE: &str = "usage: riffle <left-file> <right-file> \
[--copy left:N|right:N]... [--write] [--save-session]";

struct Args {
    left: PathBuf,
    right: PathBuf,
    copies: Vec<CopyRequest>,
    write: bool,
    save_session: bool,
}

fn parse_copy(spec: &str) -> Result<CopyRequest, String> {
    let (side, index) = spec
        .split_once(':')
        .ok_or_else(|| format!("bad --copy spec '{}', expected side:index", spec))?;
    let source = match side {
        "left" => Side::Left,
        "right" => Side::Right,
        other => return Err(format!("bad --copy side '{}', expected left or right", other)),
    };
    let index = index
        .parse::<usize>()
        .map_err(|_| format!("bad --copy index '{}'", index))?;
    Ok(CopyRequest { source, index })
}

fn parse_args(argv: &[String]) -> Result<Args, String> {
    let mut files = Vec::new();
    let mut copies = Vec::new();
    let mut write = false;
    let mut save_session = false;

    let mut iter = argv.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--copy" => {
                let spec = iter.next().ok_or("--copy needs a side:index argument")?;
                copies.push(parse_copy(spec)?);
            }
            "--write" => write = true,
            "--save-session" => save_session = true,
            other if other.starts_with("--") => {
                return Err(format!("unknown flag '{}'", other));
            }
            _ => files.push(PathBuf::from(arg)),
        }
    }

    if files.len() != 2 {
        return Err("expected exactly two files".to_string());
    }
    let right = files.pop().unwrap();
    let left = files.pop().unwrap();
    Ok(Args {
        left,
        right,
        copies,
        write,
        save_session,
    })
}

fn file_title(path: &PathBuf) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("untitled")
        .to_string()
}

/// Print the two panes side by side with line numbers and diff markers.
/// `>` marks a left line with no match on the right, `<` the reverse.
fn print_session(session: &DiffSession) {
    let left_lines: Vec<String> = session
        .text(Side::Left)
        .split('\n')
        .map(String::from)
        .collect();
    let right_lines: Vec<String> = session
        .text(Side::Right)
        .split('\n')
        .map(String::from)
        .collect();

    let left_width = left_lines
        .iter()
        .map(|l| UnicodeWidthStr::width(l.as_str()))
        .max()
        .unwrap_or(0)
        .max(UnicodeWidthStr::width(session.title(Side::Left)));
    let rows = left_lines.len().max(right_lines.len());
    let num_width = rows.to_string().len();

    println!(
        "{:nw$}  {}{:pad$}    {}",
        "",
        session.title(Side::Left),
        "",
        session.title(Side::Right),
        nw = num_width,
        pad = left_width - UnicodeWidthStr::width(session.title(Side::Left)),
    );

    let left_status = session.statuses(Side::Left);
    let right_status = session.statuses(Side::Right);
    for row in 0..rows {
        let left = left_lines.get(row).map(|s| s.as_str()).unwrap_or("");
        let right = right_lines.get(row).map(|s| s.as_str()).unwrap_or("");
        let left_mark = match left_status.get(row) {
            Some(s) if s.is_distinct() => '>',
            _ => ' ',
        };
        let right_mark = match right_status.get(row) {
            Some(s) if s.is_distinct() => '<',
            _ => ' ',
        };
        let pad = left_width - UnicodeWidthStr::width(left);
        println!(
            "{:nw$}  {}{:pad$} {}{} {}",
            row + 1,
            left,
            "",
            left_mark,
            right_mark,
            right,
            nw = num_width,
            pad = pad,
        );
    }
}

fn run(args: Args) -> std::io::Result<()> {
    let left_text = std::fs::read_to_string(&args.left)?;
    let right_text = std::fs::read_to_string(&args.right)?;

    let mut session = DiffSession::new(&left_text, &right_text);
    session.left_title = file_title(&args.left);
    session.right_title = file_title(&args.right);

    for request in &args.copies {
        log::debug!("copy {:?} line {}", request.source, request.index);
        session.copy(*request);
    }

    print_session(&session);

    let mismatch_count = session.mismatches(Side::Left).len() + session.mismatches(Side::Right).len();
    if mismatch_count > 0 {
        println!("{} unreconciled line(s)", mismatch_count);
    }

    if args.write {
        std::fs::write(&args.left, session.text(Side::Left))?;
        std::fs::write(&args.right, session.text(Side::Right))?;
        log::info!("wrote reconciled contents back to both files");
    }

    if args.save_session {
        save_snapshot(&SessionSnapshot::from_session(&session));
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("riffle: {}", e);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("riffle: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_files_and_flags() {
        let args = parse_args(&argv(&["a.txt", "b.txt", "--write"])).unwrap();
        assert_eq!(args.left, PathBuf::from("a.txt"));
        assert_eq!(args.right, PathBuf::from("b.txt"));
        assert!(args.write);
        assert!(!args.save_session);
    }

    #[test]
    fn parses_copy_specs_in_order() {
        let args = parse_args(&argv(&["a", "b", "--copy", "left:3", "--copy", "right:0"])).unwrap();
        assert_eq!(
            args.copies,
            vec![
                CopyRequest { source: Side::Left, index: 3 },
                CopyRequest { source: Side::Right, index: 0 },
            ]
        );
    }

    #[test]
    fn rejects_bad_copy_spec() {
        assert!(parse_args(&argv(&["a", "b", "--copy", "middle:1"])).is_err());
        assert!(parse_args(&argv(&["a", "b", "--copy", "left"])).is_err());
        assert!(parse_args(&argv(&["a", "b", "--copy", "left:x"])).is_err());
    }

    #[test]
    fn rejects_wrong_file_count() {
        assert!(parse_args(&argv(&["a"])).is_err());
        assert!(parse_args(&argv(&["a", "b", "c"])).is_err());
    }
}
